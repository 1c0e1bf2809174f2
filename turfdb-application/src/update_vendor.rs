use super::*;

pub async fn update_vendor<G>(
    connections: &sqlite::Connections,
    gateway: &G,
    vendor_id: &str,
    update: usecases::VendorUpdate,
) -> Result<usecases::UpdatedVendorFields>
where
    G: ShortLinkGateway + ?Sized,
{
    {
        let db = connections.shared()?;
        usecases::get_vendor(&db, vendor_id)?;
    }
    let update = usecases::check_vendor_update(update)?;
    let coordinates = match &update.gps_url {
        Some(gps_url) => Some(usecases::locate_by_gps_url(gateway, gps_url).await?),
        None => None,
    };
    let mut db = connections.exclusive()?;
    Ok(db.transaction(|conn| {
        usecases::update_vendor(conn, vendor_id, update, coordinates).inspect_err(|err| {
            warn!("Failed to update vendor {vendor_id}: {err}");
        })
    })?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[tokio::test]
    async fn update_location_of_vendor() {
        let fixture = BackendFixture::new();
        let vendor_id = fixture.create_vendor("v1", "vendor_1111@venuemgmt.com");
        let gateway = DummyShortLinkGateway::redirect("https://maps.google.com/?q=-33.8688,151.2093");
        let updated = flows::update_vendor(
            &fixture.db_connections,
            &gateway,
            &vendor_id,
            usecases::VendorUpdate {
                name: Some("Blue Field".into()),
                gps_url: Some("https://goo.gl/maps/xyz".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(updated.name.as_deref(), Some("Blue Field"));
        let coordinates = updated.coordinates.unwrap();
        assert_eq!(coordinates.to_lat_lng_deg(), (-33.8688, 151.2093));
        let stored = fixture.get_vendor(&vendor_id);
        assert_eq!(stored.name, "Blue Field");
        assert_eq!(stored.gps_url, "https://goo.gl/maps/xyz");
        assert_eq!(stored.coordinates, coordinates);
    }

    #[tokio::test]
    async fn check_existence_before_anything_else() {
        let fixture = BackendFixture::new();
        let gateway = DummyShortLinkGateway::failing();
        let err = flows::update_vendor(
            &fixture.db_connections,
            &gateway,
            "unknown",
            usecases::VendorUpdate::default(),
        )
        .await
        .unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(BError::Parameter(usecases::Error::VendorNotFound))
        ));
    }

    #[tokio::test]
    async fn keep_vendor_if_coordinates_are_missing() {
        let fixture = BackendFixture::new();
        let vendor_id = fixture.create_vendor("v1", "vendor_1111@venuemgmt.com");
        let before = fixture.get_vendor(&vendor_id);
        let gateway = DummyShortLinkGateway::failing();
        let err = flows::update_vendor(
            &fixture.db_connections,
            &gateway,
            &vendor_id,
            usecases::VendorUpdate {
                name: Some("Blue Field".into()),
                gps_url: Some("https://maps.app.goo.gl/abc".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(BError::Parameter(usecases::Error::CoordinatesNotFound))
        ));
        assert_eq!(fixture.get_vendor(&vendor_id), before);
    }

    #[tokio::test]
    async fn nothing_to_update() {
        let fixture = BackendFixture::new();
        let vendor_id = fixture.create_vendor("v1", "vendor_1111@venuemgmt.com");
        let gateway = DummyShortLinkGateway::failing();
        let err = flows::update_vendor(
            &fixture.db_connections,
            &gateway,
            &vendor_id,
            usecases::VendorUpdate {
                name: Some("  ".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(BError::Parameter(usecases::Error::NothingToUpdate))
        ));
        assert!(gateway.requested().is_empty());
    }
}
