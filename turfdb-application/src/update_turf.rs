use super::*;

pub fn update_turf(
    connections: &sqlite::Connections,
    vendor_id: &str,
    turf_id: &str,
    update: usecases::TurfUpdate,
) -> Result<Turf> {
    let mut db = connections.exclusive()?;
    Ok(db.transaction(|conn| usecases::update_turf(conn, vendor_id, turf_id, update))?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn update_title_only() {
        let fixture = BackendFixture::new();
        let vendor_id = fixture.create_vendor("v1", "vendor_1111@venuemgmt.com");
        let turf_id = fixture.create_turf(&vendor_id, "Arena");
        let turf = flows::update_turf(
            &fixture.db_connections,
            &vendor_id,
            &turf_id,
            usecases::TurfUpdate {
                title: Some("Arena 2".into()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(turf.title, "Arena 2");
        assert_eq!(turf.sports.len(), 1);
    }

    #[test]
    fn update_deleted_turf() {
        let fixture = BackendFixture::new();
        let vendor_id = fixture.create_vendor("v1", "vendor_1111@venuemgmt.com");
        let turf_id = fixture.create_turf(&vendor_id, "Arena");
        {
            let db = fixture.db_connections.exclusive().unwrap();
            usecases::delete_turf(&db, &vendor_id, &turf_id).unwrap();
        }
        let err = flows::update_turf(
            &fixture.db_connections,
            &vendor_id,
            &turf_id,
            usecases::TurfUpdate {
                title: Some("Arena 2".into()),
                ..Default::default()
            },
        )
        .unwrap_err();
        assert!(err.is_not_found());
    }
}
