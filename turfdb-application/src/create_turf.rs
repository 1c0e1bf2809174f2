use super::*;

pub fn create_turf(
    connections: &sqlite::Connections,
    vendor_id: &str,
    new_turf: usecases::NewTurf,
) -> Result<Turf> {
    let mut db = connections.exclusive()?;
    Ok(db.transaction(|conn| usecases::create_new_turf(conn, vendor_id, new_turf))?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn create_turf_with_vendor_location() {
        let fixture = BackendFixture::new();
        let vendor_id = fixture.create_vendor("v1", "vendor_1111@venuemgmt.com");
        let turf_id = fixture.create_turf(&vendor_id, "Arena");
        let db = fixture.db_connections.shared().unwrap();
        let turf = usecases::get_turf(&db, &vendor_id, &turf_id).unwrap();
        assert_eq!(turf.title, "Arena");
        assert_eq!(turf.vendor_location, "Salt Lake");
        assert_eq!(
            turf.vendor_coordinates.map(Coordinate::to_lat_lng_deg),
            Some((22.5726, 88.3639))
        );
    }

    #[test]
    fn reject_turf_of_unknown_vendor() {
        let fixture = BackendFixture::new();
        let err = flows::create_turf(&fixture.db_connections, "unknown", new_turf("Arena"))
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
