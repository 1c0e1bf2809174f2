use super::*;

/// Delete a vendor and all of its turfs.
///
/// Returns the number of deleted turfs.
pub fn delete_vendor(connections: &sqlite::Connections, vendor_id: &str) -> Result<usize> {
    let mut db = connections.exclusive()?;
    Ok(db.transaction(|conn| usecases::delete_vendor(conn, vendor_id))?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn delete_vendor_with_turfs() {
        let fixture = BackendFixture::new();
        let vendor_id = fixture.create_vendor("v1", "vendor_1111@venuemgmt.com");
        fixture.create_turf(&vendor_id, "Arena");
        fixture.create_turf(&vendor_id, "Dome");
        assert_eq!(
            flows::delete_vendor(&fixture.db_connections, &vendor_id).unwrap(),
            2
        );
        assert!(fixture.all_vendors().is_empty());
        let err = flows::delete_vendor(&fixture.db_connections, &vendor_id).unwrap_err();
        assert!(err.is_not_found());
    }
}
