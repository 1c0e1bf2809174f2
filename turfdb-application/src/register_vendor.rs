use super::*;

/// Register a new vendor at the location of its map link.
///
/// The link is resolved before the database is locked.
pub async fn register_vendor<G>(
    connections: &sqlite::Connections,
    gateway: &G,
    new_vendor: usecases::NewVendor,
) -> Result<(Vendor, usecases::VendorLogin)>
where
    G: ShortLinkGateway + ?Sized,
{
    usecases::check_new_vendor(&new_vendor)?;
    let coordinates = usecases::locate_by_gps_url(gateway, &new_vendor.gps_url)
        .await
        .inspect_err(|_| {
            info!("No coordinates found for the map link '{}'", new_vendor.gps_url);
        })?;
    let mut db = connections.exclusive()?;
    Ok(db.transaction(|conn| usecases::create_new_vendor(conn, new_vendor, coordinates))?)
}
