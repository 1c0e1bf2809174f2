use super::*;

#[post("/admin/vendors", format = "application/json", data = "<new_vendor>")]
pub async fn post_vendor(
    db: sqlite::Connections,
    _admin: Admin,
    short_links: &State<ShortLinks>,
    new_vendor: JsonResult<'_, json::NewVendor>,
) -> CreatedResult<json::VendorCreated> {
    let new_vendor = from_json::new_vendor(new_vendor?.into_inner());
    let (vendor, login) = flows::register_vendor(&db, &**short_links.inner(), new_vendor).await?;
    created(json::VendorCreated {
        message: "Vendor created successfully".into(),
        vendor_id: vendor.id.into(),
        login: to_json::vendor_login(login),
        coordinates: vendor.coordinates.into(),
    })
}

#[get("/admin/vendors")]
pub fn get_vendors(db: sqlite::Connections, _admin: Admin) -> Result<json::VendorList> {
    let vendors = usecases::list_vendors(&db.shared()?)?;
    Ok(Json(json::VendorList {
        vendors: vendors.into_iter().map(Into::into).collect(),
    }))
}

#[put("/admin/vendors/<vendor_id>", format = "application/json", data = "<update>")]
pub async fn put_vendor(
    db: sqlite::Connections,
    _admin: Admin,
    short_links: &State<ShortLinks>,
    vendor_id: &str,
    update: JsonResult<'_, json::VendorUpdate>,
) -> Result<json::VendorUpdated> {
    let update = from_json::vendor_update(update?.into_inner());
    let updated_fields =
        flows::update_vendor(&db, &**short_links.inner(), vendor_id, update).await?;
    Ok(Json(json::VendorUpdated {
        message: "Vendor updated successfully".into(),
        vendor_id: vendor_id.to_owned(),
        updated_fields: to_json::updated_vendor_fields(updated_fields),
    }))
}

#[delete("/admin/vendors/<vendor_id>")]
pub fn delete_vendor(
    db: sqlite::Connections,
    _admin: Admin,
    vendor_id: &str,
) -> Result<json::Message> {
    let deleted_turfs = flows::delete_vendor(&db, vendor_id)?;
    debug!("Deleted vendor {vendor_id} with {deleted_turfs} turf(s)");
    Ok(Json(json::Message::new("Vendor deleted successfully")))
}
