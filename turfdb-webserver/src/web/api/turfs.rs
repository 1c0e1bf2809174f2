use super::*;

#[post(
    "/admin/vendors/<vendor_id>/turfs",
    format = "application/json",
    data = "<new_turf>"
)]
pub fn post_turf(
    db: sqlite::Connections,
    _admin: Admin,
    vendor_id: &str,
    new_turf: JsonResult<json::NewTurf>,
) -> CreatedResult<json::TurfCreated> {
    let new_turf = from_json::new_turf(new_turf?.into_inner());
    let turf = flows::create_turf(&db, vendor_id, new_turf)?;
    created(json::TurfCreated {
        message: "Turf added successfully".into(),
        vendor_id: turf.vendor_id.to_string(),
        turf_id: turf.id.to_string(),
        turf: turf.into(),
    })
}

#[get("/vendors/<vendor_id>/turfs")]
pub fn get_turfs_of_vendor(
    db: sqlite::Connections,
    _admin: Admin,
    vendor_id: &str,
) -> Result<Vec<json::TurfSummary>> {
    let turfs = usecases::list_turfs_of_vendor(&db.shared()?, vendor_id)?;
    Ok(Json(turfs.into_iter().map(to_json::turf_summary).collect()))
}

#[get("/admin/turfs")]
pub fn get_turfs(db: sqlite::Connections, _admin: Admin) -> Result<Vec<json::TurfSummary>> {
    let turfs = usecases::list_all_turfs(&db.shared()?)?;
    Ok(Json(turfs.into_iter().map(to_json::turf_summary).collect()))
}

#[put(
    "/admin/vendors/<vendor_id>/turfs/<turf_id>",
    format = "application/json",
    data = "<update>"
)]
pub fn put_turf(
    db: sqlite::Connections,
    _admin: Admin,
    vendor_id: &str,
    turf_id: &str,
    update: JsonResult<json::TurfUpdate>,
) -> Result<json::TurfChanged> {
    let update = from_json::turf_update(update?.into_inner());
    let turf = flows::update_turf(&db, vendor_id, turf_id, update)?;
    Ok(Json(json::TurfChanged {
        message: "Turf updated successfully".into(),
        turf: turf.into(),
    }))
}

#[patch(
    "/admin/turfs/<vendor_id>/<turf_id>/suspend",
    format = "application/json",
    data = "<suspension>"
)]
pub fn patch_turf_suspension(
    db: sqlite::Connections,
    _admin: Admin,
    vendor_id: &str,
    turf_id: &str,
    suspension: JsonResult<json::SuspendTurf>,
) -> Result<json::TurfChanged> {
    let suspended = suspension?
        .into_inner()
        .is_suspended
        .ok_or(ParameterError::SuspendedFlag)?
        .is_set();
    let turf = usecases::set_turf_suspended(&db.exclusive()?, vendor_id, turf_id, suspended)?;
    let message = if suspended {
        "Turf suspended successfully"
    } else {
        "Turf unsuspended successfully"
    };
    Ok(Json(json::TurfChanged {
        message: message.into(),
        turf: turf.into(),
    }))
}

#[delete("/admin/vendors/<vendor_id>/turfs/<turf_id>")]
pub fn delete_turf(
    db: sqlite::Connections,
    _admin: Admin,
    vendor_id: &str,
    turf_id: &str,
) -> Result<json::Message> {
    usecases::delete_turf(&db.exclusive()?, vendor_id, turf_id)?;
    Ok(Json(json::Message::new("Turf marked as deleted")))
}

#[get("/admin/turfs/rules")]
pub fn get_rules_of_turfs(db: sqlite::Connections, _admin: Admin) -> Result<Vec<json::TurfRules>> {
    let rules = usecases::rules_of_all_turfs(&db.shared()?)?;
    Ok(Json(rules.into_iter().map(to_json::turf_rules).collect()))
}

#[delete(
    "/admin/vendors/<vendor_id>/turfs/<turf_id>/rules",
    format = "application/json",
    data = "<data>"
)]
pub fn delete_turf_rules(
    db: sqlite::Connections,
    _admin: Admin,
    vendor_id: &str,
    turf_id: &str,
    data: JsonResult<json::DeleteRules>,
) -> Result<json::RulesDeleted> {
    let rule_ids = data?
        .into_inner()
        .rules_to_delete
        .ok_or(ParameterError::RulesToDelete)?;
    let remaining = usecases::remove_turf_rules(&db.exclusive()?, vendor_id, turf_id, &rule_ids)?;
    Ok(Json(json::RulesDeleted {
        message: "Rules deleted successfully".into(),
        remaining_rules: remaining.into_iter().map(Into::into).collect(),
    }))
}

#[get("/admin/turfs/amenities")]
pub fn get_amenities_of_turfs(
    db: sqlite::Connections,
    _admin: Admin,
) -> Result<Vec<json::TurfAmenities>> {
    let amenities = usecases::amenities_of_all_turfs(&db.shared()?)?;
    Ok(Json(amenities.into_iter().map(to_json::turf_amenities).collect()))
}

#[delete(
    "/admin/vendors/<vendor_id>/turfs/<turf_id>/amenities",
    format = "application/json",
    data = "<data>"
)]
pub fn delete_turf_amenities(
    db: sqlite::Connections,
    _admin: Admin,
    vendor_id: &str,
    turf_id: &str,
    data: JsonResult<json::DeleteAmenities>,
) -> Result<json::AmenitiesDeleted> {
    let amenity_ids = data?
        .into_inner()
        .amenities_to_delete
        .ok_or(ParameterError::AmenitiesToDelete)?;
    let remaining =
        usecases::remove_turf_amenities(&db.exclusive()?, vendor_id, turf_id, &amenity_ids)?;
    Ok(Json(json::AmenitiesDeleted {
        message: "Amenities deleted successfully".into(),
        remaining_amenities: remaining.into_iter().map(Into::into).collect(),
    }))
}
