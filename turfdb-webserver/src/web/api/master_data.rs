use super::*;

// ---   amenities   --- //

#[post("/admin/amenities", format = "application/json", data = "<amenity>")]
pub fn post_amenity(
    db: sqlite::Connections,
    _admin: Admin,
    amenity: JsonResult<json::AmenityInput>,
) -> CreatedResult<json::Amenity> {
    let new_amenity = from_json::new_amenity(amenity?.into_inner());
    let amenity = usecases::create_amenity(&db.exclusive()?, new_amenity)?;
    created(amenity.into())
}

#[get("/admin/amenities")]
pub fn get_amenities(db: sqlite::Connections, _admin: Admin) -> Result<Vec<json::Amenity>> {
    let amenities = db.shared()?.all_amenities()?;
    Ok(Json(amenities.into_iter().map(Into::into).collect()))
}

#[put("/admin/amenities/<id>", format = "application/json", data = "<update>")]
pub fn put_amenity(
    db: sqlite::Connections,
    _admin: Admin,
    id: &str,
    update: JsonResult<json::AmenityInput>,
) -> Result<json::Message> {
    let update = from_json::amenity_update(update?.into_inner());
    usecases::update_amenity(&db.exclusive()?, id, update)?;
    Ok(Json(json::Message::new("Amenity updated successfully")))
}

#[delete("/admin/amenities/<id>")]
pub fn delete_amenity(db: sqlite::Connections, _admin: Admin, id: &str) -> Result<json::Message> {
    usecases::delete_amenity(&db.exclusive()?, id)?;
    Ok(Json(json::Message::new("Amenity deleted successfully")))
}

// ---   rules   --- //

#[post("/admin/rules", format = "application/json", data = "<rule>")]
pub fn post_rule(
    db: sqlite::Connections,
    _admin: Admin,
    rule: JsonResult<json::RuleInput>,
) -> CreatedResult<json::Rule> {
    let new_rule = from_json::new_rule(rule?.into_inner());
    let rule = usecases::create_rule(&db.exclusive()?, new_rule)?;
    created(rule.into())
}

#[get("/admin/rules")]
pub fn get_rules(db: sqlite::Connections, _admin: Admin) -> Result<Vec<json::Rule>> {
    let rules = db.shared()?.all_rules()?;
    Ok(Json(rules.into_iter().map(Into::into).collect()))
}

#[put("/admin/rules/<id>", format = "application/json", data = "<rule>")]
pub fn put_rule(
    db: sqlite::Connections,
    _admin: Admin,
    id: &str,
    rule: JsonResult<json::RuleInput>,
) -> Result<json::Message> {
    let rule = from_json::new_rule(rule?.into_inner());
    usecases::update_rule(&db.exclusive()?, id, rule)?;
    Ok(Json(json::Message::new("Rule updated successfully")))
}

#[delete("/admin/rules/<id>")]
pub fn delete_rule(db: sqlite::Connections, _admin: Admin, id: &str) -> Result<json::Message> {
    usecases::delete_rule(&db.exclusive()?, id)?;
    Ok(Json(json::Message::new("Rule deleted successfully")))
}
