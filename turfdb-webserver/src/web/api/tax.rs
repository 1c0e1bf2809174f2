use super::*;

#[post("/admin/tax", format = "application/json", data = "<tax>")]
pub fn post_tax_rate(
    db: sqlite::Connections,
    _admin: Admin,
    tax: JsonResult<json::SetTaxRate>,
) -> Result<json::TaxRateUpdated> {
    let percentage = tax?
        .into_inner()
        .percentage
        .ok_or(ParameterError::TaxPercentage)?;
    let rate = usecases::set_tax_rate(&db.exclusive()?, percentage)?;
    Ok(Json(json::TaxRateUpdated {
        message: "Tax rate updated successfully".into(),
        percentage: rate.percentage,
    }))
}

#[get("/admin/tax")]
pub fn get_tax_rate(db: sqlite::Connections, _admin: Admin) -> Result<json::TaxRate> {
    Ok(Json(usecases::get_tax_rate(&db.shared()?)?.into()))
}
