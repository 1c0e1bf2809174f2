use super::*;

#[get("/admin/bookings/<booking_id>")]
pub fn get_booking(
    db: sqlite::Connections,
    _admin: Admin,
    booking_id: &str,
) -> Result<json::Booking> {
    Ok(Json(usecases::get_booking(&db.shared()?, booking_id)?.into()))
}

#[get("/admin/bookings/summary")]
pub fn get_bookings_summary(
    db: sqlite::Connections,
    _admin: Admin,
) -> Result<json::BookingsSummary> {
    let summary = usecases::summarize_bookings(&db.shared()?)?;
    Ok(Json(to_json::bookings_summary(summary)))
}

#[get("/admin/all-bookings")]
pub fn get_all_bookings(db: sqlite::Connections, _admin: Admin) -> Result<json::BookingList> {
    let bookings = usecases::list_bookings(&db.shared()?)?;
    Ok(Json(json::BookingList {
        total: bookings.len(),
        bookings: bookings.into_iter().map(Into::into).collect(),
    }))
}
