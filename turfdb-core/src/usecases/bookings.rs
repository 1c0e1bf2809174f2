use super::{error::NotFoundExt, prelude::*};

pub fn get_booking<R>(repo: &R, id: &str) -> Result<Booking>
where
    R: BookingRepo,
{
    repo.get_booking(id).or_not_found(Error::BookingNotFound)
}

pub fn list_bookings<R>(repo: &R) -> Result<Vec<Booking>>
where
    R: BookingRepo,
{
    let bookings = repo.all_bookings()?;
    if bookings.is_empty() {
        return Err(Error::NoBookings);
    }
    Ok(bookings)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BookingsSummary {
    pub total_bookings: usize,
    pub total_amount: f64,
}

pub fn summarize_bookings<R>(repo: &R) -> Result<BookingsSummary>
where
    R: BookingRepo,
{
    let bookings = list_bookings(repo)?;
    Ok(BookingsSummary {
        total_bookings: bookings.len(),
        total_amount: bookings.iter().map(|b| b.amount).sum(),
    })
}

pub fn list_users<R>(repo: &R) -> Result<Vec<User>>
where
    R: UserRepo,
{
    Ok(repo.all_users()?)
}

#[cfg(test)]
mod tests {
    use turfdb_entities::builders::*;

    use super::{super::tests::MockDb, *};

    #[test]
    fn no_bookings_found() {
        let db = MockDb::default();
        assert!(matches!(list_bookings(&db), Err(Error::NoBookings)));
        assert!(matches!(summarize_bookings(&db), Err(Error::NoBookings)));
        assert!(matches!(get_booking(&db, "b1"), Err(Error::BookingNotFound)));
    }

    #[test]
    fn summarize_all_bookings() {
        let db = MockDb::default();
        db.create_booking(&Booking::build().id("b1").amount(500.0).finish())
            .unwrap();
        db.create_booking(
            &Booking::build()
                .id("b2")
                .amount(750.5)
                .status(BookingStatus::Cancelled)
                .finish(),
        )
        .unwrap();
        let summary = summarize_bookings(&db).unwrap();
        assert_eq!(summary.total_bookings, 2);
        assert_eq!(summary.total_amount, 1250.5);
        assert_eq!(get_booking(&db, "b2").unwrap().status, BookingStatus::Cancelled);
        assert_eq!(list_bookings(&db).unwrap().len(), 2);
    }

    #[test]
    fn empty_user_list_is_fine() {
        let db = MockDb::default();
        assert!(list_users(&db).unwrap().is_empty());
    }
}
