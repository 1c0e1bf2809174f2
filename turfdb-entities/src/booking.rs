use strum::{Display, EnumString};

use crate::{id::Id, time::Timestamp};

/// A reservation of a court slot by a customer.
///
/// Bookings are created by the customer facing services;
/// the administration only reads them.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id         : Id,
    pub user_id    : Id,
    pub vendor_id  : Id,
    pub turf_id    : Id,
    pub sport      : String,
    pub court      : Option<String>,
    /// Calendar day of the booked slot (`YYYY-MM-DD`)
    pub date       : String,
    pub slots      : Vec<String>,
    pub amount     : f64,
    pub status     : BookingStatus,
    pub created_at : Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}
