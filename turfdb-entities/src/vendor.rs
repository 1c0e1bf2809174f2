use crate::{email::EmailAddress, geo::Coordinate, id::Id, password::Password, time::Timestamp};

/// An operator who owns and manages one or more turfs.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Vendor {
    pub id          : Id,
    pub name        : String,
    pub email       : EmailAddress,
    pub phone       : String,
    pub password    : Password,
    pub location    : String,
    /// The map link as it has been provided by the admin.
    pub gps_url     : String,
    pub coordinates : Coordinate,
    pub created_at  : Timestamp,
}
