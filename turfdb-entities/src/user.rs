use crate::{id::Id, time::Timestamp};

/// A customer of the booking platform.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id         : Id,
    pub name       : String,
    pub email      : Option<String>,
    pub phone      : Option<String>,
    pub created_at : Timestamp,
}
