use crate::{email::EmailAddress, id::Id, password::Password};

/// An administrator of the platform.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Admin {
    pub id       : Id,
    pub email    : EmailAddress,
    pub password : Password,
}
