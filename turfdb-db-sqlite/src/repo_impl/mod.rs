// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use diesel::{
    self,
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
};

use turfdb_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::{models, schema, DbConnection, DbReadOnly, DbReadWrite};

pub type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        _ => repo::Error::Other(err.into()),
    }
}

// An update or delete that did not hit any row.
fn expect_affected(count: usize) -> Result<()> {
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

/// Implements a repository for all connection types.
///
/// Methods obtain the connection either with `self.sqlite_conn()`
/// or with `self.writable_conn()?` for modifications.
macro_rules! impl_for_connections {
    ($repo:ident { $($body:tt)* }) => {
        impl $repo for DbReadOnly<'_> {
            $($body)*
        }
        impl $repo for DbReadWrite<'_> {
            $($body)*
        }
        impl $repo for DbConnection<'_> {
            $($body)*
        }
    };
}

mod admin;
mod booking;
mod master_data;
mod tax;
mod turf;
mod vendor;
