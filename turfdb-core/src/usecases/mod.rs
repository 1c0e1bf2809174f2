mod bookings;
mod error;
mod locate_by_gps_url;
mod login;
mod master_data;
mod tax;
mod turfs;
mod vendors;

#[cfg(test)]
pub mod tests;

pub use self::{
    bookings::*, error::Error, locate_by_gps_url::*, login::*, master_data::*, tax::*, turfs::*,
    vendors::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        entities::*,
        repositories::{Error as RepoError, *},
    };
}
