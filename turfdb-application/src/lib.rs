#[macro_use]
extern crate log;

mod create_admin;
mod create_turf;
mod delete_vendor;
mod register_vendor;
mod update_turf;
mod update_vendor;

pub mod prelude {
    pub use super::{
        create_admin::*, create_turf::*, delete_vendor::*, register_vendor::*, update_turf::*,
        update_vendor::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use turfdb_core::{entities::*, gateways::short_link::ShortLinkGateway, usecases};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use turfdb_db_sqlite::Connections;
}
