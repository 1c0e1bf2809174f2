//! # turfdb-core
//!
//! Business rules of the turf administration: map link parsing,
//! the ports to the outside world (gateways and repositories) and
//! the use cases that are built on top of them.

pub mod gateways;
pub mod repositories;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use turfdb_entities::{
        admin::*, amenity::*, booking::*, email::*, geo::*, id::*, password::*, rule::*, tax::*,
        time::*, turf::*, user::*, vendor::*,
    };
}
