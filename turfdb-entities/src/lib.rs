#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # turfdb-entities
//!
//! Reusable, agnostic domain entities for turfdb.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod admin;
pub mod amenity;
pub mod booking;
pub mod email;
pub mod geo;
pub mod id;
pub mod password;
pub mod rule;
pub mod tax;
pub mod time;
pub mod turf;
pub mod user;
pub mod vendor;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
