//! Adapters that connect the core to the outside world.

pub mod short_link;
