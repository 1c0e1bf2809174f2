#![allow(proc_macro_derive_resolution_fallback)]
#![recursion_limit = "128"]

#[macro_use]
extern crate log;

use std::sync::Arc;

use turfdb_core::gateways::short_link::ShortLinkGateway;
use turfdb_db_sqlite::Connections;

mod adapters;
mod core;
mod web;

pub use web::Cfg;

pub async fn run(
    connections: Connections,
    enable_cors: bool,
    cfg: Cfg,
    short_links: Arc<dyn ShortLinkGateway>,
    version: &'static str,
) {
    web::run(connections.into(), enable_cors, cfg, short_links, version).await;
}
