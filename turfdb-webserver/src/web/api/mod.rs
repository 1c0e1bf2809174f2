use std::{fmt::Display, result};

use rocket::{
    self, delete, get,
    http::Status,
    patch, post, put,
    response::{self, Responder},
    routes,
    serde::json::{Error as JsonError, Json},
    Route, State,
};
use turfdb_boundary::Error as JsonErrorResponse;

use super::guards::{Admin, ShortLinks, Version};
use crate::{
    adapters::json::{self, from_json, to_json},
    core::{prelude::*, usecases},
    web::{jwt, sqlite},
};
use turfdb_application::prelude as flows;
use turfdb_core::usecases::Error as ParameterError;

mod auth;
mod bookings;
mod error;
mod master_data;
mod tax;
mod turfs;
mod users;
mod util;
mod vendors;

pub use self::error::Error as ApiError;


type Result<T> = result::Result<Json<T>, ApiError>;
type CreatedResult<T> = result::Result<(Status, Json<T>), ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   auth   --- //
        auth::post_login,
        auth::post_logout,
        // ---   vendors   --- //
        vendors::post_vendor,
        vendors::get_vendors,
        vendors::put_vendor,
        vendors::delete_vendor,
        // ---   turfs   --- //
        turfs::post_turf,
        turfs::get_turfs_of_vendor,
        turfs::get_turfs,
        turfs::put_turf,
        turfs::patch_turf_suspension,
        turfs::delete_turf,
        turfs::get_rules_of_turfs,
        turfs::delete_turf_rules,
        turfs::get_amenities_of_turfs,
        turfs::delete_turf_amenities,
        // ---   master data   --- //
        master_data::post_amenity,
        master_data::get_amenities,
        master_data::put_amenity,
        master_data::delete_amenity,
        master_data::post_rule,
        master_data::get_rules,
        master_data::put_rule,
        master_data::delete_rule,
        // ---   tax   --- //
        tax::post_tax_rate,
        tax::get_tax_rate,
        // ---   bookings   --- //
        bookings::get_booking,
        bookings::get_bookings_summary,
        bookings::get_all_bookings,
        // ---   users   --- //
        users::get_users,
        // ---   util   --- //
        util::get_test,
        util::get_version,
    ]
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let message = err.to_string();
    let boundary_error = JsonErrorResponse {
        http_status: status.code,
        message,
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}

fn created<T>(body: T) -> CreatedResult<T> {
    Ok((Status::Created, Json(body)))
}
