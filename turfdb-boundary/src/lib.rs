use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, PartialEq, Eq, thiserror::Error)
)]
#[cfg_attr(feature = "extra-derive", error("{message}"))]
pub struct Error {
    pub http_status: u16,
    pub message: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A boolean that is also accepted as `0` or `1`.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
#[serde(untagged)]
pub enum Flag {
    Bool(bool),
    Number(u8),
}

impl Flag {
    pub const fn is_set(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0,
        }
    }
}

// ---   admin session   --- //

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

// ---   vendors   --- //

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq))]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct NewVendor {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub gps_url: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct VendorLogin {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct VendorCreated {
    pub message: String,
    pub vendor_id: String,
    pub login: VendorLogin,
    pub coordinates: Coordinate,
}

/// A vendor without its password.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    pub id          : String,
    pub name        : String,
    pub email       : String,
    pub phone       : String,
    pub location    : String,
    pub gps_url     : String,
    pub coordinates : Coordinate,
    pub created_at  : String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct VendorList {
    pub vendors: Vec<Vendor>,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct VendorUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub gps_url: Option<String>,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct UpdatedVendorFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Always masked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gps_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinate>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct VendorUpdated {
    pub message: String,
    pub vendor_id: String,
    pub updated_fields: UpdatedVendorFields,
}

// ---   turfs   --- //

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Timing {
    pub start: String,
    pub end: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct NewSport {
    pub name: String,
    pub slot_price: f64,
    pub discounted_price: Option<f64>,
    pub weekend_price: Option<f64>,
    #[serde(default)]
    pub timings: Vec<Timing>,
    #[serde(default)]
    pub courts: Vec<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct Sport {
    pub name: String,
    pub slot_price: f64,
    pub discounted_price: f64,
    pub weekend_price: f64,
    pub timings: Vec<Timing>,
    pub courts: Vec<String>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct NewTurf {
    pub title              : Option<String>,
    pub address            : Option<String>,
    pub description        : Option<String>,
    pub sports             : Option<Vec<NewSport>>,
    /// Amenity ids
    pub amenities          : Option<Vec<String>>,
    /// Rule ids
    pub rules              : Option<Vec<String>>,
    pub images             : Option<Vec<String>>,
    pub cancellation_hours : Option<u32>,
    pub featured           : Option<Flag>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct TurfUpdate {
    pub title              : Option<String>,
    pub address            : Option<String>,
    pub description        : Option<String>,
    pub sports             : Option<Vec<NewSport>>,
    pub amenities          : Option<Vec<String>>,
    pub rules              : Option<Vec<String>>,
    pub images             : Option<Vec<String>>,
    pub cancellation_hours : Option<u32>,
    pub featured           : Option<Flag>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct Turf {
    pub turf_id            : String,
    pub vendor_id          : String,
    pub title              : String,
    pub address            : String,
    pub description        : String,
    pub sports             : Vec<Sport>,
    pub amenities          : Vec<Amenity>,
    pub rules              : Vec<Rule>,
    pub images             : Vec<String>,
    pub vendor_location    : String,
    pub vendor_gps_url     : String,
    pub vendor_coordinates : Option<Coordinate>,
    pub created_at         : String,
    pub cancellation_hours : u32,
    pub featured           : u8,
    pub is_suspended       : u8,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct TurfCreated {
    pub message: String,
    pub vendor_id: String,
    pub turf_id: String,
    pub turf: Turf,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct TurfChanged {
    pub message: String,
    pub turf: Turf,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct TurfSummary {
    pub turf_id            : String,
    pub title              : String,
    pub vendor_name        : String,
    pub phone              : String,
    pub location           : String,
    pub description        : String,
    pub courts_count       : usize,
    pub open_time          : Option<String>,
    pub close_time         : Option<String>,
    pub created_at         : String,
    pub thumbnail          : Option<String>,
    pub cancellation_hours : u32,
    pub featured           : u8,
    pub is_suspended       : u8,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct SuspendTurf {
    pub is_suspended: Option<Flag>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct TurfRules {
    pub turf_id: String,
    pub title: String,
    pub rules: Vec<Rule>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct TurfAmenities {
    pub turf_id: String,
    pub title: String,
    pub amenities: Vec<Amenity>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct DeleteRules {
    pub rules_to_delete: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct RulesDeleted {
    pub message: String,
    pub remaining_rules: Vec<Rule>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct DeleteAmenities {
    pub amenities_to_delete: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct AmenitiesDeleted {
    pub message: String,
    pub remaining_amenities: Vec<Amenity>,
}

// ---   master data   --- //

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Amenity {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct AmenityInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Rule {
    pub id: String,
    pub name: String,
    pub description: String,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct RuleInput {
    pub name: Option<String>,
    pub description: Option<String>,
}

// ---   tax   --- //

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct SetTaxRate {
    pub percentage: Option<f64>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct TaxRate {
    pub percentage: f64,
    pub updated_at: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct TaxRateUpdated {
    pub message: String,
    pub percentage: f64,
}

// ---   bookings & users   --- //

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub booking_id : String,
    pub user_id    : String,
    pub vendor_id  : String,
    pub turf_id    : String,
    pub sport      : String,
    pub court      : Option<String>,
    pub date       : String,
    pub slots      : Vec<String>,
    pub amount     : f64,
    pub status     : String,
    pub created_at : String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy))]
#[serde(rename_all = "camelCase")]
pub struct BookingsSummary {
    pub total_bookings: usize,
    pub total_amount: f64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct BookingList {
    pub total: usize,
    pub bookings: Vec<Booking>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub created_at: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct UserList {
    pub users: Vec<User>,
}
