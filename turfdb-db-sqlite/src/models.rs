#![allow(clippy::extra_unused_lifetimes)]

// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use anyhow::{anyhow, Result as Fallible};
use serde::{Deserialize, Serialize};
use turfdb_core::entities as e;

use super::schema::*;

#[derive(Insertable)]
#[diesel(table_name = admins)]
pub struct NewAdmin<'a> {
    pub id: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

impl<'a> From<&'a e::Admin> for NewAdmin<'a> {
    fn from(from: &'a e::Admin) -> Self {
        Self {
            id: from.id.as_str(),
            email: from.email.as_str(),
            password: from.password.as_ref(),
        }
    }
}

#[derive(Queryable)]
pub struct AdminEntity {
    pub id: String,
    pub email: String,
    pub password: String,
}

impl From<AdminEntity> for e::Admin {
    fn from(from: AdminEntity) -> Self {
        let AdminEntity {
            id,
            email,
            password,
        } = from;
        Self {
            id: id.into(),
            email: e::EmailAddress::new_unchecked(email),
            password: e::Password::from_hash(password),
        }
    }
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = vendors)]
pub struct NewVendor<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub password: &'a str,
    pub location: &'a str,
    pub gps_url: &'a str,
    pub lat: f64,
    pub lng: f64,
    pub created_at: i64,
}

impl<'a> From<&'a e::Vendor> for NewVendor<'a> {
    fn from(from: &'a e::Vendor) -> Self {
        let (lat, lng) = from.coordinates.to_lat_lng_deg();
        Self {
            id: from.id.as_str(),
            name: &from.name,
            email: from.email.as_str(),
            phone: &from.phone,
            password: from.password.as_ref(),
            location: &from.location,
            gps_url: &from.gps_url,
            lat,
            lng,
            created_at: from.created_at.as_millis(),
        }
    }
}

#[derive(Queryable)]
pub struct VendorEntity {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub location: String,
    pub gps_url: String,
    pub lat: f64,
    pub lng: f64,
    pub created_at: i64,
}

impl TryFrom<VendorEntity> for e::Vendor {
    type Error = anyhow::Error;

    fn try_from(from: VendorEntity) -> Fallible<Self> {
        let VendorEntity {
            id,
            name,
            email,
            phone,
            password,
            location,
            gps_url,
            lat,
            lng,
            created_at,
        } = from;
        let coordinates = e::Coordinate::try_from_lat_lng_deg(lat, lng)
            .ok_or_else(|| anyhow!("Invalid coordinates of vendor {id}: {lat},{lng}"))?;
        Ok(Self {
            id: id.into(),
            name,
            email: e::EmailAddress::new_unchecked(email),
            phone,
            password: e::Password::from_hash(password),
            location,
            gps_url,
            coordinates,
            created_at: e::Timestamp::from_millis(created_at),
        })
    }
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = turfs, treat_none_as_null = true)]
pub struct NewTurf<'a> {
    pub id: &'a str,
    pub vendor_id: &'a str,
    pub title: &'a str,
    pub address: &'a str,
    pub description: &'a str,
    pub sports: String,
    pub amenities: String,
    pub rules: String,
    pub images: String,
    pub vendor_location: &'a str,
    pub vendor_gps_url: &'a str,
    pub vendor_lat: Option<f64>,
    pub vendor_lng: Option<f64>,
    pub cancellation_hours: i32,
    pub featured: bool,
    pub suspended: bool,
    pub deleted: bool,
    pub created_at: i64,
}

impl<'a> TryFrom<&'a e::Turf> for NewTurf<'a> {
    type Error = anyhow::Error;

    fn try_from(from: &'a e::Turf) -> Fallible<Self> {
        let sports: Vec<_> = from.sports.iter().map(SportJson::from).collect();
        let amenities: Vec<_> = from.amenities.iter().map(AmenityJson::from).collect();
        let rules: Vec<_> = from.rules.iter().map(RuleJson::from).collect();
        let (vendor_lat, vendor_lng) = from
            .vendor_coordinates
            .map(|c| c.to_lat_lng_deg())
            .unzip();
        Ok(Self {
            id: from.id.as_str(),
            vendor_id: from.vendor_id.as_str(),
            title: &from.title,
            address: &from.address,
            description: &from.description,
            sports: serde_json::to_string(&sports)?,
            amenities: serde_json::to_string(&amenities)?,
            rules: serde_json::to_string(&rules)?,
            images: serde_json::to_string(&from.images)?,
            vendor_location: &from.vendor_location,
            vendor_gps_url: &from.vendor_gps_url,
            vendor_lat,
            vendor_lng,
            cancellation_hours: i32::try_from(from.cancellation_hours)?,
            featured: from.featured,
            suspended: from.suspended,
            deleted: from.deleted,
            created_at: from.created_at.as_millis(),
        })
    }
}

#[derive(Queryable)]
pub struct TurfEntity {
    pub id: String,
    pub vendor_id: String,
    pub title: String,
    pub address: String,
    pub description: String,
    pub sports: String,
    pub amenities: String,
    pub rules: String,
    pub images: String,
    pub vendor_location: String,
    pub vendor_gps_url: String,
    pub vendor_lat: Option<f64>,
    pub vendor_lng: Option<f64>,
    pub cancellation_hours: i32,
    pub featured: bool,
    pub suspended: bool,
    pub deleted: bool,
    pub created_at: i64,
}

impl TryFrom<TurfEntity> for e::Turf {
    type Error = anyhow::Error;

    fn try_from(from: TurfEntity) -> Fallible<Self> {
        let TurfEntity {
            id,
            vendor_id,
            title,
            address,
            description,
            sports,
            amenities,
            rules,
            images,
            vendor_location,
            vendor_gps_url,
            vendor_lat,
            vendor_lng,
            cancellation_hours,
            featured,
            suspended,
            deleted,
            created_at,
        } = from;
        let sports = serde_json::from_str::<Vec<SportJson>>(&sports)?
            .into_iter()
            .map(e::Sport::try_from)
            .collect::<Fallible<Vec<_>>>()?;
        let amenities = serde_json::from_str::<Vec<AmenityJson>>(&amenities)?
            .into_iter()
            .map(Into::into)
            .collect();
        let rules = serde_json::from_str::<Vec<RuleJson>>(&rules)?
            .into_iter()
            .map(Into::into)
            .collect();
        let vendor_coordinates = match (vendor_lat, vendor_lng) {
            (Some(lat), Some(lng)) => e::Coordinate::try_from_lat_lng_deg(lat, lng),
            _ => None,
        };
        Ok(Self {
            id: id.into(),
            vendor_id: vendor_id.into(),
            title,
            address,
            description,
            sports,
            amenities,
            rules,
            images: serde_json::from_str(&images)?,
            vendor_location,
            vendor_gps_url,
            vendor_coordinates,
            cancellation_hours: u32::try_from(cancellation_hours)?,
            featured,
            suspended,
            deleted,
            created_at: e::Timestamp::from_millis(created_at),
        })
    }
}

#[derive(Serialize, Deserialize)]
pub struct SportJson {
    pub name: String,
    pub slot_price: f64,
    pub discounted_price: f64,
    pub weekend_price: f64,
    pub timings: Vec<TimingJson>,
    pub courts: Vec<String>,
}

#[derive(Serialize, Deserialize)]
pub struct TimingJson {
    pub start: String,
    pub end: String,
}

impl From<&e::Sport> for SportJson {
    fn from(from: &e::Sport) -> Self {
        Self {
            name: from.name.clone(),
            slot_price: from.slot_price,
            discounted_price: from.discounted_price,
            weekend_price: from.weekend_price,
            timings: from
                .timings
                .iter()
                .map(|t| TimingJson {
                    start: t.start.to_string(),
                    end: t.end.to_string(),
                })
                .collect(),
            courts: from.courts.clone(),
        }
    }
}

impl TryFrom<SportJson> for e::Sport {
    type Error = anyhow::Error;

    fn try_from(from: SportJson) -> Fallible<Self> {
        let SportJson {
            name,
            slot_price,
            discounted_price,
            weekend_price,
            timings,
            courts,
        } = from;
        let timings = timings
            .into_iter()
            .map(|TimingJson { start, end }| -> Fallible<e::Timing> {
                Ok(e::Timing {
                    start: start.parse()?,
                    end: end.parse()?,
                })
            })
            .collect::<Fallible<Vec<_>>>()?;
        Ok(Self {
            name,
            slot_price,
            discounted_price,
            weekend_price,
            timings,
            courts,
        })
    }
}

#[derive(Serialize, Deserialize)]
pub struct AmenityJson {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
}

impl From<&e::Amenity> for AmenityJson {
    fn from(from: &e::Amenity) -> Self {
        Self {
            id: from.id.to_string(),
            name: from.name.clone(),
            description: from.description.clone(),
            icon: from.icon.clone(),
        }
    }
}

impl From<AmenityJson> for e::Amenity {
    fn from(from: AmenityJson) -> Self {
        let AmenityJson {
            id,
            name,
            description,
            icon,
        } = from;
        Self {
            id: id.into(),
            name,
            description,
            icon,
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct RuleJson {
    pub id: String,
    pub name: String,
    pub description: String,
}

impl From<&e::Rule> for RuleJson {
    fn from(from: &e::Rule) -> Self {
        Self {
            id: from.id.to_string(),
            name: from.name.clone(),
            description: from.description.clone(),
        }
    }
}

impl From<RuleJson> for e::Rule {
    fn from(from: RuleJson) -> Self {
        let RuleJson {
            id,
            name,
            description,
        } = from;
        Self {
            id: id.into(),
            name,
            description,
        }
    }
}

#[derive(Insertable, AsChangeset, Queryable)]
#[diesel(table_name = amenities)]
pub struct AmenityEntity {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
}

impl From<&e::Amenity> for AmenityEntity {
    fn from(from: &e::Amenity) -> Self {
        Self {
            id: from.id.to_string(),
            name: from.name.clone(),
            description: from.description.clone(),
            icon: from.icon.clone(),
        }
    }
}

impl From<AmenityEntity> for e::Amenity {
    fn from(from: AmenityEntity) -> Self {
        let AmenityEntity {
            id,
            name,
            description,
            icon,
        } = from;
        Self {
            id: id.into(),
            name,
            description,
            icon,
        }
    }
}

#[derive(Insertable, AsChangeset, Queryable)]
#[diesel(table_name = rules)]
pub struct RuleEntity {
    pub id: String,
    pub name: String,
    pub description: String,
}

impl From<&e::Rule> for RuleEntity {
    fn from(from: &e::Rule) -> Self {
        Self {
            id: from.id.to_string(),
            name: from.name.clone(),
            description: from.description.clone(),
        }
    }
}

impl From<RuleEntity> for e::Rule {
    fn from(from: RuleEntity) -> Self {
        let RuleEntity {
            id,
            name,
            description,
        } = from;
        Self {
            id: id.into(),
            name,
            description,
        }
    }
}

pub const TAX_RATE_ROW_ID: i32 = 1;

#[derive(Insertable, Queryable)]
#[diesel(table_name = tax_rate)]
pub struct TaxRateEntity {
    pub id: i32,
    pub percentage: f64,
    pub updated_at: i64,
}

impl From<&e::TaxRate> for TaxRateEntity {
    fn from(from: &e::TaxRate) -> Self {
        Self {
            id: TAX_RATE_ROW_ID,
            percentage: from.percentage,
            updated_at: from.updated_at.as_millis(),
        }
    }
}

impl From<TaxRateEntity> for e::TaxRate {
    fn from(from: TaxRateEntity) -> Self {
        Self {
            percentage: from.percentage,
            updated_at: e::Timestamp::from_millis(from.updated_at),
        }
    }
}

#[derive(Insertable, Queryable)]
#[diesel(table_name = users)]
pub struct UserEntity {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub created_at: i64,
}

impl From<&e::User> for UserEntity {
    fn from(from: &e::User) -> Self {
        Self {
            id: from.id.to_string(),
            name: from.name.clone(),
            email: from.email.clone(),
            phone: from.phone.clone(),
            created_at: from.created_at.as_millis(),
        }
    }
}

impl From<UserEntity> for e::User {
    fn from(from: UserEntity) -> Self {
        let UserEntity {
            id,
            name,
            email,
            phone,
            created_at,
        } = from;
        Self {
            id: id.into(),
            name,
            email,
            phone,
            created_at: e::Timestamp::from_millis(created_at),
        }
    }
}

#[derive(Insertable, Queryable)]
#[diesel(table_name = bookings)]
pub struct BookingEntity {
    pub id: String,
    pub user_id: String,
    pub vendor_id: String,
    pub turf_id: String,
    pub sport: String,
    pub court: Option<String>,
    pub date: String,
    pub slots: String,
    pub amount: f64,
    pub status: String,
    pub created_at: i64,
}

impl TryFrom<&e::Booking> for BookingEntity {
    type Error = anyhow::Error;

    fn try_from(from: &e::Booking) -> Fallible<Self> {
        Ok(Self {
            id: from.id.to_string(),
            user_id: from.user_id.to_string(),
            vendor_id: from.vendor_id.to_string(),
            turf_id: from.turf_id.to_string(),
            sport: from.sport.clone(),
            court: from.court.clone(),
            date: from.date.clone(),
            slots: serde_json::to_string(&from.slots)?,
            amount: from.amount,
            status: from.status.to_string(),
            created_at: from.created_at.as_millis(),
        })
    }
}

impl TryFrom<BookingEntity> for e::Booking {
    type Error = anyhow::Error;

    fn try_from(from: BookingEntity) -> Fallible<Self> {
        let BookingEntity {
            id,
            user_id,
            vendor_id,
            turf_id,
            sport,
            court,
            date,
            slots,
            amount,
            status,
            created_at,
        } = from;
        let status = status
            .parse()
            .map_err(|_| anyhow!("Invalid status of booking {id}: {status}"))?;
        Ok(Self {
            id: id.into(),
            user_id: user_id.into(),
            vendor_id: vendor_id.into(),
            turf_id: turf_id.into(),
            sport,
            court,
            date,
            slots: serde_json::from_str(&slots)?,
            amount,
            status,
            created_at: e::Timestamp::from_millis(created_at),
        })
    }
}
