// Low-level database access traits.
// Each repository is responsible for a single entity.
// Related entities are only referenced by their id,
// except for the amenities and rules that are copied
// into a turf when it is stored.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait AdminRepo {
    fn create_admin(&self, admin: &Admin) -> Result<()>;
    fn try_get_admin_by_email(&self, email: &EmailAddress) -> Result<Option<Admin>>;
}

pub trait VendorRepo {
    fn create_vendor(&self, vendor: &Vendor) -> Result<()>;
    fn get_vendor(&self, id: &str) -> Result<Vendor>;
    fn try_get_vendor_by_email(&self, email: &EmailAddress) -> Result<Option<Vendor>>;
    fn all_vendors(&self) -> Result<Vec<Vendor>>;
    fn update_vendor(&self, vendor: &Vendor) -> Result<()>;
    fn delete_vendor(&self, id: &str) -> Result<()>;
}

pub trait TurfRepo {
    fn create_turf(&self, turf: &Turf) -> Result<()>;

    // Only turfs that have not been deleted
    fn get_turf(&self, vendor_id: &str, turf_id: &str) -> Result<Turf>;
    fn turfs_of_vendor(&self, vendor_id: &str) -> Result<Vec<Turf>>;
    fn all_turfs(&self) -> Result<Vec<Turf>>;

    fn update_turf(&self, turf: &Turf) -> Result<()>;

    // Removes deleted turfs, too
    fn delete_turfs_of_vendor(&self, vendor_id: &str) -> Result<usize>;
}

pub trait AmenityRepo {
    fn create_amenity(&self, amenity: &Amenity) -> Result<()>;
    fn get_amenity(&self, id: &str) -> Result<Amenity>;
    fn all_amenities(&self) -> Result<Vec<Amenity>>;
    fn update_amenity(&self, amenity: &Amenity) -> Result<()>;
    fn delete_amenity(&self, id: &str) -> Result<()>;
}

pub trait RuleRepo {
    fn create_rule(&self, rule: &Rule) -> Result<()>;
    fn get_rule(&self, id: &str) -> Result<Rule>;
    fn all_rules(&self) -> Result<Vec<Rule>>;
    fn update_rule(&self, rule: &Rule) -> Result<()>;
    fn delete_rule(&self, id: &str) -> Result<()>;
}

pub trait BookingRepo {
    fn create_booking(&self, booking: &Booking) -> Result<()>;
    fn get_booking(&self, id: &str) -> Result<Booking>;
    fn all_bookings(&self) -> Result<Vec<Booking>>;
}

pub trait UserRepo {
    fn create_user(&self, user: &User) -> Result<()>;
    fn all_users(&self) -> Result<Vec<User>>;
}

pub trait TaxRepo {
    fn set_tax_rate(&self, rate: &TaxRate) -> Result<()>;
    fn get_tax_rate(&self) -> Result<Option<TaxRate>>;
}
