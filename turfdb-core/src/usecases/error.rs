use crate::{
    repositories,
    util::validate::{SportInvalidation, TurfInvalidation},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Missing required fields")]
    MissingFields,
    #[error("Missing required turf fields")]
    MissingTurfFields,
    #[error("No fields provided for update")]
    NothingToUpdate,
    #[error("Invalid email format")]
    EmailAddress,
    #[error("The email address is already in use")]
    EmailExists,
    #[error("The password must have at least 6 characters")]
    Password,
    #[error("Could not extract coordinates from the provided GPS URL. Please share a valid Google Maps link.")]
    CoordinatesNotFound,
    #[error("Invalid time of day (expected HH:MM)")]
    Timing,
    #[error("Missing sport name")]
    SportName,
    #[error("Invalid price")]
    Price,
    #[error("isSuspended is required")]
    SuspendedFlag,
    #[error("rulesToDelete must be an array")]
    RulesToDelete,
    #[error("amenitiesToDelete must be an array")]
    AmenitiesToDelete,
    #[error("Name field is required")]
    AmenityName,
    #[error("Rule name is required")]
    RuleName,
    #[error("Invalid tax percentage")]
    TaxPercentage,
    #[error("Invalid credentials")]
    Credentials,
    #[error("This is not allowed without auth")]
    Unauthorized,
    #[error("This is not allowed")]
    Forbidden,
    #[error("The admin already exists")]
    AdminExists,
    #[error("Vendor not found")]
    VendorNotFound,
    #[error("No vendors found")]
    NoVendors,
    #[error("Turf not found")]
    TurfNotFound,
    #[error("Amenity not found")]
    AmenityNotFound,
    #[error("Rule not found")]
    RuleNotFound,
    #[error("Booking not found")]
    BookingNotFound,
    #[error("No bookings found")]
    NoBookings,
    #[error("The tax rate has not been set yet")]
    TaxRateNotSet,
    #[error("Could not generate the vendor login")]
    VendorLogin,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl Error {
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::VendorNotFound
                | Self::NoVendors
                | Self::TurfNotFound
                | Self::AmenityNotFound
                | Self::RuleNotFound
                | Self::BookingNotFound
                | Self::NoBookings
                | Self::TaxRateNotSet
                | Self::Repo(repositories::Error::NotFound)
        )
    }
}

pub(crate) trait NotFoundExt<T> {
    fn or_not_found(self, err: Error) -> Result<T, Error>;
}

impl<T> NotFoundExt<T> for Result<T, repositories::Error> {
    fn or_not_found(self, err: Error) -> Result<T, Error> {
        self.map_err(|e| match e {
            repositories::Error::NotFound => err,
            e => e.into(),
        })
    }
}

impl From<turfdb_entities::password::ParseError> for Error {
    fn from(_: turfdb_entities::password::ParseError) -> Self {
        Self::Password
    }
}

impl From<turfdb_entities::email::EmailAddressParseError> for Error {
    fn from(_: turfdb_entities::email::EmailAddressParseError) -> Self {
        Self::EmailAddress
    }
}

impl From<turfdb_entities::turf::SlotTimeParseError> for Error {
    fn from(_: turfdb_entities::turf::SlotTimeParseError) -> Self {
        Self::Timing
    }
}

impl From<SportInvalidation> for Error {
    fn from(err: SportInvalidation) -> Self {
        match err {
            SportInvalidation::Name => Self::SportName,
            SportInvalidation::Price => Self::Price,
        }
    }
}

impl From<TurfInvalidation> for Error {
    fn from(err: TurfInvalidation) -> Self {
        match err {
            TurfInvalidation::MissingFields => Self::MissingTurfFields,
            TurfInvalidation::Sport(err) => err.into(),
        }
    }
}
