use thiserror::Error;
use turfdb_entities::turf::{Sport, Turf};

pub use fast_chemail::is_valid_email;

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

pub fn is_valid_price(price: f64) -> bool {
    price.is_finite() && price >= 0.0
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SportInvalidation {
    #[error("Missing sport name")]
    Name,
    #[error("Invalid price")]
    Price,
}

impl Validate for Sport {
    type Error = SportInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if is_blank(&self.name) {
            return Err(Self::Error::Name);
        }
        if ![self.slot_price, self.discounted_price, self.weekend_price]
            .into_iter()
            .all(is_valid_price)
        {
            return Err(Self::Error::Price);
        }
        Ok(())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TurfInvalidation {
    #[error("Missing required turf fields")]
    MissingFields,
    #[error(transparent)]
    Sport(SportInvalidation),
}

impl Validate for Turf {
    type Error = TurfInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if [&self.title, &self.address, &self.description]
            .into_iter()
            .any(|s| is_blank(s))
        {
            return Err(Self::Error::MissingFields);
        }
        for sport in &self.sports {
            sport.validate().map_err(Self::Error::Sport)?;
        }
        Ok(())
    }
}
