use std::{fmt, str::FromStr};

use thiserror::Error;

const LAT_DEG_MIN: f64 = -90.0;
const LAT_DEG_MAX: f64 = 90.0;
const LNG_DEG_MIN: f64 = -180.0;
const LNG_DEG_MAX: f64 = 180.0;

/// A validated geographical position in degrees.
///
/// The values are kept with the full precision they have
/// been parsed with, i.e. no fixed-point conversion or rounding
/// is applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    lat: f64,
    lng: f64,
}

impl Coordinate {
    pub fn is_valid_lat_deg(lat: f64) -> bool {
        lat.is_finite() && (LAT_DEG_MIN..=LAT_DEG_MAX).contains(&lat)
    }

    pub fn is_valid_lng_deg(lng: f64) -> bool {
        lng.is_finite() && (LNG_DEG_MIN..=LNG_DEG_MAX).contains(&lng)
    }

    pub fn try_from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(
        lat: LAT,
        lng: LNG,
    ) -> Option<Self> {
        let (lat, lng) = (lat.into(), lng.into());
        if Self::is_valid_lat_deg(lat) && Self::is_valid_lng_deg(lng) {
            Some(Self { lat, lng })
        } else {
            None
        }
    }

    pub const fn lat(self) -> f64 {
        self.lat
    }

    pub const fn lng(self) -> f64 {
        self.lng
    }

    pub const fn to_lat_lng_deg(self) -> (f64, f64) {
        (self.lat, self.lng)
    }

    fn parse_lat_lng_deg(lat_deg_str: &str, lng_deg_str: &str) -> Result<Self, CoordinateParseError> {
        let lat = lat_deg_str
            .trim()
            .parse::<f64>()
            .map_err(|_| CoordinateParseError::Latitude(lat_deg_str.to_owned()))?;
        let lng = lng_deg_str
            .trim()
            .parse::<f64>()
            .map_err(|_| CoordinateParseError::Longitude(lng_deg_str.to_owned()))?;
        if !Self::is_valid_lat_deg(lat) {
            return Err(CoordinateParseError::Latitude(lat_deg_str.to_owned()));
        }
        if !Self::is_valid_lng_deg(lng) {
            return Err(CoordinateParseError::Longitude(lng_deg_str.to_owned()));
        }
        Ok(Self { lat, lng })
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoordinateParseError {
    #[error("Invalid latitude degrees: {0}")]
    Latitude(String),
    #[error("Invalid longitude degrees: {0}")]
    Longitude(String),
    #[error("Expected '<lat>,<lng>' but got '{0}'")]
    Format(String),
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

impl FromStr for Coordinate {
    type Err = CoordinateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(',') {
            Some((lat, lng)) if !lng.contains(',') => Self::parse_lat_lng_deg(lat, lng),
            _ => Err(CoordinateParseError::Format(s.to_owned())),
        }
    }
}
