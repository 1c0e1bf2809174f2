use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::{amenity::Amenity, geo::Coordinate, id::Id, rule::Rule, time::Timestamp};

/// A bookable sports venue managed by a vendor.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Turf {
    pub id                 : Id,
    pub vendor_id          : Id,
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
    pub cancellation_hours : u32,
    pub featured           : bool,
    pub suspended          : bool,
    pub deleted            : bool,
    pub created_at         : Timestamp,
}

impl Turf {
    pub fn courts_count(&self) -> usize {
        self.sports.iter().map(|s| s.courts.len()).sum()
    }

    pub fn thumbnail(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    pub fn timings(&self) -> impl Iterator<Item = &Timing> {
        self.sports.iter().flat_map(|s| s.timings.iter())
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Sport {
    pub name             : String,
    pub slot_price       : f64,
    pub discounted_price : f64,
    pub weekend_price    : f64,
    pub timings          : Vec<Timing>,
    pub courts           : Vec<String>,
}

/// An opening interval of a sport on a turf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub start: SlotTime,
    pub end: SlotTime,
}

/// Wall clock time of a day with minute precision, formatted as `HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotTime {
    hour: u8,
    minute: u8,
}

impl SlotTime {
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self { hour, minute })
    }

    pub const fn hour(self) -> u8 {
        self.hour
    }

    pub const fn minute(self) -> u8 {
        self.minute
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid time of day '{0}' (expected HH:MM)")]
pub struct SlotTimeParseError(String);

impl FromStr for SlotTime {
    type Err = SlotTimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || SlotTimeParseError(s.to_owned());
        let (h, m) = s.trim().split_once(':').ok_or_else(err)?;
        if h.is_empty() || h.len() > 2 || m.len() != 2 {
            return Err(err());
        }
        let hour = h.parse::<u8>().map_err(|_| err())?;
        let minute = m.parse::<u8>().map_err(|_| err())?;
        Self::new(hour, minute).ok_or_else(err)
    }
}

impl fmt::Display for SlotTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_slot_time() {
        assert_eq!("06:00".parse::<SlotTime>(), Ok(SlotTime::new(6, 0).unwrap()));
        assert_eq!("6:30".parse::<SlotTime>(), Ok(SlotTime::new(6, 30).unwrap()));
        assert_eq!("23:59".parse::<SlotTime>().unwrap().to_string(), "23:59");
        assert!("24:00".parse::<SlotTime>().is_err());
        assert!("12:60".parse::<SlotTime>().is_err());
        assert!("1200".parse::<SlotTime>().is_err());
        assert!("12:5".parse::<SlotTime>().is_err());
        assert!("".parse::<SlotTime>().is_err());
    }

    #[test]
    fn order_slot_times() {
        let early: SlotTime = "06:00".parse().unwrap();
        let late: SlotTime = "22:30".parse().unwrap();
        assert!(early < late);
        assert_eq!(early.max(late), late);
    }
}
