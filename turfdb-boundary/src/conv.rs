use super::*;
use turfdb_entities as e;

impl From<e::geo::Coordinate> for Coordinate {
    fn from(from: e::geo::Coordinate) -> Self {
        let (lat, lng) = from.to_lat_lng_deg();
        Self { lat, lng }
    }
}

impl From<e::vendor::Vendor> for Vendor {
    fn from(from: e::vendor::Vendor) -> Self {
        let e::vendor::Vendor {
            id,
            name,
            email,
            phone,
            password: _,
            location,
            gps_url,
            coordinates,
            created_at,
        } = from;
        Self {
            id: id.into(),
            name,
            email: email.into_string(),
            phone,
            location,
            gps_url,
            coordinates: coordinates.into(),
            created_at: created_at.to_rfc3339(),
        }
    }
}

impl From<e::turf::Timing> for Timing {
    fn from(from: e::turf::Timing) -> Self {
        Self {
            start: from.start.to_string(),
            end: from.end.to_string(),
        }
    }
}

impl From<e::turf::Sport> for Sport {
    fn from(from: e::turf::Sport) -> Self {
        let e::turf::Sport {
            name,
            slot_price,
            discounted_price,
            weekend_price,
            timings,
            courts,
        } = from;
        Self {
            name,
            slot_price,
            discounted_price,
            weekend_price,
            timings: timings.into_iter().map(Timing::from).collect(),
            courts,
        }
    }
}

impl From<e::amenity::Amenity> for Amenity {
    fn from(from: e::amenity::Amenity) -> Self {
        let e::amenity::Amenity {
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

impl From<e::rule::Rule> for Rule {
    fn from(from: e::rule::Rule) -> Self {
        let e::rule::Rule {
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

impl From<e::turf::Turf> for Turf {
    fn from(from: e::turf::Turf) -> Self {
        let e::turf::Turf {
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
            vendor_coordinates,
            cancellation_hours,
            featured,
            suspended,
            deleted: _,
            created_at,
        } = from;
        Self {
            turf_id: id.into(),
            vendor_id: vendor_id.into(),
            title,
            address,
            description,
            sports: sports.into_iter().map(Sport::from).collect(),
            amenities: amenities.into_iter().map(Amenity::from).collect(),
            rules: rules.into_iter().map(Rule::from).collect(),
            images,
            vendor_location,
            vendor_gps_url,
            vendor_coordinates: vendor_coordinates.map(Coordinate::from),
            created_at: created_at.to_rfc3339(),
            cancellation_hours,
            featured: featured.into(),
            is_suspended: suspended.into(),
        }
    }
}

impl From<e::tax::TaxRate> for TaxRate {
    fn from(from: e::tax::TaxRate) -> Self {
        Self {
            percentage: from.percentage,
            updated_at: from.updated_at.to_rfc3339(),
        }
    }
}

impl From<e::booking::Booking> for Booking {
    fn from(from: e::booking::Booking) -> Self {
        let e::booking::Booking {
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
        Self {
            booking_id: id.into(),
            user_id: user_id.into(),
            vendor_id: vendor_id.into(),
            turf_id: turf_id.into(),
            sport,
            court,
            date,
            slots,
            amount,
            status: status.to_string(),
            created_at: created_at.to_rfc3339(),
        }
    }
}

impl From<e::user::User> for User {
    fn from(from: e::user::User) -> Self {
        let e::user::User {
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
            created_at: created_at.to_rfc3339(),
        }
    }
}
