pub use turfdb_boundary::*;

use crate::core::usecases;

pub mod from_json {
    //! JSON -> Use case parameters

    use super::*;

    // NOTE:
    // We cannot impl From<T> here, because the JSON structs
    // and the use case parameters both are outside this crate.

    pub fn new_vendor(from: NewVendor) -> usecases::NewVendor {
        let NewVendor {
            name,
            phone,
            location,
            gps_url,
        } = from;
        // Missing fields are rejected by the use case
        usecases::NewVendor {
            name: name.unwrap_or_default(),
            phone: phone.unwrap_or_default(),
            location: location.unwrap_or_default(),
            gps_url: gps_url.unwrap_or_default(),
        }
    }

    pub fn vendor_update(from: VendorUpdate) -> usecases::VendorUpdate {
        let VendorUpdate {
            name,
            phone,
            location,
            email,
            password,
            gps_url,
        } = from;
        usecases::VendorUpdate {
            name,
            phone,
            location,
            email,
            password,
            gps_url,
        }
    }

    fn new_sport(from: NewSport) -> usecases::NewSport {
        let NewSport {
            name,
            slot_price,
            discounted_price,
            weekend_price,
            timings,
            courts,
        } = from;
        usecases::NewSport {
            name,
            slot_price,
            discounted_price,
            weekend_price,
            timings: timings
                .into_iter()
                .map(|Timing { start, end }| usecases::NewTiming { start, end })
                .collect(),
            courts,
        }
    }

    fn new_sports(from: Vec<NewSport>) -> Vec<usecases::NewSport> {
        from.into_iter().map(new_sport).collect()
    }

    pub fn new_turf(from: NewTurf) -> usecases::NewTurf {
        let NewTurf {
            title,
            address,
            description,
            sports,
            amenities,
            rules,
            images,
            cancellation_hours,
            featured,
        } = from;
        usecases::NewTurf {
            title: title.unwrap_or_default(),
            address: address.unwrap_or_default(),
            description: description.unwrap_or_default(),
            sports: sports.map(new_sports),
            amenities,
            rules,
            images,
            cancellation_hours: cancellation_hours.unwrap_or_default(),
            featured: featured.as_ref().map_or(false, Flag::is_set),
        }
    }

    pub fn turf_update(from: TurfUpdate) -> usecases::TurfUpdate {
        let TurfUpdate {
            title,
            address,
            description,
            sports,
            amenities,
            rules,
            images,
            cancellation_hours,
            featured,
        } = from;
        usecases::TurfUpdate {
            title,
            address,
            description,
            sports: sports.map(new_sports),
            amenities,
            rules,
            images,
            cancellation_hours,
            featured: featured.as_ref().map(Flag::is_set),
        }
    }

    pub fn new_amenity(from: AmenityInput) -> usecases::NewAmenity {
        let AmenityInput {
            name,
            description,
            icon,
        } = from;
        usecases::NewAmenity {
            name: name.unwrap_or_default(),
            description,
            icon,
        }
    }

    pub fn amenity_update(from: AmenityInput) -> usecases::AmenityUpdate {
        let AmenityInput {
            name,
            description,
            icon,
        } = from;
        usecases::AmenityUpdate {
            name,
            description,
            icon,
        }
    }

    pub fn new_rule(from: RuleInput) -> usecases::NewRule {
        let RuleInput { name, description } = from;
        usecases::NewRule {
            name: name.unwrap_or_default(),
            description,
        }
    }
}

pub mod to_json {
    //! Use case results -> JSON

    use super::*;

    const MASKED_PASSWORD: &str = "********";

    pub fn vendor_login(from: usecases::VendorLogin) -> VendorLogin {
        let usecases::VendorLogin { email, password } = from;
        VendorLogin {
            email: email.into_string(),
            password,
        }
    }

    pub fn updated_vendor_fields(from: usecases::UpdatedVendorFields) -> UpdatedVendorFields {
        let usecases::UpdatedVendorFields {
            name,
            phone,
            location,
            email,
            password_changed,
            gps_url,
            coordinates,
        } = from;
        UpdatedVendorFields {
            name,
            phone,
            location,
            email: email.map(|e| e.into_string()),
            password: password_changed.then(|| MASKED_PASSWORD.to_owned()),
            gps_url,
            coordinates: coordinates.map(Into::into),
        }
    }

    pub fn turf_summary(from: usecases::TurfSummary) -> TurfSummary {
        let usecases::TurfSummary {
            turf_id,
            vendor_id: _,
            title,
            description,
            vendor_name,
            phone,
            location,
            courts_count,
            open_time,
            close_time,
            created_at,
            thumbnail,
            cancellation_hours,
            featured,
            suspended,
        } = from;
        TurfSummary {
            turf_id: turf_id.into(),
            title,
            vendor_name,
            phone,
            location,
            description,
            courts_count,
            open_time: open_time.map(|t| t.to_string()),
            close_time: close_time.map(|t| t.to_string()),
            created_at: created_at.to_rfc3339(),
            thumbnail,
            cancellation_hours,
            featured: featured.into(),
            is_suspended: suspended.into(),
        }
    }

    pub fn turf_rules(from: usecases::TurfRules) -> TurfRules {
        let usecases::TurfRules {
            turf_id,
            title,
            rules,
        } = from;
        TurfRules {
            turf_id: turf_id.into(),
            title,
            rules: rules.into_iter().map(Into::into).collect(),
        }
    }

    pub fn turf_amenities(from: usecases::TurfAmenities) -> TurfAmenities {
        let usecases::TurfAmenities {
            turf_id,
            title,
            amenities,
        } = from;
        TurfAmenities {
            turf_id: turf_id.into(),
            title,
            amenities: amenities.into_iter().map(Into::into).collect(),
        }
    }

    pub fn bookings_summary(from: usecases::BookingsSummary) -> BookingsSummary {
        let usecases::BookingsSummary {
            total_bookings,
            total_amount,
        } = from;
        BookingsSummary {
            total_bookings,
            total_amount,
        }
    }
}
