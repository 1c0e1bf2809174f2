pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{booking_builder::*, turf_builder::*, vendor_builder::*};

pub mod vendor_builder {

    use super::*;
    use crate::{email::*, geo::*, id::*, password::*, time::*, vendor::*};

    #[derive(Debug)]
    pub struct VendorBuild {
        vendor: Vendor,
    }

    impl VendorBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.vendor.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.vendor.name = name.into();
            self
        }
        pub fn email(mut self, email: &str) -> Self {
            self.vendor.email = email.parse().unwrap();
            self
        }
        pub fn phone(mut self, phone: &str) -> Self {
            self.vendor.phone = phone.into();
            self
        }
        pub fn password(mut self, password: &str) -> Self {
            self.vendor.password = password.parse().unwrap();
            self
        }
        pub fn location(mut self, location: &str) -> Self {
            self.vendor.location = location.into();
            self
        }
        pub fn gps_url(mut self, gps_url: &str) -> Self {
            self.vendor.gps_url = gps_url.into();
            self
        }
        pub fn coordinates(mut self, lat: f64, lng: f64) -> Self {
            self.vendor.coordinates = Coordinate::try_from_lat_lng_deg(lat, lng).unwrap();
            self
        }
        pub fn finish(self) -> Vendor {
            self.vendor
        }
    }

    impl Builder for Vendor {
        type Build = VendorBuild;
        fn build() -> VendorBuild {
            VendorBuild {
                vendor: Vendor {
                    id: Id::new(),
                    name: "".into(),
                    email: EmailAddress::new_unchecked("vendor@example.com".into()),
                    phone: "".into(),
                    password: Password::from_hash("".into()),
                    location: "".into(),
                    gps_url: "".into(),
                    coordinates: Coordinate::try_from_lat_lng_deg(0.0, 0.0).unwrap(),
                    created_at: Timestamp::now(),
                },
            }
        }
    }
}

pub mod turf_builder {

    use super::*;
    use crate::{amenity::*, id::*, rule::*, time::*, turf::*};

    #[derive(Debug)]
    pub struct TurfBuild {
        turf: Turf,
    }

    impl TurfBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.turf.id = id.into();
            self
        }
        pub fn vendor_id(mut self, vendor_id: &str) -> Self {
            self.turf.vendor_id = vendor_id.into();
            self
        }
        pub fn title(mut self, title: &str) -> Self {
            self.turf.title = title.into();
            self
        }
        pub fn sport(mut self, name: &str, timings: &[(&str, &str)], courts: &[&str]) -> Self {
            self.turf.sports.push(Sport {
                name: name.into(),
                slot_price: 500.0,
                discounted_price: 0.0,
                weekend_price: 0.0,
                timings: timings
                    .iter()
                    .map(|(start, end)| Timing {
                        start: start.parse().unwrap(),
                        end: end.parse().unwrap(),
                    })
                    .collect(),
                courts: courts.iter().map(|c| (*c).to_owned()).collect(),
            });
            self
        }
        pub fn amenity(mut self, id: &str, name: &str) -> Self {
            self.turf.amenities.push(Amenity {
                id: id.into(),
                name: name.into(),
                description: "".into(),
                icon: "".into(),
            });
            self
        }
        pub fn rule(mut self, id: &str, name: &str) -> Self {
            self.turf.rules.push(Rule {
                id: id.into(),
                name: name.into(),
                description: "".into(),
            });
            self
        }
        pub fn images(mut self, images: Vec<&str>) -> Self {
            self.turf.images = images.into_iter().map(Into::into).collect();
            self
        }
        pub fn suspended(mut self, suspended: bool) -> Self {
            self.turf.suspended = suspended;
            self
        }
        pub fn deleted(mut self, deleted: bool) -> Self {
            self.turf.deleted = deleted;
            self
        }
        pub fn finish(self) -> Turf {
            self.turf
        }
    }

    impl Builder for Turf {
        type Build = TurfBuild;
        fn build() -> TurfBuild {
            TurfBuild {
                turf: Turf {
                    id: Id::new(),
                    vendor_id: Id::new(),
                    title: "".into(),
                    address: "".into(),
                    description: "".into(),
                    sports: vec![],
                    amenities: vec![],
                    rules: vec![],
                    images: vec![],
                    vendor_location: "".into(),
                    vendor_gps_url: "".into(),
                    vendor_coordinates: None,
                    cancellation_hours: 0,
                    featured: false,
                    suspended: false,
                    deleted: false,
                    created_at: Timestamp::now(),
                },
            }
        }
    }
}

pub mod booking_builder {

    use super::*;
    use crate::{booking::*, id::*, time::*};

    #[derive(Debug)]
    pub struct BookingBuild {
        booking: Booking,
    }

    impl BookingBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.booking.id = id.into();
            self
        }
        pub fn turf(mut self, vendor_id: &str, turf_id: &str) -> Self {
            self.booking.vendor_id = vendor_id.into();
            self.booking.turf_id = turf_id.into();
            self
        }
        pub fn amount(mut self, amount: f64) -> Self {
            self.booking.amount = amount;
            self
        }
        pub fn status(mut self, status: BookingStatus) -> Self {
            self.booking.status = status;
            self
        }
        pub fn finish(self) -> Booking {
            self.booking
        }
    }

    impl Builder for Booking {
        type Build = BookingBuild;
        fn build() -> BookingBuild {
            BookingBuild {
                booking: Booking {
                    id: Id::new(),
                    user_id: Id::new(),
                    vendor_id: Id::new(),
                    turf_id: Id::new(),
                    sport: "football".into(),
                    court: None,
                    date: "2025-01-01".into(),
                    slots: vec!["18:00".into()],
                    amount: 0.0,
                    status: BookingStatus::Pending,
                    created_at: Timestamp::now(),
                },
            }
        }
    }
}
