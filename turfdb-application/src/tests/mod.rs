pub mod prelude {
    use std::sync::Mutex;

    use async_trait::async_trait;

    pub use turfdb_core::{
        entities::*,
        gateways::short_link::{ResolutionFailed, ShortLinkGateway},
        repositories::{Error as RepoError, *},
        usecases,
    };

    pub mod sqlite {
        pub use super::super::super::sqlite::*;
    }

    pub use crate::{
        error::{AppError, BError},
        prelude as flows,
    };

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            // A single connection for a single in-memory database
            let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
            turfdb_db_sqlite::run_embedded_database_migrations(db_connections.exclusive().unwrap())
                .unwrap();
            Self { db_connections }
        }

        pub fn create_vendor(&self, id: &str, email: &str) -> String {
            let vendor = Vendor {
                id: id.into(),
                name: "Green Field".into(),
                email: email.parse().unwrap(),
                phone: "9876543210".into(),
                password: Password::from_hash(String::new()),
                location: "Salt Lake".into(),
                gps_url: "https://www.google.com/maps/@22.5726,88.3639,15z".into(),
                coordinates: Coordinate::try_from_lat_lng_deg(22.5726, 88.3639).unwrap(),
                created_at: Timestamp::now(),
            };
            self.db_connections
                .exclusive()
                .unwrap()
                .create_vendor(&vendor)
                .unwrap();
            vendor.id.into()
        }

        pub fn get_vendor(&self, id: &str) -> Vendor {
            self.db_connections.shared().unwrap().get_vendor(id).unwrap()
        }

        pub fn all_vendors(&self) -> Vec<Vendor> {
            self.db_connections.shared().unwrap().all_vendors().unwrap()
        }

        pub fn create_turf(&self, vendor_id: &str, title: &str) -> String {
            flows::create_turf(&self.db_connections, vendor_id, new_turf(title))
                .unwrap()
                .id
                .into()
        }
    }

    pub fn new_turf(title: &str) -> usecases::NewTurf {
        usecases::NewTurf {
            title: title.into(),
            address: "Sector V".into(),
            description: "Floodlit 5-a-side pitch".into(),
            sports: Some(vec![usecases::NewSport {
                name: "football".into(),
                slot_price: 1200.0,
                discounted_price: None,
                weekend_price: Some(1500.0),
                timings: vec![usecases::NewTiming {
                    start: "06:00".into(),
                    end: "23:00".into(),
                }],
                courts: vec!["A".into()],
            }]),
            amenities: Some(vec![]),
            rules: Some(vec![]),
            images: Some(vec![]),
            ..Default::default()
        }
    }

    /// Resolves every link to a fixed target or fails.
    pub struct DummyShortLinkGateway {
        target: Option<String>,
        requested: Mutex<Vec<String>>,
    }

    impl DummyShortLinkGateway {
        pub fn redirect(target: &str) -> Self {
            Self {
                target: Some(target.to_owned()),
                requested: Default::default(),
            }
        }

        pub fn failing() -> Self {
            Self {
                target: None,
                requested: Default::default(),
            }
        }

        pub fn requested(&self) -> Vec<String> {
            self.requested.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ShortLinkGateway for DummyShortLinkGateway {
        async fn resolve_short_url(&self, url: &str) -> Result<String, ResolutionFailed> {
            self.requested.lock().unwrap().push(url.to_owned());
            self.target
                .clone()
                .ok_or_else(|| ResolutionFailed::new(url, "connection refused"))
        }
    }
}
