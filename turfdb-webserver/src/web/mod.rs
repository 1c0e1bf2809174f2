use std::{sync::Arc, time::Duration};

use rocket::{config::Config as RocketCfg, Rocket, Route};
use turfdb_core::gateways::short_link::ShortLinkGateway;

pub mod api;
mod guards;
pub mod jwt;
mod sqlite;


#[derive(Debug, Clone)]
pub struct Cfg {
    /// Secret for signing access tokens.
    ///
    /// A random secret is generated if none is configured,
    /// i.e. all tokens become invalid after a restart.
    pub jwt_secret: Option<String>,
    pub token_ttl: Duration,
}

impl Default for Cfg {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            token_ttl: Duration::from_secs(2 * 60 * 60),
        }
    }
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    cfg: Cfg,
    version: &'static str,
}

pub(crate) struct Gateways {
    short_links: Arc<dyn ShortLinkGateway>,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    db: sqlite::Connections,
    gateways: Gateways,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        cfg,
        version,
    } = options;
    let Gateways { short_links } = gateways;

    let Cfg {
        jwt_secret,
        token_ttl,
    } = cfg;
    let jwt_state = match jwt_secret {
        Some(secret) => jwt::JwtState::new(&secret, token_ttl),
        None => {
            warn!("No JWT secret configured, all tokens will expire on shutdown");
            jwt::JwtState::with_random_secret(token_ttl)
        }
    };

    info!("Initialization finished");

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let short_links = guards::ShortLinks(short_links);
    let version = guards::Version(version);

    let mut instance = r
        .manage(db)
        .manage(jwt_state)
        .manage(short_links)
        .manage(version);

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes())]
}

pub async fn run(
    db: sqlite::Connections,
    enable_cors: bool,
    cfg: Cfg,
    short_links: Arc<dyn ShortLinkGateway>,
    version: &'static str,
) {
    let mounts = mounts();
    let options = InstanceOptions {
        mounts,
        rocket_cfg: None,
        cfg,
        version,
    };
    let gateways = Gateways { short_links };

    let instance = rocket_instance(options, db, gateways);
    let server_task = if enable_cors {
        match rocket_cors::CorsOptions::default().to_cors() {
            Ok(cors) => instance.attach(cors).launch(),
            Err(err) => {
                error!("Invalid CORS configuration: {err}");
                return;
            }
        }
    } else {
        instance.launch()
    };
    if let Err(err) = server_task.await {
        error!("Unable to run web server: {err}");
    }
}
