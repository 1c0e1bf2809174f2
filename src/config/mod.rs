use std::{env, fs, io::ErrorKind, path::Path, time::Duration};

use anyhow::{anyhow, Result};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "turfdb.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";
const ENV_NAME_JWT_SECRET: &str = "JWT_SECRET";

pub struct Config {
    pub db: Db,
    pub webserver: WebServer,
    pub auth: Auth,
    pub gps: Gps,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(db_url) = env::var(ENV_NAME_DB_URL) {
            cfg.db.conn_sqlite = db_url;
        }
        if let Ok(secret) = env::var(ENV_NAME_JWT_SECRET) {
            cfg.auth.jwt_secret = Some(secret);
        }
        Ok(cfg)
    }
}

pub struct Db {
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u32,
}

pub struct WebServer {
    pub enable_cors: bool,
}

pub struct Auth {
    pub jwt_secret: Option<String>,
    pub token_ttl: Duration,
}

/// Resolution of shortened map links.
pub struct Gps {
    pub resolve_timeout: Duration,
    pub max_redirects: usize,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            db,
            webserver,
            auth,
            gps,
        } = from;

        let raw::Db {
            connection_sqlite,
            connection_pool_size,
        } = db.unwrap_or_default();
        if connection_pool_size == 0 {
            return Err(anyhow!("The connection pool must not be empty"));
        }
        let db = Db {
            conn_sqlite: connection_sqlite,
            conn_pool_size: connection_pool_size,
        };

        let raw::WebServer { cors } = webserver.unwrap_or_default();
        let webserver = WebServer { enable_cors: cors };

        let raw::Auth {
            jwt_secret,
            token_ttl,
        } = auth.unwrap_or_default();
        if token_ttl.is_zero() {
            return Err(anyhow!("Invalid token lifetime"));
        }
        let jwt_secret = jwt_secret.filter(|s| !s.trim().is_empty());
        let auth = Auth {
            jwt_secret,
            token_ttl,
        };

        let raw::Gps {
            resolve_timeout,
            max_redirects,
        } = gps.unwrap_or_default();
        let gps = Gps {
            resolve_timeout,
            max_redirects,
        };

        Ok(Self {
            db,
            webserver,
            auth,
            gps,
        })
    }
}
