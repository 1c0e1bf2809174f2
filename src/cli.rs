use std::{path::PathBuf, sync::Arc};

use anyhow::Result;
use clap::{Parser, Subcommand};
use turfdb_application::prelude as flows;
use turfdb_core::usecases;
use turfdb_db_sqlite::{run_embedded_database_migrations, Connections};
use turfdb_gateways::short_link::{ShortLinkResolver, ShortLinkResolverConfig};

use crate::config::Config;

#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// URL to the database
    #[arg(long, value_name = "DATABASE_URL")]
    db_url: Option<String>,
    /// Allow requests from any origin
    #[arg(long)]
    enable_cors: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Create an admin account
    CreateAdmin {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
}

pub async fn run() -> Result<()> {
    let args = Args::parse();

    let mut cfg = Config::try_load_from_file_or_default(args.config.as_ref())?;
    if let Some(db_url) = args.db_url {
        cfg.db.conn_sqlite = db_url;
    }
    if args.enable_cors {
        cfg.webserver.enable_cors = true;
    }

    log::info!(
        "Connecting to SQLite database '{}' (pool size = {})",
        cfg.db.conn_sqlite,
        cfg.db.conn_pool_size
    );
    let connections = Connections::init(&cfg.db.conn_sqlite, cfg.db.conn_pool_size)?;
    run_embedded_database_migrations(connections.exclusive()?)?;

    match args.command {
        Some(Command::CreateAdmin { email, password }) => {
            let admin = flows::create_admin(&connections, usecases::NewAdmin { email, password })?;
            println!("Created admin {}", admin.email);
        }
        None => {
            let short_links = ShortLinkResolver::try_new(&ShortLinkResolverConfig {
                timeout: cfg.gps.resolve_timeout,
                max_redirects: cfg.gps.max_redirects,
            })?;
            let web_cfg = turfdb_webserver::Cfg {
                jwt_secret: cfg.auth.jwt_secret,
                token_ttl: cfg.auth.token_ttl,
            };
            turfdb_webserver::run(
                connections,
                cfg.webserver.enable_cors,
                web_cfg,
                Arc::new(short_links),
                env!("CARGO_PKG_VERSION"),
            )
            .await;
        }
    }
    Ok(())
}
