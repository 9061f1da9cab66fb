//! Storefront entry-point: loads settings, connects backing services and
//! serves the REST API.

use std::ffi::OsString;

use actix_web::web;
use color_eyre::eyre::{Result, WrapErr, eyre};
use ortho_config::OrthoConfig;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use storefront::inbound::http::health::HealthState;
use storefront::outbound::persistence::DocumentStore;
use storefront::settings::StorefrontSettings;

mod server;

use server::{ServerConfig, create_server};

async fn connect_store(settings: &StorefrontSettings) -> Option<DocumentStore> {
    let Some(config) = settings.store_config() else {
        warn!("document store not configured; catalogue and contact endpoints will fail");
        return None;
    };
    match DocumentStore::connect(config).await {
        Ok(store) => {
            info!("connected to document store");
            Some(store)
        }
        Err(err) => {
            error!(error = %err, "document store unavailable; continuing without it");
            None
        }
    }
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = StorefrontSettings::load_from_iter(std::env::args_os().collect::<Vec<OsString>>())
        .map_err(|err| eyre!("failed to load settings: {err}"))?;
    let bind_addr = settings
        .bind_addr()
        .wrap_err("invalid listen address")?;
    if settings.smtp_config().is_none() {
        warn!("mail credentials not configured; contact notifications disabled");
    }

    let config = ServerConfig::new(bind_addr)
        .with_store(connect_store(&settings).await)
        .with_smtp(settings.smtp_config())
        .with_operator(settings.operator_address().map(str::to_owned));

    let health_state = web::Data::new(HealthState::new(config.dependencies()));
    let server = create_server(health_state, config)
        .wrap_err_with(|| format!("failed to bind {bind_addr}"))?;
    info!(%bind_addr, "storefront listening");
    server.await.wrap_err("server terminated abnormally")
}
