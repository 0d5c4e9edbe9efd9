//! Portal entry point: tracing, configuration, then the HTTP server.

mod server;

use actix_web::web;
use mockable::DefaultEnv;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use portal::inbound::http::health::HealthState;
use portal::inbound::http::session_config::{BuildMode, session_settings_from_env};
use server::{ServerConfig, bind_addr_from_env, create_server};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(err) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %err, "tracing init failed");
    }

    let env = DefaultEnv::new();
    let mode = BuildMode::from_debug_assertions();
    let settings = session_settings_from_env(&env, mode).map_err(std::io::Error::other)?;
    let bind_addr = bind_addr_from_env(&env).map_err(std::io::Error::other)?;
    info!(?mode, cookie_secure = settings.cookie_secure, "session settings loaded");

    let config = ServerConfig::new(
        settings.key,
        settings.cookie_secure,
        settings.same_site,
        bind_addr,
    );
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    let result = server.await;
    health_state.mark_unhealthy();
    result
}
