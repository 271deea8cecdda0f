use std::io;
use std::sync::Arc;

use actix_web::HttpServer;
use dotenvy::dotenv;
use log::{error, info, warn};

use tg_api::{create_app, AppState};
use tg_core::{Rs256KeyManager, SystemClock, TokenService, TokenServiceConfig};
use tg_infra::{RedisClient, RedisSessionStore, SeededUserDirectory};
use tg_shared::AppConfig;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load environment variables
    dotenv().ok();

    let config = AppConfig::from_env();

    // Initialize logger; RUST_LOG overrides the per-environment default
    env_logger::init_from_env(env_logger::Env::new().default_filter_or(config.logging.level.as_str()));

    info!("Starting TaskGate API Server ({})", config.environment);

    // Bad key material is fatal at startup
    let key_manager = Rs256KeyManager::from_config(&config.auth.jwt).map_err(|e| {
        error!("Failed to load JWT keys: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e.to_string())
    })?;
    if key_manager.is_embedded() {
        warn!("Using the embedded development key pair; set JWT_PRIVATE_KEY_PATH and JWT_PUBLIC_KEY_PATH in production");
    }

    let redis = RedisClient::new(config.cache.clone()).await.map_err(|e| {
        error!("Failed to connect to the session store: {}", e);
        io::Error::new(io::ErrorKind::ConnectionRefused, e.to_string())
    })?;
    // Token lifetime and record TTL come from the same value
    let token_config = TokenServiceConfig::from_jwt_config(&config.auth.jwt);
    let store = RedisSessionStore::new(redis, token_config.session_ttl_seconds());

    let token_service = Arc::new(TokenService::new(store, SystemClock, key_manager, token_config));

    let directory = SeededUserDirectory::from_env().map_err(|e| {
        error!("Invalid seed user configuration: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e.to_string())
    })?;
    if directory.is_empty() {
        warn!("No seed users configured; every login will be rejected");
    }

    let state = AppState::new(
        token_service.clone(),
        token_service,
        Arc::new(directory),
        &config.auth,
    );

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || create_app(state.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(&bind_address)?.run().await
}
