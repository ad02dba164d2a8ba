use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tracing::info;
use tracing_actix_web::TracingLogger;

use sg_api::{configure, telemetry, AppState};
use sg_core::repositories::{InMemoryRevocationStore, InMemoryUserRepository, RevocationStore};
use sg_core::services::{SessionService, TokenService, TokenServiceConfig};
use sg_infra::cache::RedisClient;
use sg_infra::RedisRevocationStore;
use sg_shared::config::{AppConfig, RevocationBackend};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    telemetry::init_tracing(&config.logging)?;
    config.validate().context("invalid configuration")?;

    info!(environment = %config.environment, "Starting session guard API");

    let tokens = Arc::new(
        TokenServiceConfig::try_from(&config.auth.jwt)
            .and_then(TokenService::new)
            .context("failed to build token service")?,
    );
    let users = Arc::new(InMemoryUserRepository::new());

    match config.cache.backend {
        RevocationBackend::Redis => {
            let client = RedisClient::new(config.cache.clone())
                .await
                .context("failed to connect to Redis")?;
            if !client.health_check().await.context("Redis health check failed")? {
                anyhow::bail!("Redis health check returned an unexpected response");
            }
            let store = Arc::new(RedisRevocationStore::new(client));
            serve(&config, SessionService::new(tokens, users, store)).await
        }
        RevocationBackend::Memory => {
            info!("Using in-process revocation store");
            let store = Arc::new(InMemoryRevocationStore::new());
            serve(&config, SessionService::new(tokens, users, store)).await
        }
    }
}

async fn serve<R>(
    config: &AppConfig,
    sessions: SessionService<InMemoryUserRepository, R>,
) -> anyhow::Result<()>
where
    R: RevocationStore + 'static,
{
    let state = web::Data::new(AppState::new(sessions));
    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || {
        let state = state.clone();
        App::new()
            .wrap(TracingLogger::default())
            .configure(move |cfg| configure(cfg, state))
    });
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await?;

    Ok(())
}
