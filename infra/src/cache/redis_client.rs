//! Redis cache client implementation
//!
//! Connection establishment retries with exponential backoff. Commands issued
//! on the request path are single-attempt and bounded by the configured
//! response timeout, so a slow Redis turns into an error instead of a hung
//! request.

use redis::{aio::MultiplexedConnection, AsyncCommands, Client, RedisError, RedisResult};
use std::future::Future;
use std::time::Duration;
use tokio::time::{sleep, timeout};
use tracing::{debug, error, info, warn};

use sg_shared::config::cache::CacheConfig;

use crate::InfrastructureError;

/// Upper bound for the delay between connection attempts
const MAX_RETRY_DELAY_MS: u64 = 5000;

/// Redis client sharing one multiplexed connection
///
/// Cloning is cheap; every clone talks over the same connection.
#[derive(Clone)]
pub struct RedisClient {
    /// Redis multiplexed connection for async operations
    connection: MultiplexedConnection,
    /// Configuration used to create this client
    config: CacheConfig,
}

impl RedisClient {
    /// Create a new Redis client
    ///
    /// # Arguments
    /// * `config` - Cache configuration settings
    ///
    /// # Returns
    /// * `Result<Self, InfrastructureError>` - Redis client or error
    ///
    /// # Example
    /// ```no_run
    /// use sg_infra::cache::{CacheConfig, RedisClient};
    ///
    /// async fn create_client() -> Result<RedisClient, Box<dyn std::error::Error>> {
    ///     let client = RedisClient::new(CacheConfig::new("localhost:6379")).await?;
    ///     Ok(client)
    /// }
    /// ```
    pub async fn new(config: CacheConfig) -> Result<Self, InfrastructureError> {
        info!(url = %mask_url(&config.url), "Creating Redis client");

        let client = Client::open(config.url.as_str()).map_err(|e| {
            error!("Failed to parse Redis URL: {}", e);
            InfrastructureError::Config(format!("Invalid Redis URL: {}", e))
        })?;

        let connection = Self::create_connection_with_retry(
            client,
            config.connect_retries.max(1),
            config.connect_retry_delay_ms,
        )
        .await?;

        info!("Redis client created successfully");

        Ok(Self { connection, config })
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Create multiplexed connection with retry logic
    async fn create_connection_with_retry(
        client: Client,
        max_retries: u32,
        retry_delay_ms: u64,
    ) -> Result<MultiplexedConnection, InfrastructureError> {
        let mut attempts = 0;
        let mut delay = retry_delay_ms;

        loop {
            attempts += 1;
            debug!("Attempting to connect to Redis (attempt {})", attempts);

            match client.get_multiplexed_async_connection().await {
                Ok(connection) => {
                    info!("Successfully connected to Redis");
                    return Ok(connection);
                }
                Err(e) if attempts < max_retries && is_retriable_error(&e) => {
                    warn!(
                        "Failed to connect to Redis (attempt {}/{}): {}. Retrying in {}ms...",
                        attempts, max_retries, e, delay
                    );
                    sleep(Duration::from_millis(delay)).await;
                    delay = (delay * 2).min(MAX_RETRY_DELAY_MS);
                }
                Err(e) => {
                    error!(
                        "Failed to connect to Redis after {} attempts: {}",
                        attempts, e
                    );
                    return Err(InfrastructureError::Cache(e));
                }
            }
        }
    }

    /// Run one command against the shared connection, bounded by the
    /// response timeout
    async fn execute<F, Fut, T>(&self, operation: &str, command: F) -> Result<T, InfrastructureError>
    where
        F: FnOnce(MultiplexedConnection) -> Fut,
        Fut: Future<Output = RedisResult<T>>,
    {
        let timeout_ms = self.config.response_timeout_ms;

        match timeout(Duration::from_millis(timeout_ms), command(self.connection.clone())).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => {
                error!("Redis {} failed: {}", operation, e);
                Err(InfrastructureError::Cache(e))
            }
            Err(_) => {
                error!("Redis {} timed out after {}ms", operation, timeout_ms);
                Err(InfrastructureError::Timeout {
                    operation: operation.to_string(),
                    timeout_ms,
                })
            }
        }
    }

    /// Add a member to a set
    ///
    /// # Returns
    /// * `Result<bool, InfrastructureError>` - True if the member was newly added
    pub async fn set_add(&self, key: &str, member: &str) -> Result<bool, InfrastructureError> {
        debug!("Adding member to set '{}'", key);

        let added = self
            .execute("SADD", |mut conn| async move {
                conn.sadd::<_, _, i64>(key, member).await
            })
            .await?;

        Ok(added > 0)
    }

    /// Check set membership
    ///
    /// # Returns
    /// * `Result<bool, InfrastructureError>` - True if `member` is in the set
    pub async fn set_is_member(&self, key: &str, member: &str) -> Result<bool, InfrastructureError> {
        self.execute("SISMEMBER", |mut conn| async move {
            conn.sismember::<_, _, bool>(key, member).await
        })
        .await
    }

    /// Check if the Redis connection is healthy
    ///
    /// Performs a PING command to verify connectivity.
    ///
    /// # Returns
    /// * `Result<bool, InfrastructureError>` - True if healthy, error otherwise
    pub async fn health_check(&self) -> Result<bool, InfrastructureError> {
        debug!("Performing Redis health check");

        let response = self
            .execute("PING", |mut conn| async move {
                redis::cmd("PING").query_async::<_, String>(&mut conn).await
            })
            .await?;

        if response == "PONG" {
            debug!("Redis health check passed");
            Ok(true)
        } else {
            warn!("Redis health check returned unexpected response: {}", response);
            Ok(false)
        }
    }
}

/// Check if a Redis error is transient and worth another connection attempt
pub(crate) fn is_retriable_error(error: &RedisError) -> bool {
    matches!(
        error.kind(),
        redis::ErrorKind::IoError
            | redis::ErrorKind::ClientError
            | redis::ErrorKind::BusyLoadingError
            | redis::ErrorKind::TryAgain
    )
}

/// Mask credentials in a Redis URL for logging
pub fn mask_url(url: &str) -> String {
    if let (Some(at_pos), Some(proto_end)) = (url.rfind('@'), url.find("://")) {
        if at_pos > proto_end {
            return format!("{}****{}", &url[..proto_end + 3], &url[at_pos..]);
        }
    }
    url.to_string()
}
