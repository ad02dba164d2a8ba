//! Redis cache module

pub mod redis_client;


pub use redis_client::RedisClient;
pub use sg_shared::config::cache::CacheConfig;
