//! Revocation store backed by a Redis set

mod redis_store;

pub use redis_store::RedisRevocationStore;
