use std::time::Duration;

use redis::Commands;

use crate::domain::errors::CacheError;
use crate::domain::ports::Cache;

pub type RedisPool = r2d2::Pool<redis::Client>;

pub fn create_redis_pool(url: &str) -> Result<RedisPool, CacheError> {
    let client = redis::Client::open(url).map_err(|e| CacheError(e.to_string()))?;
    r2d2::Pool::builder()
        .build(client)
        .map_err(|e| CacheError(e.to_string()))
}

impl From<redis::RedisError> for CacheError {
    fn from(e: redis::RedisError) -> Self {
        CacheError(e.to_string())
    }
}

impl From<r2d2::Error> for CacheError {
    fn from(e: r2d2::Error) -> Self {
        CacheError(e.to_string())
    }
}

pub struct RedisCache {
    pool: RedisPool,
}

impl RedisCache {
    pub fn new(pool: RedisPool) -> Self {
        Self { pool }
    }
}

impl Cache for RedisCache {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let mut conn = self.pool.get()?;
        Ok(conn.get(key)?)
    }

    fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError> {
        let mut conn = self.pool.get()?;
        conn.set_ex::<_, _, ()>(key, value, ttl.as_secs())?;
        Ok(())
    }

    fn invalidate_prefix(&self, prefix: &str) -> Result<(), CacheError> {
        let mut conn = self.pool.get()?;
        let keys: Vec<String> = conn.scan_match(format!("{}*", prefix))?.collect();
        if !keys.is_empty() {
            conn.del::<_, ()>(keys)?;
        }
        Ok(())
    }
}

/// Cache used when no Redis is configured: every read misses.
pub struct NullCache;

impl Cache for NullCache {
    fn get(&self, _key: &str) -> Result<Option<String>, CacheError> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str, _ttl: Duration) -> Result<(), CacheError> {
        Ok(())
    }

    fn invalidate_prefix(&self, _prefix: &str) -> Result<(), CacheError> {
        Ok(())
    }
}
