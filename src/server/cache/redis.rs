use std::time::Duration;

use fred::{prelude::*, types::Expiration};

use crate::server::error::Error;

/// Valkey/Redis cache backend
#[derive(Clone)]
pub struct RedisCache {
    pool: Pool,
}

impl RedisCache {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }

    pub async fn get(&self, key: &str) -> Result<Option<String>, Error> {
        let value: Option<String> = self.pool.get(key).await?;

        Ok(value)
    }

    /// Stores `value` with an expiry of `ttl`, in whole seconds and at least one
    pub async fn set(&self, key: String, value: String, ttl: Duration) -> Result<(), Error> {
        let seconds = ttl.as_secs().max(1) as i64;

        let _: () = self
            .pool
            .set(key, value, Some(Expiration::EX(seconds)), None, false)
            .await?;

        Ok(())
    }
}
