//! Redis data-API probes

use crate::config::api;
use crate::error::{AuditError, Result};
use crate::heroku::info::info_value;
use crate::heroku::models::Addon;
use crate::heroku::HerokuClient;

/// Details probed from the Redis data API for one instance
#[derive(Debug, Clone)]
pub struct RedisDetails {
    pub version: String,
    pub maxmemory_policy: String,
}

impl RedisDetails {
    /// Major version: everything before the first `.`
    pub fn major_version(&self) -> &str {
        self.version.split('.').next().unwrap_or(&self.version)
    }
}

impl HerokuClient {
    /// Probe a Redis instance's details on the data-API host
    pub async fn get_redis_details(&self, addon: &Addon) -> Result<RedisDetails> {
        let path = format!("/redis/v0/databases/{}", addon.id);
        let context = format!("Redis instance '{}'", addon.name);
        let data = self.get_json(api::REDIS_HOST, &path, &context).await?;

        let version = info_value(&data, "Version").ok_or_else(|| {
            AuditError::Json(format!(
                "No Version reported for Redis instance '{}'",
                addon.name
            ))
        })?;
        let maxmemory_policy = info_value(&data, "Maxmemory").unwrap_or_default();
        Ok(RedisDetails {
            version,
            maxmemory_policy,
        })
    }
}
