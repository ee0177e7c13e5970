//! Postgres data-API probes

use crate::config::api;
use crate::error::{AuditError, Result};
use crate::heroku::info::info_value;
use crate::heroku::models::Addon;
use crate::heroku::HerokuClient;

/// Details probed from the Postgres data API for one database
#[derive(Debug, Clone)]
pub struct PostgresDetails {
    pub version: String,
}

impl PostgresDetails {
    /// Major version: everything before the first `.`
    pub fn major_version(&self) -> &str {
        self.version.split('.').next().unwrap_or(&self.version)
    }
}

/// Essential-tier databases live on a separate API host
fn api_host(addon: &Addon) -> &'static str {
    let starter = api::POSTGRES_STARTER_TIERS
        .iter()
        .any(|tier| addon.plan.name.contains(tier));
    if starter {
        api::POSTGRES_STARTER_HOST
    } else {
        api::POSTGRES_HOST
    }
}

impl HerokuClient {
    /// Probe a database's details on its data-API host
    pub async fn get_postgres_details(&self, addon: &Addon) -> Result<PostgresDetails> {
        let path = format!("/client/v11/databases/{}", addon.id);
        let context = format!("database '{}'", addon.name);
        let data = self.get_json(api_host(addon), &path, &context).await?;

        let version = info_value(&data, "PG Version").ok_or_else(|| AuditError::Json(format!(
            "No PG Version reported for database '{}'",
            addon.name
        )))?;
        Ok(PostgresDetails { version })
    }

    /// Probe a database's scheduled backups, rendered as display strings
    pub async fn get_backup_schedules(&self, addon: &Addon) -> Result<Vec<String>> {
        let path = format!("/client/v11/databases/{}/transfer-schedules", addon.id);
        let context = format!("backup schedules for database '{}'", addon.name);
        let data = self.get_json(api_host(addon), &path, &context).await?;

        let schedules = data
            .as_array()
            .ok_or_else(|| {
                AuditError::Json(format!(
                    "Unexpected transfer-schedules payload for database '{}'",
                    addon.name
                ))
            })?
            .iter()
            .map(|schedule| {
                let hour = schedule["hour"].as_i64().unwrap_or(0);
                let timezone = schedule["timezone"].as_str().unwrap_or("UTC");
                format!("Daily at {}:00 {}", hour, timezone)
            })
            .collect();
        Ok(schedules)
    }
}
