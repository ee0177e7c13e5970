//! Heroku platform API data models
//!
//! Flat serde views over v3 API responses. Every entity is built from a
//! response at the start of a command and discarded at process exit; nothing
//! is cached across invocations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A deployable unit on the platform
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct App {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub team: Option<TeamRef>,
}

/// Owning team reference on an app
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct TeamRef {
    pub name: String,
}

/// A provisioned backing service attached to an app
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Addon {
    pub id: String,
    pub name: String,
    pub app: AppRef,
    pub plan: PlanRef,
    /// Config variable names the add-on is attached under
    #[serde(default)]
    pub config_vars: Vec<String>,
}

/// Back-reference from an add-on to its app
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct AppRef {
    pub id: String,
    pub name: String,
}

/// Add-on plan, conventionally named `<service>:<tier>`
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct PlanRef {
    pub name: String,
}

impl Addon {
    /// Plan tier: everything after the first `:`, or the whole name when
    /// there is no colon
    pub fn plan_tier(&self) -> &str {
        match self.plan.name.split_once(':') {
            Some((_, tier)) => tier,
            None => &self.plan.name,
        }
    }

    /// Service prefix: everything before the first `:`
    pub fn service(&self) -> &str {
        match self.plan.name.split_once(':') {
            Some((service, _)) => service,
            None => &self.plan.name,
        }
    }
}

/// A user granted access to an app
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Collaborator {
    pub user: UserRef,
    /// `admin`, `member`, `collaborator`, or absent for implicit per-app
    /// collaborators
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// User reference on a collaborator
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct UserRef {
    pub email: String,
}

impl Collaborator {
    pub fn role_name(&self) -> &str {
        self.role.as_deref().unwrap_or("")
    }

    /// Grant date as an ISO date string, empty when unknown
    pub fn granted_on(&self) -> String {
        self.created_at
            .map(|t| t.date_naive().to_string())
            .unwrap_or_default()
    }
}

/// A custom or default domain attached to an app
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Domain {
    pub hostname: String,
    #[serde(default)]
    pub cname: Option<String>,
    #[serde(default)]
    pub acm_status: Option<String>,
    pub app: AppRef,
}

/// One process-type entry in an app's dyno formation
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Formation {
    #[serde(rename = "type")]
    pub process_type: String,
    pub quantity: i64,
    pub size: String,
    pub command: String,
}
