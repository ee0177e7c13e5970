//! Heroku Postgres reports

pub mod api;
mod commands;

pub use commands::{run_backup_schedule, run_count, run_major_version, run_plan};

/// Plan-name prefix identifying Postgres add-ons
pub const PLAN_PREFIX: &str = "heroku-postgresql:";
