//! Heroku Data for Redis reports

pub mod api;
mod commands;

pub use commands::{run_count, run_major_version, run_maxmemory_policy, run_plan};

/// Plan-name prefix identifying Redis add-ons
pub const PLAN_PREFIX: &str = "heroku-redis:";
