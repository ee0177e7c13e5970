//! Command-line interface definition

mod common;
mod reports;

use clap::{Parser, Subcommand};

pub use common::Format;
pub use reports::{
    AppAccessArgs, AppDomainsArgs, AppsAddonArgs, AppsCommand, BackupScheduleArgs, CountArgs,
    DomainMatchArgs, DomainsCommand, EnvCommand, EnvContainsArgs, EnvValueArgs, FormationArgs,
    PlanArgs, PolicyArgs, PostgresCommand, RedisCommand, UserAccessArgs, UsersCommand, VersionArgs,
};

use crate::config::defaults;

/// Audit reports across a Heroku account
#[derive(Debug, Parser)]
#[command(name = "hkaudit", version, about, long_about = None)]
pub struct Cli {
    /// Heroku API key (falls back to $HEROKU_API_KEY, then ~/.netrc)
    #[arg(long, global = true, env = "HEROKU_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short = 'l', long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Reports on apps
    #[command(subcommand)]
    Apps(AppsCommand),

    /// Reports on config variables
    #[command(subcommand)]
    Env(EnvCommand),

    /// Reports on custom domains
    #[command(subcommand)]
    Domains(DomainsCommand),

    /// Reports on Heroku Postgres databases
    #[command(subcommand)]
    Postgres(PostgresCommand),

    /// Reports on Heroku Data for Redis instances
    #[command(subcommand)]
    Redis(RedisCommand),

    /// Reports on users
    #[command(subcommand)]
    Users(UsersCommand),
}
