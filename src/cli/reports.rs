//! Report subcommands and their arguments

use clap::{Args, Subcommand};

use super::common::Format;

/// Reports on apps
#[derive(Debug, Subcommand)]
pub enum AppsCommand {
    /// Audit the process formation of each app
    Formation(FormationArgs),
    /// Find apps with an add-on of a given plan prefix
    Addon(AppsAddonArgs),
    /// Audit who can access a single app
    Access(AppAccessArgs),
    /// List the domains attached to a single app
    Domains(AppDomainsArgs),
}

/// Reports on config variables
#[derive(Debug, Subcommand)]
pub enum EnvCommand {
    /// Report the value of a config variable across apps
    ValueOf(EnvValueArgs),
    /// Find apps whose config values match a glob pattern
    Contains(EnvContainsArgs),
}

/// Reports on custom domains
#[derive(Debug, Subcommand)]
pub enum DomainsCommand {
    /// Find domains whose hostname matches a glob pattern
    Matches(DomainMatchArgs),
}

/// Reports on Heroku Postgres databases
#[derive(Debug, Subcommand)]
pub enum PostgresCommand {
    /// Audit the major Postgres version of each database
    MajorVersion(VersionArgs),
    /// Audit database plans, optionally filtered to one tier
    Plan(PlanArgs),
    /// Count databases per app
    Count(CountArgs),
    /// Audit scheduled backups
    BackupSchedule(BackupScheduleArgs),
}

/// Reports on Heroku Data for Redis instances
#[derive(Debug, Subcommand)]
pub enum RedisCommand {
    /// Audit the major Redis version of each instance
    MajorVersion(VersionArgs),
    /// Audit instance plans, optionally filtered to one tier
    Plan(PlanArgs),
    /// Count instances per app
    Count(CountArgs),
    /// Audit eviction policies, optionally filtered to one policy
    MaxmemoryPolicy(PolicyArgs),
}

/// Reports on users
#[derive(Debug, Subcommand)]
pub enum UsersCommand {
    /// Find the apps a user has access to
    Access(UserAccessArgs),
}

#[derive(Debug, Args)]
pub struct FormationArgs {
    /// Process type to report on
    #[arg(long, default_value = "web")]
    pub process: String,

    /// Limit the report to a team's apps
    #[arg(long)]
    pub team: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Table)]
    pub format: Format,
}

#[derive(Debug, Args)]
pub struct AppsAddonArgs {
    /// Add-on plan prefix to match, e.g. `heroku-postgresql:` or `papertrail`
    pub addon: String,

    /// Limit the report to a team's apps
    #[arg(long)]
    pub team: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Table)]
    pub format: Format,
}

#[derive(Debug, Args)]
pub struct AppAccessArgs {
    /// App name
    pub app: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Table)]
    pub format: Format,
}

#[derive(Debug, Args)]
pub struct AppDomainsArgs {
    /// App name
    pub app: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Table)]
    pub format: Format,
}

#[derive(Debug, Args)]
pub struct EnvValueArgs {
    /// Config variable name
    pub key: String,

    /// Only show apps where the variable is unset
    #[arg(long, conflicts_with = "set_only")]
    pub unset_only: bool,

    /// Only show apps where the variable is set
    #[arg(long)]
    pub set_only: bool,

    /// Limit the report to a team's apps
    #[arg(long)]
    pub team: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Table)]
    pub format: Format,
}

#[derive(Debug, Args)]
pub struct EnvContainsArgs {
    /// Glob pattern matched against each config value, e.g. `*.example.com*`
    pub pattern: String,

    /// Limit the report to a team's apps
    #[arg(long)]
    pub team: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Table)]
    pub format: Format,
}

#[derive(Debug, Args)]
pub struct DomainMatchArgs {
    /// Glob pattern matched against each hostname, e.g. `*.example.com`
    pub pattern: String,

    /// Limit the report to a team's apps
    #[arg(long)]
    pub team: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Table)]
    pub format: Format,
}

#[derive(Debug, Args)]
pub struct VersionArgs {
    /// Only show databases at this major version
    #[arg(long)]
    pub target: Option<u32>,

    /// Limit the report to a team's apps
    #[arg(long)]
    pub team: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Table)]
    pub format: Format,
}

#[derive(Debug, Args)]
pub struct PlanArgs {
    /// Only show databases on this plan tier, e.g. `standard-0`
    pub plan: Option<String>,

    /// Limit the report to a team's apps
    #[arg(long)]
    pub team: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Table)]
    pub format: Format,
}

#[derive(Debug, Args)]
pub struct CountArgs {
    /// Only show apps with at least this many (inclusive)
    #[arg(long = "min", default_value_t = 1)]
    pub minimum: usize,

    /// Limit the report to a team's apps
    #[arg(long)]
    pub team: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Table)]
    pub format: Format,
}

#[derive(Debug, Args)]
pub struct BackupScheduleArgs {
    /// Only show databases with no scheduled backup
    #[arg(long)]
    pub missing_only: bool,

    /// Limit the report to a team's apps
    #[arg(long)]
    pub team: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Table)]
    pub format: Format,
}

#[derive(Debug, Args)]
pub struct PolicyArgs {
    /// Only show instances with this eviction policy, e.g. `noeviction`
    pub policy: Option<String>,

    /// Limit the report to a team's apps
    #[arg(long)]
    pub team: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Table)]
    pub format: Format,
}

#[derive(Debug, Args)]
pub struct UserAccessArgs {
    /// Email address of the user to look for
    pub email: String,

    /// Limit the report to a team's apps
    #[arg(long)]
    pub team: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Table)]
    pub format: Format,
}
