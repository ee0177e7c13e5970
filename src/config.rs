/// Configuration constants for the Heroku platform API
pub mod api {
    /// Platform API host
    pub const HOST: &str = "api.heroku.com";

    /// Accept header selecting API v3
    pub const ACCEPT: &str = "application/vnd.heroku+json; version=3";

    /// Data API host for standard Postgres databases
    pub const POSTGRES_HOST: &str = "postgres-api.heroku.com";

    /// Data API host for hobby-tier Postgres databases
    pub const POSTGRES_STARTER_HOST: &str = "postgres-starter-api.heroku.com";

    /// Plan tier markers that route to the starter data API
    pub const POSTGRES_STARTER_TIERS: &[&str] = &["dev", "basic", "mini"];

    /// Data API host for Redis instances
    pub const REDIS_HOST: &str = "redis-api.heroku.com";

    /// Page size requested via the Range header on list endpoints
    pub const RANGE_PAGE_SIZE: u32 = 1000;
}

/// Configuration constants for credentials
pub mod credentials {
    /// Environment variable holding the API key
    pub const API_KEY_ENV: &str = "HEROKU_API_KEY";

    /// netrc file name (relative to HOME)
    pub const NETRC_FILE: &str = ".netrc";

    /// netrc machine entry the Heroku CLI writes its token under
    pub const NETRC_MACHINE: &str = "api.heroku.com";
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}
