//! hkaudit - audit reports across a Heroku account
//!
//! Queries the Heroku platform API (and the Postgres/Redis data APIs) with
//! bounded concurrency, reshapes the responses into flat report rows, and
//! renders them as a table, CSV, JSON, or a bare count.

pub mod cli;
pub mod config;
pub mod error;
pub mod heroku;
pub mod output;
pub mod ui;

pub use error::{AuditError, Result};
pub use heroku::{ApiKeyResolver, HerokuClient};
