//! API key resolution from multiple sources

use std::fs;

use log::debug;

use crate::config::credentials;
use crate::error::{AuditError, Result};

/// API key resolution with fallback logic
pub struct ApiKeyResolver;

impl ApiKeyResolver {
    /// Resolve the API key from multiple sources with fallback:
    /// 1. CLI argument (if provided)
    /// 2. `HEROKU_API_KEY` environment variable
    /// 3. `~/.netrc` entry for `machine api.heroku.com` (Heroku CLI convention)
    pub fn resolve(cli_key: Option<&str>) -> Result<String> {
        if let Some(key) = cli_key {
            debug!("Using API key from CLI argument");
            return Ok(key.to_string());
        }

        if let Ok(key) = std::env::var(credentials::API_KEY_ENV) {
            debug!("Using API key from {} environment variable", credentials::API_KEY_ENV);
            return Ok(key);
        }

        debug!(
            "No API key in {}; trying {}",
            credentials::API_KEY_ENV,
            credentials::NETRC_FILE
        );
        Self::read_from_netrc()
    }

    /// Read the API key from the Heroku CLI's netrc entry
    fn read_from_netrc() -> Result<String> {
        let netrc_path = dirs::home_dir()
            .map(|p| p.join(credentials::NETRC_FILE))
            .ok_or_else(|| AuditError::ApiKeyNotFound(Self::not_found_message()))?;

        debug!("Looking for netrc file at: {}", netrc_path.display());

        let content = fs::read_to_string(&netrc_path)
            .map_err(|_| AuditError::ApiKeyNotFound(Self::not_found_message()))?;

        parse_netrc_password(&content, credentials::NETRC_MACHINE)
            .ok_or_else(|| AuditError::ApiKeyNotFound(Self::not_found_message()))
    }

    /// Generate helpful error message when no API key is found
    fn not_found_message() -> String {
        format!(
            "No Heroku API key found. Please provide one using one of:\n\
             \n\
             1. CLI argument:      hkaudit --api-key <KEY> ...\n\
             2. Environment var:   export {}=<KEY>\n\
             3. Heroku CLI login:  heroku login  (writes ~/{})\n",
            credentials::API_KEY_ENV,
            credentials::NETRC_FILE
        )
    }
}

/// Pull the `password` token for a named machine out of netrc content
///
/// netrc is a free-form token stream; entries may sit on one line or many.
fn parse_netrc_password(content: &str, machine: &str) -> Option<String> {
    let tokens: Vec<&str> = content.split_whitespace().collect();
    let mut in_machine = false;

    let mut iter = tokens.iter();
    while let Some(token) = iter.next() {
        match *token {
            "machine" => {
                in_machine = iter.next().is_some_and(|name| *name == machine);
            }
            "password" if in_machine => {
                return iter.next().map(|s| s.to_string());
            }
            _ => {}
        }
    }
    None
}
