//! Process configuration: API credential and company id.
//!
//! Values come from CLI flags first, then the environment
//! (`ONAIR_API_KEY`, `ONAIR_COMPANY_ID`). A `.env` file in the working
//! directory is loaded into the environment before lookup.

use crate::error::{Error, Result};

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "ONAIR_API_KEY";
/// Environment variable holding the company (virtual airline) id.
pub const COMPANY_ID_VAR: &str = "ONAIR_COMPANY_ID";

/// Resolved configuration, immutable once loaded.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_key: String,
    pub company_id: String,
}

impl Settings {
    /// Resolve settings from optional flag overrides and the environment.
    ///
    /// Both values are required; a missing or empty one is a `Config` error
    /// raised before any network access.
    pub fn load(api_key: Option<String>, company_id: Option<String>) -> Result<Self> {
        // Best effort: absence of a .env file is not an error.
        dotenv::dotenv().ok();
        Ok(Self {
            api_key: resolve(api_key, API_KEY_VAR)?,
            company_id: resolve(company_id, COMPANY_ID_VAR)?,
        })
    }
}

fn resolve(flag: Option<String>, var: &str) -> Result<String> {
    let value = match flag {
        Some(v) => v,
        None => std::env::var(var).unwrap_or_default(),
    };
    let value = value.trim().to_string();
    if value.is_empty() {
        return Err(Error::Config(format!(
            "missing {var} (set the environment variable, .env entry, or flag)"
        )));
    }
    Ok(value)
}
