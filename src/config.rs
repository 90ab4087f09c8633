use std::env;
use std::str::FromStr;

use anyhow::{Context, Result, ensure};
use dotenvy::dotenv;
use tracing::Level;

use crate::dashboard::actions::CASE_ID_PLACEHOLDER;
use crate::platform::DEFAULT_PAST_LIMIT;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub server_addr: String,
    pub api_prefix: String,

    // Logging
    pub log_dir: String,
    pub log_level: Level,

    // Rate limiting
    pub rate_dashboard_per_min: u32,

    // Dashboard
    pub past_leave_limit: u32,
    pub open_case_limit: u32,
    pub show_cases: bool,

    // HRM platform pages the dashboard links to
    pub leave_create_url: String,
    pub case_view_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            server_addr: required("SERVER_ADDR")?,
            database_url: required("DATABASE_URL")?,
            api_prefix: env::var("API_PREFIX").unwrap_or_else(|_| "/api".to_string()),

            log_dir: env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string()),
            log_level: parsed("LOG_LEVEL", Level::DEBUG)?,

            rate_dashboard_per_min: parsed("RATE_DASHBOARD_PER_MIN", 600)?,

            past_leave_limit: parsed("PAST_LEAVE_LIMIT", DEFAULT_PAST_LIMIT)?,
            open_case_limit: parsed("OPEN_CASE_LIMIT", 10)?,
            show_cases: parsed("SHOW_CASES", true)?,

            leave_create_url: required("LEAVE_CREATE_URL")?,
            case_view_url: case_view_template(required("CASE_VIEW_URL")?)?,
        })
    }
}

fn case_view_template(url: String) -> Result<String> {
    ensure!(
        url.contains(CASE_ID_PLACEHOLDER),
        "CASE_VIEW_URL must contain {CASE_ID_PLACEHOLDER}: {url}"
    );
    Ok(url)
}

fn required(key: &str) -> Result<String> {
    env::var(key).with_context(|| format!("{key} must be set"))
}

fn parsed<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} has an invalid value: {raw}")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_keys_use_defaults() {
        assert_eq!(parsed("LEAVE_DASHBOARD_TEST_UNSET_KEY", 20u32).unwrap(), 20);
        assert!(parsed("LEAVE_DASHBOARD_TEST_UNSET_KEY", true).unwrap());
    }

    #[test]
    fn missing_required_key_is_an_error() {
        let err = required("LEAVE_DASHBOARD_TEST_UNSET_KEY").unwrap_err();
        assert!(err.to_string().contains("must be set"));
    }

    #[test]
    fn case_view_url_needs_an_id_slot() {
        let ok = case_view_template("https://hrm.example.com/cases/{id}".into()).unwrap();
        assert_eq!(ok, "https://hrm.example.com/cases/{id}");
        assert!(case_view_template("https://hrm.example.com/cases".into()).is_err());
    }
}
