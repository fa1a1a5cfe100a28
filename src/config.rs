use std::env;

use anyhow::{Context, Result};
use dotenvy::dotenv;

use crate::report::aggregate::OrphanPolicy;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub server_addr: String,

    // Rate limiting
    pub rate_protected_per_min: u32,

    pub api_prefix: String,

    // Reports
    pub recent_activity_limit: u32,
    pub orphan_policy: OrphanPolicy,
    pub history_path: String,

    pub log_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            server_addr: required("SERVER_ADDR")?,
            database_url: required("DATABASE_URL")?,
            jwt_secret: required("JWT_SECRET")?,

            rate_protected_per_min: parsed("RATE_PROTECTED_PER_MIN", "1000")?,

            api_prefix: env::var("API_PREFIX").unwrap_or_else(|_| "/api".to_string()),

            recent_activity_limit: parsed("RECENT_ACTIVITY_LIMIT", "20")?,
            orphan_policy: parsed("ORPHAN_POLICY", "drop")?,
            history_path: env::var("HISTORY_PATH")
                .unwrap_or_else(|_| "/attendance-history".to_string()),

            log_dir: env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string()),
        })
    }
}

fn required(key: &str) -> Result<String> {
    env::var(key).with_context(|| format!("{key} must be set"))
}

fn parsed<T>(key: &str, default: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let raw = env::var(key).unwrap_or_else(|_| default.to_string());
    raw.parse::<T>()
        .map_err(|e| anyhow::anyhow!("{key}={raw:?} is invalid: {e}"))
}

#[cfg(test)]
impl Config {
    pub fn for_tests() -> Self {
        Self {
            database_url: "mysql://localhost/attendance".into(),
            jwt_secret: "test-secret".into(),
            server_addr: "127.0.0.1:0".into(),
            rate_protected_per_min: 1000,
            api_prefix: "/api".into(),
            recent_activity_limit: 20,
            orphan_policy: OrphanPolicy::Drop,
            history_path: "/attendance-history".into(),
            log_dir: "logs".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_defaults() {
        let limit: u32 = parsed("ATTENDANCE_REPORTS_UNSET_LIMIT", "20").unwrap();
        assert_eq!(limit, 20);
        let policy: OrphanPolicy = parsed("ATTENDANCE_REPORTS_UNSET_POLICY", "report_unknown").unwrap();
        assert_eq!(policy, OrphanPolicy::ReportUnknown);
    }

    #[test]
    fn invalid_value_names_the_key() {
        let err = parsed::<u32>("ATTENDANCE_REPORTS_UNSET_BAD", "lots").unwrap_err();
        assert!(err.to_string().contains("ATTENDANCE_REPORTS_UNSET_BAD"));
    }
}
