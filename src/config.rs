//! Client configuration baked in at build time.
//!
//! The WASM bundle has no process environment, so values come from
//! `option_env!` when the crate is compiled and are parsed through
//! [`AppConfig::from_lookup`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_AUTH_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_TOAST_LIMIT: usize = 3;
pub const DEFAULT_ACTIVITY_LOG_CAPACITY: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {key}: {value:?} is not a non-negative integer")]
    InvalidNumber { key: &'static str, value: String },
    #[error("{key} must be at least 1")]
    Zero { key: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Prefix for API calls; empty means same origin.
    pub api_base: String,
    /// How long auth may stay unresolved before it is treated as signed out.
    /// `None` waits indefinitely.
    pub auth_timeout_ms: Option<u64>,
    pub toast_limit: usize,
    pub activity_log_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            auth_timeout_ms: Some(DEFAULT_AUTH_TIMEOUT_MS),
            toast_limit: DEFAULT_TOAST_LIMIT,
            activity_log_capacity: DEFAULT_ACTIVITY_LOG_CAPACITY,
        }
    }
}

impl AppConfig {
    /// Build typed config from a key lookup.
    ///
    /// Optional:
    /// - `LIBDESK_API_BASE`: default same origin
    /// - `LIBDESK_AUTH_TIMEOUT_MS`: default 10000, `0` disables the timeout
    /// - `LIBDESK_TOAST_LIMIT`: default 3
    /// - `LIBDESK_ACTIVITY_LOG_CAPACITY`: default 200
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a numeric value does not parse or a
    /// limit is zero.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base = lookup("LIBDESK_API_BASE")
            .unwrap_or_default()
            .trim()
            .trim_end_matches('/')
            .to_owned();
        let auth_timeout_ms = match parse_u64(&lookup, "LIBDESK_AUTH_TIMEOUT_MS")? {
            None => Some(DEFAULT_AUTH_TIMEOUT_MS),
            Some(0) => None,
            Some(ms) => Some(ms),
        };
        let toast_limit = parse_limit(&lookup, "LIBDESK_TOAST_LIMIT", DEFAULT_TOAST_LIMIT)?;
        let activity_log_capacity =
            parse_limit(&lookup, "LIBDESK_ACTIVITY_LOG_CAPACITY", DEFAULT_ACTIVITY_LOG_CAPACITY)?;

        Ok(Self { api_base, auth_timeout_ms, toast_limit, activity_log_capacity })
    }

    /// Config from the values present when the crate was compiled.
    ///
    /// # Errors
    ///
    /// See [`AppConfig::from_lookup`].
    pub fn compiled() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| {
            let value = match key {
                "LIBDESK_API_BASE" => option_env!("LIBDESK_API_BASE"),
                "LIBDESK_AUTH_TIMEOUT_MS" => option_env!("LIBDESK_AUTH_TIMEOUT_MS"),
                "LIBDESK_TOAST_LIMIT" => option_env!("LIBDESK_TOAST_LIMIT"),
                "LIBDESK_ACTIVITY_LOG_CAPACITY" => option_env!("LIBDESK_ACTIVITY_LOG_CAPACITY"),
                _ => None,
            };
            value.map(str::to_owned)
        })
    }
}

fn parse_u64<F>(lookup: &F, key: &'static str) -> Result<Option<u64>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidNumber { key, value: raw }),
    }
}

fn parse_limit<F>(lookup: &F, key: &'static str, default: usize) -> Result<usize, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match parse_u64(lookup, key)? {
        None => Ok(default),
        Some(0) => Err(ConfigError::Zero { key }),
        Some(n) => Ok(usize::try_from(n).unwrap_or(usize::MAX)),
    }
}
