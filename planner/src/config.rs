use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::api::Platform;

/// Service settings, read from `ECOROUTE_*` environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub platform: Platform,
    pub fetch_delay: Duration,
    pub submit_delay: Duration,
    pub routes_file: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            host: lookup("ECOROUTE_HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port: parsed(&lookup, "ECOROUTE_PORT", 8080),
            platform: parsed(&lookup, "ECOROUTE_PLATFORM", Platform::Native),
            fetch_delay: Duration::from_millis(parsed(&lookup, "ECOROUTE_FETCH_DELAY_MS", 500)),
            submit_delay: Duration::from_millis(parsed(&lookup, "ECOROUTE_SUBMIT_DELAY_MS", 1000)),
            routes_file: lookup("ECOROUTE_ROUTES_FILE")
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
        }
    }
}

fn parsed<T>(lookup: &impl Fn(&str) -> Option<String>, name: &str, default: T) -> T
where
    T: FromStr,
    T::Err: Display,
{
    match lookup(name) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|e| {
            log::warn!("Ignoring {name}={raw}: {e}");
            default
        }),
    }
}
