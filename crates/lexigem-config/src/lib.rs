use std::env;
use std::str::FromStr;

use self::generator::GeneratorConfig;
use self::server::ServerConfig;

pub mod generator;
pub mod server;

#[derive(Debug)]
pub struct Config {
    pub generator: GeneratorConfig,
    pub server: ServerConfig,
}

impl Config {
    /// Read everything from the process environment.
    ///
    /// Never fails: missing values fall back to defaults, and a missing
    /// credential leaves `generator.api_key` empty for the caller to report.
    pub fn new() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Config::new`], reading variables through `lookup`
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Config {
            generator: GeneratorConfig::from_lookup(&lookup),
            server: ServerConfig::from_lookup(&lookup),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

/// Non-blank value of a variable, trimmed.
pub(crate) fn lookup_string(lookup: impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parsed value of a variable. Unparsable values are logged and treated
/// as unset.
pub(crate) fn lookup_parse<T: FromStr>(
    lookup: impl Fn(&str) -> Option<String>,
    key: &str,
) -> Option<T> {
    let raw = lookup_string(lookup, key)?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("ignoring unparsable {key}={raw:?}");
            None
        }
    }
}
