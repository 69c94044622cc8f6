//! Service configuration loaded from environment variables.

/// Port used when `PORT` is unset or not a positive integer.
pub const DEFAULT_PORT: u16 = 8080;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Server configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `PORT` — listen port (default: `8080`)
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
///
/// The bind host is always `0.0.0.0`; `host` is only set directly in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: parse_port(lookup("PORT").as_deref()),
            log_level: lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        }
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Parses a raw `PORT` value, falling back to [`DEFAULT_PORT`].
///
/// Zero is rejected along with anything that is not a valid `u16`.
pub fn parse_port(raw: Option<&str>) -> u16 {
    raw.and_then(|p| p.trim().parse::<u16>().ok())
        .filter(|&p| p != 0)
        .unwrap_or(DEFAULT_PORT)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_empty_environment_matches_default() {
        let config = Config::from_lookup(lookup_from(&[]));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_port_from_environment() {
        let config = Config::from_lookup(lookup_from(&[("PORT", "9090")]));
        assert_eq!(config.port, 9090);
        assert_eq!(config.addr(), "0.0.0.0:9090");
    }

    #[test]
    fn test_log_level_from_environment() {
        let config = Config::from_lookup(lookup_from(&[("RUST_LOG", "debug")]));
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_host_variable_does_not_change_bind_address() {
        let config = Config::from_lookup(lookup_from(&[("HOST", "127.0.0.1")]));
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_parse_port_falls_back_on_bad_input() {
        assert_eq!(parse_port(None), 8080);
        assert_eq!(parse_port(Some("")), 8080);
        assert_eq!(parse_port(Some("http")), 8080);
        assert_eq!(parse_port(Some("0")), 8080);
        assert_eq!(parse_port(Some("-1")), 8080);
        assert_eq!(parse_port(Some("70000")), 8080);
        assert_eq!(parse_port(Some("80.5")), 8080);
    }

    #[test]
    fn test_parse_port_accepts_valid_values() {
        assert_eq!(parse_port(Some("1")), 1);
        assert_eq!(parse_port(Some(" 9090 ")), 9090);
        assert_eq!(parse_port(Some("65535")), 65535);
    }

    #[test]
    fn test_addr_formatting() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 3000,
            log_level: "debug".to_string(),
        };
        assert_eq!(config.addr(), "127.0.0.1:3000");
    }
}
