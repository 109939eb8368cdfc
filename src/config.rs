//! Configuration from environment variables

use std::env;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_PRINT_COMMAND: &str = "lp";

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Server host address
    pub host: String,
    /// Server port
    pub port: u16,
    /// Spooler command line that receives printed bills on stdin
    pub print_command: String,
}

impl Config {
    /// Read configuration from the process environment.
    ///
    /// Call `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("BILL_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("BILL_PORT") {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                name: "BILL_PORT",
                value,
            })?,
            None => DEFAULT_PORT,
        };

        let print_command = lookup("PRINT_COMMAND")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_PRINT_COMMAND.to_string());

        Ok(Self {
            host,
            port,
            print_command,
        })
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            print_command: DEFAULT_PRINT_COMMAND.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.address(), "0.0.0.0:3000");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("BILL_HOST", "127.0.0.1"),
            ("BILL_PORT", "8080"),
            ("PRINT_COMMAND", "lp -d office"),
        ]))
        .unwrap();
        assert_eq!(config.address(), "127.0.0.1:8080");
        assert_eq!(config.print_command, "lp -d office");
    }

    #[test]
    fn test_invalid_port() {
        let err = Config::from_lookup(lookup_from(&[("BILL_PORT", "http")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid BILL_PORT: http");
    }

    #[test]
    fn test_blank_print_command_uses_default() {
        let config = Config::from_lookup(lookup_from(&[("PRINT_COMMAND", "  ")])).unwrap();
        assert_eq!(config.print_command, "lp");
    }
}
