//! Runtime configuration read from the environment.

use std::net::SocketAddr;

use crate::error::ConfigError;

pub const ADDR_ENV: &str = "PWD_CHECK_ADDR";
pub const DEFAULT_ADDR: &str = "127.0.0.1:5000";

/// Returns the listen address for the web front end.
///
/// Priority:
/// 1. Environment variable `PWD_CHECK_ADDR`
/// 2. Default `127.0.0.1:5000`
///
/// # Errors
///
/// Returns [`ConfigError::InvalidAddress`] if the value is not a socket address.
pub fn listen_addr() -> Result<SocketAddr, ConfigError> {
    let value = std::env::var(ADDR_ENV).unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    parse_addr(&value)
}

pub fn parse_addr(value: &str) -> Result<SocketAddr, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|source| ConfigError::InvalidAddress {
            value: value.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: serialized via #[serial], no other thread reads the env
        unsafe { std::env::set_var(key, value); }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: serialized via #[serial], no other thread reads the env
        unsafe { std::env::remove_var(key); }
    }

    #[test]
    #[serial]
    fn test_listen_addr_default() {
        remove_env(ADDR_ENV);

        let addr = listen_addr().expect("default address must parse");
        assert_eq!(addr, "127.0.0.1:5000".parse::<SocketAddr>().unwrap());
    }

    #[test]
    #[serial]
    fn test_listen_addr_from_env() {
        set_env(ADDR_ENV, "0.0.0.0:8080");

        let addr = listen_addr().expect("env address must parse");
        assert_eq!(addr.port(), 8080);
        assert!(addr.ip().is_unspecified());

        remove_env(ADDR_ENV);
    }

    #[test]
    #[serial]
    fn test_listen_addr_invalid_env() {
        set_env(ADDR_ENV, "not-an-address");

        let result = listen_addr();
        match result {
            Err(ConfigError::InvalidAddress { value, .. }) => assert_eq!(value, "not-an-address"),
            _ => panic!("Expected InvalidAddress error"),
        }

        remove_env(ADDR_ENV);
    }

    #[test]
    fn test_parse_addr_trims() {
        assert!(parse_addr(" [::1]:3000 ").is_ok());
    }
}
