use std::env;
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub service_port: u16,
    pub service_host: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unset keys fall back to the defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let service_port = lookup("SERVICE_PORT")
            .unwrap_or_else(|| "8080".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = lookup("SERVICE_HOST")
            .unwrap_or_else(|| "0.0.0.0".to_string());

        Ok(Config {
            service_port,
            service_host,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.service_host, self.service_port)
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Service listening on: {}", self.bind_addr());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_host_and_port_overrides() {
        let config = config_from(&[("SERVICE_PORT", "9090"), ("SERVICE_HOST", "127.0.0.1")]).unwrap();

        assert_eq!(config.service_port, 9090);
        assert_eq!(config.service_host, "127.0.0.1");
        assert_eq!(config.bind_addr(), "127.0.0.1:9090");
    }

    #[test]
    fn test_defaults_listen_on_8080() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_non_numeric_port_names_the_variable() {
        let error = config_from(&[("SERVICE_PORT", "not-a-number")]).unwrap_err();
        assert!(error.to_string().contains("SERVICE_PORT"));
    }

    #[test]
    fn test_port_above_u16_is_rejected() {
        assert!(config_from(&[("SERVICE_PORT", "99999")]).is_err());
    }
}
