use serde::Deserialize;
use std::env;
use train_core::{BookingStore, RandomSections, ReceiptNumbering, DEFAULT_TICKET_PRICE};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub client: ClientConfig,
    #[serde(default)]
    pub business_rules: BusinessRules,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ClientConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_seconds: default_timeout(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct BusinessRules {
    #[serde(default = "default_price")]
    pub ticket_price: f64,
    #[serde(default)]
    pub receipt_numbering: ReceiptNumbering,
}

impl Default for BusinessRules {
    fn default() -> Self {
        Self {
            ticket_price: default_price(),
            receipt_numbering: ReceiptNumbering::default(),
        }
    }
}

impl BusinessRules {
    /// Fresh store priced and numbered per these rules, with random sections
    pub fn booking_store(&self) -> BookingStore {
        BookingStore::with_policy(RandomSections)
            .with_ticket_price(self.ticket_price)
            .with_receipt_numbering(self.receipt_numbering)
    }
}

fn default_host() -> String { "0.0.0.0".into() }
fn default_port() -> u16 { 50055 }
fn default_endpoint() -> String { "http://localhost:50055".into() }
fn default_timeout() -> u64 { 10 }
fn default_price() -> f64 { DEFAULT_TICKET_PRICE }

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Every key has a default, so even the base file is optional
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `TRAIN__SERVER__PORT=6000`
            .add_source(
                config::Environment::with_prefix("TRAIN")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Self = s.try_deserialize()?;
        tracing::debug!(?config, "configuration loaded");
        Ok(config)
    }

    /// Parse a TOML document on its own, without files or environment
    pub fn from_toml(source: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_empty() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.server.port, 50055);
        assert_eq!(config.server.bind_address(), "0.0.0.0:50055");
        assert_eq!(config.client.endpoint, "http://localhost:50055");
        assert_eq!(config.client.timeout_seconds, 10);
        assert_eq!(config.business_rules.ticket_price, 20.0);
        assert_eq!(config.business_rules.receipt_numbering, ReceiptNumbering::CountBased);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_toml(
            r#"
            [server]
            port = 6000

            [business_rules]
            ticket_price = 42.5
            receipt_numbering = "sequential"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.port, 6000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.business_rules.ticket_price, 42.5);
        assert_eq!(config.business_rules.receipt_numbering, ReceiptNumbering::Sequential);
    }

    #[test]
    fn test_rejects_unknown_numbering() {
        let result = Config::from_toml(
            r#"
            [business_rules]
            receipt_numbering = "random"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_business_rules_build_store() {
        let rules = BusinessRules {
            ticket_price: 12.0,
            receipt_numbering: ReceiptNumbering::Sequential,
        };
        let store = rules.booking_store();
        assert_eq!(store.ticket_price(), 12.0);
    }
}
