pub mod app_config;

pub use app_config::{BusinessRules, ClientConfig, Config, ServerConfig};
