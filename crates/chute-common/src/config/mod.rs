//! Configuration structs

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, BillingConfig, ConfigError, CorsConfig, DatabaseConfig, Environment,
    JwtConfig, RateLimitConfig, ServerConfig,
};
