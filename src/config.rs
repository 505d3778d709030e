use std::env;

use once_cell::sync::Lazy;

pub static CONFIG: Lazy<ServiceConfig> = Lazy::new(ServiceConfig::init);

/// Deployment knobs, read from the environment once at startup.
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    pub max_concurrent_calls: usize,
}

impl ServiceConfig {
    pub fn init() -> ServiceConfig {
        ServiceConfig {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|s| s.parse::<u16>().ok())
                .unwrap_or(3000),
            max_concurrent_calls: env::var("MAX_CONCURRENT_CALLS")
                .ok()
                .and_then(|s| s.parse::<usize>().ok())
                .unwrap_or(10_000),
        }
    }
}
