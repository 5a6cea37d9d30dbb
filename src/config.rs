//! Environment-driven configuration for the demo binary.
//!
//! - `CLASSGRID_LOG_LEVEL`: tracing level (default: "info")
//! - `CLASSGRID_DEMO_YEAR` / `CLASSGRID_DEMO_MONTH`: the month to project
//!   (default: 2024-03)

use std::env;

use eyre::{Result, WrapErr};
use tracing::Level;

#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub log_level: Level,
    pub year: i32,
    pub month: u32,
}

impl DemoConfig {
    pub fn from_env() -> Result<DemoConfig> {
        let log_level = env::var("CLASSGRID_LOG_LEVEL")
            .unwrap_or_else(|_| "info".to_string())
            .parse()
            .wrap_err("Invalid CLASSGRID_LOG_LEVEL")?;

        let year = env::var("CLASSGRID_DEMO_YEAR")
            .unwrap_or_else(|_| "2024".to_string())
            .parse()
            .wrap_err("Invalid CLASSGRID_DEMO_YEAR")?;

        let month = env::var("CLASSGRID_DEMO_MONTH")
            .unwrap_or_else(|_| "3".to_string())
            .parse()
            .wrap_err("Invalid CLASSGRID_DEMO_MONTH")?;

        Ok(DemoConfig {
            log_level,
            year,
            month,
        })
    }
}
