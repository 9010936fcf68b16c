//! Demo binary configuration
//!
//! # Environment variables
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | BOOKING_DATA | booking-core/data/booking_info.json | Booking data file |
//! | LOG_LEVEL | info | Tracing level filter |
//! | LOG_DIR | (unset) | Daily-rolling log directory |

/// Runtime configuration for the demo binary
///
/// The library itself takes data by argument; this only wires up the
/// executable entry point.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the booking data JSON file
    pub data_path: String,
    /// Tracing level: trace | debug | info | warn | error
    pub log_level: String,
    /// Optional directory for rolling file logs
    pub log_dir: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to defaults.
    pub fn from_env() -> Self {
        Self {
            data_path: std::env::var("BOOKING_DATA")
                .unwrap_or_else(|_| "booking-core/data/booking_info.json".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
