// --- File: crates/hopigo_config/src/lib.rs ---
//! Configuration loading for the HopiGo services.
//!
//! Configuration is layered: `config/default.toml`, then an optional
//! `config/{RUN_MODE}.toml`, then environment variables prefixed with
//! `HOPIGO` (separator `__`, e.g. `HOPIGO__SERVER__PORT=9090`). A `.env`
//! file is loaded once before the first read so local development can keep
//! overrides out of the shell.

pub mod models;

use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;

pub use models::{AppConfig, AvailabilityConfig, BookingConfig, ScheduleConfig, ServerConfig};

static DOTENV: OnceCell<()> = OnceCell::new();

/// Load `.env` exactly once per process. Missing files are fine.
pub fn ensure_dotenv_loaded() {
    DOTENV.get_or_init(|| {
        if dotenv::dotenv().is_ok() {
            tracing::debug!("Loaded environment overrides from .env");
        }
    });
}

/// Loads the application configuration from files and the environment.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

    let config = Config::builder()
        .add_source(File::with_name("config/default").required(false))
        .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
        .add_source(Environment::with_prefix("HOPIGO").separator("__"))
        // A server section must exist even with no config files on disk.
        .set_default("server.host", "127.0.0.1")?
        .set_default("server.port", 8080_i64)?
        .build()?;

    config.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_files() {
        let config = load_config().expect("defaults should deserialize");
        assert!(!config.server.host.is_empty());
        assert_eq!(config.booking.max_advance_months, 3);
    }

    #[test]
    fn test_booking_config_default() {
        let booking = BookingConfig::default();
        assert_eq!(booking.max_advance_months, 3);
        assert!(booking.primary_dot_color.is_none());
        assert!(booking.warning_dot_color.is_none());
    }

    #[test]
    fn test_app_config_roundtrip() {
        let raw = r#"{
            "server": { "host": "0.0.0.0", "port": 9090 },
            "booking": { "max_advance_months": 6 },
            "availability": { "base_url": "http://localhost:8080/api", "timeout_seconds": 5 }
        }"#;
        let config: AppConfig = serde_json::from_str(raw).unwrap();
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.booking.max_advance_months, 6);
        let availability = config.availability.unwrap();
        assert_eq!(availability.base_url, "http://localhost:8080/api");
        assert_eq!(availability.timeout_seconds, Some(5));
        assert!(config.schedule.is_none());
    }
}
