// --- File: crates/hopigo_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

// --- Booking Window Config ---
// Controls how far ahead a user may book and how marked dates are colored.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BookingConfig {
    /// How many whole months ahead of today a date stays selectable.
    #[serde(default = "default_max_advance_months")]
    pub max_advance_months: i32,
    /// Dot color for dates carrying accepted bookings.
    pub primary_dot_color: Option<String>,
    /// Dot color for dates carrying pending bookings.
    pub warning_dot_color: Option<String>,
}

fn default_max_advance_months() -> i32 {
    3
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            max_advance_months: default_max_advance_months(),
            primary_dot_color: None,
            warning_dot_color: None,
        }
    }
}

// --- Availability Source Config ---
// Where the client-side adapter fetches slots from.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AvailabilityConfig {
    pub base_url: String,
    pub timeout_seconds: Option<u64>,
}

// --- Provider Schedule Config ---
// Business hours the in-process availability source generates slots from.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ScheduleConfig {
    /// IANA time zone the provider's working hours are expressed in.
    pub time_zone: Option<String>,
    /// Start of the working day, "HH:MM".
    pub work_start_time: Option<String>,
    /// End of the working day, "HH:MM".
    pub work_end_time: Option<String>,
    /// Short weekday names, e.g. ["Mon", "Tue", ...].
    pub working_days: Option<Vec<String>>,
    /// Length of each bookable slot in minutes.
    pub slot_duration_minutes: Option<i64>,
    /// Gap kept free after each booking in minutes.
    pub buffer_minutes: Option<i64>,
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    // Server config is mandatory
    pub server: ServerConfig,

    #[serde(default)]
    pub booking: BookingConfig,

    // --- Optional Feature Configurations ---
    #[serde(default)]
    pub availability: Option<AvailabilityConfig>,
    #[serde(default)]
    pub schedule: Option<ScheduleConfig>,
}
