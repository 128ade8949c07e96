// --- File: crates/hopigo_common/src/lib.rs ---

// Declare modules within this crate
pub mod error; // Error handling
pub mod http; // HTTP utilities
pub mod logging; // Logging utilities
pub mod models; // Shared data structures
pub mod services; // Service abstractions

// Re-export error types and utilities for easier access
pub use error::{internal_error, not_found, validation_error, HopiGoError, HttpStatusCode};

// Re-export HTTP utilities for easier access
pub use http::{
    client::{create_client, HTTP_CLIENT},
    IntoHttpResponse,
};

// Re-export logging utilities for easier access
pub use logging::{init, init_with_level};

// Re-export the shared models most crates need
pub use models::{AvailabilitySlot, BookingRecord, BookingStatus, MarkPalette, MarkedDateInfo};
