// --- File: crates/hopigo_calendar/src/lib.rs ---
// Declare modules within this crate
pub mod grid;
#[cfg(test)]
mod grid_proptest;
pub mod marked;

pub use grid::{generate_grid, is_in_month, is_selectable, is_today, MonthRef};
pub use marked::derive_marked_dates;
