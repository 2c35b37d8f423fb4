//! Formatting Helpers
//!
//! Pure string and number transformations shared across pages and charts.

pub mod currency;
pub mod relative_time;

pub use currency::{format_dollars, normalize_amount_input};
pub use relative_time::{relative_from, time_ago};
