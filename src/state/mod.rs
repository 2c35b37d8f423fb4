//! State Management
//!
//! Global application state, local-storage persistence, and the global
//! error hook.

pub mod error_hook;
pub mod global;
pub mod storage;

pub use error_hook::install_error_hook;
pub use global::{provide_global_state, CategoryTotal, ChartSeries, GlobalState, Transaction};
