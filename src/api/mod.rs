//! API Layer
//!
//! HTTP client for the ledger REST API and the server-embedded data path.

pub mod client;
pub mod embedded;
