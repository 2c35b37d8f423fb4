//! Pages
//!
//! Top-level page components for each route.

pub mod dashboard;
pub mod transactions;
pub mod transaction_form;
pub mod login;

pub use dashboard::Dashboard;
pub use transactions::Transactions;
pub use transaction_form::{AddTransaction, EditTransaction};
pub use login::Login;
