//! UI Components
//!
//! Reusable Leptos components for the ledger pages.

pub mod nav;
pub mod chart;
pub mod forms;
pub mod tabs;
pub mod toast;
pub mod tooltip;

pub use nav::{Sidebar, TopBar};
pub use chart::{CategoriesDoughnut, ExpensesLineChart};
pub use forms::{CurrencyInput, DateInput, ExportCsvButton, FileInput, PasswordInput, PrintButton};
pub use tabs::TabNav;
pub use toast::AlertBanners;
pub use tooltip::{Popover, Tooltip};
