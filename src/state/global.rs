//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Newest transactions for the dashboard activity feed
    pub recent_transactions: RwSignal<Vec<Transaction>>,
    /// Monthly expense totals feeding the line chart
    pub monthly_expenses: RwSignal<ChartSeries>,
    /// Per-category spending feeding the doughnut chart
    pub category_breakdown: RwSignal<ChartSeries>,
    /// Global loading state
    pub loading: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for flash toasts)
    pub success: RwSignal<Option<String>>,
    /// Whether the sidebar is expanded on narrow viewports
    pub sidebar_open: RwSignal<bool>,
    /// When dashboard data was last loaded (ms since epoch)
    pub last_refresh: RwSignal<Option<i64>>,
    /// Stamp of the error banner currently showing; a dismiss timer armed
    /// for an older banner checks it and leaves newer banners alone
    error_stamp: RwSignal<u32>,
    /// Stamp of the success banner currently showing
    success_stamp: RwSignal<u32>,
}

/// A ledger transaction as served by the API
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct Transaction {
    pub id: i64,
    /// Signed amount; expenses are negative
    pub amount: f64,
    pub description: String,
    pub category: String,
    /// Posting date, `YYYY-MM-DD`
    pub date: String,
    /// Creation timestamp, drives the "n minutes ago" stamps
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Transaction {
    pub fn is_expense(&self) -> bool {
        self.amount < 0.0
    }
}

/// Spending total for a single category
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

/// Paired labels and values, the shape both dashboard charts consume
#[derive(Clone, Debug, Default, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    pub fn new(labels: Vec<String>, values: Vec<f64>) -> Self {
        Self { labels, values }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sum of all values
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Largest value, 0 for an empty series
    pub fn max_value(&self) -> f64 {
        self.values.iter().fold(0.0_f64, |max, &v| max.max(v))
    }

    /// Most recent value (series run oldest to newest)
    pub fn latest(&self) -> Option<f64> {
        self.values.last().copied()
    }

    /// Mean of all values
    pub fn average(&self) -> Option<f64> {
        if self.values.is_empty() {
            return None;
        }
        Some(self.total() / self.values.len() as f64)
    }
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        recent_transactions: create_rw_signal(Vec::new()),
        monthly_expenses: create_rw_signal(ChartSeries::default()),
        category_breakdown: create_rw_signal(ChartSeries::default()),
        loading: create_rw_signal(false),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
        sidebar_open: create_rw_signal(false),
        last_refresh: create_rw_signal(None),
        error_stamp: create_rw_signal(0),
        success_stamp: create_rw_signal(0),
    };

    provide_context(state);
}

/// How long flash messages stay on screen
const TOAST_DISMISS_MS: u32 = 5000;

impl GlobalState {
    /// Get the latest monthly expense total
    pub fn current_month_expenses(&self) -> Option<f64> {
        self.monthly_expenses.get().latest()
    }

    /// Get the latest month compared to the monthly average
    pub fn month_vs_average(&self) -> Option<f64> {
        let series = self.monthly_expenses.get();
        Some(series.latest()? - series.average()?)
    }

    /// Get the total of all categorized spending
    pub fn total_tracked(&self) -> f64 {
        self.category_breakdown.get().total()
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let scheduled = self.success_stamp.get_untracked().wrapping_add(1);
        self.success_stamp.set(scheduled);

        let success_signal = self.success;
        let stamp = self.success_stamp;
        gloo_timers::callback::Timeout::new(TOAST_DISMISS_MS, move || {
            dismiss_if_current(success_signal, stamp, scheduled);
        }).forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let scheduled = self.error_stamp.get_untracked().wrapping_add(1);
        self.error_stamp.set(scheduled);

        let error_signal = self.error;
        let stamp = self.error_stamp;
        gloo_timers::callback::Timeout::new(TOAST_DISMISS_MS, move || {
            dismiss_if_current(error_signal, stamp, scheduled);
        }).forget();
    }

    /// Clear error message
    pub fn clear_error(&self) {
        self.error.set(None);
    }

    /// Clear success message
    pub fn clear_success(&self) {
        self.success.set(None);
    }
}

/// Run a banner's scheduled dismiss, unless a newer banner has replaced the
/// one the timer was armed for.
fn dismiss_if_current(
    message: RwSignal<Option<String>>,
    stamp: RwSignal<u32>,
    scheduled: u32,
) {
    if stamp.get_untracked() == scheduled {
        message.set(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series() -> ChartSeries {
        ChartSeries::new(
            vec!["Jan".into(), "Feb".into(), "Mar".into()],
            vec![120.0, 80.0, 100.0],
        )
    }

    #[test]
    fn test_series_derived_values() {
        let s = series();
        assert_eq!(s.total(), 300.0);
        assert_eq!(s.max_value(), 120.0);
        assert_eq!(s.latest(), Some(100.0));
        assert_eq!(s.average(), Some(100.0));
    }

    #[test]
    fn test_empty_series() {
        let s = ChartSeries::default();
        assert!(s.is_empty());
        assert_eq!(s.max_value(), 0.0);
        assert_eq!(s.latest(), None);
        assert_eq!(s.average(), None);
    }

    #[test]
    fn test_expense_follows_sign() {
        let mut tx = Transaction {
            id: 1,
            amount: -42.0,
            description: "Groceries".into(),
            category: "Food".into(),
            date: "2025-06-15".into(),
            created_at: None,
        };
        assert!(tx.is_expense());

        tx.amount = 1500.0;
        assert!(!tx.is_expense());
    }

    #[test]
    fn test_stale_dismiss_spares_a_newer_banner() {
        let runtime = create_runtime();

        let message = create_rw_signal(Some("second".to_string()));
        let stamp = create_rw_signal(2u32);

        // A timer armed for the first banner fires after the second showed
        dismiss_if_current(message, stamp, 1);
        assert_eq!(message.get_untracked().as_deref(), Some("second"));

        // The second banner's own timer still clears it
        dismiss_if_current(message, stamp, 2);
        assert_eq!(message.get_untracked(), None);

        runtime.dispose();
    }
}
