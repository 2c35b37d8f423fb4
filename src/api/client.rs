//! HTTP API Client
//!
//! Functions for communicating with the ledger REST API.

use gloo_net::http::Request;
use web_sys::RequestCredentials;

use crate::state::global::{CategoryTotal, ChartSeries, Transaction};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";

/// Generic message when an error body carries nothing usable
pub const REQUEST_FAILED: &str = "An error occurred while processing your request.";

/// Get the API base URL: the `ledger_api_url` override the host page may
/// have stored, or the default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("ledger_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

// ============ Response Types ============

/// Server error body; only `message` ever reaches the user
#[derive(Debug, Default, serde::Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Pull the user-facing message out of an error body
pub fn message_from_body(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|envelope| envelope.message)
        .unwrap_or_else(|| REQUEST_FAILED.to_string())
}

/// Console line written for a failed request
fn failure_log_line(message: &str) -> String {
    format!("Request failed: {}", message)
}

/// Log a failed request to the console. Every error this module hands to a
/// caller passes through here; the message itself goes on to the banner.
fn log_failure(message: String) -> String {
    web_sys::console::error_1(&failure_log_line(&message).into());
    message
}

async fn error_message(response: gloo_net::http::Response) -> String {
    match response.text().await {
        Ok(body) => log_failure(message_from_body(&body)),
        Err(_) => log_failure(REQUEST_FAILED.to_string()),
    }
}

#[derive(Debug, Default, serde::Deserialize)]
pub struct DashboardSummary {
    pub recent_transactions: Vec<Transaction>,
    pub monthly_expenses: ChartSeries,
    pub category_breakdown: ChartSeries,
}

#[derive(Debug, serde::Deserialize)]
pub struct TransactionListResponse {
    pub transactions: Vec<Transaction>,
    pub total: u32,
    pub pages: u32,
    pub current_page: u32,
    /// Distinct categories for the filter dropdown
    #[serde(default)]
    pub categories: Vec<String>,
}

#[derive(Debug, serde::Deserialize)]
pub struct CategoryTotalsResponse {
    pub totals: Vec<CategoryTotal>,
}

/// Body for create and update calls
#[derive(Clone, Debug, serde::Serialize)]
pub struct TransactionRequest {
    pub amount: f64,
    pub description: String,
    pub category: String,
    /// `YYYY-MM-DD`
    pub date: String,
}

/// Filters applied to the transaction list
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransactionFilter {
    /// Category name; empty or "all" matches every category
    pub category: String,
    /// Inclusive start date, `YYYY-MM-DD`
    pub start_date: String,
    /// Inclusive end date, `YYYY-MM-DD`
    pub end_date: String,
    /// 1-based page number
    pub page: u32,
}

impl TransactionFilter {
    /// Whether any narrowing filter is active (paging does not count)
    pub fn is_filtered(&self) -> bool {
        (!self.category.is_empty() && self.category != "all")
            || !self.start_date.is_empty()
            || !self.end_date.is_empty()
    }

    /// Query string for the list endpoint, leading `?` included when non-empty
    pub fn query_string(&self) -> String {
        let mut parts = Vec::new();

        if !self.category.is_empty() && self.category != "all" {
            parts.push(format!("category={}", self.category));
        }
        if !self.start_date.is_empty() {
            parts.push(format!("start_date={}", self.start_date));
        }
        if !self.end_date.is_empty() {
            parts.push(format!("end_date={}", self.end_date));
        }
        if self.page > 1 {
            parts.push(format!("page={}", self.page));
        }

        if parts.is_empty() {
            String::new()
        } else {
            format!("?{}", parts.join("&"))
        }
    }
}

// ============ API Functions ============

/// Fetch the dashboard summary (recent activity plus both chart series)
pub async fn fetch_dashboard() -> Result<DashboardSummary, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/dashboard", api_base))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| log_failure(format!("Network error: {}", e)))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response.json().await
        .map_err(|e| log_failure(format!("Parse error: {}", e)))
}

/// Fetch a page of transactions
pub async fn fetch_transactions(filter: &TransactionFilter) -> Result<TransactionListResponse, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/transactions{}", api_base, filter.query_string()))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| log_failure(format!("Network error: {}", e)))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response.json().await
        .map_err(|e| log_failure(format!("Parse error: {}", e)))
}

/// Fetch a single transaction (for the edit form)
pub async fn fetch_transaction(id: i64) -> Result<Transaction, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/transactions/{}", api_base, id))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| log_failure(format!("Network error: {}", e)))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response.json().await
        .map_err(|e| log_failure(format!("Parse error: {}", e)))
}

/// Create a new transaction
pub async fn create_transaction(request: &TransactionRequest) -> Result<Transaction, String> {
    let api_base = get_api_base();

    let response = Request::post(&format!("{}/transactions", api_base))
        .credentials(RequestCredentials::Include)
        .json(request)
        .map_err(|e| log_failure(format!("Request build error: {}", e)))?
        .send()
        .await
        .map_err(|e| log_failure(format!("Network error: {}", e)))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response.json().await
        .map_err(|e| log_failure(format!("Parse error: {}", e)))
}

/// Update an existing transaction
pub async fn update_transaction(id: i64, request: &TransactionRequest) -> Result<Transaction, String> {
    let api_base = get_api_base();

    let response = Request::put(&format!("{}/transactions/{}", api_base, id))
        .credentials(RequestCredentials::Include)
        .json(request)
        .map_err(|e| log_failure(format!("Request build error: {}", e)))?
        .send()
        .await
        .map_err(|e| log_failure(format!("Network error: {}", e)))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response.json().await
        .map_err(|e| log_failure(format!("Parse error: {}", e)))
}

/// Delete a transaction
pub async fn delete_transaction(id: i64) -> Result<(), String> {
    let api_base = get_api_base();

    let response = Request::delete(&format!("{}/transactions/{}", api_base, id))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| log_failure(format!("Network error: {}", e)))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    Ok(())
}

/// Fetch per-category spending totals
pub async fn fetch_category_totals() -> Result<Vec<CategoryTotal>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/categories/totals", api_base))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| log_failure(format!("Network error: {}", e)))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    let result: CategoryTotalsResponse = response.json().await
        .map_err(|e| log_failure(format!("Parse error: {}", e)))?;

    Ok(result.totals)
}

/// Log in and establish the session cookie
pub async fn login(username: &str, password: &str, remember: bool) -> Result<(), String> {
    #[derive(serde::Serialize)]
    struct LoginRequest {
        username: String,
        password: String,
        remember: bool,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/auth/login", api_base))
        .credentials(RequestCredentials::Include)
        .json(&LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
            remember,
        })
        .map_err(|e| log_failure(format!("Request build error: {}", e)))?
        .send()
        .await
        .map_err(|e| log_failure(format!("Network error: {}", e)))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_is_surfaced_when_present() {
        let body = r#"{"error": "Bad Request", "status": 400, "code": "VALIDATION", "message": "Amount is required."}"#;
        assert_eq!(message_from_body(body), "Amount is required.");
    }

    #[test]
    fn test_missing_message_falls_back_to_generic() {
        let body = r#"{"error": "Internal Server Error", "status": 500}"#;
        assert_eq!(message_from_body(body), REQUEST_FAILED);
    }

    #[test]
    fn test_unparseable_body_falls_back_to_generic() {
        assert_eq!(message_from_body("<html>502 Bad Gateway</html>"), REQUEST_FAILED);
        assert_eq!(message_from_body(""), REQUEST_FAILED);
    }

    #[test]
    fn test_failure_log_line_carries_the_banner_message() {
        assert_eq!(
            failure_log_line("Network error: connection refused"),
            "Request failed: Network error: connection refused"
        );
    }

    #[test]
    fn test_query_string_assembly() {
        let mut filter = TransactionFilter::default();
        assert_eq!(filter.query_string(), "");
        assert!(!filter.is_filtered());

        filter.category = "Food".to_string();
        filter.start_date = "2025-01-01".to_string();
        filter.page = 3;
        assert_eq!(
            filter.query_string(),
            "?category=Food&start_date=2025-01-01&page=3"
        );
        assert!(filter.is_filtered());
    }

    #[test]
    fn test_all_category_and_first_page_are_omitted() {
        let filter = TransactionFilter {
            category: "all".to_string(),
            page: 1,
            ..Default::default()
        };
        assert_eq!(filter.query_string(), "");
        assert!(!filter.is_filtered());
    }
}
