//! Server-Embedded Chart Data
//!
//! The host page may carry both dashboard series as JSON array attributes
//! on a well-known element, saving the first HTTP round trip.

use crate::state::global::ChartSeries;

/// Id of the element carrying the data attributes
pub const DASHBOARD_DATA_ID: &str = "dashboard-data";

/// Embedded dashboard payload read off the host page
#[derive(Debug, Default, PartialEq)]
pub struct EmbeddedDashboard {
    pub monthly_expenses: ChartSeries,
    pub category_breakdown: ChartSeries,
}

/// Parse one pair of JSON array attributes into a series.
///
/// A missing attribute reads as an empty array. Malformed JSON or a
/// label/value count mismatch is an error for the caller to surface.
pub fn parse_series(
    labels_json: Option<&str>,
    values_json: Option<&str>,
) -> Result<ChartSeries, String> {
    let labels: Vec<String> = serde_json::from_str(labels_json.unwrap_or("[]"))
        .map_err(|e| format!("Invalid chart labels: {}", e))?;
    let values: Vec<f64> = serde_json::from_str(values_json.unwrap_or("[]"))
        .map_err(|e| format!("Invalid chart values: {}", e))?;

    if labels.len() != values.len() {
        return Err(format!(
            "Chart labels and values disagree: {} labels, {} values",
            labels.len(),
            values.len()
        ));
    }

    Ok(ChartSeries::new(labels, values))
}

/// Read the server-embedded chart data, when the host page provides it.
///
/// `None` means the element is absent and the caller should fetch over HTTP
/// instead; `Some(Err(_))` means the element exists but its payload is
/// unusable.
pub fn read_dashboard_data() -> Option<Result<EmbeddedDashboard, String>> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(DASHBOARD_DATA_ID)?;

    let monthly = parse_series(
        element.get_attribute("data-expense-labels").as_deref(),
        element.get_attribute("data-expense-values").as_deref(),
    );
    let categories = parse_series(
        element.get_attribute("data-category-labels").as_deref(),
        element.get_attribute("data-category-values").as_deref(),
    );

    Some(match (monthly, categories) {
        (Ok(monthly_expenses), Ok(category_breakdown)) => Ok(EmbeddedDashboard {
            monthly_expenses,
            category_breakdown,
        }),
        (Err(e), _) | (_, Err(e)) => Err(e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_paired_arrays() {
        let series = parse_series(
            Some(r#"["Jan", "Feb"]"#),
            Some("[120.5, 80]"),
        )
        .unwrap();
        assert_eq!(series.labels, vec!["Jan", "Feb"]);
        assert_eq!(series.values, vec![120.5, 80.0]);
    }

    #[test]
    fn test_missing_attributes_read_as_empty() {
        let series = parse_series(None, None).unwrap();
        assert!(series.is_empty());
        assert!(series.labels.is_empty());
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(parse_series(Some("not json"), Some("[]")).is_err());
        assert!(parse_series(Some("[]"), Some(r#"["strings"]"#)).is_err());
    }

    #[test]
    fn test_count_mismatch_is_an_error() {
        let err = parse_series(Some(r#"["Jan", "Feb"]"#), Some("[1]")).unwrap_err();
        assert!(err.contains("2 labels"));
        assert!(err.contains("1 values"));
    }
}
