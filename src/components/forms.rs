//! Form Components
//!
//! The ledger's input widgets: currency field, password field with a
//! visibility toggle, file picker, print and CSV export buttons.

use leptos::*;
use wasm_bindgen::JsCast;

use crate::format::normalize_amount_input;
use crate::state::global::Transaction;

/// Amount field that keeps its text a valid currency amount
#[component]
pub fn CurrencyInput(
    value: RwSignal<String>,
    #[prop(default = "amount")]
    id: &'static str,
) -> impl IntoView {
    view! {
        <div class="input-group">
            <span class="input-group-text">"$"</span>
            <input
                type="text"
                id=id
                class="form-control"
                inputmode="decimal"
                placeholder="0.00"
                prop:value=move || value.get()
                on:input=move |ev| value.set(normalize_amount_input(&event_target_value(&ev)))
            />
        </div>
    }
}

/// Password field with a visibility toggle
#[component]
pub fn PasswordInput(
    value: RwSignal<String>,
    #[prop(default = "password")]
    id: &'static str,
) -> impl IntoView {
    let (visible, set_visible) = create_signal(false);

    view! {
        <div class="input-group">
            <input
                type=move || if visible.get() { "text" } else { "password" }
                id=id
                class="form-control"
                placeholder="Password"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <button
                type="button"
                class="btn btn-outline-secondary"
                aria-label="Toggle password visibility"
                on:click=move |_| set_visible.update(|v| *v = !*v)
            >
                <i class=move || if visible.get() { "bi bi-eye-slash" } else { "bi bi-eye" }></i>
            </button>
        </div>
    }
}

/// Date field, `YYYY-MM-DD`, manual entry allowed
#[component]
pub fn DateInput(
    value: RwSignal<String>,
    #[prop(default = "date")]
    id: &'static str,
) -> impl IntoView {
    view! {
        <input
            type="date"
            id=id
            class="form-control"
            prop:value=move || value.get()
            on:input=move |ev| value.set(event_target_value(&ev))
        />
    }
}

/// File picker whose label echoes the chosen file's name
#[component]
pub fn FileInput(
    #[prop(default = "receipt")]
    id: &'static str,
    #[prop(default = "")]
    accept: &'static str,
) -> impl IntoView {
    let (label, set_label) = create_signal("Choose file".to_string());

    let on_change = move |ev: web_sys::Event| {
        let name = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0))
            .map(|file| file.name());

        set_label.set(name.unwrap_or_else(|| "Choose file".to_string()));
    };

    view! {
        <label class="btn btn-outline-secondary" for=id>
            <i class="bi bi-paperclip me-1"></i>
            {move || label.get()}
            <input
                type="file"
                id=id
                class="d-none"
                accept=accept
                on:change=on_change
            />
        </label>
    }
}

/// Invokes the browser's print dialog
#[component]
pub fn PrintButton() -> impl IntoView {
    let on_click = move |_| {
        if let Some(window) = web_sys::window() {
            let _ = window.print();
        }
    };

    view! {
        <button type="button" class="btn btn-outline-secondary btn-sm" on:click=on_click>
            <i class="bi bi-printer me-1"></i>
            "Print"
        </button>
    }
}

/// Downloads the listed transactions as CSV
#[component]
pub fn ExportCsvButton(
    #[prop(into)]
    transactions: Signal<Vec<Transaction>>,
) -> impl IntoView {
    let on_click = move |_| {
        let csv = transactions_csv(&transactions.get_untracked());
        download_text_file("transactions.csv", &csv);
    };

    view! {
        <button type="button" class="btn btn-outline-secondary btn-sm" on:click=on_click>
            <i class="bi bi-download me-1"></i>
            "Export CSV"
        </button>
    }
}

/// Ask the user to confirm a destructive action
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Build a CSV document from the listed transactions
pub fn transactions_csv(transactions: &[Transaction]) -> String {
    let mut csv = String::from("Date,Description,Category,Amount\n");
    for tx in transactions {
        csv.push_str(&format!(
            "{},{},{},{:.2}\n",
            tx.date,
            csv_field(&tx.description),
            csv_field(&tx.category),
            tx.amount
        ));
    }
    csv
}

/// Quote a field when it carries commas, quotes, or newlines
fn csv_field(raw: &str) -> String {
    if raw.contains(|c| c == ',' || c == '"' || c == '\n') {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_string()
    }
}

/// Save a string as a file through a temporary object URL
fn download_text_file(filename: &str, content: &str) {
    if let Some(window) = web_sys::window() {
        let blob = web_sys::Blob::new_with_str_sequence(
            &js_sys::Array::of1(&content.into()),
        ).ok();

        if let Some(blob) = blob {
            let url = web_sys::Url::create_object_url_with_blob(&blob).ok();
            if let Some(url) = url {
                if let Some(document) = window.document() {
                    if let Ok(a) = document.create_element("a") {
                        let _ = a.set_attribute("href", &url);
                        let _ = a.set_attribute("download", filename);
                        if let Some(a) = a.dyn_ref::<web_sys::HtmlElement>() {
                            a.click();
                        }
                    }
                }
                let _ = web_sys::Url::revoke_object_url(&url);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(date: &str, description: &str, category: &str, amount: f64) -> Transaction {
        Transaction {
            id: 0,
            amount,
            description: description.to_string(),
            category: category.to_string(),
            date: date.to_string(),
            created_at: None,
        }
    }

    #[test]
    fn test_csv_has_header_and_rows() {
        let csv = transactions_csv(&[
            tx("2025-06-01", "Rent", "Housing", -1200.0),
            tx("2025-06-02", "Paycheck", "Income", 2500.5),
        ]);

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Date,Description,Category,Amount");
        assert_eq!(lines[1], "2025-06-01,Rent,Housing,-1200.00");
        assert_eq!(lines[2], "2025-06-02,Paycheck,Income,2500.50");
    }

    #[test]
    fn test_csv_quotes_awkward_fields() {
        let csv = transactions_csv(&[tx(
            "2025-06-03",
            "Dinner, drinks and \"dessert\"",
            "Dining Out",
            -86.4,
        )]);

        assert!(csv.contains("\"Dinner, drinks and \"\"dessert\"\"\""));
    }

    #[test]
    fn test_empty_list_is_just_the_header() {
        assert_eq!(transactions_csv(&[]), "Date,Description,Category,Amount\n");
    }
}
