//! Transaction Form Pages
//!
//! Add and edit forms for a single transaction.

use leptos::*;
use leptos_router::*;

use crate::api::client::{self, TransactionRequest};
use crate::components::{CurrencyInput, DateInput, FileInput};
use crate::state::global::{GlobalState, Transaction};

/// Categories offered by the form
const CATEGORIES: &[&str] = &[
    "Housing",
    "Food",
    "Transportation",
    "Utilities",
    "Entertainment",
    "Healthcare",
    "Shopping",
    "Income",
    "Other",
];

/// Add-transaction page
#[component]
pub fn AddTransaction() -> impl IntoView {
    view! {
        <div>
            <h1 class="h3 mb-4">"Add Transaction"</h1>
            <TransactionForm />
        </div>
    }
}

/// Edit-transaction page; loads the record named in the route
#[component]
pub fn EditTransaction() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let params = use_params_map();

    let (loaded, set_loaded) = create_signal(None::<Transaction>);

    let state_for_effect = state;
    create_effect(move |_| {
        let id = params.with(|p| p.get("id").and_then(|raw| raw.parse::<i64>().ok()));
        let state = state_for_effect.clone();
        spawn_local(async move {
            match id {
                Some(id) => match client::fetch_transaction(id).await {
                    Ok(tx) => set_loaded.set(Some(tx)),
                    Err(e) => state.show_error(&e),
                },
                None => state.show_error("Invalid transaction id"),
            }
        });
    });

    view! {
        <div>
            <h1 class="h3 mb-4">"Edit Transaction"</h1>
            {move || match loaded.get() {
                Some(tx) => view! { <TransactionForm existing=tx /> }.into_view(),
                None => view! {
                    <div class="d-flex justify-content-center py-5">
                        <div class="spinner-border text-secondary" role="status"></div>
                    </div>
                }.into_view(),
            }}
        </div>
    }
}

/// The shared form. Amounts are entered as positive dollars; the chosen
/// type decides the stored sign (expenses are negative).
#[component]
fn TransactionForm(
    #[prop(optional)]
    existing: Option<Transaction>,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let editing_id = existing.as_ref().map(|tx| tx.id);

    let amount = create_rw_signal(
        existing
            .as_ref()
            .map(|tx| format!("{:.2}", tx.amount.abs()))
            .unwrap_or_default(),
    );
    let kind = create_rw_signal(
        match existing.as_ref() {
            Some(tx) if !tx.is_expense() => "income",
            _ => "expense",
        }
        .to_string(),
    );
    let description = create_rw_signal(
        existing
            .as_ref()
            .map(|tx| tx.description.clone())
            .unwrap_or_default(),
    );
    let category = create_rw_signal(
        existing
            .as_ref()
            .map(|tx| tx.category.clone())
            .unwrap_or_else(|| CATEGORIES[0].to_string()),
    );
    let date = create_rw_signal(
        existing
            .as_ref()
            .map(|tx| tx.date.clone())
            .unwrap_or_else(|| chrono::Utc::now().format("%Y-%m-%d").to_string()),
    );
    let (saving, set_saving) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let parsed = amount.get_untracked().parse::<f64>().unwrap_or(0.0);
        let description = description.get_untracked().trim().to_string();
        let date = date.get_untracked();

        if parsed <= 0.0 || description.is_empty() || date.is_empty() {
            state.show_error("Invalid input. Please check your entries.");
            return;
        }

        let signed = if kind.get_untracked() == "expense" {
            -parsed
        } else {
            parsed
        };
        let request = TransactionRequest {
            amount: signed,
            description,
            category: category.get_untracked(),
            date,
        };

        set_saving.set(true);

        let state = state.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = match editing_id {
                Some(id) => client::update_transaction(id, &request).await.map(|_| ()),
                None => client::create_transaction(&request).await.map(|_| ()),
            };

            match result {
                Ok(()) => {
                    let flash = if editing_id.is_some() {
                        "Transaction updated successfully!"
                    } else {
                        "Transaction added successfully!"
                    };
                    state.show_success(flash);
                    navigate("/transactions", Default::default());
                }
                Err(e) => {
                    state.show_error(&e);
                }
            }
            set_saving.set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="card shadow-sm">
            <div class="card-body">
                <div class="row">
                    <div class="col-md-4 mb-3">
                        <label class="form-label" for="kind">"Type"</label>
                        <select
                            id="kind"
                            class="form-select"
                            prop:value=move || kind.get()
                            on:change=move |ev| kind.set(event_target_value(&ev))
                        >
                            <option value="expense">"Expense"</option>
                            <option value="income">"Income"</option>
                        </select>
                    </div>
                    <div class="col-md-8 mb-3">
                        <label class="form-label" for="amount">"Amount"</label>
                        <CurrencyInput value=amount />
                    </div>
                </div>

                <div class="mb-3">
                    <label class="form-label" for="description">"Description"</label>
                    <input
                        type="text"
                        id="description"
                        class="form-control"
                        placeholder="What was this for?"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    />
                </div>

                <div class="row">
                    <div class="col-md-6 mb-3">
                        <label class="form-label" for="category">"Category"</label>
                        <select
                            id="category"
                            class="form-select"
                            prop:value=move || category.get()
                            on:change=move |ev| category.set(event_target_value(&ev))
                        >
                            {CATEGORIES.iter().map(|&c| view! {
                                <option value=c>{c}</option>
                            }).collect::<Vec<_>>()}
                        </select>
                    </div>
                    <div class="col-md-6 mb-3">
                        <label class="form-label" for="date">"Date"</label>
                        <DateInput value=date />
                    </div>
                </div>

                <div class="mb-2">
                    <label class="form-label d-block" for="receipt">"Receipt (optional)"</label>
                    <FileInput id="receipt" accept="image/*,.pdf" />
                </div>
            </div>

            <div class="card-footer d-flex justify-content-end gap-2">
                <A href="/transactions" class="btn btn-outline-secondary">"Cancel"</A>
                <button type="submit" class="btn btn-danger" disabled=move || saving.get()>
                    {move || if saving.get() { "Saving..." } else { "Save Transaction" }}
                </button>
            </div>
        </form>
    }
}
