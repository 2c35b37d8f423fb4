//! Transactions Page
//!
//! Filterable, paginated transaction list plus per-category totals,
//! split across two tabs whose selection survives page loads.

use leptos::*;
use leptos_router::*;

use crate::api::client::{self, TransactionFilter};
use crate::components::chart::percent_of_total;
use crate::components::tabs::{initial_tab, TabNav};
use crate::components::{forms, ExportCsvButton, Popover, PrintButton};
use crate::format::format_dollars;
use crate::state::global::{CategoryTotal, GlobalState, Transaction};

/// The two tabs, list first
const TABS: &[(&str, &str)] = &[("#list", "Transactions"), ("#categories", "Categories")];

/// Transactions page component
#[component]
pub fn Transactions() -> impl IntoView {
    let active_tab = create_rw_signal(initial_tab(TABS));

    view! {
        <div>
            <div class="d-flex justify-content-between align-items-center mb-4">
                <h1 class="h3 mb-0">"Transactions"</h1>
                <A href="/transactions/add" class="btn btn-danger btn-sm">
                    <i class="bi bi-plus-lg me-1"></i>
                    "Add Transaction"
                </A>
            </div>

            <TabNav tabs=TABS active_tab=active_tab />

            {move || match active_tab.get().as_str() {
                "#categories" => view! { <CategoriesTab /> }.into_view(),
                _ => view! { <ListTab /> }.into_view(),
            }}
        </div>
    }
}

/// The filterable, paginated list
#[component]
fn ListTab() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let filter = create_rw_signal(TransactionFilter {
        page: 1,
        ..Default::default()
    });
    let (transactions, set_transactions) = create_signal(Vec::<Transaction>::new());
    let (categories, set_categories) = create_signal(Vec::<String>::new());
    let (pages, set_pages) = create_signal(1u32);
    let (total, set_total) = create_signal(0u32);

    // Refetch whenever the filter changes
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let current = filter.get();
        let state = state_for_effect.clone();
        spawn_local(async move {
            state.loading.set(true);
            match client::fetch_transactions(&current).await {
                Ok(response) => {
                    set_transactions.set(response.transactions);
                    set_pages.set(response.pages.max(1));
                    set_total.set(response.total);
                    if !response.categories.is_empty() {
                        set_categories.set(response.categories);
                    }
                }
                Err(e) => {
                    state.show_error(&e);
                }
            }
            state.loading.set(false);
        });
    });

    let state_for_delete = state;
    let delete = move |id: i64| {
        if !forms::confirm("Delete this transaction? This cannot be undone.") {
            return;
        }

        let state = state_for_delete.clone();
        spawn_local(async move {
            match client::delete_transaction(id).await {
                Ok(()) => {
                    state.show_success("Transaction deleted successfully!");
                    // Reload the current page of results
                    filter.set(filter.get_untracked());
                }
                Err(e) => {
                    state.show_error(&e);
                }
            }
        });
    };

    view! {
        <div>
            // Filter bar
            <div class="card shadow-sm mb-3">
                <div class="card-body row g-2 align-items-end">
                    <div class="col-md-4">
                        <label class="form-label small text-muted" for="filter-category">"Category"</label>
                        <select
                            id="filter-category"
                            class="form-select"
                            prop:value=move || {
                                let category = filter.get().category;
                                if category.is_empty() { "all".to_string() } else { category }
                            }
                            on:change=move |ev| filter.update(|f| {
                                f.category = event_target_value(&ev);
                                f.page = 1;
                            })
                        >
                            <option value="all">"All categories"</option>
                            {move || {
                                let current = filter.get().category;
                                categories.get().into_iter().map(|c| {
                                    let is_current = c == current;
                                    view! {
                                        <option value=c.clone() selected=is_current>{c}</option>
                                    }
                                }).collect_view()
                            }}
                        </select>
                    </div>
                    <div class="col-md-3">
                        <label class="form-label small text-muted" for="filter-start">"From"</label>
                        <input
                            type="date"
                            id="filter-start"
                            class="form-control"
                            prop:value=move || filter.get().start_date
                            on:change=move |ev| filter.update(|f| {
                                f.start_date = event_target_value(&ev);
                                f.page = 1;
                            })
                        />
                    </div>
                    <div class="col-md-3">
                        <label class="form-label small text-muted" for="filter-end">"To"</label>
                        <input
                            type="date"
                            id="filter-end"
                            class="form-control"
                            prop:value=move || filter.get().end_date
                            on:change=move |ev| filter.update(|f| {
                                f.end_date = event_target_value(&ev);
                                f.page = 1;
                            })
                        />
                    </div>
                    <div class="col-md-2 d-grid">
                        <button
                            type="button"
                            class="btn btn-outline-secondary"
                            disabled=move || !filter.get().is_filtered()
                            on:click=move |_| filter.set(TransactionFilter {
                                page: 1,
                                ..Default::default()
                            })
                        >
                            "Clear filters"
                        </button>
                    </div>
                </div>
            </div>

            // Toolbar
            <div class="d-flex justify-content-between align-items-center mb-2">
                <span class="text-muted small">
                    {move || format!("{} transactions", total.get())}
                </span>
                <div class="btn-group">
                    <ExportCsvButton transactions=transactions />
                    <PrintButton />
                </div>
            </div>

            // The table itself
            <div class="card shadow-sm">
                <div class="table-responsive">
                    <table class="table table-hover align-middle mb-0">
                        <thead>
                            <tr>
                                <th>"Date"</th>
                                <th>"Description"</th>
                                <th>"Category"</th>
                                <th class="text-end">"Amount"</th>
                                <th class="text-end">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let rows = transactions.get();
                                if rows.is_empty() {
                                    view! {
                                        <tr>
                                            <td colspan="5" class="text-center text-muted py-4">
                                                "No transactions match the current filters"
                                            </td>
                                        </tr>
                                    }.into_view()
                                } else {
                                    rows.into_iter().map(|tx| {
                                        let delete = delete.clone();
                                        view! {
                                            <TransactionRow
                                                transaction=tx
                                                on_delete=move |id| delete(id)
                                            />
                                        }
                                    }).collect_view()
                                }
                            }}
                        </tbody>
                    </table>
                </div>
            </div>

            {move || (pages.get() > 1).then(|| view! {
                <div class="mt-3">
                    <Pagination pages=pages filter=filter />
                </div>
            })}
        </div>
    }
}

/// Single table row with edit link and confirmed delete
#[component]
fn TransactionRow(
    transaction: Transaction,
    on_delete: impl Fn(i64) + 'static,
) -> impl IntoView {
    let amount_class = if transaction.is_expense() {
        "text-danger"
    } else {
        "text-success"
    };
    let id = transaction.id;

    view! {
        <tr>
            <td>{transaction.date.clone()}</td>
            <td>{transaction.description.clone()}</td>
            <td><span class="badge bg-light text-dark">{transaction.category.clone()}</span></td>
            <td class=format!("text-end fw-semibold {}", amount_class)>
                {format_dollars(transaction.amount)}
            </td>
            <td class="text-end">
                <A
                    href=format!("/transactions/{}/edit", id)
                    class="btn btn-sm btn-outline-secondary me-1"
                >
                    <i class="bi bi-pencil"></i>
                </A>
                <button
                    type="button"
                    class="btn btn-sm btn-outline-danger"
                    aria-label="Delete"
                    on:click=move |_| on_delete(id)
                >
                    <i class="bi bi-trash"></i>
                </button>
            </td>
        </tr>
    }
}

/// Numbered page buttons, 1-based
#[component]
fn Pagination(
    #[prop(into)]
    pages: Signal<u32>,
    filter: RwSignal<TransactionFilter>,
) -> impl IntoView {
    view! {
        <nav aria-label="Transaction pages">
            <ul class="pagination pagination-sm justify-content-center mb-0">
                {move || {
                    let page_count = pages.get();
                    let current = filter.get().page.max(1);
                    page_window(page_count, current).into_iter().map(|entry| match entry {
                        Some(page) => view! {
                            <li class="page-item" class:active={page == current}>
                                <button
                                    type="button"
                                    class="page-link"
                                    on:click=move |_| filter.update(|f| f.page = page)
                                >
                                    {page}
                                </button>
                            </li>
                        }
                        .into_view(),
                        None => view! {
                            <li class="page-item disabled">
                                <span class="page-link">"..."</span>
                            </li>
                        }
                        .into_view(),
                    }).collect_view()
                }}
            </ul>
        </nav>
    }
}

/// Page numbers worth a button: the first and last page plus two on either
/// side of the current one. `None` marks a run of hidden pages; a run of
/// exactly one page is shown outright instead of collapsed.
fn page_window(pages: u32, current: u32) -> Vec<Option<u32>> {
    let mut window = Vec::new();
    let mut last_kept = 0u32;

    for page in 1..=pages {
        let keep = page == 1 || page == pages || page.abs_diff(current) <= 2;
        if !keep {
            continue;
        }

        if last_kept != 0 && page - last_kept == 2 {
            window.push(Some(page - 1));
        } else if last_kept != 0 && page - last_kept > 2 {
            window.push(None);
        }
        window.push(Some(page));
        last_kept = page;
    }

    window
}

/// Per-category totals with each category's share of spending
#[component]
fn CategoriesTab() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let (totals, set_totals) = create_signal(Vec::<CategoryTotal>::new());

    let state_for_effect = state;
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            match client::fetch_category_totals().await {
                Ok(totals) => set_totals.set(totals),
                Err(e) => state.show_error(&e),
            }
        });
    });

    view! {
        <div class="card shadow-sm">
            <div class="card-header d-flex justify-content-between align-items-center">
                "Spending by Category"
                <Popover
                    title="Share"
                    content="Each category's percentage of all spending on record."
                >
                    <i class="bi bi-info-circle text-muted"></i>
                </Popover>
            </div>
            <div class="table-responsive">
                <table class="table table-hover align-middle mb-0">
                    <thead>
                        <tr>
                            <th>"Category"</th>
                            <th class="text-end">"Total"</th>
                            <th class="text-end">"Share"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let totals = totals.get();
                            let overall: f64 = totals.iter().map(|t| t.total).sum();

                            if totals.is_empty() {
                                view! {
                                    <tr>
                                        <td colspan="3" class="text-center text-muted py-4">
                                            "No categorized spending yet"
                                        </td>
                                    </tr>
                                }.into_view()
                            } else {
                                totals.into_iter().map(|t| {
                                    let share = percent_of_total(t.total, overall);
                                    view! {
                                        <tr>
                                            <td>{t.category}</td>
                                            <td class="text-end">{format_dollars(t.total)}</td>
                                            <td class="text-end text-muted">{format!("{}%", share)}</td>
                                        </tr>
                                    }
                                }).collect_view()
                            }
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_page_counts_keep_every_page() {
        assert_eq!(
            page_window(5, 3),
            vec![Some(1), Some(2), Some(3), Some(4), Some(5)]
        );
    }

    #[test]
    fn test_large_page_counts_window_around_current() {
        assert_eq!(
            page_window(40, 20),
            vec![
                Some(1),
                None,
                Some(18),
                Some(19),
                Some(20),
                Some(21),
                Some(22),
                None,
                Some(40),
            ]
        );
    }

    #[test]
    fn test_window_clamps_at_either_edge() {
        assert_eq!(
            page_window(40, 1),
            vec![Some(1), Some(2), Some(3), None, Some(40)]
        );
        assert_eq!(
            page_window(40, 40),
            vec![Some(1), None, Some(38), Some(39), Some(40)]
        );
    }

    #[test]
    fn test_single_hidden_page_shows_instead_of_a_gap() {
        // With 8 pages and page 4 current, page 7 is the only page a gap
        // would hide, so it stays a button
        assert_eq!(
            page_window(8, 4),
            vec![
                Some(1),
                Some(2),
                Some(3),
                Some(4),
                Some(5),
                Some(6),
                Some(7),
                Some(8),
            ]
        );
    }
}
