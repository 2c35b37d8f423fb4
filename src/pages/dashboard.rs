//! Dashboard Page
//!
//! Summary cards, the two spending charts, and recent activity.

use leptos::*;
use leptos_router::*;

use crate::api::{client, embedded};
use crate::components::{CategoriesDoughnut, ExpensesLineChart, PrintButton, Tooltip};
use crate::format::{format_dollars, relative_from, time_ago};
use crate::state::global::GlobalState;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Load chart data and recent activity on mount. Server-embedded data
    // wins for the charts; the HTTP summary fills in whatever is missing.
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            state.loading.set(true);

            let embedded_charts = match embedded::read_dashboard_data() {
                Some(Ok(data)) => {
                    state.monthly_expenses.set(data.monthly_expenses);
                    state.category_breakdown.set(data.category_breakdown);
                    true
                }
                Some(Err(e)) => {
                    web_sys::console::error_1(
                        &format!("Embedded dashboard data rejected: {}", e).into(),
                    );
                    state.show_error(&e);
                    false
                }
                None => false,
            };

            match client::fetch_dashboard().await {
                Ok(summary) => {
                    state.recent_transactions.set(summary.recent_transactions);
                    if !embedded_charts {
                        state.monthly_expenses.set(summary.monthly_expenses);
                        state.category_breakdown.set(summary.category_breakdown);
                    }
                    state
                        .last_refresh
                        .set(Some(chrono::Utc::now().timestamp_millis()));
                }
                Err(e) => {
                    state.show_error(&e);
                }
            }

            state.loading.set(false);
        });
    });

    let state_for_month = state.clone();
    let this_month = Signal::derive(move || {
        format_dollars(state_for_month.current_month_expenses().unwrap_or(0.0))
    });

    let state_for_average = state.clone();
    let monthly_average = Signal::derive(move || {
        format_dollars(
            state_for_average
                .monthly_expenses
                .get()
                .average()
                .unwrap_or(0.0),
        )
    });

    let state_for_total = state.clone();
    let total_tracked = Signal::derive(move || format_dollars(state_for_total.total_tracked()));

    let state_for_trend = state.clone();
    let vs_average = Signal::derive(move || match state_for_trend.month_vs_average() {
        Some(delta) if delta > 0.0 => format!("{} above", format_dollars(delta)),
        Some(delta) if delta < 0.0 => format!("{} below", format_dollars(-delta)),
        Some(_) => "On par".to_string(),
        None => "No data".to_string(),
    });

    view! {
        <div>
            // Page header
            <div class="d-flex justify-content-between align-items-center mb-4">
                <div>
                    <h1 class="h3 mb-0">"Dashboard"</h1>
                    <p class="text-muted mb-0">"Your finances at a glance"</p>
                </div>
                <PrintButton />
            </div>

            // Summary cards
            <div class="row">
                <SummaryCard
                    title="This Month"
                    value=this_month
                    help="Expenses recorded in the current month"
                    icon="bi-calendar3"
                />
                <SummaryCard
                    title="Monthly Average"
                    value=monthly_average
                    help="Average monthly expenses across the charted months"
                    icon="bi-graph-up"
                />
                <SummaryCard
                    title="Total Tracked"
                    value=total_tracked
                    help="All categorized spending in the breakdown"
                    icon="bi-wallet2"
                />
                <SummaryCard
                    title="vs Average"
                    value=vs_average
                    help="How this month compares to your monthly average"
                    icon="bi-arrow-left-right"
                />
            </div>

            // Charts
            <div class="row">
                <div class="col-lg-7 mb-4">
                    <section class="card shadow-sm h-100">
                        <div class="card-header">"Monthly Expenses"</div>
                        <div class="card-body">
                            {move || {
                                if state.loading.get() {
                                    view! {
                                        <div class="d-flex justify-content-center py-5">
                                            <div class="spinner-border text-secondary" role="status"></div>
                                        </div>
                                    }.into_view()
                                } else {
                                    view! { <ExpensesLineChart /> }.into_view()
                                }
                            }}
                        </div>
                    </section>
                </div>
                <div class="col-lg-5 mb-4">
                    <section class="card shadow-sm h-100">
                        <div class="card-header">"Spending by Category"</div>
                        <div class="card-body">
                            <CategoriesDoughnut />
                        </div>
                    </section>
                </div>
            </div>

            <RecentActivity />
            <LastUpdated />
        </div>
    }
}

/// Single headline figure with an explanatory tooltip
#[component]
fn SummaryCard(
    title: &'static str,
    #[prop(into)]
    value: Signal<String>,
    help: &'static str,
    icon: &'static str,
) -> impl IntoView {
    view! {
        <div class="col-md-3 mb-3">
            <div class="card shadow-sm h-100">
                <div class="card-body">
                    <div class="d-flex justify-content-between align-items-start">
                        <h6 class="card-subtitle text-muted">
                            {title}
                            <Tooltip text=help>
                                <i class="bi bi-question-circle ms-1"></i>
                            </Tooltip>
                        </h6>
                        <i class=format!("bi {} fs-4 text-muted", icon)></i>
                    </div>
                    <p class="card-text fs-4 fw-semibold mb-0">{move || value.get()}</p>
                </div>
            </div>
        </div>
    }
}

/// The five newest transactions, each stamped with how long ago it landed
#[component]
fn RecentActivity() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let recent = state.recent_transactions;

    view! {
        <section class="card shadow-sm">
            <div class="card-header d-flex justify-content-between align-items-center">
                <span>"Recent Activity"</span>
                <A href="/transactions" class="small">"View all"</A>
            </div>
            <ul class="list-group list-group-flush">
                {move || {
                    let transactions = recent.get();
                    if transactions.is_empty() {
                        view! {
                            <li class="list-group-item text-muted small">"No recent activity"</li>
                        }.into_view()
                    } else {
                        transactions.into_iter().take(5).map(|tx| {
                            let stamp = time_ago(tx.created_at.as_deref());
                            let amount_class = if tx.is_expense() { "text-danger" } else { "text-success" };

                            view! {
                                <li class="list-group-item d-flex justify-content-between align-items-center">
                                    <div>
                                        <span>{tx.description.clone()}</span>
                                        <span class="badge bg-light text-dark ms-2">{tx.category.clone()}</span>
                                        <div class="text-muted small">{stamp}</div>
                                    </div>
                                    <span class=format!("fw-semibold {}", amount_class)>
                                        {format_dollars(tx.amount)}
                                    </span>
                                </li>
                            }
                        }).collect_view()
                    }
                }}
            </ul>
        </section>
    }
}

/// Footer stamp showing when the data was last refreshed
#[component]
fn LastUpdated() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let last_refresh = state.last_refresh;

    // Re-render the stamp every 30 seconds so it keeps aging
    let (tick, set_tick) = create_signal(0u32);
    let interval = gloo_timers::callback::Interval::new(30_000, move || {
        set_tick.update(|t| *t += 1);
    });
    on_cleanup(move || drop(interval));

    view! {
        <p class="text-muted small text-end mt-3">
            {move || {
                tick.get();
                match last_refresh.get().and_then(chrono::DateTime::from_timestamp_millis) {
                    Some(instant) => format!("Updated {}", relative_from(instant, chrono::Utc::now())),
                    None => String::new(),
                }
            }}
        </p>
    }
}
