//! Alert Banner Component
//!
//! Dismissible bottom-right banners for success and error messages.

use leptos::*;

use crate::state::global::GlobalState;

/// Banner container fed from global state
#[component]
pub fn AlertBanners() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let state_for_error = state.clone();
    let state_for_success = state;

    view! {
        // Error banner
        {move || {
            let state = state_for_error.clone();
            state.error.get().map(move |msg| view! {
                <AlertBanner
                    message=msg
                    variant=AlertVariant::Danger
                    on_close=move || state.clear_error()
                />
            })
        }}

        // Success banner
        {move || {
            let state = state_for_success.clone();
            state.success.get().map(move |msg| view! {
                <AlertBanner
                    message=msg
                    variant=AlertVariant::Success
                    on_close=move || state.clear_success()
                />
            })
        }}
    }
}

#[derive(Clone, Copy)]
enum AlertVariant {
    Success,
    Danger,
}

#[component]
fn AlertBanner(
    #[prop(into)]
    message: String,
    variant: AlertVariant,
    on_close: impl Fn() + 'static,
) -> impl IntoView {
    let (alert_class, icon_class) = match variant {
        AlertVariant::Success => ("alert-success", "bi-check-circle-fill"),
        AlertVariant::Danger => ("alert-danger", "bi-exclamation-triangle-fill"),
    };

    view! {
        <div
            class=format!(
                "alert {} alert-dismissible fade show position-fixed bottom-0 end-0 m-3",
                alert_class
            )
            style="z-index: 9999"
            role="alert"
        >
            <i class=format!("bi {} me-2", icon_class)></i>
            {message}
            <button
                type="button"
                class="btn-close"
                aria-label="Close"
                on:click=move |_| on_close()
            ></button>
        </div>
    }
}
