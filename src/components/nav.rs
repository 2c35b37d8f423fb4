//! Navigation Components
//!
//! Top bar with the sidebar toggler, and the collapsible sidebar itself.

use leptos::*;
use leptos_router::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::state::global::GlobalState;

/// Viewport width at or below which an outside click closes the sidebar
const NARROW_VIEWPORT_PX: f64 = 768.0;

/// Top navigation bar with brand and sidebar toggler
#[component]
pub fn TopBar() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let sidebar_open = state.sidebar_open;

    view! {
        <header class="navbar navbar-dark bg-dark sticky-top flex-md-nowrap p-0 shadow">
            <button
                id="sidebar-toggle"
                class="navbar-toggler d-md-none m-2"
                type="button"
                aria-label="Toggle navigation"
                on:click=move |_| sidebar_open.update(|open| *open = !*open)
            >
                <span class="navbar-toggler-icon"></span>
            </button>
            <A href="/" class="navbar-brand px-3">
                <i class="bi bi-journal-text me-2"></i>
                "Financial Ledger"
            </A>
        </header>
    }
}

/// Collapsible sidebar navigation
#[component]
pub fn Sidebar() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let sidebar_open = state.sidebar_open;

    install_outside_click_close(sidebar_open);

    view! {
        <nav
            id="sidebar"
            class="col-md-3 col-lg-2 d-md-block bg-dark sidebar collapse"
            class:show=move || sidebar_open.get()
        >
            <div class="position-sticky pt-3">
                <ul class="nav flex-column">
                    <SidebarLink href="/" icon="bi-speedometer2" label="Dashboard" />
                    <SidebarLink href="/transactions" icon="bi-table" label="Transactions" />
                    <SidebarLink href="/transactions/add" icon="bi-plus-circle" label="Add Transaction" />
                </ul>
            </div>
        </nav>
    }
}

/// Individual sidebar link
#[component]
fn SidebarLink(
    href: &'static str,
    icon: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <li class="nav-item">
            <A href=href class="nav-link text-white" active_class="active">
                <i class=format!("bi {} me-2", icon)></i>
                {label}
            </A>
        </li>
    }
}

/// Close the sidebar when a click lands outside it on narrow viewports
fn install_outside_click_close(sidebar_open: RwSignal<bool>) {
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(document) => document,
        None => return,
    };

    let on_click = Closure::wrap(Box::new(move |event: web_sys::MouseEvent| {
        if !sidebar_open.get_untracked() {
            return;
        }

        let narrow = web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|w| w.as_f64())
            .map(|w| w <= NARROW_VIEWPORT_PX)
            .unwrap_or(false);
        if !narrow {
            return;
        }

        if click_landed_outside(&event) {
            sidebar_open.set(false);
        }
    }) as Box<dyn FnMut(web_sys::MouseEvent)>);

    if document
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .is_err()
    {
        web_sys::console::error_1(&"Failed to register the sidebar close listener".into());
    }
    on_click.forget();
}

/// Whether the click target sits outside both the sidebar and its toggler
fn click_landed_outside(event: &web_sys::MouseEvent) -> bool {
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(document) => document,
        None => return false,
    };

    let target = match event.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok()) {
        Some(target) => target,
        None => return false,
    };

    for id in ["sidebar", "sidebar-toggle"] {
        if let Some(element) = document.get_element_by_id(id) {
            if element.contains(Some(&target)) {
                return false;
            }
        }
    }

    true
}
