//! Tab Components
//!
//! Tab headers whose active selection survives page loads via local
//! storage.

use leptos::*;

use crate::state::storage;

/// Tab headers; clicking a tab activates it and remembers the choice
#[component]
pub fn TabNav(
    /// (fragment, label) pairs; the first entry is the default
    tabs: &'static [(&'static str, &'static str)],
    active_tab: RwSignal<String>,
) -> impl IntoView {
    view! {
        <ul class="nav nav-tabs mb-3">
            {tabs.iter().map(|&(fragment, label)| view! {
                <li class="nav-item">
                    <button
                        type="button"
                        class="nav-link"
                        class:active=move || active_tab.get() == fragment
                        on:click=move |_| {
                            active_tab.set(fragment.to_string());
                            storage::set_last_tab(fragment);
                        }
                    >
                        {label}
                    </button>
                </li>
            }).collect::<Vec<_>>()}
        </ul>
    }
}

/// The tab to activate on load: the remembered one when it still exists,
/// the first otherwise
pub fn initial_tab(tabs: &'static [(&'static str, &'static str)]) -> String {
    let fragments: Vec<&str> = tabs.iter().map(|&(fragment, _)| fragment).collect();
    let default = fragments.first().copied().unwrap_or("");
    storage::restore_tab(storage::last_tab().as_deref(), &fragments, default)
}
