//! Tooltip and Popover Components
//!
//! Hover tooltips and click-toggled popovers, emitting the framework's
//! markup and driven entirely from component state.

use leptos::*;

/// Wraps its children with a hover tooltip
#[component]
pub fn Tooltip(
    #[prop(into)]
    text: String,
    children: Children,
) -> impl IntoView {
    let (visible, set_visible) = create_signal(false);

    view! {
        <span
            class="position-relative d-inline-block"
            on:mouseenter=move |_| set_visible.set(true)
            on:mouseleave=move |_| set_visible.set(false)
        >
            {children()}
            {move || visible.get().then(|| view! {
                <span
                    class="tooltip bs-tooltip-top show position-absolute bottom-100 start-50 translate-middle-x mb-1"
                    role="tooltip"
                >
                    <span class="tooltip-inner">{text.clone()}</span>
                </span>
            })}
        </span>
    }
}

/// Click-toggled popover with a header and body
#[component]
pub fn Popover(
    #[prop(into)]
    title: String,
    #[prop(into)]
    content: String,
    children: Children,
) -> impl IntoView {
    let (visible, set_visible) = create_signal(false);

    view! {
        <span class="position-relative d-inline-block">
            <span
                role="button"
                on:click=move |_| set_visible.update(|v| *v = !*v)
            >
                {children()}
            </span>
            {move || visible.get().then(|| view! {
                <div
                    class="popover bs-popover-top show position-absolute bottom-100 start-50 translate-middle-x mb-1"
                    role="tooltip"
                >
                    <h3 class="popover-header">{title.clone()}</h3>
                    <div class="popover-body">{content.clone()}</div>
                </div>
            })}
        </span>
    }
}
