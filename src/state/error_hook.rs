//! Global Error Hook
//!
//! Window-level listener that turns uncaught script errors into a toast.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::ErrorEvent;

use super::global::GlobalState;

/// Message shown for errors nothing else caught
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred. Please try again.";

/// Register the window-level error listener. Call once from the app root.
pub fn install_error_hook(state: GlobalState) {
    let window = match web_sys::window() {
        Some(window) => window,
        None => return,
    };

    let on_error = Closure::wrap(Box::new(move |event: ErrorEvent| {
        let detail = event.error();
        let detail = if detail.is_undefined() {
            event.message().into()
        } else {
            detail
        };
        web_sys::console::error_2(&"An error occurred:".into(), &detail);

        state.show_error(UNEXPECTED_ERROR);
    }) as Box<dyn FnMut(ErrorEvent)>);

    if window
        .add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref())
        .is_err()
    {
        web_sys::console::error_1(&"Failed to register the global error listener".into());
    }
    on_error.forget();
}
