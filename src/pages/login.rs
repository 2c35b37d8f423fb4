//! Login Page
//!
//! Username and password sign-in against the session endpoint.

use leptos::*;
use leptos_router::*;

use crate::api::client;
use crate::components::PasswordInput;
use crate::state::global::GlobalState;

/// Login page component
#[component]
pub fn Login() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let username = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let (remember, set_remember) = create_signal(false);
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let username_value = username.get_untracked().trim().to_string();
        let password_value = password.get_untracked();

        if username_value.is_empty() || password_value.is_empty() {
            state.show_error("Please enter your username and password.");
            return;
        }

        set_submitting.set(true);

        let state = state.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match client::login(&username_value, &password_value, remember.get_untracked()).await {
                Ok(()) => {
                    state.show_success("Welcome back!");
                    navigate("/", Default::default());
                }
                Err(e) => {
                    state.show_error(&e);
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="row justify-content-center">
            <div class="col-md-5 col-lg-4">
                <div class="card shadow-sm mt-5">
                    <div class="card-body p-4">
                        <h1 class="h4 mb-3 text-center">"Sign In"</h1>

                        <form on:submit=on_submit>
                            <div class="mb-3">
                                <label class="form-label" for="username">"Username"</label>
                                <input
                                    type="text"
                                    id="username"
                                    class="form-control"
                                    autocomplete="username"
                                    prop:value=move || username.get()
                                    on:input=move |ev| username.set(event_target_value(&ev))
                                />
                            </div>

                            <div class="mb-3">
                                <label class="form-label" for="password">"Password"</label>
                                <PasswordInput value=password />
                            </div>

                            <div class="form-check mb-3">
                                <input
                                    type="checkbox"
                                    id="remember"
                                    class="form-check-input"
                                    prop:checked=move || remember.get()
                                    on:change=move |ev| set_remember.set(event_target_checked(&ev))
                                />
                                <label class="form-check-label" for="remember">"Remember me"</label>
                            </div>

                            <button
                                type="submit"
                                class="btn btn-danger w-100"
                                disabled=move || submitting.get()
                            >
                                {move || if submitting.get() { "Signing in..." } else { "Sign In" }}
                            </button>
                        </form>
                    </div>
                </div>
            </div>
        </div>
    }
}
