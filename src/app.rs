//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::{AlertBanners, Sidebar, TopBar};
use crate::pages::{AddTransaction, Dashboard, EditTransaction, Login, Transactions};
use crate::state::error_hook::install_error_hook;
use crate::state::global::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    // Route uncaught script errors into the error banner
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    install_error_hook(state);

    view! {
        <Router>
            <TopBar />

            <div class="container-fluid">
                <div class="row">
                    <Sidebar />

                    // Main content area
                    <main class="col-md-9 ms-sm-auto col-lg-10 px-md-4 py-4">
                        <Routes>
                            <Route path="/" view=Dashboard />
                            <Route path="/transactions" view=Transactions />
                            <Route path="/transactions/add" view=AddTransaction />
                            <Route path="/transactions/:id/edit" view=EditTransaction />
                            <Route path="/login" view=Login />
                            <Route path="/*any" view=NotFound />
                        </Routes>
                    </main>
                </div>
            </div>

            // Flash banners
            <AlertBanners />
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="text-center py-5">
            <i class="bi bi-search display-3 text-muted"></i>
            <h1 class="h3 mt-3 mb-2">"Page Not Found"</h1>
            <p class="text-muted mb-4">"The page you're looking for doesn't exist."</p>
            <A href="/" class="btn btn-danger">"Go to Dashboard"</A>
        </div>
    }
}
