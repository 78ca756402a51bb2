//! App Root Component
//!
//! Owns the application state, restores any existing session, and switches
//! between the login and main screens.

use apostas::state::Screen;
use leptos::*;

use crate::components::Toast;
use crate::pages::{Dashboard, LoginScreen};
use crate::state::provide_app_context;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let ctx = provide_app_context();

    // Silent session restore; failure just leaves the login screen up
    ctx.spawn(|controller| async move {
        controller.probe_session().await;
    });

    let screen = create_memo(move |_| ctx.state.with(|s| s.screen));

    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col">
            {move || match screen.get() {
                Screen::Login => view! { <LoginScreen /> }.into_view(),
                Screen::Main => view! { <Dashboard /> }.into_view(),
            }}

            <Toast />
        </div>
    }
}
