//! Header Component
//!
//! Brand, greeting and logout.

use leptos::*;

use crate::state::use_app;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app();
    let state = ctx.state;
    let username = create_memo(move |_| state.with(|s| s.username().to_string()));

    let on_logout = move |_| {
        ctx.spawn(|controller| async move {
            controller.logout().await;
        });
    };

    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <div class="flex items-center space-x-3">
                        <span class="text-2xl">"🎯"</span>
                        <span class="text-xl font-bold text-white">"Apostas"</span>
                    </div>

                    <div class="flex items-center space-x-4">
                        <span class="text-gray-300">"Olá, " {move || username.get()}</span>
                        <button
                            type="button"
                            on:click=on_logout
                            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
                        >
                            "Sair"
                        </button>
                    </div>
                </div>
            </div>
        </nav>
    }
}
