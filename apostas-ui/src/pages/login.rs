//! Login Page
//!
//! Login and registration tabs shown while no session exists.

use apostas::state::AuthTab;
use leptos::*;

use crate::components::form::{Labeled, SubmitButton, INPUT_CLASS};
use crate::state::use_app;

/// Login screen with login/register tabs
#[component]
pub fn LoginScreen() -> impl IntoView {
    let state = use_app().state;
    let tab = create_memo(move |_| state.with(|s| s.auth_tab));

    view! {
        <div class="flex-1 flex items-center justify-center px-4">
            <div class="w-full max-w-md bg-gray-800 rounded-xl p-8 shadow-lg">
                <div class="text-center mb-6">
                    <span class="text-4xl">"🎯"</span>
                    <h1 class="text-2xl font-bold mt-2">"Apostas"</h1>
                    <p class="text-gray-400 text-sm">"Controle pessoal de apostas"</p>
                </div>

                <div class="flex mb-6 bg-gray-700 rounded-lg p-1">
                    <TabButton
                        label="Entrar"
                        active=Signal::derive(move || tab.get() == AuthTab::Login)
                        on_click=move |_| state.update(|s| s.show_login_tab())
                    />
                    <TabButton
                        label="Registrar"
                        active=Signal::derive(move || tab.get() == AuthTab::Register)
                        on_click=move |_| state.update(|s| s.show_register_tab())
                    />
                </div>

                {move || match tab.get() {
                    AuthTab::Login => view! { <LoginForm /> }.into_view(),
                    AuthTab::Register => view! { <RegisterForm /> }.into_view(),
                }}
            </div>
        </div>
    }
}

#[component]
fn TabButton(
    label: &'static str,
    active: Signal<bool>,
    on_click: impl Fn(web_sys::MouseEvent) + 'static,
) -> impl IntoView {
    view! {
        <button
            type="button"
            on:click=on_click
            class=move || {
                let base = "flex-1 py-2 rounded-md text-sm font-medium transition-colors";
                if active.get() {
                    format!("{} bg-gray-600 text-white", base)
                } else {
                    format!("{} text-gray-400 hover:text-white", base)
                }
            }
        >
            {label}
        </button>
    }
}

#[component]
fn LoginForm() -> impl IntoView {
    let ctx = use_app();
    let state = ctx.state;
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_submitting.set(true);
        ctx.spawn(move |controller| async move {
            let _ = controller.login().await;
            // The form may already be unmounted after a successful login
            let _ = set_submitting.try_set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-4">
            <Labeled label="Usuário">
                <input
                    type="text"
                    required
                    autocomplete="username"
                    prop:value=move || state.with(|s| s.login_form.username.clone())
                    on:input=move |ev| state.update(|s| s.login_form.username = event_target_value(&ev))
                    class=INPUT_CLASS
                />
            </Labeled>
            <Labeled label="Senha">
                <input
                    type="password"
                    required
                    autocomplete="current-password"
                    prop:value=move || state.with(|s| s.login_form.password.clone())
                    on:input=move |ev| state.update(|s| s.login_form.password = event_target_value(&ev))
                    class=INPUT_CLASS
                />
            </Labeled>
            <SubmitButton label="Entrar" busy_label="Entrando..." submitting=submitting />
        </form>
    }
}

#[component]
fn RegisterForm() -> impl IntoView {
    let ctx = use_app();
    let state = ctx.state;
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_submitting.set(true);
        ctx.spawn(move |controller| async move {
            let _ = controller.register().await;
            // Success switches back to the login tab, unmounting this form
            let _ = set_submitting.try_set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-4">
            <Labeled label="Usuário">
                <input
                    type="text"
                    required
                    prop:value=move || state.with(|s| s.register_form.username.clone())
                    on:input=move |ev| state.update(|s| s.register_form.username = event_target_value(&ev))
                    class=INPUT_CLASS
                />
            </Labeled>
            <Labeled label="Email">
                <input
                    type="email"
                    required
                    prop:value=move || state.with(|s| s.register_form.email.clone())
                    on:input=move |ev| state.update(|s| s.register_form.email = event_target_value(&ev))
                    class=INPUT_CLASS
                />
            </Labeled>
            <Labeled label="Senha">
                <input
                    type="password"
                    required
                    autocomplete="new-password"
                    prop:value=move || state.with(|s| s.register_form.password.clone())
                    on:input=move |ev| state.update(|s| s.register_form.password = event_target_value(&ev))
                    class=INPUT_CLASS
                />
            </Labeled>
            <SubmitButton label="Registrar" busy_label="Registrando..." submitting=submitting />
        </form>
    }
}
