//! Edit Modal
//!
//! Overlay for correcting a recorded bet. Clicking the backdrop closes it
//! without saving.

use apostas::state::{today, BetForm};
use leptos::*;

use super::bet_fields::{BetField, BetFields};
use super::form::SubmitButton;
use crate::state::use_app;

#[component]
pub fn EditModal() -> impl IntoView {
    let state = use_app().state;
    let open = create_memo(move |_| state.with(|s| s.edit.is_some()));

    view! {
        <Show when=move || open.get()>
            <div
                class="fixed inset-0 z-40 bg-black/60 flex items-center justify-center px-4"
                on:click=move |_| state.update(|s| s.close_edit())
            >
                <div
                    class="w-full max-w-2xl bg-gray-800 rounded-xl p-6 shadow-lg"
                    on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()
                >
                    <h2 class="text-xl font-semibold mb-4">"Editar Aposta"</h2>
                    <EditFields />
                </div>
            </div>
        </Show>
    }
}

#[component]
fn EditFields() -> impl IntoView {
    let ctx = use_app();
    let state = ctx.state;
    let form = create_memo(move |_| {
        state.with(|s| {
            s.edit
                .as_ref()
                .map(|e| e.form.clone())
                .unwrap_or_else(|| BetForm::new(today()))
        })
    });
    let (submitting, set_submitting) = create_signal(false);

    let on_change = move |(field, value): (BetField, String)| {
        state.update(|s| {
            if let Some(edit) = s.edit.as_mut() {
                field.apply(&mut edit.form, value);
            }
        });
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_submitting.set(true);
        ctx.spawn(move |controller| async move {
            let _ = controller.update_bet().await;
            let _ = set_submitting.try_set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-4">
            <BetFields form=form on_change=on_change />
            <div class="flex space-x-3">
                <button
                    type="button"
                    on:click=move |_| state.update(|s| s.close_edit())
                    class="flex-1 bg-gray-700 hover:bg-gray-600 text-white py-3 rounded-lg font-medium transition-colors"
                >
                    "Cancelar"
                </button>
                <div class="flex-1">
                    <SubmitButton label="Salvar" busy_label="Salvando..." submitting=submitting />
                </div>
            </div>
        </form>
    }
}
