//! New Bet Form
//!
//! Collapsible "Nova Aposta" panel bound to the entry form state.

use leptos::*;

use super::bet_fields::{BetField, BetFields};
use super::form::SubmitButton;
use crate::state::use_app;

#[component]
pub fn EntryForm() -> impl IntoView {
    let state = use_app().state;
    let open = create_memo(move |_| state.with(|s| s.entry_open));

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <div class="flex items-center justify-between">
                <h2 class="text-xl font-semibold">"Nova Aposta"</h2>
                <button
                    type="button"
                    on:click=move |_| state.update(|s| {
                        if s.entry_open {
                            s.hide_add_form();
                        } else {
                            s.show_add_form();
                        }
                    })
                    class="px-4 py-2 rounded-lg bg-primary-600 hover:bg-primary-700 text-white text-sm font-medium transition-colors"
                >
                    {move || if open.get() { "Fechar" } else { "+ Adicionar" }}
                </button>
            </div>

            <Show when=move || open.get()>
                <EntryFields />
            </Show>
        </section>
    }
}

#[component]
fn EntryFields() -> impl IntoView {
    let ctx = use_app();
    let state = ctx.state;
    let form = create_memo(move |_| state.with(|s| s.entry_form.clone()));
    let (submitting, set_submitting) = create_signal(false);

    let on_change = move |(field, value): (BetField, String)| {
        state.update(|s| field.apply(&mut s.entry_form, value));
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_submitting.set(true);
        ctx.spawn(move |controller| async move {
            let _ = controller.create_bet().await;
            // Success hides the panel, unmounting this form
            let _ = set_submitting.try_set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="mt-6 space-y-4">
            <BetFields form=form on_change=on_change />
            <div class="md:w-48">
                <SubmitButton label="Salvar" busy_label="Salvando..." submitting=submitting />
            </div>
        </form>
    }
}
