//! Ledger Table
//!
//! Every bet of the session user, with per-row edit and delete.

use apostas::model::ApostaId;
use apostas::view::{ApostaRow, LedgerView, Tone};
use leptos::*;

use crate::state::use_app;

#[component]
pub fn Ledger() -> impl IntoView {
    let state = use_app().state;
    let ledger = create_memo(move |_| state.with(|s| LedgerView::build(&s.apostas)));

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Histórico"</h2>
            {move || match ledger.get() {
                LedgerView::Empty(message) => view! {
                    <p class="text-center text-gray-400 py-8">{message}</p>
                }.into_view(),
                LedgerView::Rows(rows) => view! {
                    <div class="overflow-x-auto">
                        <table class="w-full text-sm">
                            <thead>
                                <tr class="text-left text-gray-400 border-b border-gray-700">
                                    <th class="py-2 pr-4">"Data"</th>
                                    <th class="py-2 pr-4">"Entrada"</th>
                                    <th class="py-2 pr-4">"Odd"</th>
                                    <th class="py-2 pr-4">"Total Previsto"</th>
                                    <th class="py-2 pr-4">"Valor Final"</th>
                                    <th class="py-2">"Ações"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {rows.into_iter().map(|row| view! { <LedgerRow row=row /> }).collect_view()}
                            </tbody>
                        </table>
                    </div>
                }.into_view(),
            }}
        </section>
    }
}

#[component]
fn LedgerRow(row: ApostaRow) -> impl IntoView {
    let ctx = use_app();
    let id: ApostaId = row.id;

    let on_edit = move |_| ctx.state.update(|s| {
        s.open_edit(id);
    });

    let on_delete = move |_| {
        ctx.spawn(move |controller| async move {
            let _ = controller.delete_bet(id).await;
        });
    };

    let final_class = match row.valor_final_tone {
        Tone::Positive => "py-2 pr-4 font-semibold text-green-400 positive",
        Tone::Negative => "py-2 pr-4 font-semibold text-red-400 negative",
    };

    view! {
        <tr class="border-b border-gray-700 hover:bg-gray-750">
            <td class="py-2 pr-4">{row.data}</td>
            <td class="py-2 pr-4">{row.entrada}</td>
            <td class="py-2 pr-4">{row.odd}</td>
            <td class="py-2 pr-4">{row.total_previsto}</td>
            <td class=final_class>{row.valor_final}</td>
            <td class="py-2 space-x-2 whitespace-nowrap">
                <button
                    type="button"
                    on:click=on_edit
                    class="px-3 py-1 rounded bg-gray-700 hover:bg-gray-600 text-white"
                >
                    "Editar"
                </button>
                <button
                    type="button"
                    on:click=on_delete
                    class="px-3 py-1 rounded bg-red-700 hover:bg-red-600 text-white"
                >
                    "Excluir"
                </button>
            </td>
        </tr>
    }
}
