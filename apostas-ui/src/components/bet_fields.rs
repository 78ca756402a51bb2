//! Bet Form Fields
//!
//! The date/stake/odds/final-value inputs shared by the entry form and the
//! edit modal, with the live predicted-total preview.

use apostas::state::BetForm;
use leptos::*;

use super::form::{Labeled, INPUT_CLASS};

/// Which input changed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BetField {
    Data,
    Entrada,
    Odd,
    ValorFinal,
}

impl BetField {
    pub fn apply(self, form: &mut BetForm, value: String) {
        match self {
            BetField::Data => form.data = value,
            BetField::Entrada => form.entrada = value,
            BetField::Odd => form.odd = value,
            BetField::ValorFinal => form.valor_final = value,
        }
    }
}

#[component]
pub fn BetFields(
    #[prop(into)]
    form: Signal<BetForm>,
    #[prop(into)]
    on_change: Callback<(BetField, String)>,
) -> impl IntoView {
    let input = move |field: BetField| {
        move |ev: web_sys::Event| on_change.call((field, event_target_value(&ev)))
    };

    view! {
        <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
            <Labeled label="Data">
                <input
                    type="date"
                    required
                    prop:value=move || form.with(|f| f.data.clone())
                    on:input=input(BetField::Data)
                    class=INPUT_CLASS
                />
            </Labeled>
            <Labeled label="Entrada (R$)">
                <input
                    type="number"
                    step="0.01"
                    min="0"
                    required
                    prop:value=move || form.with(|f| f.entrada.clone())
                    on:input=input(BetField::Entrada)
                    class=INPUT_CLASS
                />
            </Labeled>
            <Labeled label="Odd">
                <input
                    type="number"
                    step="0.01"
                    min="1"
                    required
                    prop:value=move || form.with(|f| f.odd.clone())
                    on:input=input(BetField::Odd)
                    class=INPUT_CLASS
                />
            </Labeled>
            <Labeled label="Valor Final (R$)">
                <input
                    type="number"
                    step="0.01"
                    prop:value=move || form.with(|f| f.valor_final.clone())
                    on:input=input(BetField::ValorFinal)
                    class=INPUT_CLASS
                />
            </Labeled>
        </div>

        <div class="mt-4 text-sm text-gray-400">
            "Total previsto: "
            <span class="text-white font-semibold">{move || form.with(|f| f.preview_label())}</span>
        </div>
    }
}
