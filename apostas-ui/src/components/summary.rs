//! Summary Cards
//!
//! The four aggregate figures at the top of the main screen.

use apostas::view::{SummaryView, Tone};
use leptos::*;

use crate::state::use_app;

#[component]
pub fn SummaryCards() -> impl IntoView {
    let state = use_app().state;

    // Zeros until the first summary arrives
    let summary = create_memo(move |_| {
        state.with(|s| s.resumo.as_ref().map(SummaryView::from).unwrap_or_default())
    });

    view! {
        <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
            <SummaryCard
                label="Total Investido"
                value=Signal::derive(move || summary.with(|v| v.total_investido.clone()))
            />
            <SummaryCard
                label="Retorno Líquido"
                value=Signal::derive(move || summary.with(|v| v.total_retorno_liquido.clone()))
                tone=Signal::derive(move || Some(summary.with(|v| v.retorno_tone)))
            />
            <SummaryCard
                label="Total Previsto"
                value=Signal::derive(move || summary.with(|v| v.total_previsto.clone()))
            />
            <SummaryCard
                label="Apostas"
                value=Signal::derive(move || summary.with(|v| v.quantidade_apostas.clone()))
            />
        </div>
    }
}

fn tone_text_class(tone: Option<Tone>) -> String {
    match tone {
        Some(Tone::Positive) => format!("text-green-400 {}", Tone::Positive.css_class()),
        Some(Tone::Negative) => format!("text-red-400 {}", Tone::Negative.css_class()),
        None => "text-white".to_string(),
    }
}

#[component]
fn SummaryCard(
    label: &'static str,
    value: Signal<String>,
    #[prop(optional, into)]
    tone: MaybeSignal<Option<Tone>>,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700">
            <span class="text-gray-400 text-sm">{label}</span>
            <div class=move || format!("text-2xl font-bold mt-2 {}", tone_text_class(tone.get()))>
                {move || value.get()}
            </div>
        </div>
    }
}
