//! Dashboard Page
//!
//! Main screen: summary, new-bet panel, ledger and the edit modal.

use leptos::*;

use crate::components::{EditModal, EntryForm, Header, Ledger, SummaryCards};

#[component]
pub fn Dashboard() -> impl IntoView {
    view! {
        <Header />
        <main class="flex-1 container mx-auto px-4 py-8 space-y-8">
            <section>
                <h2 class="text-lg font-semibold mb-4">"Resumo"</h2>
                <SummaryCards />
            </section>
            <EntryForm />
            <Ledger />
        </main>
        <EditModal />
    }
}
