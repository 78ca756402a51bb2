//! Form Building Blocks
//!
//! Shared input styling, labels and submit button.

use leptos::*;

pub const INPUT_CLASS: &str = "w-full bg-gray-700 rounded-lg px-4 py-3 text-white \
                               border border-gray-600 focus:border-primary-500 focus:outline-none";

#[component]
pub fn Labeled(label: &'static str, children: Children) -> impl IntoView {
    view! {
        <label class="block">
            <span class="block text-sm text-gray-400 mb-2">{label}</span>
            {children()}
        </label>
    }
}

#[component]
pub fn SubmitButton(
    label: &'static str,
    busy_label: &'static str,
    submitting: ReadSignal<bool>,
) -> impl IntoView {
    view! {
        <button
            type="submit"
            disabled=move || submitting.get()
            class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                   disabled:cursor-not-allowed rounded-lg py-3 font-semibold
                   transition-colors flex items-center justify-center space-x-2"
        >
            {move || if submitting.get() {
                view! {
                    <div class="loading-spinner w-5 h-5" />
                    <span>{busy_label}</span>
                }.into_view()
            } else {
                view! { <span>{label}</span> }.into_view()
            }}
        </button>
    }
}
