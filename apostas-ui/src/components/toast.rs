//! Toast Notification Component
//!
//! Shows the controller's latest notice and clears it after a delay.

use apostas::state::{Notice, NoticeKind};
use leptos::*;

use crate::state::use_app;

const INFO_TIMEOUT_MS: u32 = 3000;
const ERROR_TIMEOUT_MS: u32 = 5000;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_app().state;
    let notice = create_memo(move |_| state.with(|s| s.notice.clone()));

    // Auto-dismiss, unless a newer notice replaced this one
    create_effect(move |_| {
        if let Some(current) = notice.get() {
            let delay = match current.kind {
                NoticeKind::Info => INFO_TIMEOUT_MS,
                NoticeKind::Error => ERROR_TIMEOUT_MS,
            };
            gloo_timers::callback::Timeout::new(delay, move || {
                state.update(|s| {
                    if s.notice.as_ref() == Some(&current) {
                        s.dismiss_notice();
                    }
                });
            })
            .forget();
        }
    });

    view! {
        <div class="fixed bottom-6 right-4 z-50 space-y-2">
            {move || notice.get().map(|n| view! {
                <ToastMessage
                    notice=n
                    on_dismiss=move |_| state.update(|s| s.dismiss_notice())
                />
            })}
        </div>
    }
}

#[component]
fn ToastMessage(
    notice: Notice,
    on_dismiss: impl Fn(web_sys::MouseEvent) + 'static,
) -> impl IntoView {
    let (icon, bg_class) = match notice.kind {
        NoticeKind::Info => ("✓", "bg-green-600"),
        NoticeKind::Error => ("✕", "bg-red-600"),
    };

    view! {
        <div
            role="alert"
            on:click=on_dismiss
            class=format!(
                "flex items-center space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg \
                 cursor-pointer transform transition-all duration-300 ease-out animate-slide-in",
                bg_class
            )
        >
            <span class="text-lg">{icon}</span>
            <span class="text-sm font-medium">{notice.message}</span>
        </div>
    }
}
