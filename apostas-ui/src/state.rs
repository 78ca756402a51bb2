//! Reactive State
//!
//! One `RwSignal<AppState>` owned by the root component, and the controller
//! wired to it. Components pull both from context.

use apostas::controller::Controller;
use apostas::state::{AppState, Store};
use leptos::*;
use std::future::Future;

use crate::api::{get_api_base, BrowserConfirm, GlooTransport};

/// Adapts the app signal to the core `Store` seam
#[derive(Clone, Copy)]
pub struct SignalStore(pub RwSignal<AppState>);

impl Store for SignalStore {
    fn read<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        self.0.with_untracked(f)
    }

    fn write(&self, f: impl FnOnce(&mut AppState)) {
        self.0.update(f)
    }
}

pub type AppController = Controller<GlooTransport, SignalStore, BrowserConfirm>;

/// Handles provided to every component
#[derive(Clone, Copy)]
pub struct AppContext {
    pub state: RwSignal<AppState>,
    controller: StoredValue<AppController>,
}

impl AppContext {
    /// Run a controller action in the background
    pub fn spawn<F, Fut>(&self, action: F)
    where
        F: FnOnce(AppController) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        let controller = self.controller.get_value();
        spawn_local(action(controller));
    }
}

/// Create the app state and controller and provide them to the tree
pub fn provide_app_context() -> AppContext {
    let state = create_rw_signal(AppState::default());
    let controller = Controller::new(
        GlooTransport::new(get_api_base()),
        SignalStore(state),
        BrowserConfirm,
    );

    let ctx = AppContext {
        state,
        controller: store_value(controller),
    };
    provide_context(ctx);
    ctx
}

pub fn use_app() -> AppContext {
    use_context::<AppContext>().expect("AppContext not found")
}
