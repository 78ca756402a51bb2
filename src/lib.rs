//! # Apostas
//!
//! Client for a personal betting ledger: login and registration, a ledger of
//! bets, and a dashboard summary, kept in sync with a remote REST API.
//!
//! ## Modules
//!
//! - [`model`]: Wire records (bets, summary, user)
//! - [`api`]: Typed API client over a pluggable [`Transport`](api::Transport)
//! - [`state`]: Application state, forms and the [`Store`](state::Store) seam
//! - [`controller`]: Maps user intents onto requests and state transitions
//! - [`view`]: Render-ready projections of the ledger and summary
//! - [`format`]: pt-BR currency and date formatting
//! - `config`: File and environment configuration (native only)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use apostas::api::HttpTransport;
//! use apostas::controller::{AlwaysConfirm, Controller};
//! use apostas::state::{AppState, SharedState, Store};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let state: SharedState = Rc::new(RefCell::new(AppState::default()));
//!     let transport = HttpTransport::new("http://localhost:5000")?;
//!     let controller = Controller::new(transport, state.clone(), AlwaysConfirm(false));
//!
//!     state.write(|s| {
//!         s.login_form.username = "ana".into();
//!         s.login_form.password = "secret".into();
//!     });
//!     controller.login().await?;
//!
//!     println!("{} bets", state.read(|s| s.apostas.len()));
//!     controller.logout().await;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod controller;
pub mod format;
pub mod model;
pub mod state;
pub mod view;

#[cfg(feature = "native")]
pub mod config;

pub use api::{ApiClient, ApiError, ApiResult, Transport};
pub use controller::{ActionError, ActionResult, AlwaysConfirm, Confirm, Controller};
pub use model::{Aposta, ApostaId, ApostaPayload, Resumo, User};
pub use state::{AppState, Notice, Screen, Store};
pub use view::{LedgerView, SummaryView, Tone};

#[cfg(feature = "native")]
pub use config::{Config, ConfigError, LoggingConfig};
