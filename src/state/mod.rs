//! State Management
//!
//! Session, ledger cache, form inputs and display toggles.

pub mod app;
pub mod forms;
pub mod store;

pub use app::{today, AppState, AuthTab, EditState, Notice, NoticeKind, Screen, Session};
pub use forms::{parse_decimal, BetForm, FormError, LoginForm, RegisterForm};
pub use store::{SharedState, Store};
