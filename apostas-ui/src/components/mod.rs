//! UI Components
//!
//! Reusable Leptos components for the main screen.

pub mod bet_fields;
pub mod edit_modal;
pub mod entry_form;
pub mod form;
pub mod header;
pub mod ledger;
pub mod summary;
pub mod toast;

pub use edit_modal::EditModal;
pub use entry_form::EntryForm;
pub use header::Header;
pub use ledger::Ledger;
pub use summary::SummaryCards;
pub use toast::Toast;
