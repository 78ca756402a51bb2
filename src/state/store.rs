//! State Access
//!
//! The controller reaches [`AppState`] through a [`Store`] so the same
//! logic can drive a `RefCell` natively and a reactive signal in the
//! browser. Closures never span an await point.

use std::cell::RefCell;
use std::rc::Rc;

use super::app::AppState;

pub trait Store {
    fn read<R>(&self, f: impl FnOnce(&AppState) -> R) -> R;

    fn write(&self, f: impl FnOnce(&mut AppState));
}

/// Single-threaded shared state for native front ends and tests
pub type SharedState = Rc<RefCell<AppState>>;

impl Store for Rc<RefCell<AppState>> {
    fn read<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(&self.borrow())
    }

    fn write(&self, f: impl FnOnce(&mut AppState)) {
        f(&mut self.borrow_mut())
    }
}
