//! Extension trait for Dioxus signals.
//!
//! Signal mutation otherwise reads as clone, edit, write back at every call
//! site:
//!
//! ```ignore
//! let mut session = session_signal();
//! session.records.clear();
//! session_signal.set(session);
//! ```
//!
//! `SignalExt::mutate` folds that into one call, and `try_mutate` adds the
//! rollback the file gate needs: if the closure errors, the signal keeps its
//! previous value.

use dioxus::prelude::*;

/// Mutation helpers for `Signal<T>`.
pub trait SignalExt<T: Clone + 'static> {
    /// Clone the current value, let `f` edit it, write it back.
    fn mutate<F>(&mut self, f: F)
    where
        F: FnOnce(&mut T);

    /// Like [`SignalExt::mutate`], but the write-back only happens when `f`
    /// returns `Ok`. On `Err` the signal is untouched.
    fn try_mutate<F, E>(&mut self, f: F) -> Result<(), E>
    where
        F: FnOnce(&mut T) -> Result<(), E>;
}

impl<T: Clone + 'static> SignalExt<T> for Signal<T> {
    fn mutate<F>(&mut self, f: F)
    where
        F: FnOnce(&mut T),
    {
        let mut value = self.peek().clone();
        f(&mut value);
        self.set(value);
    }

    fn try_mutate<F, E>(&mut self, f: F) -> Result<(), E>
    where
        F: FnOnce(&mut T) -> Result<(), E>,
    {
        let mut value = self.peek().clone();
        f(&mut value)?;
        self.set(value);
        Ok(())
    }
}
