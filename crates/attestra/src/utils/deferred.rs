//! Cancellable deferred callbacks.
//!
//! Every simulated operation in the demo is "wait a fixed delay, then write a
//! resolution into page state". A bare timer would keep running after the
//! page unmounts and write into state nobody renders anymore; the handle
//! returned here lets the owner cancel the callback on teardown or on an
//! explicit reset.

use std::cell::Cell;
use std::rc::Rc;

use dioxus::core::Task;
use dioxus::prelude::spawn;

use crate::platform;

/// Handle to a scheduled callback.
///
/// Cancelling both stops the underlying task and, as a second line against a
/// timer that already elapsed, flags the callback so it never runs.
#[derive(Clone)]
pub struct TaskHandle {
    cancelled: Rc<Cell<bool>>,
    task: Task,
}

impl TaskHandle {
    /// Prevent the callback from running. Idempotent.
    pub fn cancel(&self) {
        self.cancelled.set(true);
        self.task.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

/// Run `callback` once, `delay_ms` milliseconds from now, unless the returned
/// handle is cancelled first.
pub fn spawn_after<F>(delay_ms: u64, callback: F) -> TaskHandle
where
    F: FnOnce() + 'static,
{
    let cancelled = Rc::new(Cell::new(false));
    let flag = Rc::clone(&cancelled);

    let task = spawn(async move {
        platform::sleep_ms(delay_ms).await;
        if !flag.get() {
            callback();
        }
    });

    TaskHandle { cancelled, task }
}
