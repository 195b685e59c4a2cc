//! The `use_workflow` hook: one submit/resolve driver for all four pages.
//!
//! Wraps a core [`Phase`] signal together with the pending deferred task and
//! the toast surface. A page calls [`WorkflowHandle::submit`] with its delay
//! and its resolution policy; the hook moves the phase to `Submitting`,
//! schedules the policy behind the delay, pushes the resolution's notice when
//! it lands, and cancels the pending task if the page unmounts first.

use attestra_core::error::ValidationError;
use attestra_core::workflow::{Phase, Resolution};
use dioxus::prelude::*;

use crate::components::toast::{use_toasts, Toasts};
use crate::utils::{spawn_after, SignalExt, TaskHandle};

/// Copyable handle to one workflow instance.
pub struct WorkflowHandle<P: Clone + 'static> {
    phase: Signal<Phase<P>>,
    pending: Signal<Option<TaskHandle>>,
    toasts: Toasts,
}

impl<P: Clone + 'static> Clone for WorkflowHandle<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: Clone + 'static> Copy for WorkflowHandle<P> {}

/// Embed a workflow instance in the calling component.
pub fn use_workflow<P: Clone + 'static>() -> WorkflowHandle<P> {
    let phase = use_signal(Phase::default);
    let pending = use_signal(|| None::<TaskHandle>);
    let toasts = use_toasts();

    // Navigating away abandons the in-flight resolution instead of letting it
    // write into unmounted state.
    use_drop(move || {
        if let Some(task) = pending.peek().as_ref() {
            task.cancel();
        }
    });

    WorkflowHandle {
        phase,
        pending,
        toasts,
    }
}

impl<P: Clone + 'static> WorkflowHandle<P> {
    pub fn is_submitting(self) -> bool {
        self.phase.read().is_submitting()
    }

    /// The current resolution, cloned out of the signal for rendering.
    pub fn resolution(self) -> Option<Resolution<P>> {
        self.phase.read().resolution().cloned()
    }

    /// Accept a submission: enter `Submitting` and schedule `resolver` to run
    /// after `delay_ms`. When it fires, the resolution's notice is toasted and
    /// the phase moves to `Resolved`.
    pub fn submit<F>(self, delay_ms: u64, resolver: F)
    where
        F: FnOnce() -> Resolution<P> + 'static,
    {
        let mut phase = self.phase;
        let mut pending = self.pending;
        let toasts = self.toasts;

        phase.mutate(|p| p.begin());

        let handle = spawn_after(delay_ms, move || {
            let resolution = resolver();
            toasts.push(resolution.notice.clone());
            let mut phase = phase;
            phase.mutate(|p| p.resolve(resolution));
        });
        pending.set(Some(handle));
    }

    /// Surface a precondition failure. No state transition, one toast.
    pub fn reject(self, error: ValidationError) {
        self.toasts.push(error.notice());
    }

    /// Explicit reset back to `Idle`, abandoning any pending task.
    pub fn reset(self) {
        if let Some(task) = self.pending.peek().as_ref() {
            task.cancel();
        }
        let mut pending = self.pending;
        pending.set(None);
        let mut phase = self.phase;
        phase.mutate(|p| p.reset());
    }
}
