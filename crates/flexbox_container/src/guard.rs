//! Re-entrancy guard for layout passes.
//!
//! Requests made while a pass runs are coalesced into one pending request
//! that is delivered after the pass ends, never inside it.

use core::cell::{Cell, RefCell};
use core::fmt;
use std::rc::Rc;

use anyhow::{Result, bail};
use log::trace;

/// Whether a container is currently inside a pass.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum LayoutState {
    #[default]
    Idle,
    InProgress,
}

/// Host callback asked to schedule a new pass.
type Trigger = Box<dyn Fn()>;

#[derive(Default)]
struct GuardInner {
    state: Cell<LayoutState>,
    /// A request arrived during the current pass.
    pending: Cell<bool>,
    /// A request was delivered and no pass has completed since.
    needs_layout: Cell<bool>,
    trigger: RefCell<Option<Trigger>>,
}

/// Shared handle to a container's layout state.
///
/// Cloning yields another handle to the same state, so hosts can keep one
/// and call [`LayoutGuard::request_layout`] from placement callbacks.
#[derive(Clone, Default)]
pub struct LayoutGuard {
    inner: Rc<GuardInner>,
}

impl fmt::Debug for LayoutGuard {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("LayoutGuard")
            .field("state", &self.inner.state.get())
            .field("pending", &self.inner.pending.get())
            .field("needs_layout", &self.inner.needs_layout.get())
            .field("has_trigger", &self.inner.trigger.borrow().is_some())
            .finish()
    }
}

impl LayoutGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the host's "schedule a pass" callback.
    ///
    /// The callback must not replace the trigger while it runs.
    pub fn set_trigger(&self, trigger: impl Fn() + 'static) {
        *self.inner.trigger.borrow_mut() = Some(Box::new(trigger));
    }

    pub fn clear_trigger(&self) {
        *self.inner.trigger.borrow_mut() = None;
    }

    pub fn state(&self) -> LayoutState {
        self.inner.state.get()
    }

    /// True while a request made during the running pass waits for its end.
    pub fn is_pending(&self) -> bool {
        self.inner.pending.get()
    }

    /// True when a request has been delivered and no pass has completed since.
    ///
    /// A pass that fails leaves this set.
    pub fn needs_layout(&self) -> bool {
        self.inner.needs_layout.get()
    }

    /// Ask for a new pass.
    ///
    /// Delivered to the host immediately when idle. During a pass the request
    /// is held and delivered once, after the pass finishes.
    pub fn request_layout(&self) {
        match self.inner.state.get() {
            LayoutState::InProgress => {
                trace!(target: "flexbox::container", "layout requested during pass, deferred");
                self.inner.pending.set(true);
            }
            LayoutState::Idle => self.deliver(),
        }
    }

    /// Enter a pass. The returned scope leaves it when dropped.
    ///
    /// # Errors
    /// Returns an error when a pass is already running on this container.
    pub fn begin_pass(&self) -> Result<PassScope> {
        if self.inner.state.get() == LayoutState::InProgress {
            bail!("layout pass already in progress");
        }
        self.inner.state.set(LayoutState::InProgress);
        Ok(PassScope {
            inner: Rc::clone(&self.inner),
        })
    }

    fn deliver(&self) {
        deliver(&self.inner);
    }
}

fn deliver(inner: &GuardInner) {
    inner.needs_layout.set(true);
    if let Some(trigger) = inner.trigger.borrow().as_ref() {
        trigger();
    }
}

/// Marks a running pass; dropping it returns the guard to idle.
#[must_use = "the pass ends when the scope is dropped"]
pub struct PassScope {
    inner: Rc<GuardInner>,
}

impl PassScope {
    /// Mark the pass as applied; earlier requests are satisfied.
    ///
    /// Requests raised during the pass are still delivered on drop.
    pub fn complete(&self) {
        self.inner.needs_layout.set(false);
    }
}

impl Drop for PassScope {
    fn drop(&mut self) {
        self.inner.state.set(LayoutState::Idle);
        if self.inner.pending.replace(false) {
            trace!(target: "flexbox::container", "delivering layout request deferred by pass");
            deliver(&self.inner);
        }
    }
}
