//! The write-once module slot and the one-shot startup load.

use core::fmt;
use core::future::Future;
use std::cell::RefCell;
use std::rc::Rc;

use crate::error::LoadError;

enum LoadState<P> {
    Pending,
    Ready(P),
    Failed(String),
}

/// Snapshot of a handle's lifecycle, without the module itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleStatus {
    /// The load has not resolved yet.
    Pending,
    /// The module is loaded and callable.
    Ready,
    /// The load failed with the given message. Terminal; there is no retry.
    Failed(String),
}

/// A shared, write-once slot for the computation module.
///
/// The handle starts pending and is resolved exactly once, by [`fulfill`]
/// or [`fail`]. The model is single-threaded and event-driven, so the slot
/// is an `Rc<RefCell<..>>` rather than a lock. Controllers receive a clone
/// of the handle instead of reaching for a process-wide global.
///
/// [`fulfill`]: ModuleHandle::fulfill
/// [`fail`]: ModuleHandle::fail
pub struct ModuleHandle<P> {
    slot: Rc<RefCell<LoadState<P>>>,
}

impl<P> Clone for ModuleHandle<P> {
    fn clone(&self) -> Self {
        Self {
            slot: Rc::clone(&self.slot),
        }
    }
}

impl<P> Default for ModuleHandle<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> fmt::Debug for ModuleHandle<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ModuleHandle").field(&self.status()).finish()
    }
}

impl<P> ModuleHandle<P> {
    /// Creates a pending handle.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slot: Rc::new(RefCell::new(LoadState::Pending)),
        }
    }

    /// Installs the loaded module.
    ///
    /// Only the first transition out of the pending state takes effect;
    /// later attempts are ignored with a warning.
    pub fn fulfill(&self, module: P) {
        let mut slot = self.slot.borrow_mut();
        if matches!(*slot, LoadState::Pending) {
            *slot = LoadState::Ready(module);
        } else {
            tracing::warn!("module handle already resolved, ignoring fulfill");
        }
    }

    /// Marks the load as failed with a human-readable message.
    ///
    /// Write-once, like [`fulfill`](Self::fulfill).
    pub fn fail(&self, message: impl Into<String>) {
        let mut slot = self.slot.borrow_mut();
        if matches!(*slot, LoadState::Pending) {
            *slot = LoadState::Failed(message.into());
        } else {
            tracing::warn!("module handle already resolved, ignoring fail");
        }
    }

    /// Returns true once the module is loaded and callable.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(*self.slot.borrow(), LoadState::Ready(_))
    }

    /// Returns the current lifecycle snapshot.
    #[must_use]
    pub fn status(&self) -> ModuleStatus {
        match &*self.slot.borrow() {
            LoadState::Pending => ModuleStatus::Pending,
            LoadState::Ready(_) => ModuleStatus::Ready,
            LoadState::Failed(message) => ModuleStatus::Failed(message.clone()),
        }
    }

    /// Runs `f` against the module if it is ready.
    pub(crate) fn with_module<T>(&self, f: impl FnOnce(&P) -> T) -> Option<T> {
        match &*self.slot.borrow() {
            LoadState::Ready(module) => Some(f(module)),
            _ => None,
        }
    }
}

/// Performs the single startup load attempt.
///
/// Awaits `module` and resolves the handle either way. There is no retry:
/// a failed load leaves the handle failed for the lifetime of the page,
/// and submissions keep being rejected as not ready.
pub async fn load<P>(handle: ModuleHandle<P>, module: impl Future<Output = Result<P, LoadError>>) {
    match module.await {
        Ok(module) => {
            tracing::info!("computation module loaded");
            handle.fulfill(module);
        }
        Err(LoadError(message)) => {
            tracing::warn!(error = %message, "computation module failed to load");
            handle.fail(message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_handle_starts_pending() {
        let handle = ModuleHandle::<()>::new();
        assert!(!handle.is_ready());
        assert_eq!(handle.status(), ModuleStatus::Pending);
    }

    #[test]
    fn test_fulfill_is_write_once() {
        let handle = ModuleHandle::new();
        handle.fulfill(1u32);
        handle.fail("too late");
        assert_eq!(handle.status(), ModuleStatus::Ready);
        assert_eq!(handle.with_module(|n| *n), Some(1));
    }

    #[test]
    fn test_fail_is_write_once() {
        let handle = ModuleHandle::<u32>::new();
        handle.fail("module missing");
        handle.fulfill(1);
        assert_eq!(
            handle.status(),
            ModuleStatus::Failed("module missing".into())
        );
        assert!(!handle.is_ready());
    }

    #[test]
    fn test_load_fulfills_on_success() {
        let handle = ModuleHandle::new();
        block_on(load(handle.clone(), async { Ok(7u32) }));
        assert!(handle.is_ready());
        assert_eq!(handle.with_module(|n| *n), Some(7));
    }

    #[test]
    fn test_load_fails_with_message() {
        let handle = ModuleHandle::<u32>::new();
        block_on(load(handle.clone(), async {
            Err(LoadError::new("import rejected"))
        }));
        assert_eq!(
            handle.status(),
            ModuleStatus::Failed("import rejected".into())
        );
    }

    #[test]
    fn test_clones_share_the_slot() {
        let handle = ModuleHandle::new();
        let other = handle.clone();
        handle.fulfill("module");
        assert!(other.is_ready());
    }
}
