//! The OS-level exclusive guard.

use std::sync::{Mutex, PoisonError};

use super::Guard;

/// An OS-backed exclusive lock (`std::sync::Mutex`).
///
/// Both read and write access take the same exclusive lock, so every queue
/// operation fully serializes. This is the workhorse policy for ordinary
/// cross-thread sharing.
///
/// Poisoning is deliberately ignored: the locking contract here has no
/// failure mode, so a panic in some earlier critical section does not stop
/// later callers from acquiring the lock.
#[derive(Debug, Default)]
pub struct SysGuard<S> {
    storage: Mutex<S>,
}

impl<S> Guard<S> for SysGuard<S> {
    fn new(storage: S) -> Self {
        Self {
            storage: Mutex::new(storage),
        }
    }

    #[inline]
    fn with_read<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        let locked = self.storage.lock().unwrap_or_else(PoisonError::into_inner);
        f(&locked)
    }

    #[inline]
    fn with_write<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        let mut locked = self.storage.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut locked)
    }

    fn into_inner(self) -> S {
        self.storage
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
