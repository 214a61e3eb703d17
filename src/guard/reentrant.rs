//! The re-entrant exclusive guard.

use std::cell::RefCell;

use parking_lot::ReentrantMutex;

use super::Guard;

/// An exclusive lock that the holding thread may re-acquire.
///
/// Built on `parking_lot::ReentrantMutex` around a `RefCell`, the standard
/// pairing for re-entrant mutable access: the mutex admits nested lock
/// calls from the owning thread, and the `RefCell` hands out the actual
/// `&`/`&mut` to the storage. Nested *read* acquisitions on the same thread
/// succeed (shared borrows stack); a nested *write* inside an already
/// running access on the same thread panics on the borrow instead of
/// deadlocking, which cannot arise through the queue API since each
/// operation completes its closure before returning.
///
/// Like [`SysGuard`](super::SysGuard), read and write collapse onto the
/// same exclusive lock with respect to other threads.
#[derive(Debug, Default)]
pub struct ReentrantGuard<S> {
    storage: ReentrantMutex<RefCell<S>>,
}

impl<S> Guard<S> for ReentrantGuard<S> {
    fn new(storage: S) -> Self {
        Self {
            storage: ReentrantMutex::new(RefCell::new(storage)),
        }
    }

    #[inline]
    fn with_read<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        let locked = self.storage.lock();
        let storage = locked.borrow();
        f(&storage)
    }

    #[inline]
    fn with_write<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        let locked = self.storage.lock();
        let mut storage = locked.borrow_mut();
        f(&mut storage)
    }

    fn into_inner(self) -> S {
        self.storage.into_inner().into_inner()
    }
}
