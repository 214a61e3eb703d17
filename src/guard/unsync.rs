//! The unsynchronized guard.

use std::cell::RefCell;

use super::Guard;

/// No synchronization at all.
///
/// Read and write access go through a `RefCell`, which costs a borrow-flag
/// check and nothing more. Because `RefCell` is `!Sync`, any queue built on
/// this guard is `!Sync` too: handing it to another thread is a compile
/// error, not a latent data race. This is the Rust rendering of "safe only
/// for single-threaded use".
///
/// ```compile_fail
/// use polyqueue::{Guard, NoGuard};
/// use std::sync::Arc;
/// use std::thread;
///
/// let guard = Arc::new(NoGuard::new(vec![1u32]));
/// let handle = Arc::clone(&guard);
/// thread::spawn(move || handle.with_read(|v| v.len())); // error: `NoGuard` is not `Sync`
/// ```
#[derive(Debug, Default)]
pub struct NoGuard<S> {
    storage: RefCell<S>,
}

impl<S> Guard<S> for NoGuard<S> {
    fn new(storage: S) -> Self {
        Self {
            storage: RefCell::new(storage),
        }
    }

    #[inline]
    fn with_read<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&self.storage.borrow())
    }

    #[inline]
    fn with_write<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        f(&mut self.storage.borrow_mut())
    }

    fn into_inner(self) -> S {
        self.storage.into_inner()
    }
}
