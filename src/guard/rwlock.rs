//! The shared/exclusive read-write guard.

use parking_lot::RwLock;

use super::Guard;

/// A true read-write lock (`parking_lot::RwLock`).
///
/// The only policy where the read/write distinction is operational: any
/// number of readers proceed concurrently, a writer excludes everyone.
/// Prefer this when inspection calls (`is_empty`, `len`, `read_front`)
/// dominate mutation.
#[derive(Debug, Default)]
pub struct RwGuard<S> {
    storage: RwLock<S>,
}

impl<S> Guard<S> for RwGuard<S> {
    fn new(storage: S) -> Self {
        Self {
            storage: RwLock::new(storage),
        }
    }

    #[inline]
    fn with_read<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&self.storage.read())
    }

    #[inline]
    fn with_write<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        f(&mut self.storage.write())
    }

    fn into_inner(self) -> S {
        self.storage.into_inner()
    }
}
