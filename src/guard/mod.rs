//! Locking guards
//!
//! A guard owns the storage it protects (Rust locks wrap their data) and
//! exposes exactly two ways in: [`with_read`](Guard::with_read) and
//! [`with_write`](Guard::with_write). Each call acquires the policy's lock,
//! runs the closure, and releases on every exit path (early return, `?`,
//! or unwinding panic), so a lock is held for exactly one queue operation
//! and never longer.
//!
//! The composition layer is guard-agnostic: it only ever asks for "read" or
//! "write" access by name. The simpler policies collapse both names onto
//! one exclusive primitive; only [`RwGuard`] distinguishes them
//! operationally, admitting many concurrent readers or one writer.
//!
//! ## Available guards
//!
//! - [`NoGuard`]: no synchronization. The queue becomes `!Sync`, so
//!   cross-thread misuse is rejected at compile time.
//! - [`SysGuard`]: `std::sync::Mutex`, an OS-level exclusive lock.
//! - [`ReentrantGuard`]: `parking_lot::ReentrantMutex`, exclusive but
//!   re-acquirable on the thread that already holds it.
//! - [`RwGuard`]: `parking_lot::RwLock`, shared reads / exclusive writes.
//!
//! Lock acquisition is unconditional: no try-lock, no timeout, and no
//! poisoning surfaced to callers.

mod mutex;
mod reentrant;
mod rwlock;
mod unsync;

pub use mutex::SysGuard;
pub use reentrant::ReentrantGuard;
pub use rwlock::RwGuard;
pub use unsync::NoGuard;


/// Capability contract for a locking policy protecting storage of type `S`.
///
/// `with_read` and `with_write` are the two distinctly named scoped
/// acquisitions; a policy without a true shared mode maps both onto the
/// same exclusive lock. The closure receives the storage directly, so the
/// caller can neither keep the lock beyond the call nor reach the storage
/// without going through one of these two doors.
pub trait Guard<S> {
    /// Wraps `storage` in this guard.
    fn new(storage: S) -> Self;

    /// Runs `f` with shared (read) access to the storage.
    fn with_read<R>(&self, f: impl FnOnce(&S) -> R) -> R;

    /// Runs `f` with exclusive (write) access to the storage.
    fn with_write<R>(&self, f: impl FnOnce(&mut S) -> R) -> R;

    /// Consumes the guard and returns the storage. No lock is needed:
    /// ownership proves no other access exists.
    fn into_inner(self) -> S;
}
