//! The policy-composed queue
//!
//! [`Queue`] is the composition root: it owns one storage backend wrapped
//! in one locking guard and exposes the public FIFO operations. Every
//! operation acquires the guard's read or write lock for exactly its own
//! duration, delegates to the matching backend primitive, and releases on
//! scope exit.
//!
//! ## Lock discipline per operation
//!
//! | Operation | Lock | Backend primitive |
//! |-----------|------|-------------------|
//! | [`is_empty`](Queue::is_empty) | read | `is_empty` |
//! | [`len`](Queue::len) | read | `len` |
//! | [`put`](Queue::put) | write | `enqueue` |
//! | [`pop`](Queue::pop) | write | `discard_front` |
//! | [`read_front`](Queue::read_front) | read | `read_front` |
//! | [`get`](Queue::get) | write | `dequeue` |
//!
//! `read_front` takes a read lock on purpose: it only inspects state, so
//! under [`RwGuard`](crate::guard::RwGuard) it runs concurrently with other
//! inspectors. Under the exclusive guards the read/write distinction is
//! nominal anyway.
//!
//! ## Picking a combination
//!
//! The [type aliases](#types) cover the combinations that come up in
//! practice. Spelling out the full generic form is only needed for unusual
//! pairings:
//!
//! ```rust
//! use polyqueue::{Queue, LinkedBackend, SysGuard};
//!
//! // Node-based storage under a plain mutex.
//! let q: Queue<String, LinkedBackend<String>, SysGuard<LinkedBackend<String>>> =
//!     Queue::new();
//! q.put("hello".to_string());
//! assert_eq!(q.get().as_deref(), Some("hello"));
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::backend::{Backend, LinkedBackend, VecDequeBackend};
use crate::guard::{Guard, NoGuard, ReentrantGuard, RwGuard, SysGuard};


#[cfg(test)]
mod proptests;

#[cfg(test)]
mod loom_tests;

/// A FIFO queue composed from a storage backend `B` and a locking guard `G`.
///
/// Both policies are chosen when the concrete type is instantiated and are
/// fixed for the object's lifetime; the queue exclusively owns its backend
/// and its lock, and all access is mediated through the operations below.
///
/// The queue is unbounded and non-blocking. `put` cannot fail, and the
/// empty-queue answers from `get` and `read_front` are `None` rather than
/// an error or a wait.
///
/// # Examples
///
/// ```rust
/// use polyqueue::MutexQueue;
/// use std::sync::Arc;
/// use std::thread;
///
/// let queue: Arc<MutexQueue<u32>> = Arc::new(MutexQueue::new());
///
/// let producer = thread::spawn({
///     let queue = Arc::clone(&queue);
///     move || {
///         for i in 0..100 {
///             queue.put(i);
///         }
///     }
/// });
///
/// let consumer = thread::spawn({
///     let queue = Arc::clone(&queue);
///     move || {
///         let mut received = 0;
///         while received < 100 {
///             if queue.get().is_some() {
///                 received += 1;
///             } else {
///                 thread::yield_now();
///             }
///         }
///         received
///     }
/// });
///
/// producer.join().unwrap();
/// assert_eq!(consumer.join().unwrap(), 100);
/// assert!(queue.is_empty());
/// ```
pub struct Queue<T, B = VecDequeBackend<T>, G = SysGuard<B>>
where
    B: Backend<T>,
    G: Guard<B>,
{
    guarded: G,
    _marker: PhantomData<fn() -> (T, B)>,
}

/// Single-threaded queue: default backend, no synchronization.
///
/// `!Sync` by construction; the compiler rejects sharing it across threads:
///
/// ```compile_fail
/// use polyqueue::UnsyncQueue;
/// use std::sync::Arc;
/// use std::thread;
///
/// let queue: Arc<UnsyncQueue<u32>> = Arc::new(UnsyncQueue::new());
/// let handle = Arc::clone(&queue);
/// thread::spawn(move || handle.put(1)); // error: `UnsyncQueue<u32>` is not `Sync`
/// ```
pub type UnsyncQueue<T> = Queue<T, VecDequeBackend<T>, NoGuard<VecDequeBackend<T>>>;

/// Cross-thread queue over an OS-level exclusive mutex.
pub type MutexQueue<T> = Queue<T, VecDequeBackend<T>, SysGuard<VecDequeBackend<T>>>;

/// Cross-thread queue over a same-thread re-entrant mutex.
pub type ReentrantQueue<T> = Queue<T, VecDequeBackend<T>, ReentrantGuard<VecDequeBackend<T>>>;

/// Cross-thread queue over a shared/exclusive read-write lock.
pub type RwQueue<T> = Queue<T, VecDequeBackend<T>, RwGuard<VecDequeBackend<T>>>;

/// Read-write-locked queue over the node-based backend.
pub type LinkedRwQueue<T> = Queue<T, LinkedBackend<T>, RwGuard<LinkedBackend<T>>>;

impl<T, B, G> Queue<T, B, G>
where
    B: Backend<T>,
    G: Guard<B>,
{
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            guarded: G::new(B::default()),
            _marker: PhantomData,
        }
    }

    /// Creates a queue over a pre-built backend, e.g. one with reserved
    /// capacity.
    ///
    /// ```rust
    /// use polyqueue::{MutexQueue, VecDequeBackend};
    ///
    /// let q: MutexQueue<u8> = MutexQueue::with_backend(VecDequeBackend::with_capacity(1024));
    /// assert!(q.is_empty());
    /// ```
    pub fn with_backend(backend: B) -> Self {
        Self {
            guarded: G::new(backend),
            _marker: PhantomData,
        }
    }

    /// Returns `true` when the queue holds no elements.
    ///
    /// Under concurrent access this is a snapshot: another thread may have
    /// changed the answer by the time it is observed. Pair-wise sequences
    /// like `is_empty()` then `get()` are not atomic; treat `get()`
    /// returning `None` as the authoritative emptiness signal.
    pub fn is_empty(&self) -> bool {
        self.guarded.with_read(|s| s.is_empty())
    }

    /// Returns the current number of elements. Snapshot semantics, as with
    /// [`is_empty`](Queue::is_empty).
    pub fn len(&self) -> usize {
        self.guarded.with_read(|s| s.len())
    }

    /// Appends `value` at the tail.
    ///
    /// Never fails: the queue is unbounded, and allocation failure aborts
    /// rather than surfacing an error.
    pub fn put(&self, value: T) {
        self.guarded.with_write(|s| s.enqueue(value));
    }

    /// Removes the head element without returning it.
    ///
    /// A no-op on an empty queue. Note that under concurrent access this
    /// discards whatever is at the head *when the lock is acquired*, which
    /// is not necessarily the element observed by an earlier
    /// [`read_front`](Queue::read_front).
    pub fn pop(&self) {
        self.guarded.with_write(|s| s.discard_front());
    }

    /// Returns a clone of the head element without removing it, or `None`
    /// when the queue is empty.
    ///
    /// Takes a read lock: under [`RwGuard`](crate::guard::RwGuard) any
    /// number of `read_front`/`is_empty`/`len` calls proceed concurrently.
    pub fn read_front(&self) -> Option<T>
    where
        T: Clone,
    {
        self.guarded.with_read(|s| s.read_front())
    }

    /// Removes and returns the head element, or `None` when the queue is
    /// empty.
    pub fn get(&self) -> Option<T> {
        self.guarded.with_write(|s| s.dequeue())
    }

    /// Consumes the queue and returns the backend with whatever elements
    /// remain, in order.
    ///
    /// ```rust
    /// use polyqueue::RwQueue;
    ///
    /// let q: RwQueue<i32> = RwQueue::new();
    /// q.put(1);
    /// q.put(2);
    /// let rest: Vec<i32> = q.into_inner().into_iter().collect();
    /// assert_eq!(rest, vec![1, 2]);
    /// ```
    pub fn into_inner(self) -> B {
        self.guarded.into_inner()
    }
}

impl<T, B, G> Default for Queue<T, B, G>
where
    B: Backend<T>,
    G: Guard<B>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, B, G> fmt::Debug for Queue<T, B, G>
where
    B: Backend<T>,
    G: Guard<B>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue").field("len", &self.len()).finish()
    }
}
