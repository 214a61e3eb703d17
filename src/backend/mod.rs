//! Storage backends
//!
//! A backend is the ordered container that actually holds queue elements.
//! It knows nothing about locking: [`Queue`](crate::queue::Queue) always
//! calls these primitives with the guard already held, so a backend is free
//! to be a plain single-threaded container.
//!
//! ## Available backends
//!
//! - [`VecDequeBackend`]: contiguous ring buffer (`std::collections::VecDeque`),
//!   the default. Amortized O(1) enqueue/dequeue, cache-friendly.
//! - [`LinkedBackend`]: node-per-element list (`std::collections::LinkedList`).
//!   O(1) enqueue/dequeue with per-element allocation, no reallocation spikes.
//!
//! Both are behaviorally identical FIFO containers; pick by allocation
//! profile, not semantics.

mod linked;
mod vec_deque;

pub use linked::LinkedBackend;
pub use vec_deque::VecDequeBackend;


/// Capability contract for the ordered container backing a queue.
///
/// Implementations hold elements in insertion order with a FIFO discipline:
/// [`enqueue`](Backend::enqueue) appends at the tail, the remaining
/// primitives observe or remove the head. `len() == 0` holds exactly when
/// `is_empty()` does, and elements come back out in the exact order they
/// went in.
///
/// These primitives are only ever invoked by the composition layer while the
/// guard policy's lock is held, so implementations take `&mut self` freely
/// and need no internal synchronization.
pub trait Backend<T>: Default {
    /// Returns `true` when no elements are present.
    fn is_empty(&self) -> bool;

    /// Current element count.
    fn len(&self) -> usize;

    /// Appends `value` at the tail. Never fails; running out of memory
    /// aborts through the global allocator rather than surfacing an error.
    fn enqueue(&mut self, value: T);

    /// Removes the head element without returning it.
    ///
    /// A no-op when the backend is empty. The queue layer relies on this:
    /// it forwards `pop` straight here without checking emptiness first.
    fn discard_front(&mut self);

    /// Clones the head element out, or `None` when empty.
    fn read_front(&self) -> Option<T>
    where
        T: Clone;

    /// Removes and returns the head element, or `None` when empty.
    fn dequeue(&mut self) -> Option<T>;
}
