//! # polyqueue
//!
//! A policy-composed, thread-safe FIFO queue.
//!
//! Two orthogonal choices are made at the type level when a queue is
//! instantiated, and are fixed for the life of the object:
//!
//! - **Storage backend** ([`backend::Backend`]): which ordered container
//!   holds the elements. Ships with a contiguous ring-buffer backend
//!   ([`backend::VecDequeBackend`], the default) and a node-based backend
//!   ([`backend::LinkedBackend`]).
//! - **Locking guard** ([`guard::Guard`]): which synchronization discipline
//!   protects access. Ships with four: no locking at all
//!   ([`guard::NoGuard`]), an OS-level exclusive mutex ([`guard::SysGuard`]),
//!   a same-thread re-entrant mutex ([`guard::ReentrantGuard`]), and a true
//!   shared/exclusive read-write lock ([`guard::RwGuard`]).
//!
//! The composition is static: [`queue::Queue`] is generic over both policies
//! and monomorphizes per combination, so there is no virtual dispatch on the
//! operation path and no way to swap a policy after construction.
//!
//! ## Philosophy
//!
//! polyqueue focuses on providing:
//! - One uniform queue API across every backend/guard combination
//! - Scoped, exit-safe lock acquisition bracketing exactly one operation
//! - Misuse prevention through the type system: the unsynchronized guard
//!   makes the queue `!Sync`, so sharing it across threads is a compile
//!   error rather than a data race
//!
//! ## Quick start
//!
//! ```rust
//! use polyqueue::RwQueue;
//!
//! let queue: RwQueue<i32> = RwQueue::new();
//! queue.put(1);
//! queue.put(2);
//! assert_eq!(queue.len(), 2);
//! assert_eq!(queue.get(), Some(1));
//! assert_eq!(queue.get(), Some(2));
//! assert!(queue.is_empty());
//! ```
//!
//! ## Choosing a guard
//!
//! | Guard | Read ops | Write ops | Use when |
//! |-------|----------|-----------|----------|
//! | [`guard::NoGuard`] | unsynchronized | unsynchronized | single thread only (enforced: `!Sync`) |
//! | [`guard::SysGuard`] | exclusive | exclusive | general cross-thread sharing |
//! | [`guard::ReentrantGuard`] | exclusive, re-entrant | exclusive, re-entrant | same-thread nested acquisition must not deadlock |
//! | [`guard::RwGuard`] | shared | exclusive | read-heavy workloads, many concurrent inspectors |
//!
//! ## What this queue is not
//!
//! The queue is unbounded and non-blocking: `put` always succeeds, and an
//! empty queue answers `get`/`read_front` with `None` rather than waiting
//! for an item. There is no capacity, no backpressure, no close or shutdown
//! state, and no timeout on lock acquisition. Callers that need to wait for
//! items should poll `get` or reach for a channel instead.
//!
//! ## Thread safety
//!
//! Queues over [`guard::SysGuard`], [`guard::ReentrantGuard`], and
//! [`guard::RwGuard`] are `Send + Sync` whenever the element type is `Send`
//! (plus `Sync` for the read-write guard). Each public operation is atomic
//! with respect to the others, but sequences are not: `is_empty()` followed
//! by `get()` can race with another consumer, and `get()` returning `None`
//! is the authoritative answer.

#![warn(missing_docs, missing_debug_implementations, rust_2018_idioms)]

pub mod backend;
pub mod guard;
pub mod queue;

pub use crate::backend::{Backend, LinkedBackend, VecDequeBackend};
pub use crate::guard::{Guard, NoGuard, ReentrantGuard, RwGuard, SysGuard};
pub use crate::queue::{
    LinkedRwQueue, MutexQueue, Queue, ReentrantQueue, RwQueue, UnsyncQueue,
};
