//! Ring-buffer backend over `std::collections::VecDeque`.

use std::collections::VecDeque;

use super::Backend;

/// The default storage backend: a growable contiguous ring buffer.
///
/// Elements live in one allocation, so enqueue is amortized O(1) with the
/// occasional reallocation when the ring grows, and dequeue never allocates.
///
/// # Examples
///
/// ```rust
/// use polyqueue::backend::{Backend, VecDequeBackend};
///
/// let mut b = VecDequeBackend::default();
/// b.enqueue("a");
/// b.enqueue("b");
/// assert_eq!(b.len(), 2);
/// assert_eq!(b.dequeue(), Some("a"));
/// ```
#[derive(Debug, Clone)]
pub struct VecDequeBackend<T> {
    items: VecDeque<T>,
}

impl<T> Default for VecDequeBackend<T> {
    fn default() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }
}

impl<T> VecDequeBackend<T> {
    /// Creates an empty backend with room for `capacity` elements before
    /// the ring first reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
        }
    }
}

impl<T> Backend<T> for VecDequeBackend<T> {
    #[inline]
    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    fn enqueue(&mut self, value: T) {
        self.items.push_back(value);
    }

    #[inline]
    fn discard_front(&mut self) {
        self.items.pop_front();
    }

    #[inline]
    fn read_front(&self) -> Option<T>
    where
        T: Clone,
    {
        self.items.front().cloned()
    }

    #[inline]
    fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }
}

impl<T> IntoIterator for VecDequeBackend<T> {
    type Item = T;
    type IntoIter = std::collections::vec_deque::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
