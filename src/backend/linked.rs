//! Node-based backend over `std::collections::LinkedList`.

use std::collections::LinkedList;

use super::Backend;

/// Alternate storage backend: one heap node per element.
///
/// Enqueue and dequeue are O(1) with a per-element allocation and no
/// reallocation spikes, which can matter when elements are large or latency
/// outliers from a growing ring are unacceptable. For most workloads
/// [`VecDequeBackend`](super::VecDequeBackend) is the better default.
#[derive(Debug, Clone)]
pub struct LinkedBackend<T> {
    items: LinkedList<T>,
}

impl<T> Default for LinkedBackend<T> {
    fn default() -> Self {
        Self {
            items: LinkedList::new(),
        }
    }
}

impl<T> Backend<T> for LinkedBackend<T> {
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

impl<T> IntoIterator for LinkedBackend<T> {
    type Item = T;
    type IntoIter = std::collections::linked_list::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
