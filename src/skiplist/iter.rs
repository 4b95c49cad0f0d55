use std::iter::FusedIterator;

use super::node::Arena;
use crate::types::Link;

/// Iterator over entries in ascending key order.
///
/// Simply follows level 0 forward links; level 0 threads every entry.
pub struct Iter<'a, K, V> {
    arena: &'a Arena<K, V>,
    next: Link,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(super) fn new(arena: &'a Arena<K, V>, first: Link, len: usize) -> Self {
        Iter {
            arena,
            next: first,
            remaining: len,
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.arena.get(self.next?);
        self.next = node.forward[0];
        self.remaining -= 1;
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter {
            arena: self.arena,
            next: self.next,
            remaining: self.remaining,
        }
    }
}

/// Iterator over keys in ascending order.
pub struct Keys<'a, K, V> {
    pub(super) inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

/// Iterator over values in ascending key order.
pub struct Values<'a, K, V> {
    pub(super) inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}

impl<K, V> FusedIterator for Values<'_, K, V> {}

/// Keys threaded on a single level, ascending.
pub struct LevelKeys<'a, K, V> {
    arena: &'a Arena<K, V>,
    next: Link,
    level: usize,
}

impl<'a, K, V> LevelKeys<'a, K, V> {
    pub(super) fn new(arena: &'a Arena<K, V>, first: Link, level: usize) -> Self {
        LevelKeys {
            arena,
            next: first,
            level,
        }
    }

    /// The level being walked.
    pub fn level(&self) -> usize {
        self.level
    }
}

impl<'a, K, V> Iterator for LevelKeys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        let node = self.arena.get(self.next?);
        self.next = node.forward[self.level];
        Some(&node.key)
    }
}

impl<K, V> FusedIterator for LevelKeys<'_, K, V> {}
