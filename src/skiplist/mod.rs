mod display;
mod iter;
mod node;

pub use display::{DisplayEntries, DisplayKeys};
pub use iter::{Iter, Keys, LevelKeys, Values};

use std::borrow::Borrow;
use std::fmt;
use std::mem;

use crate::error::{Error, Result};
use crate::level::{CoinFlip, LevelGenerator};
use crate::options::Options;
use crate::types::{Link, NodeId, Position};
use node::{Arena, TowerNode};

/// An ordered key-value container backed by a skip list.
///
/// Every node is a tower of forward links. Level 0 threads all entries in
/// ascending key order; each higher level threads a random subset, about
/// half of the level below it. A search starts at the sentinel head on the
/// top level, runs right while the next key is smaller than the target,
/// then drops a level and repeats.
///
/// Average case: O(log n) insert, lookup and delete. Worst case: O(n), but
/// vanishingly unlikely with random tower heights.
///
/// The height ceiling adapts to the entry count: after each insert of a new
/// key it becomes `max(10, floor(log2(len)))`, never below the current top
/// level and never above the configured limit (see [`Options`]).
///
/// Not thread-safe by construction: every mutator takes `&mut self`. Wrap it
/// in a lock if it has to be shared.
pub struct SkipList<K, V, G = CoinFlip> {
    arena: Arena<K, V>,
    /// Forward links of the sentinel. Always at least `max_level + 1` long.
    head: Vec<Link>,
    /// Highest level with a real node on it. 0 when empty.
    top_level: usize,
    /// Tallest tower the next insert may draw.
    max_level: usize,
    options: Options,
    generator: G,
}

/// Per-level predecessors of a key, plus the level-0 successor of the
/// bottom predecessor (the only node that can hold the key).
struct Frontier {
    preds: Vec<Position>,
    candidate: Link,
}

impl<K: Ord, V> SkipList<K, V> {
    /// Creates an empty list with default options and OS-seeded coin flips.
    pub fn new() -> Self {
        Self::with_generator(CoinFlip::new())
    }
}

impl<K: Ord, V> Default for SkipList<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, G> SkipList<K, V, G> {
    /// Creates an empty list drawing tower heights from `generator`.
    pub fn with_generator(generator: G) -> Self {
        Self::from_parts(Options::new(), generator)
    }

    /// Creates an empty list with custom height options.
    pub fn with_options(options: Options, generator: G) -> Result<Self> {
        options.validate()?;
        Ok(Self::from_parts(options, generator))
    }

    fn from_parts(options: Options, generator: G) -> Self {
        let max_level = options.initial_max_level();
        SkipList {
            arena: Arena::new(),
            head: vec![None; max_level + 1],
            top_level: 0,
            max_level,
            options,
            generator,
        }
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Whether the list holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Highest level currently holding a real node.
    #[inline]
    pub fn top_level(&self) -> usize {
        self.top_level
    }

    /// Ceiling on the height of the next tower.
    #[inline]
    pub fn max_level(&self) -> usize {
        self.max_level
    }

    /// The options this list was built with.
    #[inline]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Removes every entry and resets the ceiling to its initial value.
    pub fn clear(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::debug!(len = self.len(), "clearing skip list");
        self.arena.clear();
        self.head.fill(None);
        self.top_level = 0;
        self.max_level = self.options.initial_max_level();
    }

    /// Iterates over all entries in ascending key order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.arena, self.head[0], self.len())
    }

    /// Iterates over the keys in ascending order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Iterates over the values in ascending key order.
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    /// Keys threaded on one level, ascending. Empty above the top level.
    ///
    /// Diagnostic only.
    pub fn level_keys(&self, level: usize) -> LevelKeys<'_, K, V> {
        let first = if level <= self.top_level {
            self.head[level]
        } else {
            None
        };
        LevelKeys::new(&self.arena, first, level)
    }

    /// Every active level's keys, bottom level first.
    ///
    /// Diagnostic only.
    pub fn levels(&self) -> Vec<Vec<&K>> {
        (0..=self.top_level)
            .map(|level| self.level_keys(level).collect())
            .collect()
    }

    /// Node count per active level, bottom level first.
    pub fn level_lens(&self) -> Vec<usize> {
        (0..=self.top_level)
            .map(|level| self.level_keys(level).count())
            .collect()
    }

    /// Renders each level's keys, one line per level.
    pub fn display_keys(&self) -> DisplayKeys<'_, K, V, G> {
        DisplayKeys { list: self }
    }

    /// Renders each level's `(key, value)` pairs, one line per level.
    pub fn display_entries(&self) -> DisplayEntries<'_, K, V, G> {
        DisplayEntries { list: self }
    }

    #[inline]
    fn next(&self, pos: Position, level: usize) -> Link {
        match pos {
            Position::Head => self.head[level],
            Position::Node(id) => self.arena.get(id).forward[level],
        }
    }

    #[inline]
    fn set_next(&mut self, pos: Position, level: usize, link: Link) {
        match pos {
            Position::Head => self.head[level] = link,
            Position::Node(id) => self.arena.get_mut(id).forward[level] = link,
        }
    }

    /// Recomputes the ceiling from the entry count, growing the sentinel if
    /// it has to span more levels. Existing towers are left alone.
    fn recompute_max_level(&mut self) {
        let max_level = self.options.max_level_for(self.len(), self.top_level);
        if max_level == self.max_level {
            return;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(
            from = self.max_level,
            to = max_level,
            len = self.len(),
            "height ceiling recomputed"
        );
        self.max_level = max_level;
        if self.head.len() <= max_level {
            self.head.resize(max_level + 1, None);
        }
    }
}

impl<K: Ord, V, G> SkipList<K, V, G> {
    /// Walks from the sentinel down to level 0, calling `visit` with the
    /// last node on each level whose key is strictly less than `key`.
    /// Returns that node's level-0 successor.
    ///
    /// The walk never climbs: each level resumes from where the level above
    /// stopped.
    fn descend<Q>(&self, key: &Q, mut visit: impl FnMut(usize, Position)) -> Link
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = Position::Head;
        for level in (0..=self.top_level).rev() {
            while let Some(next) = self.next(current, level) {
                if self.arena.get(next).key.borrow() < key {
                    current = Position::Node(next);
                } else {
                    break;
                }
            }
            visit(level, current);
        }
        self.next(current, 0)
    }

    /// Predecessor frontier for `key`.
    ///
    /// Slots above the top level are pre-filled with the sentinel, which is
    /// the predecessor on any level no real node has reached yet.
    fn find_frontier<Q>(&self, key: &Q) -> Frontier
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut preds = vec![Position::Head; self.max_level.max(self.top_level) + 1];
        let candidate = self.descend(key, |level, pos| preds[level] = pos);
        Frontier { preds, candidate }
    }

    /// The candidate, if it actually holds `key`.
    #[inline]
    fn matching<Q>(&self, candidate: Link, key: &Q) -> Option<NodeId>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        candidate.filter(|&id| self.arena.get(id).key.borrow() == key)
    }

    fn find<Q>(&self, key: &Q) -> Option<NodeId>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let candidate = self.descend(key, |_, _| {});
        self.matching(candidate, key)
    }

    /// Looks up a key. Returns the value if found.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).map(|id| &self.arena.get(id).value)
    }

    /// Like [`get`](Self::get), but reports a miss as [`Error::NotFound`].
    ///
    /// ```
    /// use skiplist_kv::{Error, SkipList};
    ///
    /// let mut sl = SkipList::new();
    /// sl.insert(34, "gamma");
    /// assert_eq!(sl.lookup(&34), Ok(&"gamma"));
    /// assert_eq!(sl.lookup(&35), Err(Error::NotFound));
    /// ```
    pub fn lookup<Q>(&self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(key).ok_or(Error::NotFound)
    }

    /// Mutable access to a value. Keys are never handed out mutably, so the
    /// ordering cannot be disturbed.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let id = self.find(key)?;
        Some(&mut self.arena.get_mut(id).value)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).is_some()
    }

    /// Height of the tower holding `key`.
    pub fn tower_height<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).map(|id| self.arena.get(id).height())
    }

    /// Smallest entry.
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        let node = self.arena.get(self.head[0]?);
        Some((&node.key, &node.value))
    }

    /// Largest entry, found by running right as far as possible on every
    /// level on the way down.
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        let mut current = Position::Head;
        for level in (0..=self.top_level).rev() {
            while let Some(next) = self.next(current, level) {
                current = Position::Node(next);
            }
        }
        match current {
            Position::Head => None,
            Position::Node(id) => {
                let node = self.arena.get(id);
                Some((&node.key, &node.value))
            }
        }
    }

    /// Unlinks the entry for `key` and returns it. Absent keys are a no-op.
    ///
    /// The node is unlinked bottom-up and only while the frontier still
    /// points at it; the first level where it does not is above the tower.
    /// Afterwards the top level sinks past any level left empty.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let Frontier { preds, candidate } = self.find_frontier(key);
        let id = self.matching(candidate, key)?;

        for (level, &pred) in preds.iter().enumerate().take(self.top_level + 1) {
            if self.next(pred, level) != Some(id) {
                break;
            }
            let next = self.arena.get(id).forward[level];
            self.set_next(pred, level, next);
        }
        let node = self.arena.free(id);

        let before = self.top_level;
        while self.top_level > 0 && self.head[self.top_level].is_none() {
            self.top_level -= 1;
        }
        if self.top_level != before {
            #[cfg(feature = "tracing")]
            tracing::trace!(from = before, to = self.top_level, "top level lowered");
        }

        Some((node.key, node.value))
    }

    /// Removes `key`, returning its value if it was present.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Removes `key` if present. Deleting an absent key is not an error.
    pub fn delete<Q>(&mut self, key: &Q)
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.remove_entry(key);
    }
}

impl<K: Ord, V, G: LevelGenerator> SkipList<K, V, G> {
    /// Inserts a key-value pair. Overwrites if the key already exists,
    /// returning the old value; the tower is left as it was.
    ///
    /// Algorithm:
    ///   1. Find the predecessor at each level
    ///   2. Draw a height for the new tower
    ///   3. Splice the tower in after each predecessor up to that height
    ///   4. Recompute the height ceiling from the new length
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let Frontier { preds, candidate } = self.find_frontier(&key);
        if let Some(id) = self.matching(candidate, &key) {
            return Some(mem::replace(&mut self.arena.get_mut(id).value, value));
        }

        let height = self
            .generator
            .random_height(self.max_level)
            .min(self.max_level);
        if height > self.top_level {
            #[cfg(feature = "tracing")]
            tracing::trace!(from = self.top_level, to = height, "top level raised");
            self.top_level = height;
        }

        let id = self.arena.alloc(TowerNode::new(key, value, height));
        for (level, &pred) in preds.iter().enumerate().take(height + 1) {
            let next = self.next(pred, level);
            self.arena.get_mut(id).forward[level] = next;
            self.set_next(pred, level, Some(id));
        }

        self.recompute_max_level();
        None
    }
}

impl<K: fmt::Debug, V: fmt::Debug, G> fmt::Debug for SkipList<K, V, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for SkipList<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut list = SkipList::new();
        list.extend(iter);
        list
    }
}

impl<K: Ord, V, G: LevelGenerator> Extend<(K, V)> for SkipList<K, V, G> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a, K, V, G> IntoIterator for &'a SkipList<K, V, G> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
