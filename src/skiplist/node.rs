use crate::types::{Link, NodeId};

/// One stored entry and its tower of forward links.
///
/// ```text
/// Level 2:  HEAD ──────────► 23 ─────────────────────► 59 ──► NIL
/// Level 1:  HEAD ──────────► 23 ──► 34 ──────────────► 59 ──► NIL
/// Level 0:  HEAD ──► 14 ──► 23 ──► 34 ──► 42 ──► 50 ──► 59 ──► NIL
/// ```
///
/// `forward[i]` is the next node at level `i`. The tower spans levels
/// `0..=height` and never grows or shrinks after construction.
#[derive(Debug)]
pub(crate) struct TowerNode<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) forward: Box<[Link]>,
}

impl<K, V> TowerNode<K, V> {
    pub(crate) fn new(key: K, value: V, height: usize) -> Self {
        TowerNode {
            key,
            value,
            forward: vec![None; height + 1].into_boxed_slice(),
        }
    }

    /// Highest level this tower reaches.
    #[inline]
    pub(crate) fn height(&self) -> usize {
        self.forward.len() - 1
    }
}

enum Slot<K, V> {
    Occupied(TowerNode<K, V>),
    Vacant { next_free: Option<usize> },
}

/// Owns every tower node. Links between nodes are [`NodeId`]s into this
/// arena, so unlinking and freeing a node never leaves a dangling reference.
///
/// Freed slots are threaded onto a free list and reused by later inserts.
pub(crate) struct Arena<K, V> {
    slots: Vec<Slot<K, V>>,
    free_head: Option<usize>,
    occupied: usize,
}

impl<K, V> Arena<K, V> {
    pub(crate) fn new() -> Self {
        Arena {
            slots: Vec::new(),
            free_head: None,
            occupied: 0,
        }
    }

    pub(crate) fn alloc(&mut self, node: TowerNode<K, V>) -> NodeId {
        self.occupied += 1;
        match self.free_head {
            Some(idx) => {
                if let Slot::Vacant { next_free } = self.slots[idx] {
                    self.free_head = next_free;
                }
                self.slots[idx] = Slot::Occupied(node);
                NodeId(idx)
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    /// Frees the slot and hands the node back. The caller must already have
    /// unlinked it from every level.
    pub(crate) fn free(&mut self, id: NodeId) -> TowerNode<K, V> {
        let slot = std::mem::replace(
            &mut self.slots[id.0],
            Slot::Vacant {
                next_free: self.free_head,
            },
        );
        match slot {
            Slot::Occupied(node) => {
                self.free_head = Some(id.0);
                self.occupied -= 1;
                node
            }
            Slot::Vacant { .. } => unreachable!("double free of skip list node {}", id.0),
        }
    }

    #[inline]
    pub(crate) fn get(&self, id: NodeId) -> &TowerNode<K, V> {
        match &self.slots[id.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("dangling skip list link {}", id.0),
        }
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut TowerNode<K, V> {
        match &mut self.slots[id.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("dangling skip list link {}", id.0),
        }
    }

    /// Number of live nodes.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.occupied
    }

    /// Number of slots ever allocated, live or free.
    #[cfg(test)]
    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
        self.occupied = 0;
    }
}
