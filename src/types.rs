/// Handle to a tower node: an index into the skip list's node arena.
///
/// Handles are stable for the lifetime of the node. A slot freed by a
/// delete may be handed out again by a later insert, so a handle must never
/// outlive the unlink of the node it names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(pub(crate) usize);

/// A forward link: the next node at some level, or the end of the list.
pub(crate) type Link = Option<NodeId>;

/// A place a search can stand on: the sentinel head, or a real node.
///
/// The sentinel has no key. Conceptually it sorts before every real key,
/// so it is never compared, only stepped off of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Position {
    Head,
    Node(NodeId),
}
