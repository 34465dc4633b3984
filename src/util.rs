use crate::arena::NodeArena;
use crate::node::NodeId;

/// Follows the code points of `key` downward from `start`, one child per
/// code point.
///
/// Returns the node reached after the last code point, which may be a
/// structural node; callers decide whether that counts as a match. An empty
/// key resolves to `start` itself.
pub(crate) fn find_node<V>(nodes: &NodeArena<V>, start: NodeId, key: &str) -> Option<NodeId> {
    key.chars()
        .try_fold(start, |current, code_point| nodes[current].child(code_point))
}
