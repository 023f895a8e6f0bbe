use std::ops::Index;

use gridsearch_core::Cell;

/// Handle to a [`SearchNode`] inside a [`NodeArena`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    /// Position of the node in its arena.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One placement of a cell into the frontier.
///
/// Several nodes may exist for the same cell (competing routes); at most one
/// of them is ever finalized.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SearchNode {
    pub cell: Cell,
    /// The node this one was expanded from; `None` only for the start node.
    pub parent: Option<NodeId>,
    /// Edges travelled from the start.
    pub path_cost: i32,
    /// Estimated remaining cost to the goal (zero for uninformed searches).
    pub heuristic: f64,
}

impl SearchNode {
    /// Root node for `cell`.
    #[inline]
    pub fn root(cell: Cell, heuristic: f64) -> Self {
        Self {
            cell,
            parent: None,
            path_cost: 0,
            heuristic,
        }
    }

    /// `path_cost + heuristic`.
    #[inline]
    pub fn priority(&self) -> f64 {
        f64::from(self.path_cost) + self.heuristic
    }
}

// ---------------------------------------------------------------------------
// NodeArena
// ---------------------------------------------------------------------------

/// Append-only storage for every node created during one run.
///
/// Predecessor links are arena indices. A parent is always pushed before its
/// children, so every link points strictly backwards and the links form a
/// tree rooted at the start node.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an arena able to hold `capacity` nodes without reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Store `node`, returning its handle.
    pub fn push(&mut self, node: SearchNode) -> NodeId {
        let id = NodeId(u32::try_from(self.nodes.len()).unwrap_or(u32::MAX));
        if let Some(parent) = node.parent {
            assert!(parent < id, "node arena: parent {parent:?} is not older than {id:?}");
        }
        self.nodes.push(node);
        id
    }

    /// Look up a node.
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&SearchNode> {
        self.nodes.get(id.index())
    }

    /// Number of nodes created so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no node has been created yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Walk predecessor links from `id` back to the root and return the cells
    /// in root → `id` order.
    ///
    /// Runs in time proportional to the path length and does not modify the
    /// arena, so repeated calls return identical paths.
    pub fn path_to(&self, id: NodeId) -> Vec<Cell> {
        let mut path = Vec::new();
        let mut cur = Some(id);
        while let Some(ci) = cur {
            let node = &self[ci];
            path.push(node.cell);
            cur = node.parent;
        }
        path.reverse();
        path
    }
}

impl Index<NodeId> for NodeArena {
    type Output = SearchNode;

    #[inline]
    fn index(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(arena: &mut NodeArena, cells: &[Cell]) -> NodeId {
        let mut id = arena.push(SearchNode::root(cells[0], 0.0));
        for (i, &c) in cells.iter().enumerate().skip(1) {
            id = arena.push(SearchNode {
                cell: c,
                parent: Some(id),
                path_cost: i as i32,
                heuristic: 0.0,
            });
        }
        id
    }

    #[test]
    fn path_runs_root_to_leaf() {
        let cells = [Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 1)];
        let mut arena = NodeArena::new();
        let leaf = chain(&mut arena, &cells);
        assert_eq!(arena.path_to(leaf), cells.to_vec());
        assert_eq!(arena[leaf].path_cost, 2);
    }

    #[test]
    fn reconstruction_is_repeatable() {
        let mut arena = NodeArena::with_capacity(4);
        let leaf = chain(&mut arena, &[Cell::new(2, 2), Cell::new(2, 1), Cell::new(2, 0)]);
        let first = arena.path_to(leaf);
        let second = arena.path_to(leaf);
        assert_eq!(first, second);
        assert_eq!(arena.len(), 3);
    }

    #[test]
    fn root_path_is_single_cell() {
        let mut arena = NodeArena::new();
        let root = arena.push(SearchNode::root(Cell::new(4, 4), 3.0));
        assert_eq!(arena.path_to(root), vec![Cell::new(4, 4)]);
        assert_eq!(arena[root].priority(), 3.0);
    }

    #[test]
    fn siblings_share_a_prefix() {
        let mut arena = NodeArena::new();
        let root = arena.push(SearchNode::root(Cell::new(1, 1), 0.0));
        let a = arena.push(SearchNode {
            cell: Cell::new(0, 1),
            parent: Some(root),
            path_cost: 1,
            heuristic: 0.0,
        });
        let b = arena.push(SearchNode {
            cell: Cell::new(2, 1),
            parent: Some(root),
            path_cost: 1,
            heuristic: 0.0,
        });
        assert_eq!(arena.path_to(a)[0], arena.path_to(b)[0]);
        assert!(arena.get(NodeId(99)).is_none());
    }

    #[test]
    #[should_panic(expected = "not older")]
    fn forward_links_are_rejected() {
        let mut arena = NodeArena::new();
        arena.push(SearchNode {
            cell: Cell::ORIGIN,
            parent: Some(NodeId(5)),
            path_cost: 1,
            heuristic: 0.0,
        });
    }
}
