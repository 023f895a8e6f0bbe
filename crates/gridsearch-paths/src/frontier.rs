use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use crate::node::NodeId;

/// The set of nodes waiting to be expanded.
///
/// Implementations differ only in extraction order. `priority` is ignored by
/// the queue and the stack.
pub trait Frontier {
    /// Insert a node.
    fn push(&mut self, id: NodeId, priority: f64);

    /// Remove the next node to expand.
    fn pop(&mut self) -> Option<NodeId>;

    /// Number of pending entries, stale duplicates included.
    fn len(&self) -> usize;

    /// Whether nothing is pending.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All pending entries, for step observations.
    fn snapshot(&self) -> Vec<NodeId>;
}

// ---------------------------------------------------------------------------
// FIFO
// ---------------------------------------------------------------------------

/// First-in first-out queue (breadth-first).
#[derive(Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<NodeId>,
}

impl Frontier for FifoFrontier {
    #[inline]
    fn push(&mut self, id: NodeId, _priority: f64) {
        self.queue.push_back(id);
    }

    #[inline]
    fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop_front()
    }

    #[inline]
    fn len(&self) -> usize {
        self.queue.len()
    }

    /// Front to back.
    fn snapshot(&self) -> Vec<NodeId> {
        self.queue.iter().copied().collect()
    }
}

// ---------------------------------------------------------------------------
// LIFO
// ---------------------------------------------------------------------------

/// Last-in first-out stack (depth-first).
#[derive(Debug, Default)]
pub struct LifoFrontier {
    stack: Vec<NodeId>,
}

impl Frontier for LifoFrontier {
    #[inline]
    fn push(&mut self, id: NodeId, _priority: f64) {
        self.stack.push(id);
    }

    #[inline]
    fn pop(&mut self) -> Option<NodeId> {
        self.stack.pop()
    }

    #[inline]
    fn len(&self) -> usize {
        self.stack.len()
    }

    /// Bottom to top, i.e. push order; the last entry is popped next.
    fn snapshot(&self) -> Vec<NodeId> {
        self.stack.clone()
    }
}

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

/// Heap entry ordered by `(priority, seq)` ascending.
#[derive(Clone, Copy, Debug)]
struct Entry {
    priority: f64,
    seq: u64,
    id: NodeId,
}

impl Entry {
    #[inline]
    fn key_cmp(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then(self.seq.cmp(&other.seq))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.key_cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest key first.
        other.key_cmp(self)
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue with stable tie-breaking: among equal priorities the
/// entry inserted first is extracted first.
#[derive(Debug, Default)]
pub struct PriorityFrontier {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

impl PriorityFrontier {
    /// The entry [`Frontier::pop`] would return, with its priority.
    pub fn peek(&self) -> Option<(NodeId, f64)> {
        self.heap.peek().map(|e| (e.id, e.priority))
    }
}

impl Frontier for PriorityFrontier {
    fn push(&mut self, id: NodeId, priority: f64) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { priority, seq, id });
    }

    #[inline]
    fn pop(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|e| e.id)
    }

    #[inline]
    fn len(&self) -> usize {
        self.heap.len()
    }

    /// Extraction order.
    fn snapshot(&self) -> Vec<NodeId> {
        let mut entries: Vec<Entry> = self.heap.iter().copied().collect();
        entries.sort_by(Entry::key_cmp);
        entries.into_iter().map(|e| e.id).collect()
    }
}
