use crate::error::QueueError;
use crate::symbol::Alphabet;
use crate::tree::CodeNode;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// A queued subtree together with its position in arrival order.
#[derive(Debug)]
struct QueuedNode<T: Alphabet> {
    frequency: u64,
    /// Arrival number, breaks ties between equal frequencies.
    sequence: u64,
    node: CodeNode<T>,
}

impl<T: Alphabet> PartialEq for QueuedNode<T> {
    fn eq(&self, other: &Self) -> bool {
        self.frequency == other.frequency && self.sequence == other.sequence
    }
}

impl<T: Alphabet> Eq for QueuedNode<T> {}

impl<T: Alphabet> PartialOrd for QueuedNode<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Alphabet> Ord for QueuedNode<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.frequency
            .cmp(&other.frequency)
            .then(self.sequence.cmp(&other.sequence))
    }
}

/// Priority queue of partial trees, smallest frequency first.
///
/// Nodes with equal frequency leave the queue in the order they were inserted,
/// so the same forest always merges into the same tree.
///
/// # Example
///
/// ```
/// use huffman_forest::{CodeNode, MergeQueue, Symbol};
///
/// let mut queue = MergeQueue::new();
/// queue.insert(CodeNode::leaf(Symbol::Value('a'), 3));
/// queue.insert(CodeNode::leaf(Symbol::Value('b'), 1));
/// assert_eq!(queue.extract_min().unwrap().frequency(), 1);
/// assert_eq!(queue.len(), 1);
/// ```
#[derive(Debug)]
pub struct MergeQueue<T: Alphabet> {
    heap: BinaryHeap<Reverse<QueuedNode<T>>>,
    next_sequence: u64,
}

impl<T: Alphabet> Default for MergeQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Alphabet> MergeQueue<T> {
    pub fn new() -> Self {
        MergeQueue {
            heap: BinaryHeap::new(),
            next_sequence: 0,
        }
    }

    pub fn insert(&mut self, node: CodeNode<T>) {
        let queued = QueuedNode {
            frequency: node.frequency(),
            sequence: self.next_sequence,
            node,
        };
        self.next_sequence += 1;
        self.heap.push(Reverse(queued));
    }

    /// Removes and returns the node with the smallest frequency.
    ///
    /// # Errors
    /// Returns `QueueError::Empty` if no node remains.
    pub fn extract_min(&mut self) -> Result<CodeNode<T>, QueueError> {
        self.heap
            .pop()
            .map(|Reverse(queued)| queued.node)
            .ok_or(QueueError::Empty)
    }

    /// Returns the node `extract_min` would remove, without removing it.
    ///
    /// # Errors
    /// Returns `QueueError::Empty` if no node remains.
    pub fn peek(&self) -> Result<&CodeNode<T>, QueueError> {
        self.heap
            .peek()
            .map(|Reverse(queued)| &queued.node)
            .ok_or(QueueError::Empty)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T: Alphabet> FromIterator<CodeNode<T>> for MergeQueue<T> {
    fn from_iter<I: IntoIterator<Item = CodeNode<T>>>(nodes: I) -> Self {
        let mut queue = MergeQueue::new();
        for node in nodes {
            queue.insert(node);
        }
        queue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::Symbol;

    fn leaf(value: u8, frequency: u64) -> CodeNode<u8> {
        CodeNode::leaf(Symbol::Value(value), frequency)
    }

    #[test]
    fn extract_min_should_return_ascending_frequencies() {
        let mut queue: MergeQueue<u8> = vec![leaf(1, 5), leaf(2, 1), leaf(3, 3)].into_iter().collect();

        let order: Vec<u64> = (0..3).map(|_| queue.extract_min().unwrap().frequency()).collect();

        assert_eq!(order, vec![1, 3, 5]);
        assert!(queue.is_empty());
    }

    #[test]
    fn equal_frequencies_should_leave_in_insertion_order() {
        let mut queue: MergeQueue<u8> = vec![leaf(9, 2), leaf(4, 2), leaf(7, 2)].into_iter().collect();

        let order: Vec<Vec<Symbol<u8>>> = (0..3).map(|_| queue.extract_min().unwrap().symbols()).collect();

        assert_eq!(
            order,
            vec![
                vec![Symbol::Value(9)],
                vec![Symbol::Value(4)],
                vec![Symbol::Value(7)],
            ]
        );
    }

    #[test]
    fn reinserted_node_should_queue_behind_equal_frequencies() {
        let mut queue = MergeQueue::new();
        queue.insert(leaf(1, 1));
        queue.insert(leaf(2, 1));
        queue.insert(leaf(3, 2));

        let a = queue.extract_min().unwrap();
        let b = queue.extract_min().unwrap();
        queue.insert(CodeNode::merge(a, b).unwrap());

        assert_eq!(queue.extract_min().unwrap().symbols(), vec![Symbol::Value(3)]);
        assert_eq!(queue.extract_min().unwrap().frequency(), 2);
    }

    #[test]
    fn peek_should_not_remove() {
        let mut queue = MergeQueue::new();
        queue.insert(leaf(1, 4));

        assert_eq!(queue.peek().unwrap().frequency(), 4);
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn empty_queue_should_report_error() {
        let mut queue = MergeQueue::<u8>::new();

        assert_eq!(queue.peek().unwrap_err(), QueueError::Empty);
        assert_eq!(queue.extract_min().unwrap_err(), QueueError::Empty);
    }
}
