use crate::error::TreeError;
use crate::frequency::FrequencyTable;
use crate::merge_queue::MergeQueue;
use crate::symbol::Alphabet;
use crate::tree::{CodeNode, CodingTree};

/// Builds a coding tree by repeatedly merging the two lightest subtrees of a forest.
pub struct TreeBuilder;

impl TreeBuilder {
    /// Merges `initial_forest` into a single coding tree.
    ///
    /// While more than one node is queued, the two minimum nodes `a` and `b` are
    /// extracted, joined under a new internal node (`a` left, `b` right) and
    /// queued again. A forest with one node yields that node as the root.
    ///
    /// # Arguments
    /// * `initial_forest` - Subtrees to merge, usually single-symbol leaves. Their
    ///   order is the arrival order used to break frequency ties.
    ///
    /// # Returns
    /// The coding tree rooted at the last remaining node.
    ///
    /// # Errors
    /// - `TreeError::EmptyForest` if `initial_forest` is empty.
    /// - `TreeError::FrequencyOverflow` if a combined frequency exceeds `u64::MAX`.
    pub fn build<T, I>(initial_forest: I) -> Result<CodingTree<T>, TreeError>
    where
        T: Alphabet,
        I: IntoIterator<Item = CodeNode<T>>,
    {
        let mut queue: MergeQueue<T> = initial_forest.into_iter().collect();
        if queue.is_empty() {
            return Err(TreeError::EmptyForest);
        }
        log::debug!("Merging a forest of {} trees", queue.len());

        while queue.len() > 1 {
            let a = queue.extract_min()?;
            let b = queue.extract_min()?;
            log::trace!("Merging weights {} and {}", a.frequency(), b.frequency());
            queue.insert(CodeNode::merge(a, b)?);
        }

        let root = queue.extract_min()?;
        let tree = CodingTree::new(root);
        log::debug!(
            "Built coding tree with {} leaves and depth {}",
            tree.leaf_count(),
            tree.depth()
        );
        Ok(tree)
    }

    /// Builds the coding tree for a frequency table, sentinel included.
    pub fn from_frequencies<T: Alphabet>(frequencies: &FrequencyTable<T>) -> Result<CodingTree<T>, TreeError> {
        Self::build(frequencies.initial_forest())
    }
}
