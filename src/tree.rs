use crate::error::TreeError;
use crate::symbol::{Alphabet, Symbol};
use std::collections::BTreeSet;

/// A node of the coding tree.
///
/// # There are two variants:
/// - `Leaf`: Holds the symbols it represents and their combined frequency.
/// - `Internal`: Holds the sum of its children's frequencies and exactly two children.
///
/// Each child is owned by its parent, so the tree is acyclic and never shares subtrees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeNode<T: Alphabet> {
    Leaf {
        /// Symbols represented by this leaf, never empty.
        symbols: BTreeSet<Symbol<T>>,
        frequency: u64,
    },
    Internal {
        frequency: u64,
        /// Subtree reached with a `0` bit.
        left: Box<CodeNode<T>>,
        /// Subtree reached with a `1` bit.
        right: Box<CodeNode<T>>,
    },
}

impl<T: Alphabet> CodeNode<T> {
    /// Creates a leaf for a single symbol.
    pub fn leaf(symbol: Symbol<T>, frequency: u64) -> Self {
        CodeNode::Leaf {
            symbols: BTreeSet::from([symbol]),
            frequency,
        }
    }

    /// Creates a leaf standing for several symbols at once.
    ///
    /// Such leaves cannot be decoded unambiguously; they exist so callers can
    /// describe arbitrary forests and have them rejected at decode time.
    ///
    /// # Errors
    /// Returns `TreeError::InvalidTree` if `symbols` is empty.
    pub fn leaf_with_symbols(symbols: BTreeSet<Symbol<T>>, frequency: u64) -> Result<Self, TreeError> {
        if symbols.is_empty() {
            return Err(TreeError::InvalidTree("leaf without symbols".to_string()));
        }
        Ok(CodeNode::Leaf { symbols, frequency })
    }

    /// Joins two subtrees under a new internal node, `a` on the left and `b` on the right.
    ///
    /// # Errors
    /// Returns `TreeError::FrequencyOverflow` if the combined frequency does not fit in a `u64`.
    pub fn merge(a: Self, b: Self) -> Result<Self, TreeError> {
        let frequency = a
            .frequency()
            .checked_add(b.frequency())
            .ok_or(TreeError::FrequencyOverflow)?;
        Ok(CodeNode::Internal {
            frequency,
            left: Box::new(a),
            right: Box::new(b),
        })
    }

    pub fn frequency(&self) -> u64 {
        match self {
            CodeNode::Leaf { frequency, .. } => *frequency,
            CodeNode::Internal { frequency, .. } => *frequency,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, CodeNode::Leaf { .. })
    }

    /// Child reached by `bit` (`false` = left, `true` = right), `None` on a leaf.
    pub fn child(&self, bit: bool) -> Option<&CodeNode<T>> {
        match self {
            CodeNode::Leaf { .. } => None,
            CodeNode::Internal { left, right, .. } => Some(if bit { right } else { left }),
        }
    }

    /// All symbols reachable beneath this node, left to right.
    pub fn symbols(&self) -> Vec<Symbol<T>> {
        let mut result = Vec::new();
        self.collect_symbols(&mut result);
        result
    }

    fn collect_symbols(&self, result: &mut Vec<Symbol<T>>) {
        match self {
            CodeNode::Leaf { symbols, .. } => result.extend(symbols.iter().cloned()),
            CodeNode::Internal { left, right, .. } => {
                left.collect_symbols(result);
                right.collect_symbols(result);
            }
        }
    }

    fn leaf_count(&self) -> usize {
        match self {
            CodeNode::Leaf { .. } => 1,
            CodeNode::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    fn depth(&self) -> usize {
        match self {
            CodeNode::Leaf { .. } => 0,
            CodeNode::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    fn validate(&self) -> Result<(), TreeError> {
        match self {
            CodeNode::Leaf { symbols, .. } if symbols.is_empty() => {
                Err(TreeError::InvalidTree("leaf without symbols".to_string()))
            }
            CodeNode::Leaf { .. } => Ok(()),
            CodeNode::Internal { frequency, left, right } => {
                let sum = left.frequency().checked_add(right.frequency());
                if sum != Some(*frequency) {
                    return Err(TreeError::InvalidTree(format!(
                        "internal node frequency {frequency} differs from children {} + {}",
                        left.frequency(),
                        right.frequency()
                    )));
                }
                left.validate()?;
                right.validate()
            }
        }
    }
}

/// The binary tree a prefix-free code is derived from and decoded against.
///
/// Immutable once built. Encoder and decoder must use the same tree value,
/// or one rebuilt from the same frequency table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodingTree<T: Alphabet> {
    root: CodeNode<T>,
}

impl<T: Alphabet> CodingTree<T> {
    pub fn new(root: CodeNode<T>) -> Self {
        CodingTree { root }
    }

    pub fn root(&self) -> &CodeNode<T> {
        &self.root
    }

    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    /// Length of the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Checks that every leaf holds a symbol and every internal node's
    /// frequency equals the sum of its children's.
    ///
    /// # Errors
    /// Returns `TreeError::InvalidTree` describing the first violation found.
    pub fn validate(&self) -> Result<(), TreeError> {
        self.root.validate()
    }
}
