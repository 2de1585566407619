use crate::error::{CodeTableError, EncodeError};
use crate::symbol::{Alphabet, Symbol};
use crate::tree::{CodeNode, CodingTree};
use bit_vec::BitVec;
use std::collections::BTreeMap;
use std::fmt;

/// Mapping from every symbol of a coding tree to its code word.
///
/// Codes are root-to-leaf paths (`0` = left, `1` = right), so the table is
/// prefix-free and no code is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable<T: Alphabet> {
    codes: BTreeMap<Symbol<T>, BitVec>,
}

impl<T: Alphabet> CodeTable<T> {
    /// Derives the code table of `tree`.
    ///
    /// Every symbol of a leaf is mapped to the path leading to that leaf.
    ///
    /// # Errors
    /// Returns `CodeTableError::DegenerateCode` if the root is a leaf: its
    /// symbols would get a zero-length code, which cannot be packed into bytes.
    pub fn build(tree: &CodingTree<T>) -> Result<Self, CodeTableError> {
        if tree.root().is_leaf() {
            return Err(CodeTableError::DegenerateCode);
        }
        let mut codes = BTreeMap::new();
        collect_codes(tree.root(), BitVec::new(), &mut codes);
        log::debug!("Derived {} codes from the coding tree", codes.len());
        Ok(CodeTable { codes })
    }

    pub fn get(&self, symbol: &Symbol<T>) -> Option<&BitVec> {
        self.codes.get(symbol)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterates over `(symbol, code)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (&Symbol<T>, &BitVec)> {
        self.codes.iter()
    }

    /// Checks that no code is a prefix of another one.
    pub fn is_prefix_free(&self) -> bool {
        let codes: Vec<&BitVec> = self.codes.values().collect();
        codes.iter().enumerate().all(|(i, a)| {
            codes
                .iter()
                .skip(i + 1)
                .all(|b| !is_prefix(a, b) && !is_prefix(b, a))
        })
    }

    /// Number of bits `symbols` occupy once encoded, sentinel code included
    /// and padding excluded.
    ///
    /// # Errors
    /// Returns `EncodeError::UnknownSymbol` for the first symbol without a code.
    pub fn encoded_bit_len(&self, symbols: &[T]) -> Result<usize, EncodeError> {
        let mut total = self.code_for(&Symbol::EndOfStream)?.len();
        for value in symbols {
            total += self.code_for(&Symbol::Value(value.clone()))?.len();
        }
        Ok(total)
    }

    pub(crate) fn code_for(&self, symbol: &Symbol<T>) -> Result<&BitVec, EncodeError> {
        self.codes
            .get(symbol)
            .ok_or_else(|| EncodeError::UnknownSymbol(symbol.to_string()))
    }
}

/// Walks the tree depth first, handing each branch its own copy of the path.
fn collect_codes<T: Alphabet>(node: &CodeNode<T>, path: BitVec, codes: &mut BTreeMap<Symbol<T>, BitVec>) {
    match node {
        CodeNode::Leaf { symbols, .. } => {
            for symbol in symbols {
                codes.insert(symbol.clone(), path.clone());
            }
        }
        CodeNode::Internal { left, right, .. } => {
            let mut left_path = path.clone();
            left_path.push(false);
            collect_codes(left, left_path, codes);

            let mut right_path = path;
            right_path.push(true);
            collect_codes(right, right_path, codes);
        }
    }
}

fn is_prefix(prefix: &BitVec, code: &BitVec) -> bool {
    prefix.len() <= code.len() && prefix.iter().zip(code.iter()).all(|(a, b)| a == b)
}

/// Renders a code word as a string of `0` and `1`.
pub fn format_code(code: &BitVec) -> String {
    code.iter().map(|bit| if bit { '1' } else { '0' }).collect()
}

impl<T: Alphabet> fmt::Display for CodeTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (symbol, code) in &self.codes {
            writeln!(f, "{symbol} : {}", format_code(code))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::FrequencyTable;
    use crate::tree_builder::TreeBuilder;

    fn table_for(counts: Vec<(char, u64)>) -> CodeTable<char> {
        let tree = TreeBuilder::from_frequencies(&FrequencyTable::from_counts(counts)).unwrap();
        CodeTable::build(&tree).unwrap()
    }

    fn code(table: &CodeTable<char>, symbol: Symbol<char>) -> String {
        format_code(table.get(&symbol).unwrap())
    }

    #[test]
    fn build_should_follow_tree_paths() {
        let table = table_for(vec![('a', 5), ('b', 2), ('c', 1), ('d', 1)]);

        assert_eq!(code(&table, Symbol::Value('a')), "0");
        assert_eq!(code(&table, Symbol::Value('c')), "100");
        assert_eq!(code(&table, Symbol::Value('d')), "101");
        assert_eq!(code(&table, Symbol::EndOfStream), "110");
        assert_eq!(code(&table, Symbol::Value('b')), "111");
        assert_eq!(table.len(), 5);
    }

    #[test]
    fn more_frequent_symbols_should_get_shorter_or_equal_codes() {
        let table = table_for(vec![('a', 5), ('b', 2), ('c', 1), ('d', 1)]);
        let len = |c| table.get(&Symbol::Value(c)).unwrap().len();

        assert!(len('a') <= len('b'));
        assert!(len('b') <= len('c'));
        assert!(len('b') <= len('d'));
    }

    #[test]
    fn single_symbol_alphabet_should_get_one_bit_codes() {
        let table = table_for(vec![('x', 4)]);

        assert_eq!(code(&table, Symbol::EndOfStream), "0");
        assert_eq!(code(&table, Symbol::Value('x')), "1");
    }

    #[test]
    fn single_leaf_tree_should_be_rejected() {
        let tree = TreeBuilder::build(vec![CodeNode::leaf(Symbol::Value('x'), 3)]).unwrap();

        assert_eq!(CodeTable::build(&tree), Err(CodeTableError::DegenerateCode));
    }

    #[test]
    fn table_should_be_prefix_free() {
        let table = table_for("the quick brown fox jumps over the lazy dog"
            .chars()
            .map(|c| (c, 1 + c as u64 % 7))
            .collect());

        assert!(table.is_prefix_free());
        assert!(table.iter().all(|(_, code)| !code.is_empty()));
    }

    #[test]
    fn encoded_bit_len_should_count_sentinel() {
        let table = table_for(vec![('a', 5), ('b', 2), ('c', 1), ('d', 1)]);

        assert_eq!(table.encoded_bit_len(&['a', 'a', 'b']), Ok(1 + 1 + 3 + 3));
        assert_eq!(
            table.encoded_bit_len(&['z']),
            Err(EncodeError::UnknownSymbol("'z'".to_string()))
        );
    }

    #[test]
    fn display_should_list_codes() {
        let table = table_for(vec![('x', 4)]);

        assert_eq!(table.to_string(), "'x' : 1\nEOF : 0\n");
    }
}
