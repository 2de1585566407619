use crate::symbol::{Alphabet, Symbol};
use crate::tree::CodeNode;
use std::collections::BTreeMap;
use std::fmt;

/// Frequency the end-of-stream sentinel gets unless configured otherwise.
pub const DEFAULT_SENTINEL_COUNT: u64 = 1;

/// Occurrence counts for every distinct symbol of an input, plus the sentinel.
///
/// Entries are kept in ascending symbol order, which is also the order the
/// initial forest is handed to the merge queue. The sentinel is always present.
///
/// # Example
///
/// ```
/// use huffman_forest::{FrequencyTable, Symbol};
///
/// let table = FrequencyTable::from_symbols("abracadabra".chars());
/// assert_eq!(table.get(&Symbol::Value('a')), 5);
/// assert_eq!(table.get(&Symbol::EndOfStream), 1);
/// assert_eq!(table.total_symbols(), 11);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable<T: Alphabet> {
    counts: BTreeMap<T, u64>,
    sentinel_count: u64,
}

impl<T: Alphabet> Default for FrequencyTable<T> {
    fn default() -> Self {
        Self {
            counts: BTreeMap::new(),
            sentinel_count: DEFAULT_SENTINEL_COUNT,
        }
    }
}

impl<T: Alphabet> FrequencyTable<T> {
    /// Counts every element of `symbols`.
    pub fn from_symbols<I: IntoIterator<Item = T>>(symbols: I) -> Self {
        let mut table = Self::default();
        for symbol in symbols {
            *table.counts.entry(symbol).or_insert(0) += 1;
        }
        table
    }

    /// Builds a table from precomputed counts. Repeated values have their counts summed.
    pub fn from_counts<I: IntoIterator<Item = (T, u64)>>(counts: I) -> Self {
        let mut table = Self::default();
        for (symbol, count) in counts {
            let entry = table.counts.entry(symbol).or_insert(0);
            *entry = entry.saturating_add(count);
        }
        table
    }

    /// Overrides the frequency assigned to the end-of-stream sentinel.
    pub fn with_sentinel_count(mut self, sentinel_count: u64) -> Self {
        self.sentinel_count = sentinel_count;
        self
    }

    /// Count of `symbol`, zero when it never occurred.
    pub fn get(&self, symbol: &Symbol<T>) -> u64 {
        match symbol {
            Symbol::Value(value) => self.counts.get(value).copied().unwrap_or(0),
            Symbol::EndOfStream => self.sentinel_count,
        }
    }

    /// Number of input symbols counted, the sentinel excluded.
    pub fn total_symbols(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Number of distinct input symbols, the sentinel excluded.
    pub fn distinct_symbols(&self) -> usize {
        self.counts.len()
    }

    /// Iterates over all entries in ascending symbol order, sentinel last.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol<T>, u64)> + '_ {
        self.counts
            .iter()
            .map(|(value, count)| (Symbol::Value(value.clone()), *count))
            .chain(std::iter::once((Symbol::EndOfStream, self.sentinel_count)))
    }

    /// One single-symbol leaf per entry, in the same order as [`FrequencyTable::iter`].
    pub fn initial_forest(&self) -> Vec<CodeNode<T>> {
        self.iter()
            .map(|(symbol, count)| CodeNode::leaf(symbol, count))
            .collect()
    }
}

impl<T: Alphabet> fmt::Display for FrequencyTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (symbol, count) in self.iter() {
            writeln!(f, "{symbol} : {count}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_symbols_should_count_every_value_and_add_sentinel() {
        let table = FrequencyTable::from_symbols("aabc".chars());

        let entries: Vec<_> = table.iter().collect();
        assert_eq!(
            entries,
            vec![
                (Symbol::Value('a'), 2),
                (Symbol::Value('b'), 1),
                (Symbol::Value('c'), 1),
                (Symbol::EndOfStream, 1),
            ]
        );
        assert_eq!(table.total_symbols(), 4);
        assert_eq!(table.distinct_symbols(), 3);
    }

    #[test]
    fn empty_input_should_still_hold_sentinel() {
        let table = FrequencyTable::<u8>::from_symbols(Vec::new());

        assert_eq!(table.iter().count(), 1);
        assert_eq!(table.get(&Symbol::EndOfStream), DEFAULT_SENTINEL_COUNT);
        assert_eq!(table.total_symbols(), 0);
    }

    #[test]
    fn from_counts_should_sum_repeated_values() {
        let table = FrequencyTable::from_counts(vec![(b'x', 3), (b'y', 0), (b'x', 2)]);

        assert_eq!(table.get(&Symbol::Value(b'x')), 5);
        assert_eq!(table.get(&Symbol::Value(b'y')), 0);
        assert_eq!(table.get(&Symbol::Value(b'z')), 0);
    }

    #[test]
    fn with_sentinel_count_should_override_default() {
        let table = FrequencyTable::from_symbols(vec![1u8, 2]).with_sentinel_count(7);

        assert_eq!(table.get(&Symbol::EndOfStream), 7);
        assert_eq!(table.total_symbols(), 2);
    }

    #[test]
    fn initial_forest_should_put_sentinel_last() {
        let table = FrequencyTable::from_symbols("ba".chars());
        let forest = table.initial_forest();

        assert_eq!(forest.len(), 3);
        assert_eq!(forest[0].symbols(), vec![Symbol::Value('a')]);
        assert_eq!(forest[2].symbols(), vec![Symbol::EndOfStream]);
    }

    #[test]
    fn display_should_list_one_entry_per_line() {
        let table = FrequencyTable::from_symbols("ab".chars());

        assert_eq!(table.to_string(), "'a' : 1\n'b' : 1\nEOF : 1\n");
    }
}
