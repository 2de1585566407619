use crate::code_table::CodeTable;
use crate::error::EncodeError;
use crate::symbol::{Alphabet, Symbol};
use bit_vec::BitVec;

/// Packs a symbol stream into bytes using a code table.
///
/// # Bit Layout
/// ```text
/// | code(s0) | code(s1) | ... | code(sN) | code(EOF) | 0-7 zero bits |
/// ```
/// Bits fill each byte from the most significant bit down.
pub struct BitPacker<'a, T: Alphabet> {
    table: &'a CodeTable<T>,
}

impl<'a, T: Alphabet> BitPacker<'a, T> {
    pub fn new(table: &'a CodeTable<T>) -> Self {
        BitPacker { table }
    }

    /// Encodes `symbols` followed by the end-of-stream code.
    ///
    /// # Arguments
    /// * `symbols` - The stream to encode, without the sentinel.
    ///
    /// # Returns
    /// The packed bytes, zero-padded to a whole number of bytes.
    ///
    /// # Errors
    /// Returns `EncodeError::UnknownSymbol` if a symbol has no code. Nothing is
    /// produced in that case.
    pub fn encode(&self, symbols: &[T]) -> Result<Vec<u8>, EncodeError> {
        let mut bits = BitVec::new();
        for value in symbols {
            let code = self.table.code_for(&Symbol::Value(value.clone()))?;
            bits.extend(code.iter());
        }
        bits.extend(self.table.code_for(&Symbol::EndOfStream)?.iter());

        let padding = (8 - bits.len() % 8) % 8;
        log::debug!(
            "Packed {} symbols into {} bits with {} padding bits",
            symbols.len(),
            bits.len(),
            padding
        );
        Ok(bits.to_bytes())
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

    #[test]
    fn encode_should_pack_msb_first_and_pad_with_zeros() {
        // a = 0, b = 111, EOF = 110
        let table = table_for(vec![('a', 5), ('b', 2), ('c', 1), ('d', 1)]);

        let bytes = BitPacker::new(&table).encode(&['a', 'a', 'b']).unwrap();

        assert_eq!(bytes, vec![0b0011_1110]);
    }

    #[test]
    fn encode_should_not_pad_whole_bytes() {
        // x = 1, EOF = 0: seven x codes and the sentinel fill one byte exactly.
        let table = table_for(vec![('x', 4)]);

        let bytes = BitPacker::new(&table).encode(&['x'; 7]).unwrap();

        assert_eq!(bytes, vec![0b1111_1110]);
    }

    #[test]
    fn encode_should_span_bytes() {
        let table = table_for(vec![('x', 4)]);

        let bytes = BitPacker::new(&table).encode(&['x'; 9]).unwrap();

        assert_eq!(bytes, vec![0b1111_1111, 0b1000_0000]);
    }

    #[test]
    fn empty_stream_should_encode_sentinel_only() {
        let table = table_for(vec![('x', 4)]);

        let bytes = BitPacker::new(&table).encode(&[]).unwrap();

        assert_eq!(bytes, vec![0]);
    }

    #[test]
    fn encode_should_reject_unknown_symbol() {
        let table = table_for(vec![('x', 4)]);

        let result = BitPacker::new(&table).encode(&['x', 'y']);

        assert_eq!(result, Err(EncodeError::UnknownSymbol("'y'".to_string())));
    }
}
