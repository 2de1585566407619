use crate::error::DecodeError;
use crate::symbol::{Alphabet, Symbol};
use crate::tree::{CodeNode, CodingTree};
use bit_vec::BitVec;

/// Unpacks bytes produced by [`crate::BitPacker`] by walking the coding tree.
pub struct BitUnpacker<'a, T: Alphabet> {
    tree: &'a CodingTree<T>,
}

impl<'a, T: Alphabet> BitUnpacker<'a, T> {
    pub fn new(tree: &'a CodingTree<T>) -> Self {
        BitUnpacker { tree }
    }

    /// Decodes `bytes` up to the end-of-stream code.
    ///
    /// Bits are read most significant first. Each bit moves a cursor from the
    /// root towards a leaf; reaching a leaf emits its symbol and resets the
    /// cursor. Bits after the end-of-stream code are padding and are ignored.
    ///
    /// # Arguments
    /// * `bytes` - The packed stream.
    ///
    /// # Returns
    /// The decoded symbols, sentinel excluded.
    ///
    /// # Errors
    /// - `DecodeError::InvalidTraversal` if a bit would descend from a leaf.
    /// - `DecodeError::InvalidTree` if a reached leaf holds more than one symbol.
    /// - `DecodeError::TruncatedStream` if the bits run out before the end-of-stream code.
    pub fn decode(&self, bytes: &[u8]) -> Result<Vec<T>, DecodeError> {
        let bits = BitVec::from_bytes(bytes);
        let root = self.tree.root();
        let mut cursor = root;
        let mut output = Vec::new();

        for (index, bit) in bits.iter().enumerate() {
            cursor = match cursor.child(bit) {
                Some(child) => child,
                None => {
                    log::warn!("Bit {index} descends from a leaf, stream does not match the tree");
                    return Err(DecodeError::InvalidTraversal { bit: index });
                }
            };

            if let CodeNode::Leaf { symbols, .. } = cursor {
                let mut leaf_symbols = symbols.iter();
                let symbol = match (leaf_symbols.next(), leaf_symbols.next()) {
                    (Some(symbol), None) => symbol,
                    _ => {
                        return Err(DecodeError::InvalidTree(format!(
                            "leaf reached at bit {index} holds {} symbols",
                            symbols.len()
                        )))
                    }
                };
                match symbol {
                    Symbol::EndOfStream => {
                        log::debug!(
                            "Decoded {} symbols, ignoring {} trailing bits",
                            output.len(),
                            bits.len() - index - 1
                        );
                        return Ok(output);
                    }
                    Symbol::Value(value) => output.push(value.clone()),
                }
                cursor = root;
            }
        }

        log::warn!("Stream ended after {} bits without an end-of-stream code", bits.len());
        Err(DecodeError::TruncatedStream { bits: bits.len() })
    }
}
