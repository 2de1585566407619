use crate::code_table::CodeTable;
use crate::decoder::BitUnpacker;
use crate::encoder::BitPacker;
use crate::error::HuffmanError;
use crate::frequency::FrequencyTable;
use crate::symbol::Alphabet;
use crate::tree::CodingTree;
use crate::tree_builder::TreeBuilder;

/// Holds a coding tree and its code table, built once from a frequency table.
///
/// Compression and decompression both go through the same tree, so a codec
/// decodes exactly what it encoded. The codec is never mutated after
/// construction and can be shared between threads for lookups.
///
/// # Example
///
/// ```
/// use huffman_forest::HuffmanCodec;
///
/// let text: Vec<char> = "abracadabra".chars().collect();
/// let codec = HuffmanCodec::from_symbols(&text).unwrap();
/// let packed = codec.compress(&text).unwrap();
/// assert_eq!(codec.decompress(&packed).unwrap(), text);
/// ```
#[derive(Debug, Clone)]
pub struct HuffmanCodec<T: Alphabet> {
    frequencies: FrequencyTable<T>,
    tree: CodingTree<T>,
    table: CodeTable<T>,
}

impl<T: Alphabet> HuffmanCodec<T> {
    /// Builds the coding tree and code table for `frequencies`.
    ///
    /// # Errors
    /// Returns `HuffmanError::Tree` if the tree cannot be built, or
    /// `HuffmanError::CodeTable` if it yields a zero-length code.
    pub fn from_frequencies(frequencies: FrequencyTable<T>) -> Result<Self, HuffmanError> {
        let tree = TreeBuilder::from_frequencies(&frequencies)?;
        let table = CodeTable::build(&tree)?;
        Ok(HuffmanCodec {
            frequencies,
            tree,
            table,
        })
    }

    /// Counts `symbols` and builds a codec for them.
    pub fn from_symbols(symbols: &[T]) -> Result<Self, HuffmanError> {
        Self::from_frequencies(FrequencyTable::from_symbols(symbols.iter().cloned()))
    }

    pub fn compress(&self, symbols: &[T]) -> Result<Vec<u8>, HuffmanError> {
        Ok(BitPacker::new(&self.table).encode(symbols)?)
    }

    pub fn decompress(&self, bytes: &[u8]) -> Result<Vec<T>, HuffmanError> {
        Ok(BitUnpacker::new(&self.tree).decode(bytes)?)
    }

    pub fn frequencies(&self) -> &FrequencyTable<T> {
        &self.frequencies
    }

    pub fn tree(&self) -> &CodingTree<T> {
        &self.tree
    }

    pub fn table(&self) -> &CodeTable<T> {
        &self.table
    }
}

/// Size summary of one compression run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionStats {
    pub original_bytes: usize,
    pub compressed_bytes: usize,
}

impl CompressionStats {
    pub fn new(original_bytes: usize, compressed_bytes: usize) -> Self {
        CompressionStats {
            original_bytes,
            compressed_bytes,
        }
    }

    /// Compressed size divided by original size, `0.0` for an empty original.
    pub fn ratio(&self) -> f64 {
        if self.original_bytes == 0 {
            return 0.0;
        }
        self.compressed_bytes as f64 / self.original_bytes as f64
    }

    /// Fraction of the original size saved, negative when the output grew.
    pub fn space_saving(&self) -> f64 {
        if self.original_bytes == 0 {
            return 0.0;
        }
        1.0 - self.ratio()
    }
}
