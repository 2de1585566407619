//! Huffman coding over an arbitrary ordered alphabet.
//!
//! A [`FrequencyTable`] is merged into a [`CodingTree`] by [`TreeBuilder`],
//! the tree is flattened into a prefix-free [`CodeTable`], and the pair
//! [`BitPacker`] / [`BitUnpacker`] converts between symbol streams and packed
//! bytes terminated by an end-of-stream code.
//!
//! # Example
//!
//! ```
//! use huffman_forest::{BitPacker, BitUnpacker, CodeTable, FrequencyTable, TreeBuilder};
//!
//! let input: Vec<char> = "aab".chars().collect();
//! let frequencies = FrequencyTable::from_symbols(input.iter().copied());
//! let tree = TreeBuilder::from_frequencies(&frequencies)?;
//! let table = CodeTable::build(&tree)?;
//!
//! let bytes = BitPacker::new(&table).encode(&input)?;
//! assert_eq!(BitUnpacker::new(&tree).decode(&bytes)?, input);
//! # Ok::<(), huffman_forest::HuffmanError>(())
//! ```

pub use code_table::{format_code, CodeTable};
pub use codec::{CompressionStats, HuffmanCodec};
pub use decoder::BitUnpacker;
pub use encoder::BitPacker;
pub use error::{CodeTableError, DecodeError, EncodeError, HuffmanError, QueueError, TreeError};
pub use frequency::{FrequencyTable, DEFAULT_SENTINEL_COUNT};
pub use merge_queue::MergeQueue;
pub use symbol::{Alphabet, Symbol};
pub use tree::{CodeNode, CodingTree};
pub use tree_builder::TreeBuilder;

pub mod code_table;
mod codec;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod frequency;
pub mod merge_queue;
mod symbol;
pub mod tree;
pub mod tree_builder;
