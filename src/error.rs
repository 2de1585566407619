use thiserror::Error;

/// Error types related to Huffman coding operations.
#[derive(Debug, Error, PartialEq)]
pub enum HuffmanError {
    #[error("Tree construction error: {0}")]
    Tree(#[from] TreeError),

    #[error("Code table error: {0}")]
    CodeTable(#[from] CodeTableError),

    #[error("Encoding error: {0}")]
    Encode(#[from] EncodeError),

    #[error("Decoding error: {0}")]
    Decode(#[from] DecodeError),
}

/// Errors related to building or validating a coding tree.
#[derive(Debug, Error, PartialEq)]
pub enum TreeError {
    #[error("Cannot build a coding tree from an empty forest")]
    EmptyForest,

    #[error("Invalid coding tree: {0}")]
    InvalidTree(String),

    #[error("Combined frequency does not fit in 64 bits")]
    FrequencyOverflow,

    #[error("Merge queue error: {0}")]
    Queue(#[from] QueueError),
}

/// Errors raised by the merge queue.
#[derive(Debug, Error, PartialEq)]
pub enum QueueError {
    #[error("Merge queue is empty")]
    Empty,
}

/// Errors related to deriving a code table from a tree.
#[derive(Debug, Error, PartialEq)]
pub enum CodeTableError {
    /// The tree is a single leaf, so its symbols would get a zero-length code.
    #[error("Tree has a single leaf, its symbols would get a zero-length code")]
    DegenerateCode,
}

/// Errors raised while packing symbols into bytes.
#[derive(Debug, Error, PartialEq)]
pub enum EncodeError {
    #[error("Symbol {0} has no entry in the code table")]
    UnknownSymbol(String),
}

/// Errors raised while unpacking bytes into symbols.
///
/// All of them mean the byte stream is corrupted or was produced with a different tree.
#[derive(Debug, Error, PartialEq)]
pub enum DecodeError {
    #[error("Bit {bit} walks past a leaf of the coding tree")]
    InvalidTraversal {
        /// Index of the offending bit in the stream.
        bit: usize,
    },

    #[error("Invalid coding tree: {0}")]
    InvalidTree(String),

    #[error("Stream ended after {bits} bits without reaching the end-of-stream code")]
    TruncatedStream {
        /// Number of bits consumed before the stream ran out.
        bits: usize,
    },
}
