use std::fmt;
use std::fmt::{Debug, Display};

/// Bound every alphabet element has to satisfy.
///
/// Symbols must be totally ordered so the frequency table, the code table and
/// the merge order are reproducible between runs.
pub trait Alphabet: Ord + Clone + Debug {}

impl<T: Ord + Clone + Debug> Alphabet for T {}

/// A single unit of the input stream.
///
/// # There are two variants:
/// - `Value`: An element of the input alphabet (a character or a byte).
/// - `EndOfStream`: The synthetic sentinel whose code marks the end of the payload,
///   so trailing pad bits are never mistaken for data.
///
/// `EndOfStream` orders after every `Value`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol<T: Alphabet> {
    /// An element of the input alphabet.
    Value(T),
    /// The end-of-stream sentinel.
    EndOfStream,
}

impl<T: Alphabet> Symbol<T> {
    pub fn is_end_of_stream(&self) -> bool {
        matches!(self, Symbol::EndOfStream)
    }

    /// Returns the wrapped alphabet element, or `None` for the sentinel.
    pub fn value(&self) -> Option<&T> {
        match self {
            Symbol::Value(value) => Some(value),
            Symbol::EndOfStream => None,
        }
    }
}

impl<T: Alphabet> From<T> for Symbol<T> {
    fn from(value: T) -> Self {
        Symbol::Value(value)
    }
}

impl<T: Alphabet> Display for Symbol<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Value(value) => write!(f, "{value:?}"),
            Symbol::EndOfStream => write!(f, "EOF"),
        }
    }
}
