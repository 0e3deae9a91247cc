use std::fmt;

use thiserror::Error;

use crate::Alphabet;

/// Which input sequence a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Text,
    Pattern,
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Text => f.write_str("text"),
            Input::Pattern => f.write_str("pattern"),
        }
    }
}

/// Input validation failures. All of them are raised before a scan starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The pattern is empty. Good-suffix and matched-prefix tables are
    /// undefined for m = 0.
    #[error("pattern must not be empty")]
    InvalidPattern,

    #[error("{input} symbol {symbol:#04x} at position {position} is outside the alphabet {alphabet}")]
    OutOfAlphabet {
        input: Input,
        position: usize,
        symbol: u8,
        alphabet: Alphabet,
    },

    #[error("invalid alphabet range {first}-{last}: first symbol is greater than last")]
    InvalidAlphabet { first: u8, last: u8 },
}
