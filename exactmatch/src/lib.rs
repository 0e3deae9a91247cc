mod alphabet;
mod bad_char;
mod bitvector;
mod bm;
mod error;
mod good_suffix;
mod matched_prefix;
mod naive;
mod symbols;
mod z;

pub use alphabet::Alphabet;
pub use bad_char::BadCharacterTable;
pub use bitvector::{BitParallel, ShiftOr, match_bit_parallel, match_bit_parallel_with_alphabet};
pub use bm::{
    BoyerMoore, ReversedBoyerMoore, ScanStats, Shift, VerifiedRange, match_boyer_moore,
    match_boyer_moore_with_alphabet,
};
pub use error::{Input, SearchError};
pub use good_suffix::{build_good_suffix_table, build_reversed_good_suffix_table};
pub use matched_prefix::{build_matched_prefix_table, build_reversed_matched_prefix_table};
pub use naive::{Naive, NaivePattern, naive_find, naive_find_all};
pub use symbols::{Reversed, Symbols};
pub use z::z_algorithm;

/// What every matcher is built from: the pattern and the alphabet its
/// tables are indexed by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub pattern: Vec<u8>,
    pub alphabet: Alphabet,
}

impl SearchConfig {
    pub fn new(pattern: Vec<u8>, alphabet: Alphabet) -> Self {
        Self { pattern, alphabet }
    }
}

/// A matcher that preprocesses its pattern once into an immutable state and
/// then scans any number of texts with it.
pub trait StringSearch {
    type Config;
    type State;

    fn build(config: Self::Config) -> Result<Self::State, SearchError>;

    /// Ascending start indices of every occurrence, overlapping ones included.
    fn find_all_bytes(state: &Self::State, text: &[u8]) -> Result<Vec<usize>, SearchError>;

    /// Leftmost occurrence.
    fn find_bytes(state: &Self::State, text: &[u8]) -> Result<Option<usize>, SearchError> {
        Ok(Self::find_all_bytes(state, text)?.first().copied())
    }

    fn find(state: &Self::State, text: &str) -> Result<Option<usize>, SearchError> {
        Self::find_bytes(state, text.as_bytes())
    }

    fn find_all(state: &Self::State, text: &str) -> Result<Vec<usize>, SearchError> {
        Self::find_all_bytes(state, text.as_bytes())
    }
}

/// Extended bad-character table of `pattern`. See [`BadCharacterTable`].
pub fn build_bad_character_table(
    pattern: &[u8],
    alphabet: Alphabet,
) -> Result<BadCharacterTable, SearchError> {
    if pattern.is_empty() {
        return Err(SearchError::InvalidPattern);
    }
    BadCharacterTable::build(pattern, alphabet)
}

pub fn build_reversed_bad_character_table(
    pattern: &[u8],
    alphabet: Alphabet,
) -> Result<BadCharacterTable, SearchError> {
    if pattern.is_empty() {
        return Err(SearchError::InvalidPattern);
    }
    BadCharacterTable::build_reversed(pattern, alphabet)
}
