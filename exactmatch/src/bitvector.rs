use crate::{Alphabet, Input, SearchConfig, SearchError, StringSearch};

const WORD_BITS: usize = u64::BITS as usize;

pub struct BitParallel;

impl StringSearch for BitParallel {
    type Config = SearchConfig;
    type State = ShiftOr;

    fn build(config: Self::Config) -> Result<Self::State, SearchError> {
        ShiftOr::new(&config.pattern, config.alphabet)
    }

    fn find_all_bytes(state: &Self::State, text: &[u8]) -> Result<Vec<usize>, SearchError> {
        state.find_all(text)
    }
}

/// Shift-Or (bitap) exact matcher.
///
/// The state holds one bit per pattern prefix, packed into `u64` words,
/// least significant word first. Bit `j` is clear when `pattern[..=j]` ends
/// at the current text position; a clear bit `m - 1` reports a match.
/// Per text symbol the state is shifted left by one (a 0 enters bit 0) and
/// OR-ed with the symbol's mask, whose bit `j` is clear iff
/// `pattern[j] == symbol`.
#[derive(Debug, Clone)]
pub struct ShiftOr {
    len: usize,
    words: usize,
    alphabet: Alphabet,
    // `words` u64s per alphabet column
    masks: Vec<u64>,
}

impl ShiftOr {
    pub fn new(pattern: &[u8], alphabet: Alphabet) -> Result<Self, SearchError> {
        if pattern.is_empty() {
            return Err(SearchError::InvalidPattern);
        }
        alphabet.validate(Input::Pattern, pattern)?;

        let len = pattern.len();
        let words = len.div_ceil(WORD_BITS);
        let mut masks = vec![!0u64; alphabet.size() * words];

        for (j, &symbol) in pattern.iter().enumerate() {
            if let Some(col) = alphabet.column(symbol) {
                masks[col * words + j / WORD_BITS] &= !(1u64 << (j % WORD_BITS));
            }
        }

        log::debug!(
            "shift-or: pattern of length {} packed into {} word(s)",
            len,
            words
        );

        Ok(Self {
            len,
            words,
            alphabet,
            masks,
        })
    }

    pub fn pattern_len(&self) -> usize {
        self.len
    }

    fn mask(&self, symbol: u8) -> Option<&[u64]> {
        let col = self.alphabet.column(symbol)?;
        Some(&self.masks[col * self.words..(col + 1) * self.words])
    }

    pub fn find_all(&self, text: &[u8]) -> Result<Vec<usize>, SearchError> {
        self.alphabet.validate(Input::Text, text)?;
        if self.len > text.len() {
            return Ok(Vec::new());
        }

        let occurrences = if self.words == 1 {
            self.scan_single_word(text)
        } else {
            self.scan_multi_word(text)
        };

        log::debug!(
            "shift-or: {} matches in text of length {}",
            occurrences.len(),
            text.len()
        );
        Ok(occurrences)
    }

    fn scan_single_word(&self, text: &[u8]) -> Vec<usize> {
        let top = 1u64 << (self.len - 1);
        let mut state = !0u64;
        let mut result = Vec::new();

        for (i, &symbol) in text.iter().enumerate() {
            state = match self.mask(symbol) {
                Some(mask) => (state << 1) | mask[0],
                None => !0,
            };
            if state & top == 0 {
                result.push(i + 1 - self.len);
            }
        }

        result
    }

    fn scan_multi_word(&self, text: &[u8]) -> Vec<usize> {
        let top_word = (self.len - 1) / WORD_BITS;
        let top = 1u64 << ((self.len - 1) % WORD_BITS);
        let mut state = vec![!0u64; self.words];
        let mut result = Vec::new();

        for (i, &symbol) in text.iter().enumerate() {
            match self.mask(symbol) {
                Some(mask) => {
                    let mut carry = 0u64;
                    for (word, &m) in state.iter_mut().zip(mask) {
                        let next_carry = *word >> (WORD_BITS - 1);
                        *word = (*word << 1) | carry | m;
                        carry = next_carry;
                    }
                }
                None => state.fill(!0),
            }
            if state[top_word] & top == 0 {
                result.push(i + 1 - self.len);
            }
        }

        result
    }
}

/// One-shot Shift-Or search over the full byte alphabet.
pub fn match_bit_parallel(text: &[u8], pattern: &[u8]) -> Result<Vec<usize>, SearchError> {
    match_bit_parallel_with_alphabet(text, pattern, Alphabet::BYTES)
}

pub fn match_bit_parallel_with_alphabet(
    text: &[u8],
    pattern: &[u8],
    alphabet: Alphabet,
) -> Result<Vec<usize>, SearchError> {
    ShiftOr::new(pattern, alphabet)?.find_all(text)
}
