use crate::{Alphabet, Input, SearchConfig, SearchError, StringSearch};

/// Brute-force search, the reference the other matchers are checked against.
pub struct Naive;

#[derive(Debug, Clone)]
pub struct NaivePattern {
    pattern: Vec<u8>,
    alphabet: Alphabet,
}

impl StringSearch for Naive {
    type Config = SearchConfig;
    type State = NaivePattern;

    fn build(config: Self::Config) -> Result<Self::State, SearchError> {
        if config.pattern.is_empty() {
            return Err(SearchError::InvalidPattern);
        }
        config.alphabet.validate(Input::Pattern, &config.pattern)?;
        Ok(NaivePattern {
            pattern: config.pattern,
            alphabet: config.alphabet,
        })
    }

    fn find_bytes(state: &Self::State, text: &[u8]) -> Result<Option<usize>, SearchError> {
        state.alphabet.validate(Input::Text, text)?;
        Ok(naive_find(text, &state.pattern))
    }

    fn find_all_bytes(state: &Self::State, text: &[u8]) -> Result<Vec<usize>, SearchError> {
        state.alphabet.validate(Input::Text, text)?;
        Ok(naive_find_all(text, &state.pattern))
    }
}

pub fn naive_find(text: &[u8], pattern: &[u8]) -> Option<usize> {
    let n = text.len();
    let m = pattern.len();

    if m > n {
        return None;
    }

    (0..=n - m).find(|&i| &text[i..i + m] == pattern)
}

/// Every start index where `pattern` occurs, overlapping ones included.
/// An empty pattern matches nowhere.
pub fn naive_find_all(text: &[u8], pattern: &[u8]) -> Vec<usize> {
    let n = text.len();
    let m = pattern.len();
    let mut result = Vec::new();

    if m == 0 || m > n {
        return result;
    }

    for i in 0..=n - m {
        let mut matched = true;
        for j in 0..m {
            if text[i + j] != pattern[j] {
                matched = false;
                break;
            }
        }
        if matched {
            result.push(i);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_impl_is_correct() {
        let hay = b"ababcabcabababd";
        let pat = b"ababd";
        assert_eq!(naive_find(hay, pat), Some(10));

        let hay = b"hello world";
        let pat = b"rust";
        assert_eq!(naive_find(hay, pat), None);

        let hay = b"aaaa";
        let pat = b"aa";
        assert_eq!(naive_find_all(hay, pat), vec![0, 1, 2]);

        let hay = "🌍hello🌍hello".as_bytes();
        let pat = "🌍hello".as_bytes();
        assert_eq!(naive_find(hay, pat), Some(0));
        assert_eq!(naive_find_all(hay, pat), vec![0, "🌍hello".len()]);
    }

    #[test]
    fn empty_pattern_matches_nowhere() {
        assert!(naive_find_all(b"abc", b"").is_empty());
    }

    #[test]
    fn trait_validates_inputs() {
        let config = SearchConfig::new(b"ab".to_vec(), Alphabet::PRINTABLE);
        let state = Naive::build(config).unwrap();
        assert_eq!(Naive::find_all(&state, "xabab").unwrap(), vec![1, 3]);
        assert_eq!(Naive::find(&state, "xabab").unwrap(), Some(1));
        assert!(Naive::find_all(&state, "ab ab").is_err());

        let empty = SearchConfig::new(Vec::new(), Alphabet::BYTES);
        assert!(matches!(Naive::build(empty), Err(SearchError::InvalidPattern)));
    }
}
