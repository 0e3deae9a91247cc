use crate::{
    Alphabet, BadCharacterTable, Input, SearchConfig, SearchError, StringSearch,
    build_reversed_good_suffix_table, build_reversed_matched_prefix_table,
};

pub struct BoyerMoore;

impl StringSearch for BoyerMoore {
    type Config = SearchConfig;
    type State = ReversedBoyerMoore;

    fn build(config: Self::Config) -> Result<Self::State, SearchError> {
        ReversedBoyerMoore::new(&config.pattern, config.alphabet)
    }

    fn find_all_bytes(state: &Self::State, text: &[u8]) -> Result<Vec<usize>, SearchError> {
        state.find_all(text)
    }
}

/// Pattern positions `start..=stop` already known to match the next
/// alignment (Galil's rule). The comparison loop jumps over them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerifiedRange {
    pub start: usize,
    pub stop: usize,
}

impl VerifiedRange {
    fn single(position: usize) -> Self {
        Self {
            start: position,
            stop: position,
        }
    }

    fn with_len(start: usize, len: usize) -> Option<Self> {
        (len > 0).then(|| Self {
            start,
            stop: start + len - 1,
        })
    }
}

/// Outcome of one shift decision: how far the window moves left and what
/// the next alignment may skip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shift {
    pub amount: usize,
    pub memo: Option<VerifiedRange>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Window positions tried.
    pub alignments: usize,
    /// Symbol comparisons performed.
    pub comparisons: usize,
    /// Pattern positions jumped over through a verified range.
    pub skipped: usize,
}

/// Boyer–Moore matcher that slides its window right to left over the text
/// and compares each alignment left to right.
///
/// All tables are the mirrored ("reversed") variants, built once in `new`.
/// The state is immutable, so one instance can serve any number of scans,
/// including concurrent ones.
#[derive(Debug, Clone)]
pub struct ReversedBoyerMoore {
    pattern: Vec<u8>,
    alphabet: Alphabet,
    bad_char: BadCharacterTable,
    good_suffix: Vec<Option<usize>>,
    matched_prefix: Vec<usize>,
}

impl ReversedBoyerMoore {
    pub fn new(pattern: &[u8], alphabet: Alphabet) -> Result<Self, SearchError> {
        if pattern.is_empty() {
            return Err(SearchError::InvalidPattern);
        }
        let bad_char = BadCharacterTable::build_reversed(pattern, alphabet)?;
        let good_suffix = build_reversed_good_suffix_table(pattern)?;
        let matched_prefix = build_reversed_matched_prefix_table(pattern)?;

        log::debug!(
            "reversed boyer-moore: built tables for pattern of length {} over alphabet {}",
            pattern.len(),
            alphabet
        );

        Ok(Self {
            pattern: pattern.to_vec(),
            alphabet,
            bad_char,
            good_suffix,
            matched_prefix,
        })
    }

    pub fn pattern(&self) -> &[u8] {
        &self.pattern
    }

    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// All occurrences of the pattern in `text`, ascending. Overlapping
    /// occurrences are all reported.
    pub fn find_all(&self, text: &[u8]) -> Result<Vec<usize>, SearchError> {
        self.find_all_with_stats(text).map(|(occurrences, _)| occurrences)
    }

    pub fn find_all_with_stats(
        &self,
        text: &[u8],
    ) -> Result<(Vec<usize>, ScanStats), SearchError> {
        self.alphabet.validate(Input::Text, text)?;

        let m = self.pattern.len();
        let n = text.len();
        let mut occurrences = Vec::new();
        let mut stats = ScanStats::default();

        if m > n {
            return Ok((occurrences, stats));
        }

        // rightmost text index covered by the current window
        let mut last = n - 1;
        let mut memo = None;

        loop {
            let Some(first) = (last + 1).checked_sub(m) else {
                break;
            };
            stats.alignments += 1;

            let window = &text[first..=last];
            let shift = match self.compare(window, memo, &mut stats) {
                None => {
                    occurrences.push(first);
                    self.shift_after_match()
                }
                Some(p) => self.shift_after_mismatch(p, window[p]),
            };
            debug_assert!(shift.amount >= 1, "scan stalled at {first}");

            memo = shift.memo;
            match last.checked_sub(shift.amount) {
                Some(next) => last = next,
                None => break,
            }
        }

        // found right to left
        occurrences.reverse();

        log::debug!(
            "reversed boyer-moore: {} matches in text of length {} ({:?})",
            occurrences.len(),
            n,
            stats
        );

        Ok((occurrences, stats))
    }

    /// Compares `window` against the pattern left to right, jumping over the
    /// verified range. Returns the first mismatching position.
    fn compare(
        &self,
        window: &[u8],
        memo: Option<VerifiedRange>,
        stats: &mut ScanStats,
    ) -> Option<usize> {
        let m = self.pattern.len();
        let mut p = 0;

        while p < m {
            if let Some(range) = memo.filter(|range| range.start == p) {
                stats.skipped += range.stop - range.start + 1;
                p = range.stop + 1;
                continue;
            }
            stats.comparisons += 1;
            if self.pattern[p] != window[p] {
                return Some(p);
            }
            p += 1;
        }

        None
    }

    /// Shift after a full match: slide until the longest proper border of
    /// the pattern lines up with itself. The border is then known to match.
    pub fn shift_after_match(&self) -> Shift {
        let m = self.pattern.len();
        let border = self.matched_prefix[m - 1];
        Shift {
            amount: m - border,
            memo: VerifiedRange::with_len(m - border, border),
        }
    }

    /// Shift after `pattern[..p]` matched and `pattern[p]` did not match
    /// `symbol`.
    pub fn shift_after_mismatch(&self, p: usize, symbol: u8) -> Shift {
        let m = self.pattern.len();

        // nearest occurrence of the symbol right of p, lined up under it
        let (bad_char_shift, bad_char_position) = match self.bad_char.get(p, symbol) {
            Some(value) => {
                let shift = m - 1 - value - p;
                (shift, Some(p + shift))
            }
            None => (m - p, None),
        };

        // earlier copy of the matched prefix, else the longest border inside it
        let (border_shift, border_range) = match self.good_suffix[p] {
            Some(value) => {
                let shift = m - 1 - value;
                (shift, VerifiedRange::with_len(shift, p))
            }
            None => {
                let border = self.matched_prefix[p];
                (m - border, VerifiedRange::with_len(m - border, border))
            }
        };

        let amount = bad_char_shift.max(border_shift);
        let memo = if bad_char_shift > border_shift
            || (bad_char_shift == border_shift && border_range.is_none())
        {
            bad_char_position.map(VerifiedRange::single)
        } else if bad_char_shift == border_shift {
            // both rules agree, so the bad-character hit sits right after the range
            border_range.map(|range| match bad_char_position {
                Some(q) if q == range.stop + 1 => VerifiedRange {
                    start: range.start,
                    stop: q,
                },
                _ => range,
            })
        } else {
            border_range
        };

        log::trace!(
            "mismatch at {p}: bad-char {bad_char_shift}, border {border_shift}, memo {memo:?}"
        );

        Shift { amount, memo }
    }
}

/// One-shot reversed Boyer–Moore search over the full byte alphabet.
pub fn match_boyer_moore(text: &[u8], pattern: &[u8]) -> Result<Vec<usize>, SearchError> {
    match_boyer_moore_with_alphabet(text, pattern, Alphabet::BYTES)
}

pub fn match_boyer_moore_with_alphabet(
    text: &[u8],
    pattern: &[u8],
    alphabet: Alphabet,
) -> Result<Vec<usize>, SearchError> {
    ReversedBoyerMoore::new(pattern, alphabet)?.find_all(text)
}
