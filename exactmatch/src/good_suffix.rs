use crate::{Reversed, SearchError, Symbols, z_algorithm};

/// Strong good-suffix table, length `m + 1`.
///
/// Entry `j` is the rightmost position `i <= m - 2` such that the substring
/// ending at `i` equals the pattern suffix starting at `j`, and the symbol
/// before it differs from the one before that suffix. The shift after a
/// mismatch at `j - 1` is `m - 1 - i`.
pub fn build_good_suffix_table(pattern: &[u8]) -> Result<Vec<Option<usize>>, SearchError> {
    if pattern.is_empty() {
        return Err(SearchError::InvalidPattern);
    }
    Ok(good_suffix(pattern))
}

/// Good-suffix table of the reversed pattern, itself reversed.
///
/// Entry `p` describes the prefix `pattern[..p]` matched in a left-to-right
/// comparison: `m - 1 - value` is the smallest shift that re-aligns an equal
/// earlier occurrence of that prefix.
pub fn build_reversed_good_suffix_table(
    pattern: &[u8],
) -> Result<Vec<Option<usize>>, SearchError> {
    if pattern.is_empty() {
        return Err(SearchError::InvalidPattern);
    }
    let mut table = good_suffix(Reversed(pattern));
    table.reverse();
    Ok(table)
}

pub(crate) fn good_suffix<S: Symbols>(pattern: S) -> Vec<Option<usize>> {
    let m = pattern.len();
    let z_of_reversed = z_algorithm(Reversed(&pattern));
    let mut table = vec![None; m + 1];

    // suffix_z[i] = z_of_reversed[m - 1 - i]: longest suffix of pattern[..=i]
    // that is also a suffix of the pattern
    for i in 0..m.saturating_sub(1) {
        let suffix_z = z_of_reversed[m - 1 - i];
        table[m - suffix_z] = Some(i);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn golden_acababacaba() {
        let table = build_good_suffix_table(b"acababacaba").unwrap();
        assert_eq!(
            table,
            vec![
                None,
                None,
                None,
                None,
                None,
                None,
                Some(4),
                None,
                Some(6),
                None,
                Some(8),
                Some(9),
            ]
        );
    }

    #[test]
    fn golden_acababacaba_reversed() {
        let table = build_reversed_good_suffix_table(b"acababacaba").unwrap();
        let mut expected = vec![None; 12];
        expected[0] = Some(9);
        expected[1] = Some(8);
        expected[5] = Some(4);
        assert_eq!(table, expected);
    }

    #[test]
    fn single_symbol_pattern_has_no_entries() {
        assert_eq!(build_good_suffix_table(b"x").unwrap(), vec![None, None]);
        assert_eq!(
            build_reversed_good_suffix_table(b"x").unwrap(),
            vec![None, None]
        );
    }

    #[test]
    fn empty_pattern_is_rejected() {
        assert_eq!(build_good_suffix_table(b""), Err(SearchError::InvalidPattern));
        assert_eq!(
            build_reversed_good_suffix_table(b""),
            Err(SearchError::InvalidPattern)
        );
    }

    #[test]
    fn entries_are_real_reoccurrences() {
        let pattern = b"abaabaabbaba";
        let m = pattern.len();
        let table = build_good_suffix_table(pattern).unwrap();
        for (j, entry) in table.iter().enumerate() {
            if let Some(i) = *entry {
                let len = m - j;
                assert!(i < m - 1);
                assert_eq!(&pattern[i + 1 - len..=i], &pattern[j..]);
            }
        }
    }
}
