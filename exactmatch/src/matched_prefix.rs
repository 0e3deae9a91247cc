use crate::{Reversed, SearchError, Symbols, z_algorithm};

/// Matched-prefix table, length `m + 1`.
///
/// Entry `i` is the length of the longest suffix of `pattern[i..]` that is
/// also a prefix of the pattern. Entry 0 is `m`; entry `m` is 0.
pub fn build_matched_prefix_table(pattern: &[u8]) -> Result<Vec<usize>, SearchError> {
    if pattern.is_empty() {
        return Err(SearchError::InvalidPattern);
    }
    Ok(matched_prefix(pattern))
}

/// Matched-prefix table of the reversed pattern, itself reversed.
///
/// Entry `p` is the length `k` of the longest prefix of `pattern[..p]` that
/// is also a suffix of the pattern; the fallback shift is `m - k`.
pub fn build_reversed_matched_prefix_table(pattern: &[u8]) -> Result<Vec<usize>, SearchError> {
    if pattern.is_empty() {
        return Err(SearchError::InvalidPattern);
    }
    let mut table = matched_prefix(Reversed(pattern));
    table.reverse();
    Ok(table)
}

pub(crate) fn matched_prefix<S: Symbols>(pattern: S) -> Vec<usize> {
    let m = pattern.len();
    let z = z_algorithm(&pattern);
    let mut table = vec![0usize; m + 1];

    for i in (0..m).rev() {
        table[i] = if i + z[i] == m { z[i] } else { table[i + 1] };
    }
    table[0] = m;

    table
}
