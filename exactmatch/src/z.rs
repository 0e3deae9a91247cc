use crate::Symbols;

/// Computes the Z-array of `s` in O(L).
///
/// `z[i]` for `i > 0` is the length of the longest substring starting at `i`
/// that is also a prefix of `s`. `z[0]` is a sentinel holding `s.len()`.
/// An empty input yields an empty array.
pub fn z_algorithm<S: Symbols>(s: S) -> Vec<usize> {
    let len = s.len();
    if len == 0 {
        return Vec::new();
    }

    let mut z = vec![0usize; len];
    z[0] = len;

    // rightmost Z-box seen so far, inclusive bounds
    let (mut l, mut r) = (0usize, 0usize);

    for i in 1..len {
        let mut known = 0;

        if i <= r {
            let k = i - l;
            let remaining = r - i + 1;

            if z[k] < remaining {
                z[i] = z[k];
                continue;
            } else if z[k] > remaining {
                z[i] = remaining;
                continue;
            }
            // z[k] == remaining: at least that much, keep going past r
            known = remaining;
        }

        while i + known < len && s.at(known) == s.at(i + known) {
            known += 1;
        }
        z[i] = known;

        if known > 0 && i + known - 1 > r {
            l = i;
            r = i + known - 1;
        }
    }

    z
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Reversed;
    use test_case::test_case;

    fn naive_z(s: &[u8]) -> Vec<usize> {
        let mut z = vec![0; s.len()];
        if !s.is_empty() {
            z[0] = s.len();
        }
        for i in 1..s.len() {
            while i + z[i] < s.len() && s[z[i]] == s[i + z[i]] {
                z[i] += 1;
            }
        }
        z
    }

    #[test]
    fn textbook_example() {
        let z = z_algorithm(b"aabcaabxaaz");
        assert_eq!(z[0], 11);
        assert_eq!(&z[1..], &[1, 0, 0, 3, 1, 0, 0, 2, 1, 0]);
    }

    #[test]
    fn empty_input() {
        assert!(z_algorithm(b"").is_empty());
    }

    #[test_case(b"a")]
    #[test_case(b"aaaaaa")]
    #[test_case(b"abababab")]
    #[test_case(b"abacabadabacaba")]
    #[test_case(b"aabaabaaab")]
    #[test_case(b"xyz")]
    fn agrees_with_quadratic(s: &[u8]) {
        assert_eq!(z_algorithm(s), naive_z(s));
    }

    #[test]
    fn border_invariant_holds() {
        let s = b"abaababaabaababaababa";
        let z = z_algorithm(&s[..]);
        for i in 1..s.len() {
            assert_eq!(&s[..z[i]], &s[i..i + z[i]]);
            assert!(i + z[i] == s.len() || s[z[i]] != s[i + z[i]]);
        }
    }

    #[test]
    fn runs_over_reversed_view() {
        let s: &[u8] = b"abcab";
        let expected = naive_z(b"bacba");
        assert_eq!(z_algorithm(Reversed(s)), expected);
    }
}
