use exactmatch::{
    Alphabet, SearchError, build_bad_character_table, build_good_suffix_table,
    build_matched_prefix_table, build_reversed_bad_character_table,
    build_reversed_good_suffix_table, build_reversed_matched_prefix_table, z_algorithm,
};
use test_case::test_case;

const GOLDEN: &[u8] = b"acababacaba";

#[test]
fn z_array_textbook() {
    assert_eq!(
        z_algorithm(b"aabcaabxaaz"),
        vec![11, 1, 0, 0, 3, 1, 0, 0, 2, 1, 0]
    );
}

#[test]
fn good_suffix_golden() {
    let mut expected = vec![None; 12];
    expected[6] = Some(4);
    expected[8] = Some(6);
    expected[10] = Some(8);
    expected[11] = Some(9);
    assert_eq!(build_good_suffix_table(GOLDEN).unwrap(), expected);
}

#[test]
fn matched_prefix_golden() {
    assert_eq!(
        build_matched_prefix_table(GOLDEN).unwrap(),
        vec![11, 5, 5, 5, 5, 5, 5, 1, 1, 1, 1, 0]
    );
}

#[test]
fn reversed_variants_are_mirrors_of_reversed_pattern() {
    let reversed: Vec<u8> = GOLDEN.iter().rev().copied().collect();

    let mut gs = build_good_suffix_table(&reversed).unwrap();
    gs.reverse();
    assert_eq!(build_reversed_good_suffix_table(GOLDEN).unwrap(), gs);

    let mut mp = build_matched_prefix_table(&reversed).unwrap();
    mp.reverse();
    assert_eq!(build_reversed_matched_prefix_table(GOLDEN).unwrap(), mp);

    let alphabet = Alphabet::new(b'a', b'c').unwrap();
    let bc = build_bad_character_table(&reversed, alphabet).unwrap();
    let rbc = build_reversed_bad_character_table(GOLDEN, alphabet).unwrap();
    let m = GOLDEN.len();
    for p in 0..m {
        assert_eq!(rbc.row(p), bc.row(m - 1 - p));
    }
}

#[test]
fn builders_are_pure() {
    assert_eq!(
        build_good_suffix_table(GOLDEN).unwrap(),
        build_good_suffix_table(GOLDEN).unwrap()
    );
    assert_eq!(
        build_matched_prefix_table(GOLDEN).unwrap(),
        build_matched_prefix_table(GOLDEN).unwrap()
    );
    assert_eq!(
        build_bad_character_table(GOLDEN, Alphabet::ASCII).unwrap(),
        build_bad_character_table(GOLDEN, Alphabet::ASCII).unwrap()
    );
}

#[test_case(b"a")]
#[test_case(b"zz")]
#[test_case(b"acababacaba")]
#[test_case(b"the quick brown fox")]
fn matched_prefix_starts_with_pattern_length(pattern: &[u8]) {
    assert_eq!(build_matched_prefix_table(pattern).unwrap()[0], pattern.len());
}

#[test]
fn empty_pattern_rejected_everywhere() {
    assert_eq!(
        build_bad_character_table(b"", Alphabet::BYTES),
        Err(SearchError::InvalidPattern)
    );
    assert_eq!(
        build_reversed_bad_character_table(b"", Alphabet::BYTES),
        Err(SearchError::InvalidPattern)
    );
    assert_eq!(build_good_suffix_table(b""), Err(SearchError::InvalidPattern));
    assert_eq!(build_matched_prefix_table(b""), Err(SearchError::InvalidPattern));
}
