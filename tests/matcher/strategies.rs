use ownership_map_rs::{MatchStrategy, NameMatcher};

#[test]
fn exact_match_wins_over_weaker_strategies() {
    let mut matcher = NameMatcher::new();
    matcher.insert("Vanguard", 0usize);
    matcher.insert("vanguard", 1usize);

    assert_eq!(matcher.resolve("Vanguard"), Some((0, MatchStrategy::Exact)));
    assert_eq!(matcher.resolve("vanguard"), Some((1, MatchStrategy::Exact)));
}

#[test]
fn case_fold_beats_substring() {
    let mut matcher = NameMatcher::new();
    matcher.insert("Vanguard Group", 10usize);
    matcher.insert("VANGUARD", 20usize);

    assert_eq!(
        matcher.resolve("Vanguard"),
        Some((20, MatchStrategy::CaseFold))
    );
}

#[test]
fn substring_matches_in_either_direction() {
    let mut matcher = NameMatcher::new();
    matcher.insert("Vanguard", 1usize);
    assert_eq!(
        matcher.resolve("Vanguard Group"),
        Some((1, MatchStrategy::Substring))
    );

    let mut matcher = NameMatcher::new();
    matcher.insert("Vanguard Group Inc", 2usize);
    assert_eq!(
        matcher.resolve("Vanguard Group"),
        Some((2, MatchStrategy::Substring))
    );
}

#[test]
fn substring_ties_break_by_insertion_order() {
    let mut matcher = NameMatcher::new();
    matcher.insert("Alpha Capital", 1usize);
    matcher.insert("Capital", 2usize);

    // Both entries relate to the query; the earlier registration wins.
    assert_eq!(
        matcher.resolve("Alpha Capital Management"),
        Some((1, MatchStrategy::Substring))
    );
}

#[test]
fn case_folded_duplicates_keep_the_first_registration() {
    let mut matcher = NameMatcher::new();
    matcher.insert("BlackRock", 1usize);
    matcher.insert("BLACKROCK", 2usize);

    assert_eq!(
        matcher.resolve("blackrock"),
        Some((1, MatchStrategy::CaseFold))
    );
}

#[test]
fn unmatched_and_empty_queries_are_none() {
    let mut matcher = NameMatcher::new();
    matcher.insert("Vanguard", 1usize);

    assert_eq!(matcher.resolve("BlackRock"), None);
    assert_eq!(matcher.resolve(""), None);
}
