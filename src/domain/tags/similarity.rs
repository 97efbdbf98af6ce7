//! Lexical similarity scoring between tag strings

use std::collections::HashSet;

/// Scores the lexical similarity of two strings in `[0, 1]`
///
/// Comparison is case-insensitive. Exact matches (including two empty
/// strings) score 1.0; when one string contains the other the score is the
/// ratio of their character lengths; otherwise the score is the Jaccard
/// similarity of the two character sets.
///
/// Character-set overlap is deliberately coarse - cheap enough to run per
/// keystroke over a corpus of ~1000 tags. Anagrams score high; that is an
/// accepted trade-off, not a bug to fix with edit distance.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();

    if a == b {
        return 1.0;
    }

    let len_a = a.chars().count();
    let len_b = b.chars().count();

    if a.contains(&b) || b.contains(&a) {
        return len_a.min(len_b) as f64 / len_a.max(len_b) as f64;
    }

    let chars_a: HashSet<char> = a.chars().collect();
    let chars_b: HashSet<char> = b.chars().collect();

    let intersection = chars_a.intersection(&chars_b).count();
    let union = chars_a.union(&chars_b).count();

    // Unreachable in practice: two empty strings hit the exact-match branch.
    if union == 0 {
        return 1.0;
    }

    intersection as f64 / union as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_scores_one() {
        assert_eq!(similarity("rust", "rust"), 1.0);
        assert_eq!(similarity("Rust", "rUST"), 1.0);
    }

    #[test]
    fn test_identity_for_empty_strings() {
        assert_eq!(similarity("", ""), 1.0);
    }

    #[test]
    fn test_empty_against_non_empty_scores_zero() {
        assert_eq!(similarity("", "rust"), 0.0);
        assert_eq!(similarity("rust", ""), 0.0);
    }

    #[test]
    fn test_substring_uses_length_ratio() {
        // "reac" is a prefix of "react": 4/5
        assert!((similarity("reac", "react") - 0.8).abs() < 1e-9);
        // order of arguments does not matter
        assert!((similarity("react", "reac") - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_disjoint_strings_use_character_jaccard() {
        // {r,e,a,c} vs {v,u,e}: intersection {e}, union {r,e,a,c,v,u}
        let score = similarity("reac", "vue");
        assert!((score - 1.0 / 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_bounds_hold_for_assorted_pairs() {
        let pairs = [
            ("react", "reach"),
            ("javascript", "java"),
            ("tag", "gat"),
            ("a", "bcdef"),
            ("", "x"),
        ];

        for (a, b) in pairs {
            let score = similarity(a, b);
            assert!((0.0..=1.0).contains(&score), "{} vs {} -> {}", a, b, score);
        }
    }

    #[test]
    fn test_anagrams_score_high() {
        // Sets ignore order and duplicates, so anagrams share the full
        // character set but miss the exact and substring branches.
        assert_eq!(similarity("tag", "gat"), 1.0);
    }
}
