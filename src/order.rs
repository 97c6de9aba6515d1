//! Canonical ordering of term strings.
//!
//! Every tie in the covering algorithm is broken by one total order over
//! term strings, so that identical inputs always produce identical covers.
//!
//! The order looks at the *letters* of a term, not at their written order:
//! both strings are first rearranged by [`sort_term`], then compared letter by
//! letter. Letters compare case-insensitively first and, for the same letter,
//! the complemented (uppercase) form comes first: `A < a < B < b < ...`.
//! When one sorted string is a prefix of the other, the shorter one comes first.
//! The empty term precedes every other term.
//!
//! ```
//! use std::cmp::Ordering;
//! use qm_cover::order::cmp_terms;
//!
//! assert_eq!(cmp_terms("ab", "aC"), Ordering::Less);
//! assert_eq!(cmp_terms("BC", "bc"), Ordering::Less);
//! assert_eq!(cmp_terms("ba", "ab"), Ordering::Equal);
//! assert_eq!(cmp_terms("", "A"), Ordering::Less);
//! ```

use std::cmp::Ordering;

/// Sort key of a single character.
#[inline]
fn char_key(c: char) -> (char, char) {
    (c.to_ascii_lowercase(), c)
}

fn sorted_keys(term: &str) -> Vec<(char, char)> {
    let mut keys: Vec<_> = term.chars().map(char_key).collect();
    keys.sort_unstable();
    keys
}

/// Compares two term strings in canonical order.
pub fn cmp_terms(a: &str, b: &str) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        // Lexicographic comparison of the keys already breaks full-prefix ties by length.
        (false, false) => sorted_keys(a).cmp(&sorted_keys(b)),
    }
}

/// Returns the term with its letters rearranged into canonical order.
///
/// ```
/// use qm_cover::order::sort_term;
///
/// assert_eq!(sort_term("cBaA"), "AaBc");
/// ```
pub fn sort_term(term: &str) -> String {
    sorted_keys(term).into_iter().map(|(_, c)| c).collect()
}

/// A term string ordered by [`cmp_terms`].
///
/// Useful with `sort_by_key` and ordered collections:
///
/// ```
/// use qm_cover::order::TermKey;
///
/// let mut terms = vec!["bc", "BC", "ab"];
/// terms.sort_by_key(|t| TermKey(*t));
/// assert_eq!(terms, ["ab", "BC", "bc"]);
/// ```
#[derive(Debug, Copy, Clone)]
pub struct TermKey<'a>(pub &'a str);

impl PartialEq for TermKey<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for TermKey<'_> {}

impl PartialOrd for TermKey<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TermKey<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_terms(self.0, other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_empty_first() {
        assert_eq!(cmp_terms("", ""), Ordering::Equal);
        assert_eq!(cmp_terms("", "a"), Ordering::Less);
        assert_eq!(cmp_terms("A", ""), Ordering::Greater);
    }

    #[test]
    fn test_case_insensitive_first() {
        assert_eq!(cmp_terms("a", "B"), Ordering::Less);
        assert_eq!(cmp_terms("B", "a"), Ordering::Greater);
        assert_eq!(cmp_terms("ab", "aC"), Ordering::Less);
    }

    #[test]
    fn test_uppercase_before_lowercase() {
        assert_eq!(cmp_terms("A", "a"), Ordering::Less);
        assert_eq!(cmp_terms("BC", "bc"), Ordering::Less);
        assert_eq!(cmp_terms("abC", "abc"), Ordering::Less);
    }

    #[test]
    fn test_letter_order_within_term_is_ignored() {
        assert_eq!(cmp_terms("cba", "abc"), Ordering::Equal);
        assert_eq!(cmp_terms("Cb", "bC"), Ordering::Equal);
    }

    #[test]
    fn test_shorter_first_on_prefix() {
        assert_eq!(cmp_terms("ab", "abc"), Ordering::Less);
        assert_eq!(cmp_terms("abC", "ab"), Ordering::Greater);
        // "b" vs "ab": 'a' < 'b' decides before length does.
        assert_eq!(cmp_terms("b", "ab"), Ordering::Greater);
    }

    #[test]
    fn test_sort_term() {
        assert_eq!(sort_term(""), "");
        assert_eq!(sort_term("dCba"), "abCd");
        assert_eq!(sort_term("aAbB"), "AaBb");
    }

    #[test]
    fn test_sort_by_key() {
        let mut terms = vec!["bc", "AC", "ab", "", "Bc", "AB"];
        terms.sort_by_key(|t| TermKey(*t));
        assert_eq!(terms, ["", "AB", "AC", "ab", "Bc", "bc"]);
    }
}
