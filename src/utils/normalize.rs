use regex::Regex;
use std::sync::LazyLock;

/// Padding and word-join character of canonical text
pub const PAD: char = '_';

static DOT_SPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[. ]+").expect("static pattern is valid"));

/// Canonicalize text without the outer padding.
///
/// Whitespace runs collapse to one space, the text is trimmed and lowercased,
/// runs of `.`/space collapse to one space, and every space becomes [`PAD`].
pub fn canonical_body(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let lowered = collapsed.to_lowercase();
    DOT_SPACE_RUN
        .replace_all(&lowered, " ")
        .replace(' ', &PAD.to_string())
}

/// Canonical form of a document: the body wrapped in `m - 1` pad characters
/// on each side, so every real token has at least one indexable gram.
pub fn normalize(text: &str, gram_len: usize) -> String {
    let padding = padding(gram_len.saturating_sub(1));
    let body = canonical_body(text);

    let mut out = String::with_capacity(body.len() + 2 * padding.len());
    out.push_str(&padding);
    out.push_str(&body);
    out.push_str(&padding);
    out
}

/// Right-pad a query term with [`PAD`] up to `gram_len` characters.
pub fn pad_term(term: &str, gram_len: usize) -> String {
    let len = term.chars().count();
    if len >= gram_len {
        return term.to_string();
    }
    let mut padded = String::with_capacity(term.len() + gram_len - len);
    padded.push_str(term);
    padded.push_str(&padding(gram_len - len));
    padded
}

fn padding(count: usize) -> String {
    std::iter::repeat_n(PAD, count).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_body() {
        assert_eq!(canonical_body("  The  Cat\tsat\n"), "the_cat_sat");
        assert_eq!(canonical_body("end. Next..  one"), "end_next_one");
        assert_eq!(canonical_body(""), "");
        assert_eq!(canonical_body("end."), "end_");
        assert_eq!(canonical_body(" . "), "_");
    }

    #[test]
    fn test_normalize_pads_both_sides() {
        assert_eq!(normalize("the cat", 3), "__the_cat__");
        assert_eq!(normalize("the cat", 1), "the_cat");
        assert_eq!(normalize("", 3), "____");
    }

    #[test]
    fn test_normalize_unicode_lowercase() {
        assert_eq!(normalize("ÉCOLE", 2), "_école_");
    }

    #[test]
    fn test_pad_term() {
        assert_eq!(pad_term("a", 3), "a__");
        assert_eq!(pad_term("cat", 3), "cat");
        assert_eq!(pad_term("cats", 3), "cats");
        assert_eq!(pad_term("é", 2), "é_");
    }
}
