use crate::index::types::Offset;
use std::str::CharIndices;

/// Sliding window of `m` characters over a string.
///
/// Yields `(offset, gram)` for offsets `0..=L-m` in ascending order, where
/// `L` is the length in characters. Strings shorter than `m` (and `m == 0`)
/// yield nothing. Cloning the iterator restarts from the clone point.
#[derive(Debug, Clone)]
pub struct MGrams<'a> {
    text: &'a str,
    starts: CharIndices<'a>,
    ends: CharIndices<'a>,
    offset: Offset,
    done: bool,
}

impl<'a> MGrams<'a> {
    pub fn new(text: &'a str, gram_len: usize) -> Self {
        let mut ends = text.char_indices();
        // Position `ends` so its next item is the char right after gram 0
        let done = gram_len == 0 || ends.nth(gram_len - 1).is_none();

        Self {
            text,
            starts: text.char_indices(),
            ends,
            offset: 0,
            done,
        }
    }
}

impl<'a> Iterator for MGrams<'a> {
    type Item = (Offset, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let (start, _) = self.starts.next()?;
        let end = match self.ends.next() {
            Some((idx, _)) => idx,
            None => {
                self.done = true;
                self.text.len()
            }
        };

        let offset = self.offset;
        self.offset += 1;
        Some((offset, &self.text[start..end]))
    }
}

/// Iterate the grams of `text` with their offsets
pub fn mgrams(text: &str, gram_len: usize) -> MGrams<'_> {
    MGrams::new(text, gram_len)
}

/// Gram sequence of a string, without offsets
pub fn gram_sequence(text: &str, gram_len: usize) -> Vec<String> {
    mgrams(text, gram_len)
        .map(|(_, gram)| gram.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mgrams_basic() {
        let grams: Vec<_> = mgrams("hello", 3).collect();
        assert_eq!(grams, vec![(0, "hel"), (1, "ell"), (2, "llo")]);
    }

    #[test]
    fn test_mgrams_count() {
        // L - m + 1 grams
        assert_eq!(mgrams("abcdefghijklmnopqrstuvwxyz", 3).count(), 24);
        assert_eq!(mgrams("abcdef", 1).count(), 6);
        assert_eq!(mgrams("abcdef", 6).count(), 1);
    }

    #[test]
    fn test_mgrams_short_input() {
        assert_eq!(mgrams("", 3).count(), 0);
        assert_eq!(mgrams("a", 3).count(), 0);
        assert_eq!(mgrams("ab", 3).count(), 0);
        assert_eq!(mgrams("abc", 3).count(), 1);
        assert_eq!(mgrams("abc", 0).count(), 0);
    }

    #[test]
    fn test_mgrams_multibyte() {
        let grams: Vec<_> = mgrams("_é_ü", 2).map(|(_, g)| g).collect();
        assert_eq!(grams, vec!["_é", "é_", "_ü"]);
    }

    #[test]
    fn test_mgrams_restartable() {
        let mut iter = mgrams("abcd", 2);
        assert_eq!(iter.next(), Some((0, "ab")));
        let rest = iter.clone();
        assert_eq!(iter.count(), 2);
        assert_eq!(rest.collect::<Vec<_>>(), vec![(1, "bc"), (2, "cd")]);
    }

    #[test]
    fn test_gram_sequence() {
        assert_eq!(gram_sequence("cat__", 3), vec!["cat", "at_", "t__"]);
    }
}
