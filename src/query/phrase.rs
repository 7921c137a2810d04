//! Phrase location: contiguous runs of a gram sequence.
//!
//! A term's gram sequence `t[0..=n]` occurs at `start` when `t[i]` occurs at
//! `start.offset + i` for every `i` in one document. The searches alternate a
//! forward pass over the grams with a backward validation pass and retry from
//! the validated position until both passes agree.

use crate::index::types::{DocId, Posting, Span};
use crate::query::navigator::Navigator;

impl<'a> Navigator<'a> {
    /// First occurrence of the gram sequence starting strictly after `c`.
    ///
    /// Returns `[+inf, +inf]` when there is none, including for an empty
    /// sequence.
    pub fn next_phrase<S: AsRef<str>>(&mut self, grams: &[S], c: Posting) -> Span {
        let Some(n) = grams.len().checked_sub(1) else {
            return Span::POS_INF;
        };
        let doc_count = self.index().doc_count();
        let mut c = c;

        loop {
            let mut v = c;
            for gram in grams {
                v = self.next(gram.as_ref(), v);
            }

            if v == Posting::POS_INF {
                match following_doc(c, doc_count) {
                    Some(doc) => {
                        c = Posting::doc_start(doc);
                        continue;
                    }
                    None => return Span::POS_INF,
                }
            }

            let mut u = v;
            for gram in grams[..n].iter().rev() {
                u = self.prev(gram.as_ref(), u);
            }

            let span = Span::new(u, v);
            if span.width() == Some(n as u32) {
                return span;
            }

            debug_assert!(u > c, "phrase search stalled at {}", c);
            c = u;
        }
    }

    /// Last occurrence of the gram sequence ending strictly before `c`.
    ///
    /// Returns `[-inf, -inf]` when there is none, including for an empty
    /// sequence.
    pub fn prev_phrase<S: AsRef<str>>(&mut self, grams: &[S], c: Posting) -> Span {
        let Some(n) = grams.len().checked_sub(1) else {
            return Span::NEG_INF;
        };
        let doc_count = self.index().doc_count();
        let mut c = c;

        loop {
            let mut v = c;
            for gram in grams.iter().rev() {
                v = self.prev(gram.as_ref(), v);
            }

            if v == Posting::NEG_INF {
                match preceding_doc(c, doc_count) {
                    Some(doc) => {
                        c = Posting::doc_end(doc);
                        continue;
                    }
                    None => return Span::NEG_INF,
                }
            }

            let mut u = v;
            for gram in &grams[1..] {
                u = self.next(gram.as_ref(), u);
            }

            let span = Span::new(v, u);
            if span.width() == Some(n as u32) {
                return span;
            }

            debug_assert!(u < c, "phrase search stalled at {}", c);
            c = u;
        }
    }

    /// End position of the next phrase occurrence after `c`
    pub fn next_doc<S: AsRef<str>>(&mut self, grams: &[S], c: Posting) -> Posting {
        self.next_phrase(grams, c).end
    }

    /// Start position of the previous phrase occurrence before `c`
    pub fn prev_doc<S: AsRef<str>>(&mut self, grams: &[S], c: Posting) -> Posting {
        self.prev_phrase(grams, c).start
    }
}

/// Document after the one `c` lies in, if the corpus has one
fn following_doc(c: Posting, doc_count: u32) -> Option<DocId> {
    let next = match c.doc_id() {
        Some(doc) => doc.checked_add(1)?,
        None if c == Posting::POS_INF => return None,
        None => 0,
    };
    (next < doc_count).then_some(next)
}

/// Document before the one `c` lies in, if any
fn preceding_doc(c: Posting, doc_count: u32) -> Option<DocId> {
    match c.doc_id() {
        Some(doc) => doc.min(doc_count).checked_sub(1),
        None if c == Posting::NEG_INF => None,
        None => doc_count.checked_sub(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::inverted::{InvertedIndex, build_index};
    use crate::utils::gram_sequence;

    fn corpus() -> InvertedIndex {
        build_index(&["the cat sat on the mat", "the dog sat"], 3).unwrap()
    }

    #[test]
    fn test_single_gram_phrase() {
        let index = corpus();
        let mut nav = Navigator::new(&index);
        let grams = gram_sequence("sat", 3);

        let first = nav.next_phrase(&grams, Posting::NEG_INF);
        assert_eq!(first, Span::new(Posting::new(0, 10), Posting::new(0, 10)));

        let second = nav.next_phrase(&grams, first.start);
        assert_eq!(second, Span::new(Posting::new(1, 10), Posting::new(1, 10)));

        assert_eq!(nav.next_phrase(&grams, second.start), Span::POS_INF);
    }

    #[test]
    fn test_multi_gram_phrase() {
        let index = corpus();
        let mut nav = Navigator::new(&index);

        let grams = gram_sequence("the_mat", 3);
        let span = nav.next_phrase(&grams, Posting::NEG_INF);
        assert_eq!(span, Span::new(Posting::new(0, 17), Posting::new(0, 21)));
        assert_eq!(span.width(), Some(4));
    }

    #[test]
    fn test_retry_after_mismatch() {
        // "_ab_bc_abc_": "ab" at 1 and 7, "bc" at 4 and 8
        let index = build_index(&["ab bc abc"], 2).unwrap();
        let mut nav = Navigator::new(&index);
        let grams = ["ab", "bc"];

        let span = nav.next_phrase(&grams, Posting::NEG_INF);
        assert_eq!(span, Span::new(Posting::new(0, 7), Posting::new(0, 8)));
        assert_eq!(nav.next_phrase(&grams, span.start), Span::POS_INF);
    }

    #[test]
    fn test_prev_phrase() {
        let index = build_index(&["ab bc abc"], 2).unwrap();
        let mut nav = Navigator::new(&index);
        let grams = ["ab", "bc"];

        let span = nav.prev_phrase(&grams, Posting::POS_INF);
        assert_eq!(span, Span::new(Posting::new(0, 7), Posting::new(0, 8)));
        assert_eq!(nav.prev_phrase(&grams, span.end), Span::NEG_INF);
    }

    #[test]
    fn test_prev_phrase_crosses_documents() {
        let index = corpus();
        let mut nav = Navigator::new(&index);
        let grams = gram_sequence("sat", 3);

        let last = nav.prev_phrase(&grams, Posting::POS_INF);
        assert_eq!(last.start, Posting::new(1, 10));
        let earlier = nav.prev_phrase(&grams, last.end);
        assert_eq!(earlier.start, Posting::new(0, 10));
        assert_eq!(nav.prev_phrase(&grams, earlier.end), Span::NEG_INF);
    }

    #[test]
    fn test_phrase_never_spans_documents() {
        // "a_" closes doc 0 and "_b" opens doc 1
        let index = build_index(&["xa", "b"], 2).unwrap();
        let mut nav = Navigator::new(&index);
        let grams = ["a_", "_b"];
        assert_eq!(nav.next_phrase(&grams, Posting::NEG_INF), Span::POS_INF);
        assert_eq!(nav.prev_phrase(&grams, Posting::POS_INF), Span::NEG_INF);
    }

    #[test]
    fn test_empty_sequence() {
        let index = corpus();
        let mut nav = Navigator::new(&index);
        let grams: [&str; 0] = [];
        assert_eq!(nav.next_phrase(&grams, Posting::NEG_INF), Span::POS_INF);
        assert_eq!(nav.prev_phrase(&grams, Posting::POS_INF), Span::NEG_INF);
        assert_eq!(nav.next_doc(&grams, Posting::NEG_INF), Posting::POS_INF);
        assert_eq!(nav.prev_doc(&grams, Posting::POS_INF), Posting::NEG_INF);
    }

    #[test]
    fn test_next_doc_prev_doc() {
        let index = corpus();
        let mut nav = Navigator::new(&index);
        let grams = gram_sequence("the_cat", 3);

        assert_eq!(nav.next_doc(&grams, Posting::NEG_INF), Posting::new(0, 6));
        assert_eq!(nav.prev_doc(&grams, Posting::POS_INF), Posting::new(0, 2));
    }

    #[test]
    fn test_doc_neighbours() {
        assert_eq!(following_doc(Posting::NEG_INF, 3), Some(0));
        assert_eq!(following_doc(Posting::new(1, 4), 3), Some(2));
        assert_eq!(following_doc(Posting::new(2, 4), 3), None);
        assert_eq!(following_doc(Posting::POS_INF, 3), None);
        assert_eq!(following_doc(Posting::NEG_INF, 0), None);

        assert_eq!(preceding_doc(Posting::POS_INF, 3), Some(2));
        assert_eq!(preceding_doc(Posting::new(1, 0), 3), Some(0));
        assert_eq!(preceding_doc(Posting::new(0, 9), 3), None);
        assert_eq!(preceding_doc(Posting::NEG_INF, 3), None);
        assert_eq!(preceding_doc(Posting::POS_INF, 0), None);
    }
}
