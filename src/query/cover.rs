//! Cover finding over prepared queries.
//!
//! A cover `[u, v]` is a span inside one document. Each step locates the
//! right edge `v` after the current position, then walks back from just past
//! `v` to the matching left edge `u`. If the edges land in different
//! documents the search resumes from `u`; every step moves strictly forward.

use crate::index::types::{Cover, Posting};
use crate::query::navigator::Navigator;
use crate::query::parser::Query;
use serde::{Deserialize, Serialize};

/// How the per-term occurrences combine into a cover
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum CoverStrategy {
    /// Only the last query term positions the cover; each cover is one
    /// occurrence of that term. Matches the established ranking output.
    #[default]
    LastTermOnly,
    /// Every term must occur inside the cover (minimal conjunctive spans).
    AllTermsRequired,
}

impl<'a> Navigator<'a> {
    /// Right edge of the next cover candidate after `c`
    pub fn doc_right(&mut self, query: &Query, c: Posting) -> Posting {
        match query.options.strategy {
            CoverStrategy::LastTermOnly => match query.terms.last() {
                Some(term) => self.next_doc(&term.grams, c),
                None => Posting::POS_INF,
            },
            CoverStrategy::AllTermsRequired => {
                if query.terms.is_empty() {
                    return Posting::POS_INF;
                }
                let mut right = Posting::NEG_INF;
                for term in &query.terms {
                    let v = self.next_doc(&term.grams, c);
                    if v == Posting::POS_INF {
                        return Posting::POS_INF;
                    }
                    right = right.max(v);
                }
                right
            }
        }
    }

    /// Left edge of the last cover candidate before `c`
    pub fn doc_left(&mut self, query: &Query, c: Posting) -> Posting {
        match query.options.strategy {
            CoverStrategy::LastTermOnly => match query.terms.last() {
                Some(term) => self.prev_doc(&term.grams, c),
                None => Posting::NEG_INF,
            },
            CoverStrategy::AllTermsRequired => {
                if query.terms.is_empty() {
                    return Posting::NEG_INF;
                }
                let mut left = Posting::POS_INF;
                for term in &query.terms {
                    let u = self.prev_doc(&term.grams, c);
                    if u == Posting::NEG_INF {
                        return Posting::NEG_INF;
                    }
                    left = left.min(u);
                }
                left
            }
        }
    }

    /// Next cover starting strictly after `c`, or `[+inf, +inf]`.
    pub fn next_cover(&mut self, query: &Query, c: Posting) -> Cover {
        let mut c = c;

        loop {
            let v = self.doc_right(query, c);
            if v == Posting::POS_INF {
                return Cover::POS_INF;
            }

            let u = self.doc_left(query, v.successor());
            if u.same_doc(&v) {
                return Cover::new(u, v);
            }

            debug_assert!(u > c, "cover search stalled at {}", c);
            c = u;
        }
    }
}
