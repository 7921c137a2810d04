//! Proximity ranking.
//!
//! Enumerates every cover of the query across the corpus in ascending order
//! and sums `1 / (width + 1)` per document, so short covers weigh more.

use crate::index::inverted::InvertedIndex;
use crate::index::types::{Cover, Posting, RankedDoc};
use crate::query::navigator::Navigator;
use crate::query::parser::{Query, QueryOptions, parse_query};
use tracing::debug;

/// Score contribution of one cover
#[inline]
pub fn cover_score(cover: &Cover) -> f64 {
    cover
        .width()
        .map(|width| 1.0 / (f64::from(width) + 1.0))
        .unwrap_or(0.0)
}

/// Ranks documents of one index by query proximity
pub struct Ranker<'a> {
    index: &'a InvertedIndex,
    options: QueryOptions,
}

impl<'a> Ranker<'a> {
    pub fn new(index: &'a InvertedIndex) -> Self {
        Self {
            index,
            options: QueryOptions::default(),
        }
    }

    /// Create a ranker with custom query options
    pub fn with_options(index: &'a InvertedIndex, options: QueryOptions) -> Self {
        Self { index, options }
    }

    /// Prepare `terms` and rank; at most `k` documents, best first.
    pub fn rank<S: AsRef<str>>(&self, terms: &[S], k: usize) -> Vec<RankedDoc> {
        if k == 0 {
            return Vec::new();
        }
        let query = parse_query(self.index, terms, &self.options);
        self.rank_query(&query, k)
    }

    /// Rank a query already prepared against this index.
    ///
    /// Ties keep ascending document order.
    pub fn rank_query(&self, query: &Query, k: usize) -> Vec<RankedDoc> {
        if k == 0 || query.is_empty() {
            return Vec::new();
        }

        let mut nav = Navigator::new(self.index);
        let mut results: Vec<RankedDoc> = Vec::new();
        let mut current: Option<RankedDoc> = None;
        let mut cover_count = 0usize;
        let mut c = Posting::NEG_INF;

        loop {
            let cover = nav.next_cover(query, c);
            let Some(doc) = cover.start.doc_id() else {
                break;
            };

            if current.as_ref().is_some_and(|acc| acc.doc != doc) {
                results.extend(current.take());
            }
            let acc = current.get_or_insert(RankedDoc { doc, score: 0.0 });
            acc.score += cover_score(&cover);

            cover_count += 1;
            c = cover.start;
        }
        results.extend(current);

        debug!(
            covers = cover_count,
            documents = results.len(),
            strategy = ?query.options.strategy,
            "ranked query"
        );

        results.sort_by(RankedDoc::cmp_by_score);
        results.truncate(k);
        results
    }
}

/// Top `k` documents for `terms` with default options.
pub fn rank_proximity<S: AsRef<str>>(index: &InvertedIndex, terms: &[S], k: usize) -> Vec<RankedDoc> {
    Ranker::new(index).rank(terms, k)
}

/// Top `k` documents for `terms` with explicit options.
pub fn rank_proximity_with<S: AsRef<str>>(
    index: &InvertedIndex,
    terms: &[S],
    k: usize,
    options: &QueryOptions,
) -> Vec<RankedDoc> {
    Ranker::with_options(index, *options).rank(terms, k)
}
