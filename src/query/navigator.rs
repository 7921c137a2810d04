//! Galloping navigation over a single gram's posting list.
//!
//! A [`Navigator`] is a query session over an immutable [`InvertedIndex`].
//! It remembers, per gram, the list index of the last result it returned and
//! gallops from there on the next call. Phrase and cover searches issue long
//! runs of calls whose targets are only a short hop past the previous
//! result, so each call costs `O(log gap)` instead of `O(log len)`.

use crate::index::inverted::InvertedIndex;
use crate::index::types::Posting;
use rustc_hash::FxHashMap;

/// Per-query navigation state over an index.
pub struct Navigator<'a> {
    index: &'a InvertedIndex,
    cursors: FxHashMap<&'a str, usize>,
}

impl<'a> Navigator<'a> {
    pub fn new(index: &'a InvertedIndex) -> Self {
        Self {
            index,
            cursors: FxHashMap::default(),
        }
    }

    #[inline]
    pub fn index(&self) -> &'a InvertedIndex {
        self.index
    }

    /// First occurrence of `gram`, or `+inf` when it never occurs.
    pub fn first(&self, gram: &str) -> Posting {
        self.index
            .postings(gram)
            .and_then(|list| list.first())
            .unwrap_or(Posting::POS_INF)
    }

    /// Last occurrence of `gram`, or `-inf` when it never occurs.
    pub fn last(&self, gram: &str) -> Posting {
        self.index
            .postings(gram)
            .and_then(|list| list.last())
            .unwrap_or(Posting::NEG_INF)
    }

    /// Smallest occurrence of `gram` strictly after `c`, or `+inf`.
    pub fn next(&mut self, gram: &str, c: Posting) -> Posting {
        let index = self.index;
        let Some((key, list)) = index.entry(gram) else {
            return Posting::POS_INF;
        };
        let entries = list.as_slice();
        let (Some(&first), Some(&last)) = (entries.first(), entries.last()) else {
            return Posting::POS_INF;
        };

        if last <= c {
            return Posting::POS_INF;
        }
        if first > c {
            self.cursors.insert(key, 0);
            return first;
        }

        // entries[0] <= c < entries[len - 1]
        let start = self
            .cursors
            .get(key)
            .copied()
            .filter(|&hint| hint < entries.len() && entries[hint] <= c)
            .unwrap_or(0);
        let idx = gallop(entries, start, |p| *p <= c);

        self.cursors.insert(key, idx);
        entries[idx]
    }

    /// Largest occurrence of `gram` strictly before `c`, or `-inf`.
    pub fn prev(&mut self, gram: &str, c: Posting) -> Posting {
        let index = self.index;
        let Some((key, list)) = index.entry(gram) else {
            return Posting::NEG_INF;
        };
        let entries = list.as_slice();
        let (Some(&first), Some(&last)) = (entries.first(), entries.last()) else {
            return Posting::NEG_INF;
        };

        if first >= c {
            return Posting::NEG_INF;
        }
        if last < c {
            self.cursors.insert(key, entries.len() - 1);
            return last;
        }

        // entries[0] < c <= entries[len - 1]
        let start = self
            .cursors
            .get(key)
            .copied()
            .filter(|&hint| hint < entries.len() && entries[hint] < c)
            .unwrap_or(0);
        let idx = gallop(entries, start, |p| *p < c) - 1;

        self.cursors.insert(key, idx);
        entries[idx]
    }
}

/// Index of the first entry after `low` for which `pred` fails.
///
/// Requires `pred(&entries[low])` to hold, `pred` to be monotone (true, then
/// false), and at least one entry after `low` to fail it. Doubles the step
/// from `low` until it overshoots, then binary-searches the bracket.
fn gallop<T>(entries: &[T], mut low: usize, pred: impl Fn(&T) -> bool) -> usize {
    let mut step = 1usize;
    let mut high = low + step;

    while high < entries.len() && pred(&entries[high]) {
        low = high;
        step = step.saturating_mul(2);
        high = low.saturating_add(step);
    }

    let high = high.min(entries.len());
    low + 1 + entries[low + 1..high].partition_point(pred)
}
