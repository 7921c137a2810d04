use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// Index of a document in the corpus (0-based, in load order)
pub type DocId = u32;

/// Gram offset within a document's canonical text (in characters)
pub type Offset = u32;

/// One coordinate of a posting, extended with the two infinities.
///
/// The derived order puts `NegInf` below every finite value and `PosInf`
/// above, which is exactly the order the navigation primitives need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Coord {
    NegInf,
    At(u32),
    PosInf,
}

impl Coord {
    #[inline]
    pub fn value(self) -> Option<u32> {
        match self {
            Coord::At(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coord::NegInf => write!(f, "-inf"),
            Coord::At(v) => write!(f, "{}", v),
            Coord::PosInf => write!(f, "+inf"),
        }
    }
}

/// A `(document, offset)` position, ordered lexicographically.
///
/// Postings stored in the index are always finite. Navigation results use
/// [`Posting::POS_INF`] / [`Posting::NEG_INF`] to signal "no such occurrence",
/// and `(d, -inf)` / `(d, +inf)` mark the boundaries of document `d`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Posting {
    pub doc: Coord,
    pub offset: Coord,
}

impl Posting {
    pub const POS_INF: Posting = Posting {
        doc: Coord::PosInf,
        offset: Coord::PosInf,
    };

    pub const NEG_INF: Posting = Posting {
        doc: Coord::NegInf,
        offset: Coord::NegInf,
    };

    #[inline]
    pub fn new(doc: DocId, offset: Offset) -> Self {
        Self {
            doc: Coord::At(doc),
            offset: Coord::At(offset),
        }
    }

    /// Position just before the first gram of `doc`
    #[inline]
    pub fn doc_start(doc: DocId) -> Self {
        Self {
            doc: Coord::At(doc),
            offset: Coord::NegInf,
        }
    }

    /// Position just after the last gram of `doc`
    #[inline]
    pub fn doc_end(doc: DocId) -> Self {
        Self {
            doc: Coord::At(doc),
            offset: Coord::PosInf,
        }
    }

    #[inline]
    pub fn doc_id(&self) -> Option<DocId> {
        self.doc.value()
    }

    #[inline]
    pub fn offset(&self) -> Option<Offset> {
        self.offset.value()
    }

    /// Both coordinates are finite, i.e. this is a real occurrence.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.doc_id().is_some() && self.offset().is_some()
    }

    /// True when both positions carry the same finite document index.
    #[inline]
    pub fn same_doc(&self, other: &Posting) -> bool {
        matches!((self.doc_id(), other.doc_id()), (Some(a), Some(b)) if a == b)
    }

    /// The position one offset further in the same document.
    ///
    /// Sentinels and document boundaries are returned unchanged.
    #[inline]
    pub fn successor(&self) -> Posting {
        match self.offset {
            Coord::At(off) => Posting {
                doc: self.doc,
                offset: Coord::At(off.saturating_add(1)),
            },
            _ => *self,
        }
    }
}

impl fmt::Display for Posting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.doc, self.offset)
    }
}

/// An inclusive `[start, end]` pair of positions.
///
/// Returned by the phrase locator (one occurrence of a gram sequence) and the
/// cover finder (a minimal span covering the query).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: Posting,
    pub end: Posting,
}

/// A span containing an occurrence of every query term
pub type Cover = Span;

impl Span {
    pub const POS_INF: Span = Span {
        start: Posting::POS_INF,
        end: Posting::POS_INF,
    };

    pub const NEG_INF: Span = Span {
        start: Posting::NEG_INF,
        end: Posting::NEG_INF,
    };

    #[inline]
    pub fn new(start: Posting, end: Posting) -> Self {
        Self { start, end }
    }

    /// Offset distance `end - start` when both ends lie in one document
    pub fn width(&self) -> Option<u32> {
        if !self.start.same_doc(&self.end) {
            return None;
        }
        let (start, end) = (self.start.offset()?, self.end.offset()?);
        end.checked_sub(start)
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.start.is_finite() && self.end.is_finite()
    }
}

/// Ascending, duplicate-free occurrence list for one gram
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostingList {
    postings: Vec<Posting>,
}

impl PostingList {
    /// Sort and deduplicate raw occurrences into a list.
    pub fn from_unsorted(mut postings: Vec<Posting>) -> Self {
        postings.sort_unstable();
        postings.dedup();
        Self { postings }
    }

    #[inline]
    pub fn as_slice(&self) -> &[Posting] {
        &self.postings
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.postings.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    #[inline]
    pub fn first(&self) -> Option<Posting> {
        self.postings.first().copied()
    }

    #[inline]
    pub fn last(&self) -> Option<Posting> {
        self.postings.last().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Posting> {
        self.postings.iter()
    }
}

/// A document's accumulated proximity score
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankedDoc {
    pub doc: DocId,
    pub score: f64,
}

impl RankedDoc {
    /// Descending by score. Incomparable scores (NaN) compare equal.
    pub fn cmp_by_score(a: &RankedDoc, b: &RankedDoc) -> Ordering {
        b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal)
    }
}
