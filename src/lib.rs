//! # gramrank - proximity ranking over character m-grams
//!
//! gramrank indexes a corpus of plain-text documents by overlapping
//! character m-grams, then ranks documents for a multi-term query by how
//! tightly the terms cluster: every minimal *cover* of the query inside a
//! document adds `1 / (width + 1)` to that document's score.
//!
//! ## Architecture
//!
//! - [`utils`] - Text canonicalization, m-gram extraction, configuration
//! - [`index`] - Positional inverted index and corpus loading
//! - [`query`] - Posting navigation, phrase and cover search, ranking
//! - [`output`] - Result formatting (ranked table or JSON)
//!
//! ## Quick Start
//!
//! ```
//! use gramrank::index::build_index;
//! use gramrank::query::rank_proximity;
//!
//! let docs = ["the cat sat on the mat", "the dog sat"];
//! let index = build_index(&docs, 3).unwrap();
//!
//! let ranked = rank_proximity(&index, &["cat"], 10);
//! assert_eq!(ranked[0].doc, 0);
//! ```
//!
//! ## Positions
//!
//! A [`Posting`](index::Posting) is a `(document, offset)` pair ordered
//! lexicographically, with `-inf` and `+inf` sentinels standing for "before
//! everything" and "after everything". Navigation never fails: absence is
//! reported by returning a sentinel.

pub mod index;
pub mod output;
pub mod query;
pub mod utils;
