use crate::index::inverted::InvertedIndex;
use crate::query::cover::CoverStrategy;
use crate::utils::{canonical_body, gram_sequence, pad_term};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// What to do with query grams that never occur in the index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum MissingGramPolicy {
    /// Remove unindexed grams from the term's sequence; a term left with no
    /// grams is dropped from the query.
    #[default]
    Skip,
    /// Any unindexed gram makes the whole query match nothing.
    Strict,
}

/// Query options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryOptions {
    /// How query terms combine into covers
    pub strategy: CoverStrategy,
    /// Handling of grams absent from the index
    pub missing_grams: MissingGramPolicy,
    /// Canonicalize terms like document text (lowercase, `_` joins).
    /// Off by default: terms are only right-padded.
    pub fold_query: bool,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            strategy: CoverStrategy::default(),
            missing_grams: MissingGramPolicy::default(),
            fold_query: false,
        }
    }
}

/// One query term and the grams it is located by
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTerm {
    /// Term text after canonicalization and padding
    pub text: String,
    /// Indexed grams of the term, in order
    pub grams: Vec<String>,
}

/// Query prepared against a specific index
#[derive(Debug, Clone)]
pub struct Query {
    pub terms: Vec<QueryTerm>,
    /// Input terms that take no part in cover search
    pub dropped: Vec<String>,
    pub options: QueryOptions,
}

impl Query {
    /// A query with no terms has no covers
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Decompose raw query terms into gram sequences against `index`.
pub fn parse_query<S: AsRef<str>>(
    index: &InvertedIndex,
    terms: &[S],
    options: &QueryOptions,
) -> Query {
    let gram_len = index.gram_len();
    let mut parsed = Vec::with_capacity(terms.len());
    let mut dropped = Vec::new();

    for raw in terms {
        let raw = raw.as_ref();
        let text = if options.fold_query {
            canonical_body(raw)
        } else {
            raw.to_string()
        };
        if text.is_empty() {
            dropped.push(raw.to_string());
            continue;
        }

        let text = pad_term(&text, gram_len);
        let (grams, missing): (Vec<String>, Vec<String>) = gram_sequence(&text, gram_len)
            .into_iter()
            .partition(|gram| index.contains_gram(gram));

        if !missing.is_empty() {
            match options.missing_grams {
                MissingGramPolicy::Strict => {
                    debug!(term = raw, ?missing, "unindexed grams, query cannot match");
                    return Query {
                        terms: Vec::new(),
                        dropped: terms.iter().map(|t| t.as_ref().to_string()).collect(),
                        options: *options,
                    };
                }
                MissingGramPolicy::Skip => {
                    trace!(term = raw, ?missing, "skipping unindexed grams");
                }
            }
        }

        if grams.is_empty() {
            debug!(term = raw, "term has no indexed grams, dropping it");
            dropped.push(raw.to_string());
            continue;
        }

        parsed.push(QueryTerm { text, grams });
    }

    Query {
        terms: parsed,
        dropped,
        options: *options,
    }
}
