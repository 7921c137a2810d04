use crate::index::types::{DocId, Posting, PostingList};
use crate::utils::{mgrams, normalize};
use ahash::AHashMap;
use anyhow::{Context, Result, ensure};
use rayon::prelude::*;
use tracing::debug;

/// Positional inverted index over character m-grams.
///
/// Maps every gram to the ascending list of `(document, offset)` positions
/// where it occurs in the canonical text. Built once, read-only afterwards,
/// and safe to share between threads.
#[derive(Debug, Clone)]
pub struct InvertedIndex {
    gram_len: usize,
    doc_count: u32,
    postings: AHashMap<String, PostingList>,
}

impl InvertedIndex {
    /// Build an index over `documents` using grams of `gram_len` characters.
    ///
    /// Document `i` of the slice becomes document index `i`.
    pub fn build<S>(documents: &[S], gram_len: usize) -> Result<Self>
    where
        S: AsRef<str> + Sync,
    {
        ensure!(gram_len >= 1, "gram length must be at least 1, got {}", gram_len);
        let doc_count = u32::try_from(documents.len())
            .context("corpus has more documents than a document index can address")?;

        // Gram extraction is independent per document
        let per_doc: Vec<Vec<(String, Posting)>> = documents
            .par_iter()
            .enumerate()
            .map(|(idx, text)| {
                let doc = idx as DocId;
                let canonical = normalize(text.as_ref(), gram_len);
                mgrams(&canonical, gram_len)
                    .map(|(offset, gram)| (gram.to_string(), Posting::new(doc, offset)))
                    .collect()
            })
            .collect();

        let mut raw: AHashMap<String, Vec<Posting>> = AHashMap::new();
        let mut total = 0usize;
        for occurrences in per_doc {
            total += occurrences.len();
            for (gram, posting) in occurrences {
                raw.entry(gram).or_default().push(posting);
            }
        }

        let postings: AHashMap<String, PostingList> = raw
            .into_iter()
            .map(|(gram, list)| (gram, PostingList::from_unsorted(list)))
            .collect();

        debug!(
            documents = doc_count,
            grams = postings.len(),
            postings = total,
            gram_len,
            "built inverted index"
        );

        Ok(Self {
            gram_len,
            doc_count,
            postings,
        })
    }

    /// Gram width `m` this index was built with
    #[inline]
    pub fn gram_len(&self) -> usize {
        self.gram_len
    }

    /// Number of documents in the indexed corpus
    #[inline]
    pub fn doc_count(&self) -> u32 {
        self.doc_count
    }

    /// Occurrence list of `gram`, `None` when it never occurs.
    #[inline]
    pub fn postings(&self, gram: &str) -> Option<&PostingList> {
        self.postings.get(gram)
    }

    /// Like [`postings`](Self::postings), also returning the stored key.
    #[inline]
    pub(crate) fn entry(&self, gram: &str) -> Option<(&str, &PostingList)> {
        self.postings
            .get_key_value(gram)
            .map(|(key, list)| (key.as_str(), list))
    }

    #[inline]
    pub fn contains_gram(&self, gram: &str) -> bool {
        self.postings.contains_key(gram)
    }

    /// Number of distinct grams
    #[inline]
    pub fn gram_count(&self) -> usize {
        self.postings.len()
    }

    /// All grams with their lists, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PostingList)> {
        self.postings.iter().map(|(gram, list)| (gram.as_str(), list))
    }
}

/// Build an [`InvertedIndex`]; `doc_count` is `documents.len()`.
pub fn build_index<S>(documents: &[S], gram_len: usize) -> Result<InvertedIndex>
where
    S: AsRef<str> + Sync,
{
    InvertedIndex::build(documents, gram_len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::normalize;

    #[test]
    fn test_build_records_every_gram() {
        let index = build_index(&["the cat", "cat"], 3).unwrap();
        assert_eq!(index.doc_count(), 2);
        assert_eq!(index.gram_len(), 3);

        // "__the_cat__" -> "cat" at offset 6; "__cat__" -> offset 2
        let cat = index.postings("cat").unwrap();
        assert_eq!(cat.as_slice(), &[Posting::new(0, 6), Posting::new(1, 2)]);
    }

    #[test]
    fn test_absent_gram_is_none() {
        let index = build_index(&["the cat"], 3).unwrap();
        assert!(index.postings("dog").is_none());
        assert!(!index.contains_gram("dog"));
    }

    #[test]
    fn test_repeated_gram_sorted() {
        let index = build_index(&["aa aa", "aa"], 2).unwrap();
        let list = index.postings("aa").unwrap();
        let slice = list.as_slice();
        assert!(slice.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(slice.len(), 3);
    }

    #[test]
    fn test_postings_match_canonical_text() {
        let docs = ["The quick. Brown fox", "jumps  over\tthe dog"];
        let index = build_index(&docs, 3).unwrap();

        for (gram, list) in index.iter() {
            for posting in list.iter() {
                let doc = posting.doc_id().unwrap() as usize;
                let offset = posting.offset().unwrap() as usize;
                let canonical = normalize(docs[doc], 3);
                let found: String = canonical.chars().skip(offset).take(3).collect();
                assert_eq!(found, gram);
            }
        }
    }

    #[test]
    fn test_empty_corpus() {
        let docs: Vec<String> = Vec::new();
        let index = build_index(&docs, 3).unwrap();
        assert_eq!(index.doc_count(), 0);
        assert_eq!(index.gram_count(), 0);
    }

    #[test]
    fn test_zero_gram_len_rejected() {
        assert!(build_index(&["abc"], 0).is_err());
    }
}
