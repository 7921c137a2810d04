use crate::index::inverted::InvertedIndex;
use serde::Serialize;

/// Summary of an index's size and shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    pub documents: u32,
    pub gram_len: usize,
    pub distinct_grams: usize,
    pub total_postings: usize,
    /// Gram with the most occurrences, and how many
    pub longest_list: Option<(String, usize)>,
}

impl IndexStats {
    pub fn collect(index: &InvertedIndex) -> Self {
        let mut total_postings = 0;
        let mut longest: Option<(&str, usize)> = None;

        for (gram, list) in index.iter() {
            total_postings += list.len();
            // Ties resolve to the smaller gram so output is stable
            let better = match longest {
                None => true,
                Some((best, len)) => list.len() > len || (list.len() == len && gram < best),
            };
            if better {
                longest = Some((gram, list.len()));
            }
        }

        Self {
            documents: index.doc_count(),
            gram_len: index.gram_len(),
            distinct_grams: index.gram_count(),
            total_postings,
            longest_list: longest.map(|(gram, len)| (gram.to_string(), len)),
        }
    }
}

/// Display index statistics
pub fn show_stats(index: &InvertedIndex) {
    let stats = IndexStats::collect(index);

    println!("Index Statistics");
    println!("================");
    println!();
    println!("Document count:   {}", stats.documents);
    println!("Gram length:      {}", stats.gram_len);
    println!("Distinct grams:   {}", stats.distinct_grams);
    println!("Total postings:   {}", stats.total_postings);
    if let Some((gram, len)) = &stats.longest_list {
        println!("Longest list:     {:?} ({} postings)", gram, len);
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::inverted::build_index;

    #[test]
    fn test_collect_stats() {
        // "_aa_" and "_a_": m = 2
        let index = build_index(&["aa", "a"], 2).unwrap();
        let stats = IndexStats::collect(&index);

        assert_eq!(stats.documents, 2);
        assert_eq!(stats.gram_len, 2);
        assert_eq!(stats.distinct_grams, 3);
        assert_eq!(stats.total_postings, 5);
        assert_eq!(stats.longest_list, Some(("_a".to_string(), 2)));
    }

    #[test]
    fn test_empty_index_stats() {
        let docs: Vec<&str> = Vec::new();
        let stats = IndexStats::collect(&build_index(&docs, 3).unwrap());
        assert_eq!(stats.total_postings, 0);
        assert_eq!(stats.longest_list, None);
    }
}
