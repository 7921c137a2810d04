#![no_main]

use arbitrary::Arbitrary;
use gramrank::index::build_index;
use gramrank::query::{CoverStrategy, MissingGramPolicy, QueryOptions, rank_proximity_with};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    docs: Vec<&'a str>,
    terms: Vec<&'a str>,
    m: u8,
    k: u8,
    conjunctive: bool,
    strict: bool,
    fold: bool,
}

fuzz_target!(|input: Input<'_>| {
    let m = usize::from(input.m % 5) + 1;
    let Ok(index) = build_index(&input.docs, m) else {
        return;
    };

    let options = QueryOptions {
        strategy: if input.conjunctive {
            CoverStrategy::AllTermsRequired
        } else {
            CoverStrategy::LastTermOnly
        },
        missing_grams: if input.strict {
            MissingGramPolicy::Strict
        } else {
            MissingGramPolicy::Skip
        },
        fold_query: input.fold,
    };

    // Must terminate without panicking and respect k
    let ranked = rank_proximity_with(&index, &input.terms, usize::from(input.k), &options);
    assert!(ranked.len() <= usize::from(input.k));
    assert!(ranked.iter().all(|r| (r.doc as usize) < input.docs.len() && r.score > 0.0));
});
