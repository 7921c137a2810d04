pub mod corpus;
pub mod inverted;
pub mod stats;
pub mod types;

pub use corpus::{Document, load_corpus};
pub use inverted::{InvertedIndex, build_index};
pub use stats::IndexStats;
pub use types::*;
