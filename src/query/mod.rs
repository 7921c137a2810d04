pub mod cover;
pub mod navigator;
pub mod parser;
pub mod phrase;
pub mod ranker;

pub use cover::CoverStrategy;
pub use navigator::Navigator;
pub use parser::{MissingGramPolicy, Query, QueryOptions, QueryTerm, parse_query};
pub use ranker::{Ranker, cover_score, rank_proximity, rank_proximity_with};
