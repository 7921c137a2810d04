//! Utility functions shared by indexing and querying.
//!
//! ## Modules
//!
//! - [`normalize`] - Document canonicalization and query-term padding
//! - [`mgram`] - Character m-gram extraction
//! - [`app_data`] - Search configuration in the user config directory
//! - [`progress`] - Spinner, no-op without the `progress` feature
//!
//! ## Key Functions
//!
//! ```
//! use gramrank::utils::{gram_sequence, normalize};
//!
//! let text = normalize("The  Cat", 3);
//! assert_eq!(text, "__the_cat__");
//!
//! let grams = gram_sequence("cat_", 3);
//! assert_eq!(grams, vec!["cat", "at_"]);
//! ```

pub mod app_data;
pub mod mgram;
pub mod normalize;
pub mod progress;

pub use app_data::*;
pub use mgram::*;
pub use normalize::*;
