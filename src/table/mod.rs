// src/table/mod.rs
//! Commented-out stats table → canonical dataset.
//!
//! Stats sites that defer table rendering ship the markup inside an HTML comment.
//! The pipeline here is three pure steps:
//!
//! ```text
//! extract(document) → CommentedTable   one table hidden in a comment
//! parse(markup)     → RawTable         rectangular grid, (group, field) header
//! normalize(table)  → CanonicalTable   flattened, placeholder-free, renamed, labelled
//! ```
//!
//! Fetching and writing live in `runner`; nothing here touches the network or disk.

mod extract;
mod normalize;
mod parse;

pub use extract::{CandidatePolicy, CommentedTable, extract, extract_with};
pub use normalize::{flatten_header, normalize, normalize_with};
pub use parse::{RawTable, parse};

/// A normalized table. Headers are the schema's fields followed by the label field.
pub type CanonicalTable = crate::data::DataSet;
