// src/specs/league_stats.rs
//! Page shape for FBref player "Standard Stats" tables.
//!
//! The player table on a league/season stats page is shipped inside an HTML
//! comment and unhidden client-side. Its header has two levels (over-header
//! group, field), e.g. `("Per 90 Minutes", "Gls")`, and its body repeats the
//! header row every 25 players.
//!
//! This file only describes the *shape*: which flattened columns are
//! placeholders, what the remaining columns are called, how a repeated header
//! row is recognised. The transformation itself lives in `table::normalize`.

/// Fixed output names, positionally mapped onto the columns left after
/// placeholder removal.
pub const STANDARD_FIELDS: [&str; 23] = [
    "player", "nation", "pos", "squad", "age", "born",
    "mp", "starts", "min", "90s",
    "goals", "ast", "g+a", "g-pk", "pk", "pkatt", "crdy", "crdr",
    "per_gls", "per_ast", "per_g+a", "per_g-pk", "per_g+a-pk",
];

/// Flattened names of the rank column and the trailing "Matches" link column.
/// Both sit under an empty over-header.
pub const PLACEHOLDER_COLUMNS: [&str; 2] = ["_Rk", "_Matches"];

/// Caller-supplied label column appended to every row.
pub const LABEL_FIELD: &str = "country";

/// How to turn a flattened two-level table into named rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Schema<'a> {
    /// Output names, one per column that survives placeholder removal.
    pub fields: &'a [&'a str],
    /// Flattened column names dropped if present.
    pub placeholders: &'a [&'a str],
    /// `(field, value)`: rows where `field` equals `value` exactly are repeated headers.
    pub header_sentinel: (&'a str, &'a str),
    /// Name of the appended label column.
    pub label_field: &'a str,
}

impl Schema<'_> {
    /// Output header: the fields, then the label column.
    pub fn headers(&self) -> Vec<String> {
        self.fields
            .iter()
            .chain(std::iter::once(&self.label_field))
            .map(|s| s.to_string())
            .collect()
    }
}

pub const STANDARD: Schema<'static> = Schema {
    fields: &STANDARD_FIELDS,
    placeholders: &PLACEHOLDER_COLUMNS,
    header_sentinel: ("player", "Player"),
    label_field: LABEL_FIELD,
};
