// src/table/normalize.rs

use tracing::debug;

use super::{CanonicalTable, RawTable};
use crate::error::{Result, ScrapeError};
use crate::specs::league_stats::{STANDARD, Schema};

/// `(" Per 90 Minutes ", "Gls")` → `"Per 90 Minutes_Gls"`; an empty group gives `"_Gls"`.
pub fn flatten_header(group: &str, field: &str) -> String {
    join!(group.trim(), "_", field.trim())
}

/// Normalize against the FBref standard-stats schema.
pub fn normalize(table: &RawTable, country: &str) -> Result<CanonicalTable> {
    normalize_with(table, country, &STANDARD)
}

/// Flatten, drop placeholders, rename positionally, drop repeated header rows,
/// append the label. Nothing is produced unless the column count matches exactly.
pub fn normalize_with(table: &RawTable, label: &str, schema: &Schema<'_>) -> Result<CanonicalTable> {
    let flat: Vec<String> = table
        .header()
        .iter()
        .map(|(group, field)| flatten_header(group, field))
        .collect();

    let keep: Vec<usize> = flat
        .iter()
        .enumerate()
        .filter(|(_, name)| !schema.placeholders.contains(&name.as_str()))
        .map(|(i, _)| i)
        .collect();

    if keep.len() != schema.fields.len() {
        return Err(ScrapeError::SchemaMismatch {
            expected: schema.fields.len(),
            found: keep.len(),
            columns: keep.iter().map(|&i| flat[i].clone()).collect(),
        });
    }

    let (sentinel_field, sentinel_value) = schema.header_sentinel;
    let sentinel_idx = schema.fields.iter().position(|f| *f == sentinel_field);

    let mut rows = Vec::with_capacity(table.rows().len());
    let mut repeated_headers = 0usize;
    for raw in table.rows() {
        let mut row: Vec<String> = Vec::with_capacity(keep.len() + 1);
        row.extend(keep.iter().map(|&i| raw[i].clone()));

        if sentinel_idx.is_some_and(|i| row[i] == sentinel_value) {
            repeated_headers += 1;
            continue;
        }
        row.push(s!(label));
        rows.push(row);
    }

    debug!(
        columns = flat.len(),
        dropped = flat.len() - keep.len(),
        repeated_headers,
        rows = rows.len(),
        "normalized"
    );

    Ok(CanonicalTable::new(schema.headers(), rows))
}
