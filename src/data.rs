// src/data.rs
//
// Finished, export-ready table: one header row plus data rows of equal width.
// Produced once per run (stats or shots) and handed to the writer.

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn len(&self) -> usize { self.rows.len() }

    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Position of a header by exact name.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// All values of one column, in row order.
    pub fn column_values(&self, name: &str) -> Option<Vec<&str>> {
        let idx = self.column(name)?;
        Some(self.rows.iter().map(|r| r[idx].as_str()).collect())
    }
}
