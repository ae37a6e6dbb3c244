// src/table/parse.rs

use scraper::{ElementRef, Html};

use crate::core::html::{self, cell_text, child_elements, colspan};
use crate::error::{Result, ScrapeError};

/// Rectangular grid of cell text with a two-level `(group, field)` header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawTable {
    header: Vec<(String, String)>,
    rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Every row must be exactly as wide as the header.
    pub fn new(header: Vec<(String, String)>, rows: Vec<Vec<String>>) -> Result<Self> {
        if header.is_empty() {
            return Err(ScrapeError::malformed("header has no columns"));
        }
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != header.len()) {
            return Err(ScrapeError::malformed(format!(
                "row {} has {} cells, header has {}",
                i + 1,
                row.len(),
                header.len()
            )));
        }
        Ok(Self { header, rows })
    }

    pub fn header(&self) -> &[(String, String)] { &self.header }
    pub fn rows(&self) -> &[Vec<String>] { &self.rows }
    pub fn width(&self) -> usize { self.header.len() }
}

/// Parse one `<table>`'s markup. The `<thead>` must hold exactly two rows:
/// group labels first, field labels second. `colspan` is expanded everywhere.
pub fn parse(table_html: &str) -> Result<RawTable> {
    let fragment = Html::parse_fragment(table_html);
    let table = html::tags(&fragment, "table")
        .next()
        .ok_or_else(|| ScrapeError::malformed("no <table> element in markup"))?;

    let mut head_rows = Vec::new();
    let mut body_rows = Vec::new();
    for section in child_elements(table) {
        match section.value().name() {
            "thead" => head_rows.extend(rows_of(section)),
            "tbody" | "tfoot" => body_rows.extend(rows_of(section)),
            "tr" => body_rows.push(section),
            _ => {} // caption, colgroup
        }
    }

    let [groups_tr, fields_tr] = head_rows.as_slice() else {
        return Err(ScrapeError::malformed(format!(
            "expected a two-row header, found {} header rows",
            head_rows.len()
        )));
    };
    let groups = expand_row(*groups_tr);
    let fields = expand_row(*fields_tr);
    if groups.len() != fields.len() {
        return Err(ScrapeError::malformed(format!(
            "header rows disagree on width: {} group labels, {} field labels",
            groups.len(),
            fields.len()
        )));
    }
    let header = groups.into_iter().zip(fields).collect();

    let rows = body_rows
        .into_iter()
        .map(expand_row)
        .filter(|cells| !cells.is_empty())
        .collect();

    RawTable::new(header, rows)
}

fn rows_of(section: ElementRef<'_>) -> impl Iterator<Item = ElementRef<'_>> {
    child_elements(section).filter(|el| el.value().name() == "tr")
}

/// Cell texts of one `<tr>`, each repeated `colspan` times.
fn expand_row(tr: ElementRef<'_>) -> Vec<String> {
    let mut cells = Vec::new();
    for cell in child_elements(tr).filter(|el| matches!(el.value().name(), "th" | "td")) {
        let text = cell_text(cell);
        let span = colspan(cell);
        cells.extend(std::iter::repeat_n(text, span));
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_pairs(t: &RawTable) -> Vec<(&str, &str)> {
        t.header().iter().map(|(g, f)| (g.as_str(), f.as_str())).collect()
    }

    #[test]
    fn expands_group_colspan() {
        let t = parse(
            r#"<table>
                <thead>
                  <tr><th colspan="2"></th><th colspan="2">Per 90 Minutes</th></tr>
                  <tr><th>Rk</th><th>Player</th><th>Gls</th><th>Ast</th></tr>
                </thead>
                <tbody>
                  <tr><th>1</th><td><a href="/p/1">Max Aarons</a></td><td>0.00</td><td>0.07</td></tr>
                </tbody>
               </table>"#,
        )
        .unwrap();

        assert_eq!(
            header_pairs(&t),
            vec![("", "Rk"), ("", "Player"), ("Per 90 Minutes", "Gls"), ("Per 90 Minutes", "Ast")]
        );
        assert_eq!(t.rows(), &[vec!["1", "Max Aarons", "0.00", "0.07"]]);
    }

    #[test]
    fn body_colspan_and_empty_rows() {
        let t = parse(
            r#"<table>
                <thead><tr><th colspan="2">G</th></tr><tr><th>a</th><th>b</th></tr></thead>
                <tbody><tr></tr><tr><td colspan="2">x</td></tr></tbody>
               </table>"#,
        )
        .unwrap();
        assert_eq!(t.rows(), &[vec!["x", "x"]]);
    }

    #[test]
    fn repeated_header_rows_survive_parsing() {
        let t = parse(
            r#"<table>
                <thead><tr><th></th><th></th></tr><tr><th>Rk</th><th>Player</th></tr></thead>
                <tbody>
                  <tr><th>1</th><td>A</td></tr>
                  <tr class="thead"><th>Rk</th><th>Player</th></tr>
                  <tr><th>2</th><td>B</td></tr>
                </tbody>
               </table>"#,
        )
        .unwrap();
        assert_eq!(t.rows().len(), 3);
        assert_eq!(t.rows()[1], vec!["Rk", "Player"]);
    }

    #[test]
    fn single_header_row_is_malformed() {
        let err = parse("<table><thead><tr><th>a</th></tr></thead><tbody><tr><td>1</td></tr></tbody></table>")
            .unwrap_err();
        assert!(matches!(err, ScrapeError::MalformedTable { .. }));
    }

    #[test]
    fn missing_thead_is_malformed() {
        let err = parse("<table><tr><th>a</th></tr><tr><td>1</td></tr></table>").unwrap_err();
        assert!(matches!(err, ScrapeError::MalformedTable { .. }));
    }

    #[test]
    fn header_width_disagreement_is_malformed() {
        let err = parse(
            "<table><thead><tr><th colspan=\"3\">G</th></tr><tr><th>a</th><th>b</th></tr></thead></table>",
        )
        .unwrap_err();
        assert!(matches!(err, ScrapeError::MalformedTable { .. }));
    }

    #[test]
    fn ragged_row_is_malformed() {
        let err = parse(
            r#"<table>
                <thead><tr><th></th><th></th></tr><tr><th>a</th><th>b</th></tr></thead>
                <tbody><tr><td>1</td><td>2</td></tr><tr><td>3</td></tr></tbody>
               </table>"#,
        )
        .unwrap_err();
        match err {
            ScrapeError::MalformedTable { reason } => assert!(reason.contains("row 2")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn not_a_table() {
        assert!(matches!(parse("<div>nope</div>"), Err(ScrapeError::MalformedTable { .. })));
    }
}
