// src/table/extract.rs

use scraper::Html;
use tracing::debug;

use crate::core::html;
use crate::error::{Result, ScrapeError};

/// The markup of a single `<table>` found inside an HTML comment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommentedTable {
    pub html: String,
}

/// What to do when more than one comment holds exactly one table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CandidatePolicy {
    /// Several candidates are ambiguous and fail with `NoTableFound`.
    #[default]
    Unique,
    /// Take the first candidate in document order.
    First,
}

/// Locate the one table hidden in a comment. Fails on zero or several candidates.
pub fn extract(document: &str) -> Result<CommentedTable> {
    extract_with(document, CandidatePolicy::Unique)
}

pub fn extract_with(document: &str, policy: CandidatePolicy) -> Result<CommentedTable> {
    let doc = Html::parse_document(document);
    let mut candidates = html::comments(&doc).filter_map(single_table);

    let Some(first) = candidates.next() else {
        return Err(ScrapeError::NoTableFound { candidates: 0 });
    };

    match policy {
        CandidatePolicy::First => Ok(first),
        CandidatePolicy::Unique => {
            let extra = candidates.count();
            if extra > 0 {
                return Err(ScrapeError::NoTableFound { candidates: extra + 1 });
            }
            debug!(bytes = first.html.len(), "commented table located");
            Ok(first)
        }
    }
}

/// Re-parse a comment as HTML; keep it only if it holds exactly one table.
fn single_table(comment: &str) -> Option<CommentedTable> {
    if !comment.to_ascii_lowercase().contains("<table") {
        return None;
    }
    let fragment = Html::parse_fragment(comment);
    let mut tables = html::tags(&fragment, "table");
    let table = tables.next()?;
    if tables.next().is_some() {
        return None;
    }
    Some(CommentedTable { html: table.html() })
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE: &str = "<table id=\"a\"><tr><td>1</td></tr></table>";
    const TWO: &str = "<table id=\"b\"><tr><td>2</td></tr></table>";

    fn page(body: &str) -> String {
        format!("<!DOCTYPE html><html><head><title>t</title></head><body>{body}</body></html>")
    }

    #[test]
    fn no_comments_is_not_found() {
        let err = extract(&page(ONE)).unwrap_err();
        assert!(matches!(err, ScrapeError::NoTableFound { candidates: 0 }));
    }

    #[test]
    fn comments_without_tables_are_not_found() {
        let err = extract(&page("<!-- nav --><div><!-- <p>hi</p> --></div>")).unwrap_err();
        assert!(matches!(err, ScrapeError::NoTableFound { candidates: 0 }));
    }

    #[test]
    fn single_commented_table_is_returned() {
        let doc = page(&format!("{TWO}<!-- nav --><div><!--\n<div class=\"c\">{ONE}</div>\n--></div>"));
        let got = extract(&doc).unwrap();
        assert!(got.html.starts_with("<table"));
        assert!(got.html.contains("id=\"a\""));
        assert!(got.html.contains("<td>1</td>"));
    }

    #[test]
    fn comment_with_two_tables_is_discarded() {
        let doc = page(&format!("<!-- {ONE}{TWO} --><!-- {TWO} -->"));
        let got = extract(&doc).unwrap();
        assert!(got.html.contains("id=\"b\""));

        let only_ambiguous = page(&format!("<!-- {ONE}{TWO} -->"));
        assert!(matches!(
            extract(&only_ambiguous),
            Err(ScrapeError::NoTableFound { candidates: 0 })
        ));
    }

    #[test]
    fn nested_table_counts_as_two() {
        let nested = "<!-- <table><tr><td><table><tr><td>x</td></tr></table></td></tr></table> -->";
        assert!(matches!(
            extract(&page(nested)),
            Err(ScrapeError::NoTableFound { candidates: 0 })
        ));
    }

    #[test]
    fn several_candidates_are_ambiguous_unless_first_requested() {
        let doc = page(&format!("<!-- {ONE} --><p>x</p><!-- {TWO} -->"));
        assert!(matches!(
            extract(&doc),
            Err(ScrapeError::NoTableFound { candidates: 2 })
        ));

        let first = extract_with(&doc, CandidatePolicy::First).unwrap();
        assert!(first.html.contains("id=\"a\""));
    }
}
