// src/csv.rs
use crate::config::options::ExportFormat;
use crate::data::DataSet;
use crate::error::Result;

/* ---------------- Writing ---------------- */

/// Serialize a whole dataset in memory. Standard quoting (fields holding the
/// delimiter, quotes or newlines are quoted; quotes doubled).
pub fn to_export_string(data: &DataSet, include_headers: bool, format: ExportFormat) -> Result<String> {
    let mut w = ::csv::WriterBuilder::new()
        .delimiter(format.delim())
        .from_writer(Vec::new());

    if include_headers {
        w.write_record(&data.headers)?;
    }
    for row in &data.rows {
        w.write_record(row)?;
    }

    let buf = w.into_inner().map_err(|e| e.into_error())?;
    Ok(match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ds() -> DataSet {
        DataSet::new(
            vec![s!("player"), s!("min"), s!("country")],
            vec![
                vec![s!("Max Aarons"), s!("1,237"), s!("England")],
                vec![s!("N'Golo \"NG\" Kanté"), s!("900"), s!("France")],
            ],
        )
    }

    #[test]
    fn csv_quotes_only_when_needed() {
        let out = to_export_string(&ds(), true, ExportFormat::Csv).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "player,min,country");
        assert_eq!(lines[1], "Max Aarons,\"1,237\",England");
        assert_eq!(lines[2], "\"N'Golo \"\"NG\"\" Kanté\",900,France");
    }

    #[test]
    fn tsv_without_headers() {
        let out = to_export_string(&ds(), false, ExportFormat::Tsv).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Max Aarons\t1,237\tEngland");
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let mut bad = ds();
        bad.rows.push(vec![s!("only one")]);
        assert!(to_export_string(&bad, true, ExportFormat::Csv).is_err());
    }
}
