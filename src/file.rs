// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::config::options::ExportOptions;
use crate::csv::to_export_string;
use crate::data::DataSet;
use crate::error::{Result, ScrapeError};

/// Write the dataset to `export.out_path()`, creating the directory if needed.
/// The contents are fully serialized before the file is created, so a failure
/// never leaves a partial file behind.
pub fn write_export_single(export: &ExportOptions, data: &DataSet) -> Result<PathBuf> {
    let contents = to_export_string(data, export.include_headers, export.format)?;

    let path = export.out_path();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    fs::write(&path, contents)?;
    debug!(path = %path.display(), rows = data.len(), "export written");
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(ScrapeError::Io(std::io::Error::other(format!(
            "path exists but is not a directory: {}",
            dir.display()
        ))));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
