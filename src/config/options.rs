// src/config/options.rs
use std::ffi::{ OsStr, OsString };
use std::path::{ Path, PathBuf };

use super::consts::*;
use crate::table::CandidatePolicy;

/// Everything one run needs. Built by the CLI (flags + prompts); the runner
/// never prompts or guesses paths itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub page: PageKind,
    pub source: Source,
    pub export: ExportOptions,
    /// Label appended to every stats row (`country` column).
    pub country: String,
    pub candidates: CandidatePolicy,
}

impl AppOptions {
    pub fn new(page: PageKind, source: Source) -> Self {
        Self {
            page,
            source,
            export: ExportOptions::for_page(page),
            country: String::new(),
            candidates: CandidatePolicy::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageKind {
    /// FBref player standard stats (commented-out table).
    Stats,
    /// FotMob match shot map (`__NEXT_DATA__` JSON).
    Shots,
}

impl PageKind {
    pub fn default_subdir(self) -> &'static str {
        match self { PageKind::Stats => DEFAULT_STATS_SUBDIR, PageKind::Shots => DEFAULT_SHOTS_SUBDIR }
    }
    pub fn default_file(self) -> &'static str {
        match self { PageKind::Stats => DEFAULT_STATS_FILE, PageKind::Shots => DEFAULT_SHOTS_FILE }
    }
}

/// Where the page comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    Url(String),
    /// A page saved to disk earlier.
    File(PathBuf),
}

impl Source {
    pub fn describe(&self) -> String {
        match self {
            Source::Url(u) => u.clone(),
            Source::File(p) => p.display().to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> u8 {
        match self { ExportFormat::Csv => b',', ExportFormat::Tsv => b'\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    out_path: OutputPath,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self::for_page(PageKind::Stats)
    }
}

impl ExportOptions {
    pub fn for_page(page: PageKind) -> Self {
        Self {
            format: ExportFormat::Csv,
            out_path: OutputPath {
                dir: Self::default_dir_for(page),
                file_stem: OsString::from(page.default_file()),
            },
            include_headers: true,
        }
    }

    pub fn default_dir_for(page: PageKind) -> PathBuf {
        PathBuf::from(DEFAULT_OUT_DIR).join(page.default_subdir())
    }

    /// `<dir>/<stem>.<ext>`; the extension always follows the format.
    pub fn out_path(&self) -> PathBuf {
        let stem = self.out_path.file_stem.to_string_lossy();
        let ext = self.format.ext();
        self.out_path.dir.join(join!(&*stem, ".", ext))
    }

    pub fn dir(&self) -> &Path {
        &self.out_path.dir
    }

    pub fn set_dir(&mut self, dir: impl Into<PathBuf>) {
        self.out_path.dir = dir.into();
    }

    /// Bare file name as typed by the user. A pasted `.csv`/`.tsv` is dropped;
    /// other dots are part of the name.
    pub fn set_file_stem(&mut self, name: &str) {
        let name = name.trim();
        let path = Path::new(name);
        let known_ext = path
            .extension()
            .and_then(OsStr::to_str)
            .is_some_and(|e| e.eq_ignore_ascii_case("csv") || e.eq_ignore_ascii_case("tsv"));
        let stem = match path.file_stem() {
            Some(stem) if known_ext => stem,
            _ => OsStr::new(name),
        };
        self.out_path.file_stem = stem.to_os_string();
    }

    /// Parse a full path into dir + stem. Ignores pasted extension; format controls it.
    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());
        if let Some(parent) = p.parent() {
            if !parent.as_os_str().is_empty() {
                self.out_path.dir = parent.to_path_buf();
            }
        }
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
}
