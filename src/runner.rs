// src/runner.rs
use std::path::PathBuf;

use tracing::{info, info_span};

use crate::{
    config::options::{AppOptions, PageKind, Source},
    core::net,
    data::DataSet,
    file::write_export_single,
    progress::{NullProgress, Progress, Stage},
    specs::shots,
    table,
};
use crate::error::Result;

/// Summary of what was produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub path: PathBuf,
    pub rows: usize,
}

/// Top-level runner: dispatch on page kind and run the linear pipeline once.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(opts: &AppOptions, progress: Option<&mut dyn Progress>) -> Result<RunSummary> {
    let mut null = NullProgress;
    let progress: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };

    let _span = info_span!("run", page = ?opts.page, source = %opts.source.describe()).entered();

    let result = match opts.page {
        PageKind::Stats => get_stats(opts, progress),
        PageKind::Shots => get_shots(opts, progress),
    };
    progress.finish();
    result
}

/// Raw page text from the configured source.
pub fn fetch(source: &Source) -> Result<String> {
    match source {
        Source::Url(url) => net::http_get(url),
        Source::File(path) => net::read_file(path),
    }
}

/* ---------------- Stats: Fetch → ExtractComment → Parse → Normalize → Serialize ---------------- */

fn get_stats(opts: &AppOptions, progress: &mut dyn Progress) -> Result<RunSummary> {
    progress.begin(5);

    let doc = fetch(&opts.source)?;
    info!(bytes = doc.len(), "fetched");
    progress.stage_done(Stage::Fetch);

    let commented = table::extract_with(&doc, opts.candidates)?;
    progress.stage_done(Stage::ExtractComment);

    let raw = table::parse(&commented.html)?;
    info!(columns = raw.width(), rows = raw.rows().len(), "parsed");
    progress.stage_done(Stage::Parse);

    let canonical = table::normalize(&raw, &opts.country)?;
    info!(rows = canonical.len(), country = %opts.country, "normalized");
    progress.stage_done(Stage::Normalize);

    serialize(opts, &canonical, progress)
}

/* ---------------- Shots: Fetch → Parse → Serialize ---------------- */

fn get_shots(opts: &AppOptions, progress: &mut dyn Progress) -> Result<RunSummary> {
    progress.begin(3);

    let doc = fetch(&opts.source)?;
    info!(bytes = doc.len(), "fetched");
    progress.stage_done(Stage::Fetch);

    let data = shots::parse_match_page(&doc)?;
    info!(shots = data.shots.len(), "{} ({})", data.info.title(), data.info.league_title());
    progress.log(&join!(&data.info.title(), " | ", &data.info.league_title()));
    progress.stage_done(Stage::Parse);

    serialize(opts, &shots::to_dataset(&data), progress)
}

fn serialize(opts: &AppOptions, data: &DataSet, progress: &mut dyn Progress) -> Result<RunSummary> {
    let path = write_export_single(&opts.export, data)?;
    info!(path = %path.display(), rows = data.len(), "written");
    progress.stage_done(Stage::Serialize);
    Ok(RunSummary { path, rows: data.len() })
}
