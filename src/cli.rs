// src/cli.rs
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

use crate::config::consts::OUT_DIR_ENV;
use crate::config::options::{AppOptions, ExportFormat, PageKind, Source};
use crate::core::sanitize::{sanitize_file_stem, url_last_segment};
use crate::error::{Result, ScrapeError};
use crate::progress::{Progress, Stage};
use crate::runner::{self, RunSummary};
use crate::table::CandidatePolicy;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PageArg {
    /// FBref player standard stats table
    Stats,
    /// FotMob match shot map
    Shots,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Csv,
    Tsv,
}

/// Scrape one football stats page into a CSV file.
///
/// Any of URL, output name and country that is not given as a flag is asked
/// for on stdin.
#[derive(Debug, Parser)]
#[command(name = "fbref_scrape", version, about)]
pub struct Args {
    /// Page kind to scrape
    #[arg(value_enum, default_value_t = PageArg::Stats)]
    pub page: PageArg,

    /// Page URL
    #[arg(short, long, conflicts_with = "input")]
    pub url: Option<String>,

    /// Read a saved page instead of fetching
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output file name (extension follows --format)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Output directory [default: out/<page>]
    #[arg(short = 'd', long, env = OUT_DIR_ENV, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Value for the `country` column (stats only)
    #[arg(short, long)]
    pub country: Option<String>,

    #[arg(long, value_enum, default_value_t = FormatArg::Csv)]
    pub format: FormatArg,

    /// Omit the header row
    #[arg(long)]
    pub no_headers: bool,

    /// Take the first commented table instead of failing when several are present
    #[arg(long)]
    pub first_table: bool,

    /// More logging (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Entry point for the binary: parse flags, prompt for the rest, run.
pub fn run() -> Result<RunSummary> {
    let args = Args::parse();
    crate::log::init(args.verbose);

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let opts = build_options(args, stdin.lock(), io::stderr(), interactive)?;

    let mut progress = StderrProgress::default();
    runner::run(&opts, Some(&mut progress))
}

/// Turn flags into `AppOptions`, asking `input` for anything missing.
/// When not `interactive`, the output name falls back to one derived from the
/// source instead of prompting.
pub fn build_options<R: BufRead, W: Write>(
    args: Args,
    mut input: R,
    mut output: W,
    interactive: bool,
) -> Result<AppOptions> {
    let page = match args.page {
        PageArg::Stats => PageKind::Stats,
        PageArg::Shots => PageKind::Shots,
    };

    let source = match (args.url, args.input) {
        (_, Some(path)) => Source::File(path),
        (Some(url), None) => Source::Url(url.trim().to_string()),
        (None, None) => {
            let url = prompt(&mut input, &mut output, "Enter the URL of the webpage: ")?;
            if url.is_empty() {
                return Err(ScrapeError::MissingInput("url"));
            }
            Source::Url(url)
        }
    };

    let mut opts = AppOptions::new(page, source);

    let name = match args.name {
        Some(n) => n,
        None if interactive => {
            prompt(&mut input, &mut output, "Enter the output file name (without extension): ")?
        }
        None => s!(),
    };
    let name = if name.trim().is_empty() { default_name(&opts.source, page) } else { name };
    opts.export.set_file_stem(&name);

    if let Some(dir) = args.out_dir {
        opts.export.set_dir(dir);
    }
    opts.export.format = match args.format {
        FormatArg::Csv => ExportFormat::Csv,
        FormatArg::Tsv => ExportFormat::Tsv,
    };
    opts.export.include_headers = !args.no_headers;

    if page == PageKind::Stats {
        opts.country = match args.country {
            Some(c) => c.trim().to_string(),
            None => prompt(
                &mut input,
                &mut output,
                "Enter the country name to add to the 'country' column: ",
            )?,
        };
    }

    if args.first_table {
        opts.candidates = CandidatePolicy::First;
    }
    Ok(opts)
}

fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, label: &str) -> Result<String> {
    write!(output, "{label}")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Output name from the source: last URL segment or the input file's stem.
fn default_name(source: &Source, page: PageKind) -> String {
    let raw = match source {
        Source::Url(url) => url_last_segment(url).map(str::to_string),
        Source::File(path) => path.file_stem().map(|s| s.to_string_lossy().into_owned()),
    };
    sanitize_file_stem(&raw.unwrap_or_default(), page.default_file())
}

/// Stage lines on stderr.
#[derive(Default)]
pub struct StderrProgress {
    total: usize,
    done: usize,
}

impl Progress for StderrProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
    }

    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }

    fn stage_done(&mut self, stage: Stage) {
        self.done += 1;
        eprintln!("[{}/{}] {stage} ok", self.done, self.total);
    }
}
