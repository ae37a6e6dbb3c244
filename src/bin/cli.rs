// src/bin/cli.rs
use fbref_scrape::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let summary = cli::run()?;
    println!("Wrote {} rows to {}", summary.rows, summary.path.display());
    Ok(())
}
