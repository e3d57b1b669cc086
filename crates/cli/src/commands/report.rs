use std::path::PathBuf;

use anyhow::{Context, Result};
use log::info;

use syscov_core::services::backends::{resolve_stap_path, StapTool};
use syscov_core::services::coverage::{enumerate_entry_points, enumerate_probes};
use syscov_core::services::scanner::{scan, source_files};
use syscov_core::{CoverageReport, RecordMap};

use crate::canonicalize_or_current;

/// Options for one coverage report run.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Directory holding the test sources.
    pub dir: String,
    /// Query tool override; falls back to `STAP_BIN`, then `stap`.
    pub stap: Option<PathBuf>,
    /// Source extension, without the dot.
    pub ext: String,
    pub json: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self { dir: ".".to_string(), stap: None, ext: "c".to_string(), json: false }
    }
}

/// Run each pipeline stage and return the report without printing it.
///
/// A failure carries the name of the stage that failed.
pub fn build_report(opts: &ReportOptions) -> Result<CoverageReport> {
    let source_dir = canonicalize_or_current(&opts.dir)?;
    let tool = StapTool::new(resolve_stap_path(opts.stap.clone()));
    info!("using query tool {}", tool.path.display());

    let mut records = RecordMap::seeded();
    enumerate_entry_points(&tool, &mut records).context("Failed to enumerate entry points")?;
    let probes = enumerate_probes(&tool).context("Failed to enumerate probes")?;

    let files = source_files(&source_dir, &opts.ext).with_context(|| {
        format!("Failed to list test sources in {}", source_dir.display())
    })?;
    let hits = scan(&files, &mut records).context("Failed to scan test sources")?;
    info!("scanned {} source files, {} coverage increments", files.len(), hits);

    Ok(CoverageReport::build(&records, &probes))
}

/// Build the report and print it to stdout. Nothing is printed on failure.
pub fn report_command(opts: &ReportOptions) -> Result<()> {
    let report = build_report(opts)?;

    if opts.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.render_text());
    }

    Ok(())
}
