use std::path::PathBuf;

use log::{debug, info};
use thiserror::Error;

use crate::model::{ProbeNameSet, RecordMap};
use crate::services::backends::{parse_entry_points, parse_probes};
use crate::services::report::CoverageReport;
use crate::services::scanner::{scan, source_files};

/// Query selecting every kernel function with a system-call prefix.
pub const ENTRY_POINT_QUERY: &str = r#"kernel.function("sys_*").call"#;

/// Query selecting every pre-built system-call probe.
pub const PROBE_QUERY: &str = "syscall.*";

/// Every failure aborts the run before any report is rendered.
#[derive(Debug, Error)]
pub enum CoverageError {
    #[error("Query tool failed for `{query}`: {message}")]
    ToolInvocation { query: String, message: String },
    #[error("Failed to read {}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// External tool answering probe-point listing queries with newline-delimited text.
pub trait QueryTool {
    fn list(&self, query: &str) -> Result<String, CoverageError>;
    fn name(&self) -> &'static str;
}

/// Where to look for test sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageConfig {
    /// Directory whose files are scanned (not recursive).
    pub source_dir: PathBuf,
    /// File extension selecting test sources, without the dot.
    pub extension: String,
}

impl Default for CoverageConfig {
    fn default() -> Self {
        Self { source_dir: PathBuf::from("."), extension: "c".to_string() }
    }
}

/// Query the entry-point listing and add every new name to `records` at count 0.
///
/// Returns the names parsed from the tool output, including any that were
/// already tracked (for example, excluded ones).
pub fn enumerate_entry_points(
    tool: &dyn QueryTool,
    records: &mut RecordMap,
) -> Result<Vec<String>, CoverageError> {
    let output = tool.list(ENTRY_POINT_QUERY)?;
    let names = parse_entry_points(&output);
    let added = names.iter().filter(|name| records.discover(name.as_str())).count();
    debug!("{} reported {} entry points, {} newly tracked", tool.name(), names.len(), added);
    Ok(names)
}

/// Query the probe listing and collect the probe-backed names.
pub fn enumerate_probes(tool: &dyn QueryTool) -> Result<ProbeNameSet, CoverageError> {
    let output = tool.list(PROBE_QUERY)?;
    let probes = parse_probes(&output);
    debug!("{} reported {} probes", tool.name(), probes.len());
    Ok(probes)
}

/// Run the whole pipeline: seed exclusions, discover entry points, collect
/// probes, scan sources, classify.
///
/// Exclusions are seeded before discovery so no excluded name can be
/// reintroduced at count 0.
pub fn run(config: &CoverageConfig, tool: &dyn QueryTool) -> Result<CoverageReport, CoverageError> {
    let mut records = RecordMap::seeded();
    enumerate_entry_points(tool, &mut records)?;
    let probes = enumerate_probes(tool)?;

    let files = source_files(&config.source_dir, &config.extension)?;
    let hits = scan(&files, &mut records)?;
    info!(
        "scanned {} source files in {}, {} coverage increments",
        files.len(),
        config.source_dir.display(),
        hits
    );

    Ok(CoverageReport::build(&records, &probes))
}
