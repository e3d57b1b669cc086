use std::path::PathBuf;
use std::process::Command;
use std::sync::OnceLock;

use log::debug;
use regex::Regex;

use crate::model::ProbeNameSet;
use crate::services::coverage::{CoverageError, QueryTool};

/// SystemTap-backed query tool; shells out to `stap -l <query>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StapTool {
    pub path: PathBuf,
}

impl StapTool {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for StapTool {
    fn default() -> Self {
        Self::new(resolve_stap_path(None))
    }
}

impl QueryTool for StapTool {
    fn list(&self, query: &str) -> Result<String, CoverageError> {
        let fail = |message: String| CoverageError::ToolInvocation {
            query: query.to_string(),
            message,
        };

        debug!("running {} -l '{}'", self.path.display(), query);
        let output = Command::new(&self.path)
            .arg("-l")
            .arg(query)
            .output()
            .map_err(|e| fail(format!("failed to spawn {}: {e}", self.path.display())))?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stdout = String::from_utf8_lossy(&output.stdout);
            let captured = if stderr.trim().is_empty() { stdout } else { stderr };
            return Err(fail(format!(
                "{} exited with {}: {}",
                self.path.display(),
                output.status,
                captured.trim()
            )));
        }
        String::from_utf8(output.stdout).map_err(|e| fail(format!("output is not UTF-8: {e}")))
    }

    fn name(&self) -> &'static str {
        "stap"
    }
}

/// Pick the query tool executable: an explicit path wins, then `STAP_BIN`,
/// then `stap` on `PATH`.
pub fn resolve_stap_path(explicit: Option<PathBuf>) -> PathBuf {
    explicit
        .or_else(|| std::env::var_os("STAP_BIN").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("stap"))
}

fn entry_point_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // Name runs to the `@file:line` suffix, or to the closing quote when the
    // tool prints no location.
    PATTERN.get_or_init(|| {
        Regex::new(r#"kernel\.function\("(?i:sys)_([^@"]+)[@"]"#)
            .expect("valid entry-point regex")
    })
}

fn probe_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^syscall\.(.+)$").expect("valid probe regex"))
}

/// Extract lowercase entry-point names from a `kernel.function("sys_*")` listing.
///
/// Lines that do not have the expected shape are skipped.
pub fn parse_entry_points(output: &str) -> Vec<String> {
    output
        .lines()
        .filter_map(|line| entry_point_pattern().captures(line))
        .map(|caps| caps[1].to_lowercase())
        .collect()
}

/// Extract probe names from a `syscall.*` listing.
pub fn parse_probes(output: &str) -> ProbeNameSet {
    output
        .lines()
        .filter_map(|line| probe_pattern().captures(line.trim()))
        .map(|caps| caps[1].to_string())
        .collect()
}
