use std::path::Path;

use syscov_core::services::coverage::{ENTRY_POINT_QUERY, PROBE_QUERY};
use syscov_core::{CoverageError, QueryTool};

/// In-memory query tool answering the two listing queries with canned output.
pub struct FakeTool {
    pub entry_points: String,
    pub probes: String,
}

impl FakeTool {
    pub fn new(entry_points: &[&str], probes: &[&str]) -> Self {
        Self {
            entry_points: entry_points
                .iter()
                .map(|name| format!("kernel.function(\"sys_{name}@kernel/sys.c:1\").call\n"))
                .collect(),
            probes: probes.iter().map(|name| format!("syscall.{name}\n")).collect(),
        }
    }
}

impl QueryTool for FakeTool {
    fn list(&self, query: &str) -> Result<String, CoverageError> {
        match query {
            q if q == ENTRY_POINT_QUERY => Ok(self.entry_points.clone()),
            q if q == PROBE_QUERY => Ok(self.probes.clone()),
            other => Err(CoverageError::ToolInvocation {
                query: other.to_string(),
                message: "unexpected query".into(),
            }),
        }
    }

    fn name(&self) -> &'static str {
        "fake"
    }
}

pub fn write_source(dir: &Path, name: &str, body: &str) {
    std::fs::write(dir.join(name), body).expect("write test source");
}
