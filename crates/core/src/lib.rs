//! syscov-core
//!
//! Core library for measuring how well a test suite covers the kernel's
//! system-call entry points.
//!
//! Three independently gathered name sets are correlated here: the entry points
//! the kernel exposes, the entry points with a pre-built probe, and the entry
//! points named by `/* COVERAGE: ... */` markers in test sources. Frontends only
//! wire the pipeline and print; all substantive logic lives in this crate.

pub mod model;
pub mod services;

pub use model::{exclusions, ProbeNameSet, RecordMap, EXCLUDED};
pub use services::coverage::{run, CoverageConfig, CoverageError, QueryTool};
pub use services::report::{format_columns, CoverageReport};

/// Returns the library version as encoded at compile time.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
