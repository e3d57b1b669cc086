//! Pipeline stages: query-tool enumeration, source scanning, and reporting.

pub mod backends;
pub mod coverage;
pub mod report;
pub mod scanner;
