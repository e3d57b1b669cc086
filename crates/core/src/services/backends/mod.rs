pub mod stap;

pub use stap::{parse_entry_points, parse_probes, resolve_stap_path, StapTool};
