pub mod exclusions;
pub mod report;

pub use exclusions::*;
pub use report::*;
