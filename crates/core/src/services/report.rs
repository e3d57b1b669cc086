use std::fmt::Write as _;

use serde::Serialize;

use crate::model::{ProbeNameSet, RecordMap};

/// Width of one name column in the function tables.
pub const COLUMN_WIDTH: usize = 24;

/// Names per table row.
pub const COLUMNS: usize = 3;

/// Classification of every tracked entry point.
///
/// `covered`/`uncovered` partition the tracked names, and so do
/// `handled`/`unhandled`. Excluded names are in neither.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverageReport {
    pub covered: usize,
    pub uncovered: usize,
    pub handled: usize,
    pub unhandled: usize,
    /// Sorted ascending.
    pub uncovered_functions: Vec<String>,
    /// Sorted ascending.
    pub unhandled_functions: Vec<String>,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    report: &'a CoverageReport,
    covered_percent: f64,
    handled_percent: f64,
}

impl CoverageReport {
    /// Classify every record. A name is handled when it is covered or has a probe.
    pub fn build(records: &RecordMap, probes: &ProbeNameSet) -> Self {
        let mut report = Self {
            covered: 0,
            uncovered: 0,
            handled: 0,
            unhandled: 0,
            uncovered_functions: Vec::new(),
            unhandled_functions: Vec::new(),
        };

        for (name, count) in records.iter() {
            if count > 0 {
                report.covered += 1;
            } else if count == 0 {
                report.uncovered += 1;
                report.uncovered_functions.push(name.to_string());
            }

            if count > 0 || (count == 0 && probes.contains(name)) {
                report.handled += 1;
            } else if count == 0 {
                report.unhandled += 1;
                report.unhandled_functions.push(name.to_string());
            }
        }

        report.uncovered_functions.sort();
        report.unhandled_functions.sort();
        report
    }

    /// Tracked names, excluded ones not included.
    pub fn total(&self) -> usize {
        self.covered + self.uncovered
    }

    pub fn covered_percent(&self) -> f64 {
        percent(self.covered, self.covered + self.uncovered)
    }

    pub fn handled_percent(&self) -> f64 {
        percent(self.handled, self.handled + self.unhandled)
    }

    /// Render the plain-text report.
    ///
    /// The "Handled" line pairs the covered count with the handled percentage.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Covered {} out of {}. {:.1}%",
            self.covered,
            self.covered + self.uncovered,
            self.covered_percent()
        );
        out.push_str("UNCOVERED FUNCTIONS\n");
        out.push_str(&format_columns(&self.uncovered_functions));

        let _ = writeln!(
            out,
            "Handled {} out of {}. {:.1}%",
            self.covered,
            self.handled + self.unhandled,
            self.handled_percent()
        );
        if self.unhandled > 0 {
            out.push_str("UNHANDLED FUNCTIONS\n");
            out.push_str(&format_columns(&self.unhandled_functions));
        }
        out
    }

    /// Pretty JSON with both percentages alongside the counts and lists.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&JsonReport {
            report: self,
            covered_percent: self.covered_percent(),
            handled_percent: self.handled_percent(),
        })
    }
}

/// Lay names out left-justified in [`COLUMN_WIDTH`]-wide fields, [`COLUMNS`]
/// per row, each row newline-terminated. Long names are never truncated.
pub fn format_columns<S: AsRef<str>>(names: &[S]) -> String {
    let mut out = String::new();
    for row in names.chunks(COLUMNS) {
        for name in row {
            let _ = write!(out, "{:<width$}", name.as_ref(), width = COLUMN_WIDTH);
        }
        out.push('\n');
    }
    out
}

// An empty denominator reads as 0.0% rather than NaN.
fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 * 100.0 / whole as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn seven_names_render_as_two_full_rows_and_one_partial() {
        let list = names(&["a", "b", "c", "d", "e", "f", "g"]);
        let text = format_columns(&list);
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2], format!("{:<24}", "g"));
    }

    #[test]
    fn rows_hold_three_fixed_width_fields() {
        let list = names(&["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"]);
        let text = format_columns(&list);
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].len(), COLUMN_WIDTH * 3);
        assert_eq!(rows[3], format!("{:<24}", "j"));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn long_names_are_not_truncated() {
        let long = "a_name_that_is_much_longer_than_the_column";
        let list = names(&[long, "b", "c", "d"]);
        let text = format_columns(&list);
        let rows: Vec<&str> = text.lines().collect();
        assert!(rows[0].starts_with(long));
        assert_eq!(rows[0].len(), long.len() + 2 * COLUMN_WIDTH);
        assert_eq!(rows[1], format!("{:<24}", "d"));
    }

    #[test]
    fn empty_list_renders_nothing() {
        assert_eq!(format_columns::<String>(&[]), "");
    }

    #[test]
    fn empty_map_reports_zero_percent() {
        let report = CoverageReport::build(&RecordMap::new(), &ProbeNameSet::new());
        assert_eq!(
            report.render_text(),
            "Covered 0 out of 0. 0.0%\nUNCOVERED FUNCTIONS\nHandled 0 out of 0. 0.0%\n"
        );
    }
}
