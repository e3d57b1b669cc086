//! Coverage-marker scanning over test sources.
//!
//! A marker is a comment of the form `/* COVERAGE: name1 name2 */` that opens
//! and closes on one line. Markers spanning lines are not recognized.

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::{debug, trace};

use crate::model::RecordMap;
use crate::services::coverage::CoverageError;

const MARKER_OPEN: &str = "/* COVERAGE:";
const MARKER_CLOSE: &str = "*/";

/// Return the names listed by the first coverage marker on `line`.
///
/// The list ends at the first `*/` after the marker opens. Returns `None`
/// when the line has no complete marker or the marker lists no names.
pub fn parse_marker(line: &str) -> Option<Vec<&str>> {
    let start = line.find(MARKER_OPEN)? + MARKER_OPEN.len();
    let rest = &line[start..];
    let Some(end) = rest.find(MARKER_CLOSE) else {
        trace!("unterminated coverage marker ignored: {}", line.trim());
        return None;
    };
    let names: Vec<&str> = rest[..end].split_whitespace().collect();
    if names.is_empty() {
        None
    } else {
        Some(names)
    }
}

/// List the non-directory entries in `dir` whose extension is `ext`, sorted by path.
///
/// Entries that cannot be opened (a dangling symlink, say) are still listed so
/// the scan fails on them instead of skipping them.
pub fn source_files(dir: &Path, ext: &str) -> Result<Vec<PathBuf>, CoverageError> {
    let access =
        |source: std::io::Error| CoverageError::FileAccess { path: dir.to_path_buf(), source };
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(access)? {
        let path = entry.map_err(access)?.path();
        if !path.is_dir() && path.extension().is_some_and(|e| e == ext) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Count every marker reference in one file into `records`.
///
/// Returns the number of increments made. Lines are decoded lossily so a
/// stray non-UTF-8 byte cannot hide a marker elsewhere on the line.
pub fn scan_file(path: &Path, records: &mut RecordMap) -> Result<usize, CoverageError> {
    let access =
        |source: std::io::Error| CoverageError::FileAccess { path: path.to_path_buf(), source };
    let mut reader = BufReader::new(File::open(path).map_err(access)?);
    let mut buf = Vec::new();
    let mut hits = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).map_err(access)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        let Some(names) = parse_marker(&line) else {
            continue;
        };
        for name in names {
            if records.mark(name) {
                hits += 1;
            } else {
                trace!("{}: marker names untracked entry point `{name}`", path.display());
            }
        }
    }

    debug!("{}: {hits} coverage increments", path.display());
    Ok(hits)
}

/// Scan every file in `files`; stops at the first file that cannot be read.
pub fn scan(files: &[PathBuf], records: &mut RecordMap) -> Result<usize, CoverageError> {
    let mut hits = 0;
    for file in files {
        hits += scan_file(file, records)?;
    }
    Ok(hits)
}
