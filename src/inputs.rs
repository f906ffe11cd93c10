//! Collection of input document paths from arguments or a path list.

use std::collections::HashSet;
use std::io::BufRead;
use std::path::{Path, PathBuf};

use glob::glob;
use tracing::warn;

use crate::error::Result;

/// Expand `{a,b}` alternatives, left to right, into every combination.
///
/// An unmatched `{` leaves the rest of the pattern untouched.
pub fn expand_braces(pattern: &str) -> Vec<String> {
    let Some((prefix, rest)) = pattern.split_once('{') else {
        return vec![pattern.to_string()];
    };
    let Some((alternatives, suffix)) = rest.split_once('}') else {
        return vec![pattern.to_string()];
    };

    let tails = expand_braces(suffix);
    alternatives
        .split(',')
        .flat_map(|alt| {
            tails
                .iter()
                .map(move |tail| format!("{}{}{}", prefix, alt.trim(), tail))
        })
        .collect()
}

/// Turn command-line arguments into document paths.
///
/// An argument naming an existing file is used as-is. Any other argument may
/// hold brace alternatives and glob wildcards; one that matches no file is
/// kept as a literal path so that reading it reports the problem. Duplicates
/// keep their first position.
pub fn expand_patterns<S: AsRef<str>>(patterns: &[S]) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    for pattern in patterns {
        let pattern = pattern.as_ref();
        if Path::new(pattern).is_file() {
            paths.push(PathBuf::from(pattern));
            continue;
        }

        for expanded in expand_braces(pattern) {
            let matches: Vec<PathBuf> = match glob(&expanded) {
                Ok(entries) => entries
                    .filter_map(|r| r.ok())
                    .filter(|p| p.is_file())
                    .collect(),
                Err(e) => {
                    warn!(pattern = %expanded, error = %e, "not a glob pattern, using it literally");
                    Vec::new()
                }
            };

            if matches.is_empty() {
                paths.push(PathBuf::from(&expanded));
            } else {
                paths.extend(matches);
            }
        }
    }

    dedup_in_order(paths)
}

/// Read newline-delimited paths, skipping blank lines.
pub fn read_path_list<R: BufRead>(reader: R) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            paths.push(PathBuf::from(trimmed));
        }
    }
    Ok(paths)
}

fn dedup_in_order(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut seen = HashSet::new();
    paths
        .into_iter()
        .filter(|p| seen.insert(p.clone()))
        .collect()
}
