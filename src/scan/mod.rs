//! File collection and filtering

pub mod collector;
pub mod matcher;
pub mod target;

pub use collector::FileCollector;
pub use matcher::{should_keep, FileMatcher, PatternSet, Wildcard};
pub use target::{describe_patterns, parse_target};

use crate::domain::{FileSpec, FilterConfig};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Eligible files for one specifier, sorted and deduplicated by absolute path.
pub fn collect_from_spec(spec: &FileSpec, filter: &FilterConfig, use_git: bool) -> Vec<PathBuf> {
    let matcher = FileMatcher::new(filter);
    let patterns = PatternSet::new(&spec.patterns);
    let files: BTreeSet<PathBuf> = FileCollector::new(spec.directory.clone())
        .use_git(use_git)
        .collect()
        .into_iter()
        .filter(|candidate| matcher.keep(candidate, &patterns))
        .map(|candidate| candidate.path)
        .collect();
    files.into_iter().collect()
}

/// Union of eligible files over every specifier, in absolute-path order.
pub fn collect_eligible(specs: &[FileSpec], filter: &FilterConfig, use_git: bool) -> Vec<PathBuf> {
    let mut all = BTreeSet::new();
    for spec in specs {
        all.extend(collect_from_spec(spec, filter, use_git));
    }
    all.into_iter().collect()
}
