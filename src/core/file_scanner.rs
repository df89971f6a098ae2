//! Source file discovery.
//!
//! Include entries and ignore entries come in two flavours: entries with a
//! `*` or `?` are glob patterns, everything else is a literal path relative to
//! the source root (so `app/[locale]` needs no escaping).

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use colored::Colorize;
use glob::{Pattern, glob};
use walkdir::WalkDir;

use crate::config::TEST_FILE_PATTERNS;

const SOURCE_EXTENSIONS: &[&str] = &["tsx", "ts", "jsx", "js"];

fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

fn warn(verbose: bool, message: std::fmt::Arguments<'_>) {
    if verbose {
        eprintln!("{} {}", "warning:".bold().yellow(), message);
    }
}

/// What to scan below a source root.
#[derive(Debug, Clone, Copy)]
pub struct ScanOptions<'a> {
    pub includes: &'a [String],
    pub ignores: &'a [String],
    pub ignore_test_files: bool,
    pub verbose: bool,
}

/// Result of scanning files.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Matching files, sorted and deduplicated.
    pub files: BTreeSet<String>,
    /// Entries that could not be read while walking.
    pub skipped_count: usize,
}

struct IgnoreSet {
    prefixes: Vec<PathBuf>,
    patterns: Vec<Pattern>,
}

impl IgnoreSet {
    fn new(base_dir: &Path, options: &ScanOptions<'_>) -> Self {
        let mut prefixes = Vec::new();
        let mut patterns = Vec::new();

        for entry in options.ignores {
            if !is_glob_pattern(entry) {
                prefixes.push(base_dir.join(entry));
                continue;
            }
            match Pattern::new(entry) {
                Ok(pattern) => patterns.push(pattern),
                Err(e) => warn(
                    options.verbose,
                    format_args!("Invalid ignore pattern '{}': {}", entry, e),
                ),
            }
        }

        if options.ignore_test_files {
            patterns.extend(TEST_FILE_PATTERNS.iter().filter_map(|p| Pattern::new(p).ok()));
        }

        Self { prefixes, patterns }
    }

    fn is_ignored(&self, path: &Path) -> bool {
        if self.prefixes.iter().any(|prefix| path.starts_with(prefix)) {
            return true;
        }
        let path_str = path.to_string_lossy();
        self.patterns.iter().any(|p| p.matches(&path_str))
    }
}

/// Directories to walk: the base directory itself when there are no includes.
fn scan_roots(base_dir: &Path, options: &ScanOptions<'_>) -> Vec<PathBuf> {
    if options.includes.is_empty() {
        return vec![base_dir.to_path_buf()];
    }

    let mut roots = Vec::new();
    for include in options.includes {
        let full = base_dir.join(include);
        if !is_glob_pattern(include) {
            if full.exists() {
                roots.push(full);
            } else {
                warn(
                    options.verbose,
                    format_args!("Include path does not exist: {}", full.display()),
                );
            }
            continue;
        }
        match glob(&full.to_string_lossy()) {
            Ok(entries) => roots.extend(entries.flatten().filter(|entry| entry.is_dir())),
            Err(e) => warn(
                options.verbose,
                format_args!("Invalid glob pattern '{}': {}", include, e),
            ),
        }
    }
    roots
}

pub fn is_source_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
}

/// Collect every JS/TS source file below `base_dir` allowed by `options`.
pub fn scan_files(base_dir: &str, options: ScanOptions<'_>) -> ScanResult {
    let base_dir = Path::new(base_dir);
    let ignores = IgnoreSet::new(base_dir, &options);
    let mut result = ScanResult::default();

    for root in scan_roots(base_dir, &options) {
        let walker = WalkDir::new(root)
            .into_iter()
            .filter_entry(|entry| !ignores.is_ignored(entry.path()));
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    result.skipped_count += 1;
                    warn(options.verbose, format_args!("Cannot access path: {}", e));
                    continue;
                }
            };
            let path = entry.path();
            if entry.file_type().is_file() && is_source_file(path) {
                result.files.insert(path.to_string_lossy().into_owned());
            }
        }
    }

    result
}
