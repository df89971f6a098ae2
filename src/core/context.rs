use std::{
    cell::OnceCell,
    collections::{BTreeMap, BTreeSet},
    path::{Component, Path, PathBuf},
    sync::Arc,
};

use anyhow::{Context as _, Result};
use colored::Colorize;
use rayon::prelude::*;

use crate::{
    config::{CONFIG_FILE_NAME, Config, load_config},
    core::{
        file_scanner::{ScanOptions, scan_files},
        parsers::jsx::{ParsedSource, parse_jsx_source},
    },
    issues::{Issue, ParseErrorIssue, Rule},
    rules::{RuleOptions, check_parsed},
};

/// Analysis context for one project root.
///
/// Configuration is resolved and files are discovered eagerly; reading and
/// parsing happen on first access to [`CheckContext::parsed_files`] so a run
/// that fails early never pays for them.
///
/// # Configuration Priority
///
/// 1. CLI arguments (`--source-root`, `--verbose`)
/// 2. `.msglintrc.json` found by walking up from the project root
/// 3. Built-in defaults
pub struct CheckContext {
    /// Effective configuration.
    pub config: Config,

    /// True if `config` came from a file.
    pub config_from_file: bool,

    /// Project root, where the config search starts.
    pub root_dir: PathBuf,

    /// Directory that is scanned: `root_dir` joined with `sourceRoot`.
    pub scan_root: PathBuf,

    /// Source files to analyze, sorted.
    pub files: BTreeSet<String>,

    pub verbose: bool,

    parsed_files: OnceCell<BTreeMap<String, ParsedSource>>,
    parse_errors: OnceCell<Vec<ParseErrorIssue>>,
}

impl CheckContext {
    /// Load configuration from `root_dir` (default `.`) and scan for files.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or is invalid.
    pub fn new(root_dir: Option<&Path>, verbose: bool) -> Result<Self> {
        let root_dir = root_dir.unwrap_or_else(|| Path::new(".")).to_path_buf();
        let loaded = load_config(&root_dir)?;

        if verbose && !loaded.from_file {
            eprintln!(
                "{} No {} found, using default configuration",
                "note:".bold(),
                CONFIG_FILE_NAME
            );
        }

        Self::from_config(root_dir, loaded.config, loaded.from_file, verbose)
    }

    /// Build a context from an already resolved configuration.
    pub fn from_config(
        root_dir: PathBuf,
        config: Config,
        config_from_file: bool,
        verbose: bool,
    ) -> Result<Self> {
        let scan_root = resolve_relative(&root_dir, &config.source_root);
        let base = scan_root
            .to_str()
            .with_context(|| format!("Invalid path: {:?}", scan_root))?;

        let scan_result = scan_files(
            base,
            ScanOptions {
                includes: &config.includes,
                ignores: &config.ignores,
                ignore_test_files: config.ignore_test_files,
                verbose,
            },
        );

        if scan_result.skipped_count > 0 {
            eprintln!(
                "{} {} path(s) skipped due to access errors{}",
                "warning:".bold().yellow(),
                scan_result.skipped_count,
                if verbose { "" } else { " (use -v for details)" }
            );
        }

        Ok(Self {
            config,
            config_from_file,
            root_dir,
            scan_root,
            files: scan_result.files,
            verbose,
            parsed_files: OnceCell::new(),
            parse_errors: OnceCell::new(),
        })
    }

    /// Parsed tree for every file that could be read and parsed.
    ///
    /// Reading and parsing run in parallel, one `SourceMap` per file. Files
    /// that fail end up in [`CheckContext::parse_errors`] instead.
    pub fn parsed_files(&self) -> &BTreeMap<String, ParsedSource> {
        self.parsed_files.get_or_init(|| {
            let results: Vec<_> = self
                .files
                .par_iter()
                .map(|file_path| {
                    let parsed = std::fs::read_to_string(file_path)
                        .with_context(|| format!("Failed to read {}", file_path))
                        .and_then(|code| {
                            parse_jsx_source(code, file_path, Arc::new(Default::default()))
                        });
                    (file_path.clone(), parsed)
                })
                .collect();

            let mut parsed = BTreeMap::new();
            let mut errors = Vec::new();
            for (file_path, result) in results {
                match result {
                    Ok(source) => {
                        parsed.insert(file_path, source);
                    }
                    Err(e) => {
                        if self.verbose {
                            eprintln!("{} {:#}", "warning:".bold().yellow(), e);
                        }
                        errors.push(ParseErrorIssue {
                            file_path,
                            error: format!("{:#}", e),
                        });
                    }
                }
            }

            let _ = self.parse_errors.set(errors);
            parsed
        })
    }

    /// Files that could not be read or parsed.
    pub fn parse_errors(&self) -> &[ParseErrorIssue] {
        self.parsed_files();
        self.parse_errors.get_or_init(Vec::new)
    }

    pub fn rule_options(&self) -> RuleOptions<'_> {
        RuleOptions {
            ignore_texts: &self.config.ignore_texts,
            ignore_attributes: &self.config.ignore_attributes,
        }
    }

    /// Run `rules` over every parsed file, in parallel.
    ///
    /// Parse errors are not included; see [`CheckContext::parse_errors`].
    pub fn check(&self, rules: &[Rule]) -> Vec<Issue> {
        let options = self.rule_options();
        self.parsed_files()
            .par_iter()
            .flat_map_iter(|(file_path, parsed)| check_parsed(file_path, parsed, rules, options))
            .collect()
    }
}

/// Join a configured path onto `root_dir`, dropping `./` segments.
fn resolve_relative(root_dir: &Path, path: &str) -> PathBuf {
    let path = Path::new(path);
    if path.is_absolute() {
        return path.to_path_buf();
    }
    let relative: PathBuf = path
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    if relative.as_os_str().is_empty() {
        root_dir.to_path_buf()
    } else {
        root_dir.join(relative)
    }
}
