//! Workspace scanning for marked declarations.
//!
//! Walks the configured source directories, expands every `.rs` file in
//! memory, and collects the diagnostics. Files are independent, so they are
//! checked in parallel.

use super::expander::Expander;
use super::source::SourceLocation;
use crate::{
    config::InitialiserConfig,
    diagnostic::Diagnostic,
    error::{InitialiserError, Result},
};
use rayon::prelude::*;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

/// Diagnostics found in one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    /// The file that was checked.
    pub path: PathBuf,
    /// Diagnostics in source order.
    pub diagnostics: Vec<Diagnostic<SourceLocation>>,
    /// Number of declarations that would receive an initializer.
    pub expanded: usize,
}

/// Report of a workspace scan.
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    /// One entry per parsed file, sorted by path.
    pub files: Vec<FileReport>,
    /// Files that are not UTF-8 or could not be parsed as Rust.
    pub skipped: Vec<PathBuf>,
}

impl ScanReport {
    pub fn files_scanned(&self) -> usize {
        self.files.len()
    }

    pub fn expanded(&self) -> usize {
        self.files.iter().map(|file| file.expanded).sum()
    }

    pub fn diagnostics(&self) -> impl Iterator<Item = (&Path, &Diagnostic<SourceLocation>)> {
        self.files.iter().flat_map(|file| {
            file.diagnostics
                .iter()
                .map(move |diagnostic| (file.path.as_path(), diagnostic))
        })
    }

    pub fn errors(&self) -> usize {
        self.diagnostics().filter(|(_, d)| d.is_error()).count()
    }

    pub fn warnings(&self) -> usize {
        self.diagnostics().filter(|(_, d)| d.is_warning()).count()
    }
}

/// Scans source trees for marked declarations.
#[derive(Debug, Clone)]
pub struct WorkspaceScanner {
    roots: Vec<PathBuf>,
    exclude: Vec<String>,
    expander: Expander,
}

impl WorkspaceScanner {
    pub fn new(roots: Vec<PathBuf>, exclude: Vec<String>, expander: Expander) -> Self {
        WorkspaceScanner {
            roots,
            exclude,
            expander,
        }
    }

    /// Scanner over the configured `source_dirs`.
    pub fn from_config(config: &InitialiserConfig) -> Self {
        WorkspaceScanner::new(
            config.check.source_dirs.iter().map(PathBuf::from).collect(),
            config.check.exclude.clone(),
            Expander::from_config(config),
        )
    }

    pub fn with_roots(mut self, roots: Vec<PathBuf>) -> Self {
        self.roots = roots;
        self
    }

    /// Every `.rs` file under the roots, sorted, excluded and hidden
    /// directories skipped.
    pub fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for root in &self.roots {
            if !root.exists() {
                return Err(InitialiserError::workspace_scan(format!(
                    "{} does not exist",
                    root.display()
                )));
            }

            debug!("Walking {}", root.display());
            let walker = WalkDir::new(root)
                .sort_by_file_name()
                .into_iter()
                .filter_entry(|entry| entry.depth() == 0 || !self.is_excluded(entry));

            for entry in walker {
                let entry = entry
                    .map_err(|e| InitialiserError::workspace_scan(e.to_string()))?;
                if entry.file_type().is_file()
                    && entry.path().extension().is_some_and(|ext| ext == "rs")
                {
                    files.push(entry.into_path());
                }
            }
        }

        files.sort();
        files.dedup();
        Ok(files)
    }

    fn is_excluded(&self, entry: &DirEntry) -> bool {
        let name = entry.file_name().to_string_lossy();
        entry.file_type().is_dir()
            && (name.starts_with('.') || self.exclude.iter().any(|excluded| *excluded == name))
    }

    pub fn scan(&self) -> Result<ScanReport> {
        let files = self.collect_files()?;
        info!("Checking {} Rust source file(s)", files.len());

        let results: Vec<Result<Option<FileReport>>> =
            files.par_iter().map(|path| self.check_file(path)).collect();

        let mut report = ScanReport::default();
        for (path, result) in files.iter().zip(results) {
            match result? {
                Some(file_report) => report.files.push(file_report),
                None => report.skipped.push(path.clone()),
            }
        }

        info!(
            "Scanned {} file(s): {} expansion(s), {} error(s), {} warning(s)",
            report.files_scanned(),
            report.expanded(),
            report.errors(),
            report.warnings()
        );
        Ok(report)
    }

    /// Checks one file. Returns `Ok(None)` when the file is not UTF-8 or not
    /// valid Rust.
    pub fn check_file(&self, path: &Path) -> Result<Option<FileReport>> {
        let bytes = fs::read(path)?;
        let Ok(source) = String::from_utf8(bytes) else {
            warn!("Skipping {}: not valid UTF-8", path.display());
            return Ok(None);
        };
        match self.expander.expand_source(&source) {
            Ok(expansion) => Ok(Some(FileReport {
                path: path.to_path_buf(),
                diagnostics: expansion.diagnostics,
                expanded: expansion.expanded,
            })),
            Err(e) => {
                warn!("Skipping {}: {}", path.display(), e);
                Ok(None)
            }
        }
    }
}
