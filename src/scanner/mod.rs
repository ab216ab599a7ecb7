use crate::catalog::RiskCatalog;
use crate::error::AiActError;
use crate::models::ScanResult;
use crate::parser::ImportExtractor;
use log::{info, warn};
use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Files beyond this ceiling are treated as generated/vendored noise and
/// skipped outright.
pub const MAX_SOURCE_FILE_BYTES: u64 = 5_000_000;

/// Why a candidate file contributed nothing to the scan.
#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    TooLarge(u64),
    ParseFailed(String),
    Unreadable(String),
}

/// Per-file outcome. Skips are inspectable instead of silently swallowed;
/// none of them ever aborts the walk.
#[derive(Debug, Clone, PartialEq)]
pub enum FileOutcome {
    Parsed(BTreeSet<String>),
    Skipped(SkipReason),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::TooLarge(bytes) => {
                write!(f, "file exceeds size ceiling ({} bytes)", bytes)
            }
            SkipReason::ParseFailed(msg) => write!(f, "could not parse: {}", msg),
            SkipReason::Unreadable(msg) => write!(f, "could not read: {}", msg),
        }
    }
}

/// Walks a repository (or a manually supplied name list), extracts imported
/// module names, and matches them against the risk catalog. The catalog is
/// supplied at construction and lives for one scan invocation.
pub struct ComplianceScanner {
    catalog: RiskCatalog,
}

impl ComplianceScanner {
    pub fn new(catalog: RiskCatalog) -> Self {
        Self { catalog }
    }

    /// Recursively scan every `.py` file under `root`. Per-file failures are
    /// logged and skipped; only a missing root is fatal.
    pub fn scan_tree(&self, root: &Path) -> Result<ScanResult, AiActError> {
        if !root.exists() {
            return Err(AiActError::RootNotFound(root.to_path_buf()));
        }

        info!("scanning repository: {}", root.display());

        let mut extractor = ImportExtractor::new()?;
        let mut module_names: BTreeSet<String> = BTreeSet::new();

        for entry in WalkDir::new(root) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("skipping unreadable directory entry: {}", e);
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }
            if entry.path().extension().and_then(|ext| ext.to_str()) != Some("py") {
                continue;
            }

            match scan_file(&mut extractor, entry.path()) {
                FileOutcome::Parsed(imports) => module_names.extend(imports),
                FileOutcome::Skipped(reason) => {
                    warn!("{}: {}", entry.path().display(), reason);
                }
            }
        }

        Ok(self.match_modules(module_names.iter().map(String::as_str)))
    }

    /// Manual entry: each supplied name is treated as one extracted module
    /// name and run through the same matcher. Whitespace-only input yields
    /// an empty result, never an error.
    pub fn scan_names<S: AsRef<str>>(&self, names: &[S]) -> ScanResult {
        self.match_modules(
            names
                .iter()
                .map(|name| name.as_ref().trim())
                .filter(|name| !name.is_empty()),
        )
    }

    fn match_modules<'a>(&self, module_names: impl Iterator<Item = &'a str>) -> ScanResult {
        let mut result = ScanResult::new();
        for name in module_names {
            let classifications = self.catalog.classify(name);
            result.record(name, &classifications);
        }
        result
    }
}

fn scan_file(extractor: &mut ImportExtractor, path: &Path) -> FileOutcome {
    match fs::metadata(path) {
        Ok(metadata) if metadata.len() > MAX_SOURCE_FILE_BYTES => {
            return FileOutcome::Skipped(SkipReason::TooLarge(metadata.len()));
        }
        Ok(_) => {}
        Err(e) => return FileOutcome::Skipped(SkipReason::Unreadable(e.to_string())),
    }

    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => return FileOutcome::Skipped(SkipReason::Unreadable(e.to_string())),
    };

    match extractor.extract_imports(&source) {
        Ok(imports) => FileOutcome::Parsed(imports),
        Err(e) => FileOutcome::Skipped(SkipReason::ParseFailed(e.to_string())),
    }
}
