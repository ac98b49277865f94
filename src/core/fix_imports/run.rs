use serde::Serialize;
use std::path::Path;

use super::discover::discover_files;
use super::rewrite::{rewrite_content, SubstitutionRule};
use crate::defaults::FixConfig;
use crate::error::{Error, Result};
use crate::utils::io;

/// What happened to a single discovered file.
#[derive(Debug)]
pub enum FileOutcome {
    Unchanged,
    Fixed,
    Failed(Error),
}

/// A per-file failure, as reported.
#[derive(Debug, Clone, Serialize)]
pub struct FileError {
    pub file: String,
    pub code: String,
    pub message: String,
}

/// Totals and details for one run.
#[derive(Debug, Clone, Serialize)]
pub struct FixReport {
    pub root: String,
    pub root_found: bool,
    /// Human-readable summary; also the only text a non-terminal run gets.
    pub message: String,
    pub files_found: usize,
    pub files_fixed: usize,
    pub fixed: Vec<String>,
    pub errors: Vec<FileError>,
}

impl FixReport {
    fn empty(root: &Path, root_found: bool) -> Self {
        Self {
            root: root.display().to_string(),
            root_found,
            message: String::new(),
            files_found: 0,
            files_fixed: 0,
            fixed: Vec::new(),
            errors: Vec::new(),
        }
    }
}

/// Read, rewrite and (only if changed) write back one file.
///
/// Returns `Ok(true)` when the file was rewritten.
pub fn fix_file(path: &Path, rules: &[SubstitutionRule]) -> Result<bool> {
    let original = io::read_text(path, &format!("read {}", path.display()))?;
    let updated = rewrite_content(&original, rules);

    if updated == original {
        return Ok(false);
    }

    io::write_text(path, &updated, &format!("write {}", path.display()))?;
    Ok(true)
}

fn process_file(path: &Path, rules: &[SubstitutionRule]) -> FileOutcome {
    match fix_file(path, rules) {
        Ok(true) => FileOutcome::Fixed,
        Ok(false) => FileOutcome::Unchanged,
        Err(err) => FileOutcome::Failed(err),
    }
}

/// Fix every matching file under `config.root`.
///
/// A missing root is reported, not raised. Per-file failures are logged and
/// recorded in the report; they never stop the run.
pub fn run(config: &FixConfig, rules: &[SubstitutionRule]) -> FixReport {
    let root = config.root.as_path();

    if !root.exists() {
        let mut report = FixReport::empty(root, false);
        report.message = format!("Project root not found: {}", root.display());
        log_status!("fix", "{}", report.message);
        return report;
    }

    let files = discover_files(root, &config.patterns);
    log_status!(
        "fix",
        "Found {} files matching {}",
        files.len(),
        config.patterns.join(", ")
    );

    let mut report = FixReport::empty(root, true);
    report.files_found = files.len();

    for path in &files {
        match process_file(path, rules) {
            FileOutcome::Fixed => {
                log_status!("fix", "Fixed imports in: {}", path.display());
                report.fixed.push(path.display().to_string());
            }
            FileOutcome::Unchanged => {}
            FileOutcome::Failed(err) => {
                log_status!("fix", "Error processing {}: {}", path.display(), err);
                report.errors.push(FileError {
                    file: path.display().to_string(),
                    code: err.code.as_str().to_string(),
                    message: err.to_string(),
                });
            }
        }
    }

    report.files_fixed = report.fixed.len();
    report.message = format!(
        "Found {} files, fixed imports in {} files",
        report.files_found, report.files_fixed
    );
    log_status!("fix", "{}", report.message);

    report
}
