use glob_match::glob_match;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Find every file under `root` whose file name matches one of `patterns`.
///
/// Recursive, read-only. Unreadable directories are skipped and symlinked
/// directories are not followed. A path matching several patterns is
/// returned once; the result is sorted.
pub fn discover_files(root: &Path, patterns: &[String]) -> Vec<PathBuf> {
    let mut files = BTreeSet::new();
    walk_recursive(root, patterns, &mut files);
    files.into_iter().collect()
}

fn walk_recursive(dir: &Path, patterns: &[String], files: &mut BTreeSet<PathBuf>) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        let path = entry.path();

        if file_type.is_dir() {
            walk_recursive(&path, patterns, files);
            continue;
        }

        let name = entry.file_name().to_string_lossy().to_string();
        if patterns.iter().any(|pattern| glob_match(pattern, &name)) {
            files.insert(path);
        }
    }
}
