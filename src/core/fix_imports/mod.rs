//! Import fixing: strip a trailing `.js` from module paths in TypeScript sources.
//!
//! Walks a root directory for files matching glob patterns, applies an ordered
//! rule set to each file's text, and writes back only the files that changed.

mod discover;
mod rewrite;
mod run;

pub use discover::discover_files;
pub use rewrite::{default_rules, rewrite_content, RuleSet, SubstitutionRule};
pub use run::{fix_file, run, FileError, FileOutcome, FixReport};
