use clap::Args;
use serde::Serialize;

use importfix::fix_imports::{self, FixReport};
use importfix::{Error, FixConfig};

use super::CmdResult;

#[derive(Args)]
pub struct FixArgs {
    /// Directory to scan (defaults to the built-in project root)
    #[arg(long)]
    pub path: Option<String>,
}

#[derive(Serialize)]
pub struct FixOutput {
    pub command: &'static str,
    pub patterns: Vec<String>,
    #[serde(flatten)]
    pub report: FixReport,
}

pub fn run(args: FixArgs, _global: &crate::commands::GlobalArgs) -> CmdResult<FixOutput> {
    let config = resolve_config(args.path.as_deref())?;
    let report = fix_imports::run(&config, &fix_imports::default_rules());

    Ok((
        FixOutput {
            command: "fix",
            patterns: config.patterns,
            report,
        },
        0,
    ))
}

fn resolve_config(path: Option<&str>) -> importfix::Result<FixConfig> {
    match path {
        None => Ok(FixConfig::default()),
        Some(p) if p.trim().is_empty() => Err(Error::validation_invalid_argument(
            "path",
            "Path must not be empty",
        )
        .with_hint("Omit --path to use the default root")),
        Some(p) => Ok(FixConfig::with_root(p)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use importfix::defaults::DEFAULT_ROOT;
    use std::path::PathBuf;

    #[test]
    fn no_path_uses_default_root() {
        let config = resolve_config(None).unwrap();
        assert_eq!(config.root, PathBuf::from(DEFAULT_ROOT));
    }

    #[test]
    fn explicit_path_overrides_root() {
        let config = resolve_config(Some("/srv/web/src")).unwrap();
        assert_eq!(config.root, PathBuf::from("/srv/web/src"));
    }

    #[test]
    fn blank_path_is_rejected() {
        let err = resolve_config(Some("  ")).unwrap_err();
        assert_eq!(err.code.as_str(), "validation.invalid_argument");
        assert_eq!(err.hints.len(), 1);
    }
}
