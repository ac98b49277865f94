//! Text substitution rules for module paths.
//!
//! Pattern-match-and-replace over the raw text. No parsing: only the two
//! import shapes below are recognised.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Capture group that marks a match as belonging to a later rule.
const DEFER_GROUP: &str = "defer";

// `from '<path>.js'` with either quote. A preceding `import <clause> ` is
// captured as `defer` so the named-import rule owns those statements.
static FROM_CLAUSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?P<defer>\bimport\b\s*[^'"]+?\s+)?\bfrom\s+(?P<quote>['"])(?P<path>[^'"]*?)\.js['"]"#,
    )
    .unwrap()
});

// `import <clause> from '<path>.js'`. The clause is any run of non-quote
// characters, so default, named, namespace and `type` imports all match,
// including clauses split over several lines or glued to the keyword
// (`import{A}`).
static IMPORT_STATEMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\bimport\b\s*(?P<clause>[^'"]+?)\s+from\s+['"](?P<path>[^'"]*?)\.js['"]"#)
        .unwrap()
});

/// One pattern and the template its matches are replaced with.
///
/// The template uses `regex` expansion syntax (`${name}`). A match in which
/// the `defer` group participated is left untouched.
#[derive(Debug, Clone)]
pub struct SubstitutionRule {
    pub label: String,
    pattern: Regex,
    template: String,
}

impl SubstitutionRule {
    pub fn new(label: impl Into<String>, pattern: Regex, template: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            pattern,
            template: template.into(),
        }
    }

    /// Replace every non-overlapping match in `content`.
    pub fn apply(&self, content: &str) -> String {
        self.pattern
            .replace_all(content, |caps: &Captures| {
                if caps.name(DEFER_GROUP).is_some() {
                    return caps[0].to_string();
                }
                let mut out = String::new();
                caps.expand(&self.template, &mut out);
                out
            })
            .into_owned()
    }
}

/// Ordered rules; each one re-scans the full output of the previous one.
pub type RuleSet = Vec<SubstitutionRule>;

/// The `.js` suffix-stripping rules, in application order.
pub fn default_rules() -> RuleSet {
    vec![
        SubstitutionRule::new("from clause", FROM_CLAUSE.clone(), "from ${quote}${path}${quote}"),
        SubstitutionRule::new(
            "import statement",
            IMPORT_STATEMENT.clone(),
            "import ${clause} from '${path}'",
        ),
    ]
}

/// Apply `rules` in order and return the resulting text.
pub fn rewrite_content(content: &str, rules: &[SubstitutionRule]) -> String {
    rules
        .iter()
        .fold(content.to_string(), |current, rule| rule.apply(&current))
}
