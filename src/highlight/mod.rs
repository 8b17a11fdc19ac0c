//! Code line highlighter
//!
//! Generators speak in *logical* lines: small per-algorithm numbers that do
//! not depend on any language. This module maps a logical line onto the
//! 1-based physical line of a concrete source listing by trying the regex
//! rules in [`rules::RULES`] against each trimmed line in order.
//!
//! Lookup is a pure function of its arguments. A miss is `None`, never an
//! error: the source pane simply shows nothing highlighted.

pub mod rules;

use crate::algorithms::errors::InputError;
use crate::algorithms::Problem;
use regex::Regex;
use rustc_hash::FxHashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Languages a sample listing can be shown in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Cpp,
    Java,
    Python,
    JavaScript,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::Cpp,
        Language::Java,
        Language::Python,
        Language::JavaScript,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Language::Cpp => "cpp",
            Language::Java => "java",
            Language::Python => "python",
            Language::JavaScript => "javascript",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Language::Cpp => "C++",
            Language::Java => "Java",
            Language::Python => "Python",
            Language::JavaScript => "JavaScript",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Language::Cpp => "cpp",
            Language::Java => "java",
            Language::Python => "py",
            Language::JavaScript => "js",
        }
    }

    /// Next language in [`Language::ALL`], wrapping around
    pub fn next(self) -> Language {
        let idx = Language::ALL.iter().position(|&l| l == self).unwrap_or(0);
        Language::ALL[(idx + 1) % Language::ALL.len()]
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Language {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cpp" | "c++" | "cxx" => Ok(Language::Cpp),
            "java" => Ok(Language::Java),
            "python" | "py" => Ok(Language::Python),
            "javascript" | "js" => Ok(Language::JavaScript),
            _ => Err(InputError::UnknownLanguage(s.to_string())),
        }
    }
}

/// Problems sharing one listing share one set of rules
pub fn family(problem: Problem) -> Problem {
    match problem {
        Problem::Union | Problem::Intersection => Problem::UnionIntersection,
        other => other,
    }
}

struct CompiledRule {
    languages: &'static [Language],
    anchor: Option<Regex>,
    pattern: Regex,
}

type RuleIndex = FxHashMap<(Problem, u32), Vec<CompiledRule>>;

static INDEX: LazyLock<RuleIndex> = LazyLock::new(compile_rules);

fn compile_rules() -> RuleIndex {
    let mut index = RuleIndex::default();
    for rule in rules::RULES {
        let pattern = match Regex::new(rule.pattern) {
            Ok(re) => re,
            Err(e) => {
                tracing::error!(problem = %rule.problem, line = rule.line, "bad pattern: {e}");
                continue;
            }
        };
        let anchor = match rule.anchor.map(Regex::new).transpose() {
            Ok(re) => re,
            Err(e) => {
                tracing::error!(problem = %rule.problem, line = rule.line, "bad anchor: {e}");
                continue;
            }
        };
        index
            .entry((rule.problem, rule.line))
            .or_default()
            .push(CompiledRule {
                languages: rule.languages,
                anchor,
                pattern,
            });
    }
    tracing::debug!(rules = rules::RULES.len(), keys = index.len(), "compiled highlight rules");
    index
}

/// Resolve `logical_line` of `problem` to a 1-based line of `source`.
///
/// Rules are tried in table order; the first rule with any matching line
/// wins. Returns `None` when no rule exists for the pair or nothing matches.
pub fn highlight(
    problem: Problem,
    logical_line: u32,
    language: Language,
    source: &str,
) -> Option<usize> {
    let candidates = INDEX.get(&(family(problem), logical_line))?;
    let lines: Vec<&str> = source.lines().map(str::trim).collect();

    candidates
        .iter()
        .filter(|rule| rule.languages.contains(&language))
        .find_map(|rule| {
            let start = match &rule.anchor {
                Some(anchor) => lines.iter().position(|l| anchor.is_match(l))? + 1,
                None => 0,
            };
            lines[start..]
                .iter()
                .position(|l| rule.pattern.is_match(l))
                .map(|offset| start + offset + 1)
        })
}
