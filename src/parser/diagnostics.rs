//! Record of input lines the parser could not place.
//!
//! None of these are errors. They exist so a malformed roster can be
//! debugged line by line.

use std::fmt;

use serde::Serialize;

/// Why a line did not end up in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkipReason {
    /// Bullet or sub-bullet without a `"<N>x <name>"` body.
    MalformedBullet,
    /// Model line with no unit open.
    OrphanModel,
    /// Weapon line with no model open.
    OrphanWeapon,
    /// Plain text after the faction and detachment were already found,
    /// or on the very first line.
    IgnoredText,
    /// Matched no rule at all.
    Unclassified,
}

impl SkipReason {
    /// Machine-readable code (e.g. "roster::orphan-weapon").
    pub fn code(self) -> &'static str {
        match self {
            SkipReason::MalformedBullet => "roster::malformed-bullet",
            SkipReason::OrphanModel => "roster::orphan-model",
            SkipReason::OrphanWeapon => "roster::orphan-weapon",
            SkipReason::IgnoredText => "roster::ignored-text",
            SkipReason::Unclassified => "roster::unclassified",
        }
    }

    pub fn help(self) -> &'static str {
        match self {
            SkipReason::MalformedBullet => "model and weapon bullets look like `• 2x Name`",
            SkipReason::OrphanModel => "model lines belong under a `Name (N Points)` unit header",
            SkipReason::OrphanWeapon => "weapon lines belong under a `• Nx Model` line",
            SkipReason::IgnoredText => "only the first two text lines become faction and detachment",
            SkipReason::Unclassified => "line matched no known roster shape",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SkipReason::MalformedBullet => "malformed bullet",
            SkipReason::OrphanModel => "model outside a unit",
            SkipReason::OrphanWeapon => "weapon outside a model",
            SkipReason::IgnoredText => "ignored text",
            SkipReason::Unclassified => "unclassified line",
        };
        f.write_str(text)
    }
}

/// One dropped input line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedLine {
    /// 1-indexed line number in the raw input, blank lines included.
    pub line_number: usize,
    /// The trimmed line text.
    pub text: String,
    pub reason: SkipReason,
}

impl fmt::Display for SkippedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}: {:?}", self.line_number, self.reason, self.text)
    }
}

/// Ordered collection of skipped lines from one parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseDiagnostics {
    skipped: Vec<SkippedLine>,
}

impl ParseDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: SkippedLine) {
        self.skipped.push(line);
    }

    /// Record a skipped line.
    pub fn skip(&mut self, line_number: usize, text: &str, reason: SkipReason) {
        self.push(SkippedLine {
            line_number,
            text: text.to_string(),
            reason,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.skipped.is_empty()
    }

    pub fn len(&self) -> usize {
        self.skipped.len()
    }

    /// Count skipped lines with the given reason.
    pub fn count(&self, reason: SkipReason) -> usize {
        self.skipped.iter().filter(|s| s.reason == reason).count()
    }

    pub fn merge(&mut self, other: ParseDiagnostics) {
        self.skipped.extend(other.skipped);
    }

    pub fn iter(&self) -> impl Iterator<Item = &SkippedLine> {
        self.skipped.iter()
    }
}

impl<'a> IntoIterator for &'a ParseDiagnostics {
    type Item = &'a SkippedLine;
    type IntoIter = std::slice::Iter<'a, SkippedLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.skipped.iter()
    }
}
