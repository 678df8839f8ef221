//! Roster sections.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The roster section a unit was printed under.
///
/// Exports group units under one of four fixed keyword headers. Units that
/// appear before any header carry the `Unknown` sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "CHARACTERS")]
    Characters,
    #[serde(rename = "BATTLELINE")]
    Battleline,
    #[serde(rename = "DEDICATED TRANSPORTS")]
    DedicatedTransports,
    #[serde(rename = "OTHER DATASHEETS")]
    OtherDatasheets,
    #[default]
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl Category {
    /// The four real sections, in the order exports print them.
    pub const ALL: [Category; 4] = [
        Category::Characters,
        Category::Battleline,
        Category::DedicatedTransports,
        Category::OtherDatasheets,
    ];

    /// Match a header line against the category keywords.
    ///
    /// The comparison is case-insensitive but otherwise exact: surrounding
    /// whitespace is the caller's job and substrings never match. Never
    /// returns `Unknown`.
    pub fn from_keyword(line: &str) -> Option<Category> {
        let upper = line.to_uppercase();
        Self::ALL.into_iter().find(|c| c.keyword() == upper)
    }

    /// Canonical header text.
    pub fn keyword(self) -> &'static str {
        match self {
            Category::Characters => "CHARACTERS",
            Category::Battleline => "BATTLELINE",
            Category::DedicatedTransports => "DEDICATED TRANSPORTS",
            Category::OtherDatasheets => "OTHER DATASHEETS",
            Category::Unknown => "UNKNOWN",
        }
    }

    pub fn is_known(self) -> bool {
        self != Category::Unknown
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
