use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Parsed sections of an HAProxy config; immutable once built.
///
/// The parser fills this in a single pass and hands it out by value; every
/// query below is a pure read, so a shared reference can serve any number of
/// concurrent readers.
///
/// Header lines are never stored. Blank lines and `#` comments are dropped
/// during the parse. Content lines keep their file order and internal
/// whitespace, trimmed only at the ends.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigDocument {
    /// Content lines of the `global` section
    pub global: Vec<String>,

    /// Content lines of the `defaults` section
    pub defaults: Vec<String>,

    /// Named `frontend` blocks: section name to content lines
    pub frontends: BTreeMap<String, Vec<String>>,

    /// Named `backend` blocks: section name to content lines
    pub backends: BTreeMap<String, Vec<String>>,
}

impl ConfigDocument {
    /// Look up a frontend by exact name.
    ///
    /// `Some(&[])` means the header was seen but the block has no content
    /// lines; `None` means no such frontend exists.
    #[must_use]
    pub fn frontend(&self, name: &str) -> Option<&[String]> {
        self.frontends.get(name).map(Vec::as_slice)
    }

    /// Look up a backend by exact name.
    #[must_use]
    pub fn backend(&self, name: &str) -> Option<&[String]> {
        self.backends.get(name).map(Vec::as_slice)
    }

    /// All frontends whose name contains `name_substr`.
    ///
    /// Plain case-sensitive containment, no pattern language. The empty
    /// substring matches every entry. Returns an empty map, never an error,
    /// when nothing matches.
    #[must_use]
    pub fn frontends_matching(&self, name_substr: &str) -> BTreeMap<&str, &[String]> {
        find_blocks(&self.frontends, name_substr)
    }

    /// All backends whose name contains `name_substr`.
    #[must_use]
    pub fn backends_matching(&self, name_substr: &str) -> BTreeMap<&str, &[String]> {
        find_blocks(&self.backends, name_substr)
    }

    /// True when no section header or content line was recognized
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.global.is_empty()
            && self.defaults.is_empty()
            && self.frontends.is_empty()
            && self.backends.is_empty()
    }
}

/// Substring scan over one block map. Borrows names and lines from the
/// document; keys are unique, so there is nothing to merge.
fn find_blocks<'a>(
    blocks: &'a BTreeMap<String, Vec<String>>,
    name_substr: &str,
) -> BTreeMap<&'a str, &'a [String]> {
    blocks
        .iter()
        .filter(|(name, _)| name.contains(name_substr))
        .map(|(name, lines)| (name.as_str(), lines.as_slice()))
        .collect()
}
