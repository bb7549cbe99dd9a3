/// Comment marker: a trimmed line starting with this character is dropped.
pub(crate) const COMMENT_MARKER: char = '#';

const GLOBAL_KEYWORD: &str = "global";
const DEFAULTS_KEYWORD: &str = "defaults";
const FRONTEND_KEYWORD: &str = "frontend";
const BACKEND_KEYWORD: &str = "backend";

/// The four section kinds a header line can open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SectionKind {
    Global,
    Defaults,
    Frontend,
    Backend,
}

impl SectionKind {
    /// Detect a section header in an already-trimmed, non-comment line.
    ///
    /// Headers are matched by prefix, not by first-token equality: the line
    /// only has to *start with* the keyword, so `frontend public`,
    /// `frontend` and even `frontendfoo` all open a frontend section. The
    /// keywords are case-sensitive.
    pub(crate) fn from_header(line: &str) -> Option<Self> {
        if line.starts_with(GLOBAL_KEYWORD) {
            Some(Self::Global)
        } else if line.starts_with(DEFAULTS_KEYWORD) {
            Some(Self::Defaults)
        } else if line.starts_with(FRONTEND_KEYWORD) {
            Some(Self::Frontend)
        } else if line.starts_with(BACKEND_KEYWORD) {
            Some(Self::Backend)
        } else {
            None
        }
    }

    /// Keyword as written in the config
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::Global => GLOBAL_KEYWORD,
            Self::Defaults => DEFAULTS_KEYWORD,
            Self::Frontend => FRONTEND_KEYWORD,
            Self::Backend => BACKEND_KEYWORD,
        }
    }
}
