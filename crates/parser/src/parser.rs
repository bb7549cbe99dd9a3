use crate::document::ConfigDocument;
use crate::error::{ParseError, Result};
use crate::section::{SectionKind, COMMENT_MARKER};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Parse a config file from disk.
///
/// Convenience wrapper around [`parse_reader`]; the file handle is released
/// on every return path.
pub fn parse_file(path: impl AsRef<Path>) -> Result<ConfigDocument> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ParseError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    parse_reader(BufReader::new(file))
}

/// Parse a config from any buffered line source.
///
/// One forward pass, line by line; the input is never buffered beyond line
/// granularity. A read failure aborts the pass and no partial document is
/// returned.
pub fn parse_reader(reader: impl BufRead) -> Result<ConfigDocument> {
    let mut classifier = Classifier::default();
    for line in reader.lines() {
        let line = line.map_err(|source| ParseError::Read {
            line: classifier.next_line_number(),
            source,
        })?;
        classifier.feed(&line);
    }
    Ok(classifier.finish())
}

/// Parse config text already held in memory. Cannot fail: malformed input
/// degrades to best-effort classification, never to an error.
#[must_use]
pub fn parse_str(content: &str) -> ConfigDocument {
    let mut classifier = Classifier::default();
    for line in content.lines() {
        classifier.feed(line);
    }
    classifier.finish()
}

/// Single forward pass over the line sequence.
///
/// All classification state lives here: the kind of the section currently
/// open and the name of the active frontend/backend block. Each fed line
/// either switches that state, appends to the open collection, or is
/// dropped.
#[derive(Default)]
struct Classifier {
    doc: ConfigDocument,
    section: Option<SectionKind>,
    /// Active named block. Shared by the frontend and backend kinds: a
    /// nameless header keeps whatever name was last set.
    subsection: String,
    line_no: usize,
}

impl Classifier {
    /// Classify one raw line.
    fn feed(&mut self, raw: &str) {
        self.line_no += 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with(COMMENT_MARKER) {
            return;
        }
        match SectionKind::from_header(line) {
            Some(kind) => self.enter_section(kind, line),
            None => self.append_content(line),
        }
    }

    /// Header line: switch the open section. Named kinds take the second
    /// whitespace-separated token as the block name and pre-create its
    /// entry, so a header with no content lines still registers the block.
    fn enter_section(&mut self, kind: SectionKind, line: &str) {
        self.section = Some(kind);
        let blocks = match kind {
            SectionKind::Frontend => &mut self.doc.frontends,
            SectionKind::Backend => &mut self.doc.backends,
            SectionKind::Global | SectionKind::Defaults => return,
        };
        match line.split_whitespace().nth(1) {
            Some(name) => {
                self.subsection = name.to_string();
                blocks.entry(name.to_string()).or_default();
            }
            None => log::warn!(
                "line {}: {} header has no name, content will accumulate under {:?}",
                self.line_no,
                kind.as_str(),
                self.subsection
            ),
        }
    }

    /// Content line: append to the open section. Content seen before any
    /// section header is dropped.
    fn append_content(&mut self, line: &str) {
        match self.section {
            Some(SectionKind::Global) => self.doc.global.push(line.to_string()),
            Some(SectionKind::Defaults) => self.doc.defaults.push(line.to_string()),
            Some(SectionKind::Frontend) => self
                .doc
                .frontends
                .entry(self.subsection.clone())
                .or_default()
                .push(line.to_string()),
            Some(SectionKind::Backend) => self
                .doc
                .backends
                .entry(self.subsection.clone())
                .or_default()
                .push(line.to_string()),
            None => {}
        }
    }

    fn finish(self) -> ConfigDocument {
        log::debug!(
            "classified {} lines: {} global, {} defaults, {} frontends, {} backends",
            self.line_no,
            self.doc.global.len(),
            self.doc.defaults.len(),
            self.doc.frontends.len(),
            self.doc.backends.len()
        );
        self.doc
    }

    const fn next_line_number(&self) -> usize {
        self.line_no + 1
    }
}
