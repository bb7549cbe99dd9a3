//! # hacfg-parser
//!
//! Primitive section parser for rendered HAProxy configs.
//!
//! It detects the four top-level sections (`global`, `defaults`, named
//! `frontend`s and named `backend`s) so that tooling can inspect one block
//! without re-reading the whole file. It does *not* validate syntax or
//! understand rule semantics: classification is best-effort, one forward
//! pass, line by line.
//!
//! ```text
//! raw lines ──> section classifier ──> ConfigDocument ──> name queries
//!                 (one pass)            (immutable)        (exact / substring)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use hacfg_parser::parse_str;
//!
//! let doc = parse_str("global\n  maxconn 256\nfrontend public\n  bind :80\n");
//! assert_eq!(doc.global, ["maxconn 256"]);
//! assert_eq!(doc.frontend("public"), Some(&["bind :80".to_string()][..]));
//! assert!(doc.frontends_matching("pub").contains_key("public"));
//! ```

mod document;
mod error;
mod parser;
mod section;

pub use document::ConfigDocument;
pub use error::{ParseError, Result};
pub use parser::{parse_file, parse_reader, parse_str};
