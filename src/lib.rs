//! # jsonfmt
//!
//! A `gofmt`-style JSON formatter. It parses JSON into a generic value and
//! re-serializes it in one canonical shape:
//!
//! - one tab character per nesting level
//! - a space after each object colon
//! - object keys in the serializer's default (sorted) order
//! - no trailing newline
//!
//! Because the output is a deterministic function of the parsed value, running
//! the formatter over already-canonical text is a byte-level no-op, and the
//! formatted output always parses back to a value deep-equal to the input.
//!
//! ## Command-Line Tool
//!
//! The crate ships the `jsonfmt` binary:
//!
//! ```sh
//! # Format JSON from stdin to stdout
//! echo '{"a":1,"b":[2,3]}' | jsonfmt
//!
//! # Format a file to stdout
//! jsonfmt config.json
//!
//! # Rewrite every .json file under a directory tree in place
//! jsonfmt -w .
//! ```
//!
//! With `-w`, files whose formatting already matches are left untouched;
//! files that differ are overwritten with the canonical form. Directory
//! arguments are walked recursively, visiting only `.json` files whose names
//! do not start with a period. The process exits with status 2 if any input
//! failed.
//!
//! ## Quick Start
//!
//! ```rust
//! use jsonfmt::Formatter;
//!
//! let formatter = Formatter::new();
//! let output = formatter.reformat(r#"{"name":"Alice","scores":[95,87]}"#).unwrap();
//!
//! assert_eq!(
//!     output,
//!     "{\n\t\"name\": \"Alice\",\n\t\"scores\": [\n\t\t95,\n\t\t87\n\t]\n}"
//! );
//! ```
//!
//! ## Serializing Rust Types
//!
//! Any type implementing [`serde::Serialize`] can be rendered in the same
//! canonical form:
//!
//! ```rust
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Player {
//!     name: String,
//!     score: i32,
//! }
//!
//! let player = Player { name: "Alice".into(), score: 95 };
//! let bytes = jsonfmt::canonical_bytes(&player).unwrap();
//! assert_eq!(bytes, b"{\n\t\"name\": \"Alice\",\n\t\"score\": 95\n}");
//! ```
//!
//! ## Error Reporting
//!
//! Malformed input produces a [`FormatError::Syntax`] whose location is
//! resolved to a 1-based line and a within-line character count:
//!
//! ```rust
//! use jsonfmt::{FormatError, Formatter};
//!
//! let err = Formatter::new().reformat("{\"a\": tru}").unwrap_err();
//! assert!(matches!(err, FormatError::Syntax { line: 1, .. }));
//! ```

mod error;
mod format;
mod locate;
mod options;
mod walk;

pub use crate::error::FormatError;
pub use crate::format::{canonical_bytes, Formatter};
pub use crate::locate::line_and_character;
pub use crate::options::FormatOptions;
pub use crate::walk::format_tree;
