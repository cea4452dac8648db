//! Parser for INI-style country tables and translation catalogs.
//!
//! A file is a sequence of `[section]` headers, each followed by `key=value`
//! lines. Lines starting with `#` or `;` are comments. The parser produces an
//! AST that the catalog loaders interpret.

pub mod ast;
pub mod error;
mod file;

pub use ast::*;
pub use error::ParseError;
pub use file::parse_file;
