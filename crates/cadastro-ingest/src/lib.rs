//! CSV ingestion for client import files.
//!
//! This crate turns raw CSV text into positionally-aligned raw rows:
//!
//! - **Line tokenizing**: comma splitting with double-quoted fields
//! - **Header resolution**: locate the required and optional columns
//! - **Raw-row extraction**: map tokens to named fields by column index
//!
//! Validation of the extracted fields lives in `cadastro-import`.

mod header;
mod line;

pub use header::{HeaderLayout, OPTIONAL_HEADERS, RawRow, REQUIRED_HEADERS};
pub use line::parse_line;
