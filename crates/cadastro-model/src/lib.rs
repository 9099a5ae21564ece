//! Data model for the client CSV import pipeline.

pub mod client;
pub mod error;
pub mod result;

pub use client::ClientRecord;
pub use error::{ImportError, Result};
pub use result::{ClientField, FieldError, ImportResult};
