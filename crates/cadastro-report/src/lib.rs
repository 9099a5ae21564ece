//! Import result rendering.
//!
//! This crate renders an [`cadastro_model::ImportResult`] in the formats
//! the upload flow hands back to users:
//!
//! - **Text report**: totals plus one entry per validation error
//! - **Error CSV**: `Linha,Campo,Mensagem,Valor` for fix-and-reupload
//! - **JSON payload**: versioned machine-readable report

mod export;
mod json;
mod text;

pub use export::export_errors_to_csv;
pub use json::{ImportReportPayload, write_import_report_json};
pub use text::generate_import_report;
