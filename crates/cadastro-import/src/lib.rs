//! Client import pipeline.
//!
//! Turns raw CSV text into validated [`cadastro_model::ClientRecord`]s and
//! per-row [`cadastro_model::FieldError`] diagnostics:
//!
//! - **Field rules**: CPF check digits, phone length, email shape
//! - **Row validation**: classify each row as a client or a set of errors
//! - **Aggregation**: drive the whole file and compute summary counts
//!
//! ```
//! use cadastro_import::import_clients;
//!
//! let content = "Nome,CPF,Telefone\nAna,111.444.777-35,11999999999";
//! let result = import_clients(content, "tenant-1").expect("headers present");
//! assert_eq!(result.success_rows, 1);
//! ```

mod pipeline;
mod rules;
mod validator;

pub use pipeline::import_clients;
pub use rules::{strip_non_digits, validate_cpf, validate_email, validate_phone};
pub use validator::{RowValidation, validate_row};
