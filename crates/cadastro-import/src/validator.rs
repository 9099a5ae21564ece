//! Row classification: a tokenized row is either a valid client or a set
//! of field errors, never both.

use cadastro_ingest::RawRow;
use cadastro_model::{ClientField, FieldError};

use crate::rules::{validate_cpf, validate_email, validate_phone};

/// Outcome of validating one raw row.
#[derive(Debug, Clone, Default)]
pub struct RowValidation {
    pub is_valid: bool,
    pub errors: Vec<FieldError>,
}

/// Runs every applicable field check on one row.
///
/// Checks do not short-circuit: a row with an empty name and a bad CPF
/// yields two errors. Email is only checked when a value is present.
pub fn validate_row(row: &RawRow) -> RowValidation {
    let mut errors = Vec::new();
    let mut push = |field: ClientField, message: &str, value: &str| {
        errors.push(FieldError {
            row: row.row,
            field,
            message: message.to_string(),
            value: value.to_string(),
        });
    };

    if row.nome.trim().is_empty() {
        push(ClientField::Nome, "Nome é obrigatório", &row.nome);
    }
    if !validate_cpf(&row.cpf) {
        push(ClientField::Cpf, "CPF inválido", &row.cpf);
    }
    if !validate_phone(&row.telefone) {
        push(ClientField::Telefone, "Telefone inválido", &row.telefone);
    }
    if !row.email.trim().is_empty() && !validate_email(&row.email) {
        push(ClientField::Email, "Email inválido", &row.email);
    }

    RowValidation {
        is_valid: errors.is_empty(),
        errors,
    }
}
