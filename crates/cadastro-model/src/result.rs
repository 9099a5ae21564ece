use std::fmt;

use serde::{Deserialize, Serialize};

use crate::client::ClientRecord;

/// Input field a validation error refers to. Display names match the CSV
/// header names users see in the template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClientField {
    Nome,
    #[serde(rename = "CPF")]
    Cpf,
    Telefone,
    Email,
}

impl ClientField {
    pub fn as_str(self) -> &'static str {
        match self {
            ClientField::Nome => "Nome",
            ClientField::Cpf => "CPF",
            ClientField::Telefone => "Telefone",
            ClientField::Email => "Email",
        }
    }
}

impl fmt::Display for ClientField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single validation failure, tagged with the 1-based data row it came
/// from (header excluded). A row contributes one entry per failing field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub row: usize,
    pub field: ClientField,
    pub message: String,
    /// The offending raw value, possibly empty.
    pub value: String,
}

/// Aggregate outcome of one import pass.
///
/// `total_rows` counts every line after the header, including blank lines
/// that the row loop skips, so `success_rows + error_rows` can fall short
/// of `total_rows` for files containing blank lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportResult {
    pub success: bool,
    pub total_rows: usize,
    pub success_rows: usize,
    pub error_rows: usize,
    pub errors: Vec<FieldError>,
    pub clients: Vec<ClientRecord>,
}

impl ImportResult {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Rows neither imported nor rejected, i.e. blank lines in the input.
    pub fn skipped_rows(&self) -> usize {
        self.total_rows
            .saturating_sub(self.success_rows + self.error_rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn error(row: usize, field: ClientField) -> FieldError {
        FieldError {
            row,
            field,
            message: "CPF inválido".to_string(),
            value: "123".to_string(),
        }
    }

    #[test]
    fn field_display_matches_header_names() {
        assert_eq!(ClientField::Nome.to_string(), "Nome");
        assert_eq!(ClientField::Cpf.to_string(), "CPF");
        assert_eq!(ClientField::Telefone.to_string(), "Telefone");
        assert_eq!(ClientField::Email.to_string(), "Email");
    }

    #[test]
    fn result_counts() {
        let result = ImportResult {
            success: false,
            total_rows: 4,
            success_rows: 2,
            error_rows: 1,
            errors: vec![error(3, ClientField::Cpf)],
            clients: Vec::new(),
        };
        assert!(result.has_errors());
        assert_eq!(result.error_count(), 1);
        assert_eq!(result.skipped_rows(), 1);
    }

    #[test]
    fn result_serializes() {
        let result = ImportResult {
            success: true,
            total_rows: 0,
            success_rows: 0,
            error_rows: 0,
            errors: Vec::new(),
            clients: Vec::new(),
        };
        let json = serde_json::to_string(&result).expect("serialize result");
        let round: ImportResult = serde_json::from_str(&json).expect("deserialize result");
        assert_eq!(round, result);
        assert!(json.contains("totalRows"));
    }

    #[test]
    fn field_error_serializes_cpf_upper() {
        let json = serde_json::to_value(error(1, ClientField::Cpf)).expect("serialize error");
        assert_eq!(json["field"], "CPF");
    }
}
