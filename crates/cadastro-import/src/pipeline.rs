//! The import pipeline: drives the tokenizer and the row validator over a
//! whole file and assembles the aggregate result.

use chrono::Utc;
use tracing::{debug, info, info_span};

use cadastro_ingest::{HeaderLayout, RawRow, parse_line};
use cadastro_model::{ClientRecord, ImportError, ImportResult};

use crate::rules::strip_non_digits;
use crate::validator::validate_row;

/// Parses and validates raw CSV content into an [`ImportResult`].
///
/// The first line must carry the required headers (`Nome`, `CPF`,
/// `Telefone`); otherwise the whole import fails with
/// [`ImportError::MissingHeaders`] before any row is processed. Invalid
/// data rows never abort the pass: each one contributes its field errors
/// and processing continues to the end of input.
///
/// `total_rows` is the line count minus the header. Lines that are blank
/// after trimming are skipped without producing a success or an error, so
/// they widen the gap between `total_rows` and `success_rows +
/// error_rows`. Callers that need strict accounting can read
/// [`ImportResult::skipped_rows`].
pub fn import_clients(content: &str, company_id: &str) -> Result<ImportResult, ImportError> {
    let span = info_span!("import", company_id = %company_id);
    let _guard = span.enter();

    let lines: Vec<&str> = content.split('\n').collect();
    let header_cells = parse_line(lines.first().copied().unwrap_or_default());
    let layout = HeaderLayout::resolve(&header_cells)?;

    let total_rows = lines.len().saturating_sub(1);
    let batch_millis = Utc::now().timestamp_millis();
    let mut clients = Vec::new();
    let mut errors = Vec::new();
    let mut success_rows = 0usize;
    let mut error_rows = 0usize;

    for (row, line) in lines.iter().enumerate().skip(1) {
        if line.trim().is_empty() {
            debug!(row, "blank line skipped");
            continue;
        }
        let tokens = parse_line(line);
        let raw = layout.extract(&tokens, row);
        let outcome = validate_row(&raw);
        if outcome.is_valid {
            clients.push(build_client(&raw, company_id, batch_millis));
            success_rows += 1;
        } else {
            debug!(row, error_count = outcome.errors.len(), "row rejected");
            errors.extend(outcome.errors);
            error_rows += 1;
        }
    }

    info!(total_rows, success_rows, error_rows, "import finished");
    Ok(ImportResult {
        success: errors.is_empty(),
        total_rows,
        success_rows,
        error_rows,
        errors,
        clients,
    })
}

/// Builds the persisted shape of a validated row: digit-only CPF and
/// phone, trimmed name, empty optionals collapsed to `None`.
fn build_client(raw: &RawRow, company_id: &str, batch_millis: i64) -> ClientRecord {
    let now = Utc::now();
    ClientRecord {
        id: temp_id(batch_millis, raw.row),
        name: raw.nome.trim().to_string(),
        cpf: strip_non_digits(&raw.cpf),
        phone: strip_non_digits(&raw.telefone),
        email: optional(&raw.email),
        group: optional(&raw.grupo),
        observations: optional(&raw.observacoes),
        company_id: company_id.to_string(),
        created_at: now,
        updated_at: now,
    }
}

/// Batch-unique placeholder id; the row number keeps it unique within one
/// pass, the timestamp keeps parallel batches apart.
fn temp_id(batch_millis: i64, row: usize) -> String {
    format!("temp_{batch_millis}_{row}")
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Nome,CPF,Telefone,Email,Grupo,Observacoes";

    #[test]
    fn counts_match_for_clean_input() {
        let content = format!(
            "{HEADER}\n\
             João da Silva,111.444.777-35,11999999999,joao@email.com,Grupo A,Cliente importante\n\
             Maria Lima,529.982.247-25,1198888888,,,"
        );
        let result = import_clients(&content, "acme").expect("import");
        assert!(result.success);
        assert_eq!(result.total_rows, 2);
        assert_eq!(result.success_rows, 2);
        assert_eq!(result.error_rows, 0);
        assert_eq!(result.clients.len(), 2);
    }

    #[test]
    fn client_fields_are_normalized() {
        let content = format!(
            "{HEADER}\nJoão da Silva,111.444.777-35,(11) 99999-9999,joao@email.com,Grupo A,"
        );
        let result = import_clients(&content, "acme").expect("import");
        let client = &result.clients[0];
        assert_eq!(client.cpf, "11144477735");
        assert_eq!(client.phone, "11999999999");
        assert_eq!(client.email.as_deref(), Some("joao@email.com"));
        assert_eq!(client.group.as_deref(), Some("Grupo A"));
        assert_eq!(client.observations, None);
        assert_eq!(client.company_id, "acme");
        assert!(client.id.starts_with("temp_"));
    }

    #[test]
    fn temp_ids_are_unique_within_a_batch() {
        let content = format!(
            "{HEADER}\n\
             Ana,11144477735,1199999999,,,\n\
             Bia,52998224725,1199999998,,,"
        );
        let result = import_clients(&content, "acme").expect("import");
        assert_ne!(result.clients[0].id, result.clients[1].id);
    }

    #[test]
    fn blank_lines_are_skipped_but_counted_in_total() {
        let content = format!(
            "{HEADER}\n\
             Ana,11144477735,1199999999,,,\n\
             \n\
             Bia,52998224725,1199999998,,,"
        );
        let result = import_clients(&content, "acme").expect("import");
        assert_eq!(result.total_rows, 3);
        assert_eq!(result.success_rows, 2);
        assert_eq!(result.error_rows, 0);
        assert_eq!(result.skipped_rows(), 1);
    }

    #[test]
    fn missing_header_fails_before_any_row() {
        let err = import_clients("Nome,Telefone\nAna,11999999999", "acme").unwrap_err();
        assert_eq!(
            err,
            ImportError::MissingHeaders {
                missing: vec!["CPF".to_string()],
            }
        );
    }

    #[test]
    fn error_rows_keep_input_order() {
        let content = format!(
            "{HEADER}\n\
             ,123,1,,,\n\
             Ana,11144477735,1199999999,,,\n\
             Bia,000,2,,,"
        );
        let result = import_clients(&content, "acme").expect("import");
        assert_eq!(result.success_rows, 1);
        assert_eq!(result.error_rows, 2);
        let rows: Vec<usize> = result.errors.iter().map(|error| error.row).collect();
        assert!(rows.windows(2).all(|pair| pair[0] <= pair[1]));
        assert_eq!(result.errors.first().map(|error| error.row), Some(1));
        assert_eq!(result.errors.last().map(|error| error.row), Some(3));
    }
}
