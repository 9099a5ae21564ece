//! Plain-text import report.

use std::fmt::Write;

use cadastro_model::ImportResult;

/// Renders the aggregate result as a human-readable report: a totals
/// block followed by one entry per error, in input order.
pub fn generate_import_report(result: &ImportResult) -> String {
    let mut out = String::new();
    out.push_str("Relatório de importação\n");
    out.push_str("=======================\n");
    let _ = writeln!(out, "Total de linhas: {}", result.total_rows);
    let _ = writeln!(out, "Importadas com sucesso: {}", result.success_rows);
    let _ = writeln!(out, "Linhas com erro: {}", result.error_rows);

    if result.errors.is_empty() {
        out.push_str("\nNenhum erro encontrado.\n");
        return out;
    }

    out.push_str("\nErros:\n");
    for error in &result.errors {
        let _ = writeln!(
            out,
            "Linha {}, Campo \"{}\": {}",
            error.row, error.field, error.message
        );
        if !error.value.is_empty() {
            let _ = writeln!(out, "  Valor: \"{}\"", error.value);
        }
    }
    out
}
