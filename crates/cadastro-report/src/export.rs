//! Error CSV export for fix-and-reupload round trips.

use std::fmt::Write;

use cadastro_model::FieldError;

/// Renders the error list as a downloadable CSV with header
/// `Linha,Campo,Mensagem,Valor` and every data field quoted.
///
/// Returns an empty string when there are no errors; callers must treat
/// that as "nothing to export" rather than a malformed file.
pub fn export_errors_to_csv(errors: &[FieldError]) -> String {
    if errors.is_empty() {
        return String::new();
    }
    let mut out = String::from("Linha,Campo,Mensagem,Valor\n");
    for error in errors {
        let _ = writeln!(
            out,
            "\"{}\",\"{}\",\"{}\",\"{}\"",
            error.row,
            quote(error.field.as_str()),
            quote(&error.message),
            quote(&error.value)
        );
    }
    out
}

/// Doubles embedded quotes so the exported file stays parseable.
fn quote(value: &str) -> String {
    value.replace('"', "\"\"")
}
