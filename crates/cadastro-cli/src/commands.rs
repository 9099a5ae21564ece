use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use cadastro_import::import_clients;
use cadastro_report::{export_errors_to_csv, generate_import_report, write_import_report_json};

use crate::cli::ImportArgs;
use crate::logging::redact_value;
use crate::types::{ImportOutcome, WrittenFiles};

/// Suggested input header for client CSV files.
pub const TEMPLATE_HEADER: &str = "Nome,CPF,Telefone,Email,Grupo,Observacoes";

pub fn run_import(args: &ImportArgs) -> Result<ImportOutcome> {
    let span = info_span!(
        "import_file",
        file = %args.file.display(),
        company_id = %args.company_id
    );
    let _guard = span.enter();

    let start = Instant::now();
    let content = fs::read_to_string(&args.file)
        .with_context(|| format!("read import file: {}", args.file.display()))?;
    let result = import_clients(&content, &args.company_id)
        .with_context(|| format!("import {}", args.file.display()))?;
    info!(
        total_rows = result.total_rows,
        success_rows = result.success_rows,
        error_rows = result.error_rows,
        duration_ms = start.elapsed().as_millis(),
        "validation complete"
    );
    for error in &result.errors {
        debug!(
            row = error.row,
            field = %error.field,
            message = %error.message,
            value = redact_value(&error.value),
            "field error"
        );
    }

    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| default_output_dir(&args.file));

    let mut written = WrittenFiles::default();
    if !args.dry_run {
        fs::create_dir_all(&output_dir)
            .with_context(|| format!("create output dir: {}", output_dir.display()))?;
        if !args.no_report {
            let path = output_dir.join("relatorio_importacao.txt");
            fs::write(&path, generate_import_report(&result))
                .with_context(|| format!("write report: {}", path.display()))?;
            written.report = Some(path);
        }
        if !args.no_errors_csv && result.has_errors() {
            let path = output_dir.join("erros_importacao.csv");
            fs::write(&path, export_errors_to_csv(&result.errors))
                .with_context(|| format!("write error csv: {}", path.display()))?;
            written.errors_csv = Some(path);
        }
        if !args.no_json {
            let path = write_import_report_json(&output_dir, &args.company_id, &result)
                .context("write json report")?;
            written.json = Some(path);
        }
    }

    Ok(ImportOutcome {
        file: args.file.clone(),
        company_id: args.company_id.clone(),
        output_dir,
        dry_run: args.dry_run,
        result,
        written,
    })
}

pub fn run_template() {
    println!("{TEMPLATE_HEADER}");
    println!("João da Silva,111.444.777-35,(11) 99999-9999,joao@email.com,Grupo A,Cliente importante");
}

fn default_output_dir(file: &Path) -> PathBuf {
    match file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join("output"),
        _ => PathBuf::from("output"),
    }
}
