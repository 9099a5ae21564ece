//! Versioned JSON report written next to the other import artifacts.

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Utc;
use serde::Serialize;

use cadastro_model::ImportResult;

const REPORT_SCHEMA: &str = "cadastro.import-report";
const REPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportReportPayload<'a> {
    pub schema: &'static str,
    pub schema_version: u32,
    pub generated_at: String,
    pub company_id: &'a str,
    pub result: &'a ImportResult,
}

/// Writes `import_report.json` into `output_dir` and returns its path.
pub fn write_import_report_json(
    output_dir: &Path,
    company_id: &str,
    result: &ImportResult,
) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)?;
    let output_path = output_dir.join("import_report.json");
    let payload = ImportReportPayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        company_id,
        result,
    };
    let json = serde_json::to_string_pretty(&payload)?;
    std::fs::write(&output_path, format!("{json}\n"))?;
    Ok(output_path)
}
