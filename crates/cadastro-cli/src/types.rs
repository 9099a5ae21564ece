use std::path::PathBuf;

use cadastro_model::ImportResult;

/// Paths of the artifacts written by one `import` invocation.
#[derive(Debug, Default)]
pub struct WrittenFiles {
    pub report: Option<PathBuf>,
    pub errors_csv: Option<PathBuf>,
    pub json: Option<PathBuf>,
}

#[derive(Debug)]
pub struct ImportOutcome {
    pub file: PathBuf,
    pub company_id: String,
    pub output_dir: PathBuf,
    pub dry_run: bool,
    pub result: ImportResult,
    pub written: WrittenFiles,
}

impl ImportOutcome {
    pub fn has_errors(&self) -> bool {
        self.result.has_errors()
    }
}
