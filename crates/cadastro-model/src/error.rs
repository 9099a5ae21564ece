use thiserror::Error;

/// Errors that abort an import before any row is processed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    /// One or more required headers are absent from the header line.
    #[error("cabeçalhos obrigatórios não encontrados: {}", .missing.join(", "))]
    MissingHeaders { missing: Vec<String> },
}

pub type Result<T> = std::result::Result<T, ImportError>;
