//! Header resolution for client import files.

use cadastro_model::{ImportError, Result};

/// Headers that must be present, matched exactly and case-sensitively.
pub const REQUIRED_HEADERS: [&str; 3] = ["Nome", "CPF", "Telefone"];

/// Headers that are recognized but may be absent.
pub const OPTIONAL_HEADERS: [&str; 3] = ["Email", "Grupo", "Observacoes"];

/// Column positions of the recognized headers within one import file.
#[derive(Debug, Clone)]
pub struct HeaderLayout {
    nome: usize,
    cpf: usize,
    telefone: usize,
    email: Option<usize>,
    grupo: Option<usize>,
    observacoes: Option<usize>,
}

impl HeaderLayout {
    /// Locates every recognized header in the tokenized header line.
    ///
    /// # Errors
    ///
    /// Returns [`ImportError::MissingHeaders`] naming each required header
    /// that is absent. Optional headers simply resolve to `None`.
    pub fn resolve(cells: &[String]) -> Result<Self> {
        let position = |name: &str| cells.iter().position(|cell| cell == name);

        let missing: Vec<String> = REQUIRED_HEADERS
            .iter()
            .filter(|name| position(name).is_none())
            .map(|name| (*name).to_string())
            .collect();
        if !missing.is_empty() {
            return Err(ImportError::MissingHeaders { missing });
        }

        Ok(Self {
            nome: position("Nome").unwrap_or_default(),
            cpf: position("CPF").unwrap_or_default(),
            telefone: position("Telefone").unwrap_or_default(),
            email: position("Email"),
            grupo: position("Grupo"),
            observacoes: position("Observacoes"),
        })
    }

    /// Assembles a [`RawRow`] from the tokens of one data line.
    ///
    /// A missing token or an absent optional column yields an empty field.
    pub fn extract(&self, tokens: &[String], row: usize) -> RawRow {
        let at = |index: usize| tokens.get(index).cloned().unwrap_or_default();
        let optional_at =
            |index: Option<usize>| index.map(|idx| at(idx)).unwrap_or_default();

        RawRow {
            row,
            nome: at(self.nome),
            cpf: at(self.cpf),
            telefone: at(self.telefone),
            email: optional_at(self.email),
            grupo: optional_at(self.grupo),
            observacoes: optional_at(self.observacoes),
        }
    }
}

/// One tokenized data line, aligned to the resolved header layout.
/// Ephemeral: consumed immediately by the row validator.
#[derive(Debug, Clone, Default)]
pub struct RawRow {
    /// 1-based position among the data lines (header excluded).
    pub row: usize,
    pub nome: String,
    pub cpf: String,
    pub telefone: String,
    pub email: String,
    pub grupo: String,
    pub observacoes: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| (*name).to_string()).collect()
    }

    #[test]
    fn resolves_full_template_header() {
        let layout = HeaderLayout::resolve(&cells(&[
            "Nome",
            "CPF",
            "Telefone",
            "Email",
            "Grupo",
            "Observacoes",
        ]))
        .expect("resolve header");
        let row = layout.extract(&cells(&["a", "1", "2", "e", "g", "o"]), 1);
        assert_eq!(row.nome, "a");
        assert_eq!(row.cpf, "1");
        assert_eq!(row.telefone, "2");
        assert_eq!(row.email, "e");
        assert_eq!(row.grupo, "g");
        assert_eq!(row.observacoes, "o");
    }

    #[test]
    fn resolves_reordered_columns() {
        let layout =
            HeaderLayout::resolve(&cells(&["Telefone", "Nome", "CPF"])).expect("resolve header");
        let row = layout.extract(&cells(&["11999999999", "Ana", "12345678901"]), 2);
        assert_eq!(row.nome, "Ana");
        assert_eq!(row.cpf, "12345678901");
        assert_eq!(row.telefone, "11999999999");
        assert_eq!(row.email, "");
    }

    #[test]
    fn missing_required_headers_are_all_reported() {
        let err = HeaderLayout::resolve(&cells(&["Nome"])).unwrap_err();
        assert_eq!(
            err,
            ImportError::MissingHeaders {
                missing: vec!["CPF".to_string(), "Telefone".to_string()],
            }
        );
    }

    #[test]
    fn header_match_is_case_sensitive() {
        let err = HeaderLayout::resolve(&cells(&["nome", "cpf", "telefone"])).unwrap_err();
        assert!(matches!(err, ImportError::MissingHeaders { missing } if missing.len() == 3));
    }

    #[test]
    fn short_row_fills_empty_fields() {
        let layout = HeaderLayout::resolve(&cells(&["Nome", "CPF", "Telefone", "Email"]))
            .expect("resolve header");
        let row = layout.extract(&cells(&["Ana"]), 3);
        assert_eq!(row.nome, "Ana");
        assert_eq!(row.cpf, "");
        assert_eq!(row.telefone, "");
        assert_eq!(row.email, "");
    }
}
