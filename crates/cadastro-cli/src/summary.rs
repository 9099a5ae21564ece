use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::ImportOutcome;

pub fn print_summary(outcome: &ImportOutcome) {
    println!("Arquivo: {}", outcome.file.display());
    println!("Empresa: {}", outcome.company_id);
    if outcome.dry_run {
        println!("Dry run: nenhum arquivo gravado");
    } else {
        println!("Saída: {}", outcome.output_dir.display());
    }
    if let Some(path) = &outcome.written.report {
        println!("Relatório: {}", path.display());
    }
    if let Some(path) = &outcome.written.errors_csv {
        println!("Erros CSV: {}", path.display());
    }
    if let Some(path) = &outcome.written.json {
        println!("Relatório JSON: {}", path.display());
    }

    let result = &outcome.result;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Linhas"),
        header_cell("Importadas"),
        header_cell("Com erro"),
        header_cell("Ignoradas"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    for index in 0..4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    align_column(&mut table, 4, CellAlignment::Center);
    table.add_row(vec![
        Cell::new(result.total_rows).add_attribute(Attribute::Bold),
        count_cell(result.success_rows, Color::Green),
        count_cell(result.error_rows, Color::Red),
        count_cell(result.skipped_rows(), Color::DarkGrey),
        status_cell(result.success),
    ]);
    println!("{table}");
    print_error_table(outcome);
}

fn print_error_table(outcome: &ImportOutcome) {
    let errors = &outcome.result.errors;
    if errors.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Linha"),
        header_cell("Campo"),
        header_cell("Mensagem"),
        header_cell("Valor"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for error in errors {
        table.add_row(vec![
            Cell::new(error.row),
            Cell::new(error.field).fg(Color::Blue),
            Cell::new(&error.message),
            value_cell(&error.value),
        ]);
    }
    println!();
    println!("Erros:");
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn status_cell(success: bool) -> Cell {
    if success {
        Cell::new("OK")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new("ERROS")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
    }
}

fn value_cell(value: &str) -> Cell {
    if value.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(value)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
