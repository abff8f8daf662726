//! Text and JSON rendering of view models.

use std::io::Write;

use serde::Serialize;
use serde_json::Value;

use magnet_kit_admin::Locale;
use magnet_kit_admin::listing::TableConfig;
use magnet_kit_admin::screens::ListScreen;

use crate::commands::CliError;

/// Pretty-print any view model as JSON.
pub fn write_json<T: Serialize>(out: &mut impl Write, value: &T) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Render a list screen: facet tabs, the table (or its empty state) and the
/// pagination footer.
pub fn write_list<R: Serialize, F, S>(
    out: &mut impl Write,
    screen: &ListScreen<R, F, S>,
    locale: Locale,
) -> Result<(), CliError> {
    write_facets(out, &screen.table)?;

    if screen.page.items.is_empty() {
        writeln!(out, "{}", screen.table.empty_title)?;
        if let Some(description) = &screen.table.empty_description {
            writeln!(out, "{description}")?;
        }
    } else {
        let rows = screen
            .page
            .items
            .iter()
            .map(|item| row_cells(&screen.table, item))
            .collect::<Result<Vec<_>, _>>()?;
        write_table(out, &screen.table, &rows)?;
    }

    writeln!(
        out,
        "{} {} {} {} · {} {}",
        locale.pick("Página", "Page"),
        screen.page.page,
        locale.pick("de", "of"),
        screen.page.total_pages.max(1),
        screen.page.total_count,
        locale.pick("resultados", "results"),
    )?;
    Ok(())
}

fn write_facets(out: &mut impl Write, table: &TableConfig) -> Result<(), CliError> {
    if table.facets.is_empty() {
        return Ok(());
    }
    let tabs: Vec<String> = table
        .facets
        .iter()
        .map(|f| {
            let text = f
                .count
                .map_or_else(|| f.label.clone(), |n| format!("{} ({n})", f.label));
            if f.selected { format!("[{text}]") } else { text }
        })
        .collect();
    writeln!(out, "{}", tabs.join("  "))?;
    writeln!(out)?;
    Ok(())
}

/// Pick the table's columns out of a serialized row.
fn row_cells<R: Serialize>(table: &TableConfig, item: &R) -> Result<Vec<String>, CliError> {
    let value = serde_json::to_value(item)?;
    Ok(table
        .columns
        .iter()
        .map(|c| value.get(c.key).map_or_else(String::new, cell))
        .collect())
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => "-".to_owned(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Write an aligned table with a header rule.
pub fn write_table(
    out: &mut impl Write,
    table: &TableConfig,
    rows: &[Vec<String>],
) -> Result<(), CliError> {
    let mut widths: Vec<usize> = table.columns.iter().map(|c| c.label.chars().count()).collect();
    for row in rows {
        for (width, text) in widths.iter_mut().zip(row) {
            *width = (*width).max(text.chars().count());
        }
    }

    let headers: Vec<String> = table.columns.iter().map(|c| c.label.clone()).collect();
    write_row(out, table, &widths, &headers)?;
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    writeln!(out, "{}", rule.join("  "))?;
    for row in rows {
        write_row(out, table, &widths, row)?;
    }
    Ok(())
}

fn write_row(
    out: &mut impl Write,
    table: &TableConfig,
    widths: &[usize],
    cells: &[String],
) -> Result<(), CliError> {
    let padded: Vec<String> = table
        .columns
        .iter()
        .zip(widths)
        .zip(cells)
        .map(|((column, width), text)| {
            let pad = width.saturating_sub(text.chars().count());
            if column.numeric {
                format!("{}{text}", " ".repeat(pad))
            } else {
                format!("{text}{}", " ".repeat(pad))
            }
        })
        .collect();
    writeln!(out, "{}", padded.join("  ").trim_end())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use magnet_kit_admin::listing::{FacetOption, ListState, TableColumn, paginate};

    use super::*;

    #[derive(Serialize)]
    struct Row {
        name: &'static str,
        total: String,
        note: Option<String>,
    }

    fn screen(rows: Vec<Row>) -> ListScreen<Row, (), ()> {
        ListScreen {
            table: TableConfig::new("test")
                .column(TableColumn::new("name", "Nome"))
                .column(TableColumn::numeric("total", "Total"))
                .column(TableColumn::new("note", "Nota"))
                .facet(FacetOption::new("all", "Todos").with_count(2).selected(true))
                .empty_state("Nada aqui", Some("Tente outra busca")),
            page: paginate(rows, 1, 10),
            state: ListState::default(),
            stats: (),
        }
    }

    fn render(screen: &ListScreen<Row, (), ()>) -> String {
        let mut out = Vec::new();
        write_list(&mut out, screen, Locale::PtBr).expect("render");
        String::from_utf8(out).expect("utf8")
    }

    #[test]
    fn test_table_aligns_columns() {
        let text = render(&screen(vec![
            Row {
                name: "Ana",
                total: "R$ 5,00".to_owned(),
                note: None,
            },
            Row {
                name: "Bruno Lima",
                total: "R$ 120,00".to_owned(),
                note: Some("vip".to_owned()),
            },
        ]));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.first().copied(), Some("[Todos (2)]"));
        assert!(text.contains("Ana           R$ 5,00  -"));
        assert!(text.contains("Bruno Lima  R$ 120,00  vip"));
        assert!(text.ends_with("Página 1 de 1 · 2 resultados\n"));
    }

    #[test]
    fn test_empty_page_shows_empty_state() {
        let text = render(&screen(vec![]));
        assert!(text.contains("Nada aqui\nTente outra busca\n"));
        assert!(!text.contains("Nome"));
    }
}
