use std::sync::LazyLock;

use itertools::Itertools;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use super::text::clean_text;

static SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*-+\s*(\|\s*-+\s*)*$").unwrap());

/// One table cell, in the form it renders to and the form it was written
/// in. Markdown cells carry link syntax inline, so both forms are the same
/// string; HTML cells keep their serialized markup in `raw`.
#[derive(Debug, Clone, Default)]
pub struct Cell {
    pub text: String,
    pub raw: String,
}

impl Cell {
    fn markdown(source: &str) -> Self {
        Cell {
            text: source.to_string(),
            raw: source.to_string(),
        }
    }

    fn html(el: ElementRef) -> Self {
        Cell {
            text: clean_text(&el.text().collect::<String>()),
            raw: el.html(),
        }
    }
}

#[derive(Debug)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

/// Try the section as a Markdown pipe table, then as an HTML table, then
/// fall back to the first HTML table anywhere in the document.
pub fn extract(section: &str, doc: &str) -> Option<Table> {
    parse_pipe_table(section)
        .or_else(|| parse_html_table(section))
        .or_else(|| parse_html_table(doc))
}

fn parse_pipe_table(section: &str) -> Option<Table> {
    let mut table_lines: Vec<&str> = Vec::new();
    for line in section.lines() {
        if line.trim().starts_with('|') {
            table_lines.push(line.trim());
        } else if !table_lines.is_empty() {
            break;
        }
    }

    let cleaned: Vec<&str> = table_lines
        .iter()
        .map(|l| l.trim_matches('|').trim())
        .collect();
    if cleaned.len() < 2 {
        return None;
    }

    let headers = split_row(cleaned[0]);
    let data_rows = if SEPARATOR_RE.is_match(cleaned[1]) {
        &cleaned[2..]
    } else {
        &cleaned[1..]
    };

    let rows = data_rows
        .iter()
        .map(|row| {
            split_row(row)
                .iter()
                .map(|cell| Cell::markdown(cell))
                .pad_using(headers.len(), |_| Cell::default())
                .take(headers.len())
                .collect()
        })
        .collect();

    Some(Table { headers, rows })
}

fn split_row(line: &str) -> Vec<String> {
    line.split('|').map(|cell| cell.trim().to_string()).collect()
}

fn parse_html_table(input: &str) -> Option<Table> {
    let table_sel = Selector::parse("table").unwrap();
    let tr_sel = Selector::parse("tr").unwrap();
    let th_sel = Selector::parse("th").unwrap();
    let cell_sel = Selector::parse("th, td").unwrap();

    let fragment = Html::parse_fragment(input);
    let table = fragment.select(&table_sel).next()?;

    let header_cells: Vec<ElementRef> = table.select(&th_sel).collect();
    let trs: Vec<ElementRef> = table.select(&tr_sel).collect();
    let first_tr_has_th = trs
        .first()
        .map(|tr| tr.select(&th_sel).next().is_some())
        .unwrap_or(false);

    let headers: Vec<String> = if !header_cells.is_empty() {
        header_cells
            .iter()
            .map(|th| clean_text(&th.text().collect::<String>()))
            .collect()
    } else {
        trs.first()?
            .select(&cell_sel)
            .map(|cell| clean_text(&cell.text().collect::<String>()))
            .collect()
    };

    // Skip the row the headers came from; header cells found elsewhere
    // (e.g. a th per data row) leave all rows as data.
    let skip = if first_tr_has_th || header_cells.is_empty() {
        1
    } else {
        0
    };

    let mut rows = Vec::new();
    for tr in trs.iter().skip(skip) {
        let cells: Vec<Cell> = tr.select(&cell_sel).map(Cell::html).collect();
        if cells.is_empty() {
            continue;
        }
        rows.push(
            cells
                .into_iter()
                .pad_using(headers.len(), |_| Cell::default())
                .take(headers.len())
                .collect(),
        );
    }

    Some(Table { headers, rows })
}

// ── Tests ──
