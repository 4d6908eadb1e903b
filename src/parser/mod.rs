pub mod columns;
pub mod rows;
pub mod section;
pub mod table;
pub mod text;

pub use rows::Posting;

/// What the document yielded, in strategy order.
#[derive(Debug)]
pub enum ParseOutcome {
    /// No line matched the section heading keywords.
    NoSection,
    /// Section found but no table could be parsed from it or the document.
    NoTable,
    /// Postings that passed the location and recency filters.
    Postings(Vec<Posting>),
}

pub fn parse_document(doc: &str) -> ParseOutcome {
    let Some(section) = section::locate(doc, section::SECTION_KEYWORDS) else {
        return ParseOutcome::NoSection;
    };
    let Some(table) = table::extract(&section, doc) else {
        return ParseOutcome::NoTable;
    };
    if table.rows.is_empty() {
        return ParseOutcome::NoTable;
    }
    let columns = columns::resolve(&table.headers);
    ParseOutcome::Postings(rows::select_postings(&table, &columns))
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipe_fixture_yields_postings() {
        let md = std::fs::read_to_string("tests/fixtures/readme_pipe.md").unwrap();
        match parse_document(&md) {
            ParseOutcome::Postings(postings) => assert!(!postings.is_empty()),
            other => panic!("expected postings, got {:?}", other),
        }
    }

    #[test]
    fn missing_section_reported() {
        let md = "# Hardware Roles\n\n| Company | Role |\n| --- | --- |\n| Acme | EE Intern |\n";
        assert!(matches!(parse_document(md), ParseOutcome::NoSection));
    }

    #[test]
    fn section_without_table_reported() {
        let md = "## Software Engineering Internship Roles\n\nNothing here yet.\n";
        assert!(matches!(parse_document(md), ParseOutcome::NoTable));
    }
}
