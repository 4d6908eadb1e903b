/// Heading keywords identifying the internship table's section, tried in
/// line order against the document.
pub const SECTION_KEYWORDS: &[&str] =
    &["Software Engineering Internship Roles", "Software Engineering"];

/// Return the section starting at the first line containing any keyword
/// (case-insensitive substring). The section runs from that line up to the
/// next heading line, or the end of the document.
pub fn locate(doc: &str, keywords: &[&str]) -> Option<String> {
    let lines: Vec<&str> = doc.lines().collect();
    let lowered: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();

    let start = lines.iter().position(|line| {
        let line = line.to_lowercase();
        lowered.iter().any(|kw| line.contains(kw))
    })?;

    let end = lines[start + 1..]
        .iter()
        .position(|line| line.starts_with('#'))
        .map(|offset| start + 1 + offset)
        .unwrap_or(lines.len());

    Some(lines[start..end].join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = "\
# Internships

Intro text.

## Software Engineering Internship Roles

| Company | Role |
| --- | --- |
| Acme | SWE Intern |

## Data Science Roles

| Company | Role |
";

    #[test]
    fn finds_section_and_stops_at_next_heading() {
        let section = locate(DOC, SECTION_KEYWORDS).unwrap();
        assert!(section.starts_with("## Software Engineering Internship Roles"));
        assert!(section.contains("| Acme | SWE Intern |"));
        assert!(!section.contains("Data Science"));
    }

    #[test]
    fn keyword_match_is_case_insensitive() {
        let doc = "## SOFTWARE ENGINEERING internship roles\ncontent";
        let section = locate(doc, SECTION_KEYWORDS).unwrap();
        assert!(section.contains("content"));
    }

    #[test]
    fn falls_through_to_broader_keyword() {
        let doc = "## Software Engineering (US)\n\n| A | B |\n";
        assert!(locate(doc, SECTION_KEYWORDS).is_some());
    }

    #[test]
    fn none_when_no_keyword_matches() {
        assert!(locate("# Quant Roles\nnothing", SECTION_KEYWORDS).is_none());
    }

    #[test]
    fn section_runs_to_document_end_without_later_heading() {
        let doc = "## Software Engineering Internship Roles\nrow one\nrow two";
        let section = locate(doc, SECTION_KEYWORDS).unwrap();
        assert!(section.ends_with("row two"));
    }
}
