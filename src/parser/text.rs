use html_escape::decode_html_entities;
use scraper::Html;

/// Render a cell value to plain text: tags stripped, entities decoded,
/// whitespace collapsed. Markdown link syntax is left alone; only embedded
/// HTML counts as markup here.
pub fn clean_text(input: &str) -> String {
    if !input.contains('<') {
        return collapse_ws(&decode_html_entities(input));
    }
    let fragment = Html::parse_fragment(input);
    let text: String = fragment.root_element().text().collect();
    collapse_ws(&text)
}

/// Canonical form of a link used as a dedup key: entity-decoded and
/// trimmed, so the same URL compares equal no matter how the source
/// encoded it.
pub fn normalize_link(raw: &str) -> String {
    decode_html_entities(raw.trim()).trim().to_string()
}

fn collapse_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_tags_and_decodes_entities() {
        assert_eq!(clean_text("<b>Toronto,</b> Canada &amp; Remote"), "Toronto, Canada & Remote");
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(clean_text("  Vancouver,   Canada  "), "Vancouver, Canada");
    }

    #[test]
    fn markdown_syntax_is_not_markup() {
        assert_eq!(clean_text("[Apply](https://x.co/a)"), "[Apply](https://x.co/a)");
    }

    #[test]
    fn normalize_link_decodes_and_trims() {
        assert_eq!(
            normalize_link(" https://x.co/a?b=1&amp;c=2 "),
            "https://x.co/a?b=1&c=2"
        );
    }
}
