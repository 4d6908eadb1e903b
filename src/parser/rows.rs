use std::sync::LazyLock;

use regex::Regex;

use super::columns::ColumnMap;
use super::table::{Cell, Table};
use super::text::{clean_text, normalize_link};

/// Company-cell glyph marking a row as a variant of the preceding posting.
pub const SUB_ROW_MARKER: &str = "↳";

/// Anchors pointing back into the source repository are navigation
/// badges, not application links.
const SOURCE_REPO_PATH: &str = "github.com/SimplifyJobs";

static AGE_TODAY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b0\s*d\b|\b0\s*days?\b").unwrap());
static MD_LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[^\]]*\]\((https?://[^\s)]+)\)").unwrap());
static HREF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"href=["'](https?://[^"']+)["']"#).unwrap());
static BARE_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://[^\s)\]]+").unwrap());

#[derive(Debug, Clone)]
pub struct Posting {
    pub company: String,
    pub role: String,
    pub location: String,
    pub age: String,
    pub link: Option<String>,
}

impl Posting {
    /// Stable dedup key: the normalized link when one resolved, else
    /// company, role and location joined.
    pub fn dedup_key(&self) -> String {
        match &self.link {
            Some(link) => link.clone(),
            None => format!("{}|{}|{}", self.company, self.role, self.location),
        }
    }
}

/// Carry pair for sub-row inheritance. Only the most recent link-bearing
/// primary row is remembered; the table nests one level deep.
#[derive(Debug, Default)]
struct Carry {
    company: Option<String>,
    link: Option<String>,
}

/// Filter the table down to postings located in Canada with age zero
/// days, resolving application links and sub-row inheritance along the
/// way.
pub fn select_postings(table: &Table, columns: &ColumnMap) -> Vec<Posting> {
    let mut carry = Carry::default();
    let mut postings = Vec::new();

    for row in &table.rows {
        if let Some(posting) = resolve_row(row, columns, &mut carry) {
            postings.push(posting);
        }
    }

    postings
}

fn resolve_row(row: &[Cell], columns: &ColumnMap, carry: &mut Carry) -> Option<Posting> {
    // Rows outside Canada are invisible to the pipeline, including the
    // inheritance state.
    let location = clean_text(text_at(row, columns.location));
    if !location.to_lowercase().contains("canada") {
        return None;
    }

    let company_text = clean_text(text_at(row, Some(columns.company)));
    let is_sub_row = company_text == SUB_ROW_MARKER;
    let own_link = extract_link(row, columns.application);

    // Primary rows refresh the carry before the recency filter, so a
    // sub-row added today still inherits from a parent posted earlier.
    if !is_sub_row {
        if let Some(link) = &own_link {
            carry.company = Some(company_text.clone());
            carry.link = Some(link.clone());
        }
    }

    let age = clean_text(text_at(row, columns.age));
    if !AGE_TODAY_RE.is_match(&age.to_lowercase()) {
        return None;
    }

    let (company, link) = if is_sub_row {
        (
            carry.company.clone().unwrap_or(company_text),
            own_link.or_else(|| carry.link.clone()),
        )
    } else {
        (company_text, own_link)
    };

    Some(Posting {
        company,
        role: clean_text(text_at(row, Some(columns.role))),
        location,
        age,
        link,
    })
}

fn text_at(row: &[Cell], idx: Option<usize>) -> &str {
    idx.and_then(|i| row.get(i))
        .map(|cell| cell.text.as_str())
        .unwrap_or("")
}

/// Resolve the application link from a cell, preferring the raw markup
/// form over the plain-text one.
fn extract_link(row: &[Cell], application: Option<usize>) -> Option<String> {
    let cell = application.and_then(|i| row.get(i))?;
    link_in(&cell.raw).or_else(|| link_in(&cell.text))
}

/// Markdown link syntax first, then anchor hrefs, then a bare URL. With
/// several anchors present, the first one not pointing back into the
/// source repository wins.
fn link_in(source: &str) -> Option<String> {
    if source.is_empty() {
        return None;
    }
    if let Some(caps) = MD_LINK_RE.captures(source) {
        return Some(normalize_link(&caps[1]));
    }
    let hrefs: Vec<String> = HREF_RE
        .captures_iter(source)
        .map(|caps| normalize_link(&caps[1]))
        .collect();
    if let Some(external) = hrefs.iter().find(|url| !url.contains(SOURCE_REPO_PATH)) {
        return Some(external.clone());
    }
    if let Some(first) = hrefs.into_iter().next() {
        return Some(first);
    }
    BARE_URL_RE
        .find(source)
        .map(|m| normalize_link(m.as_str()))
}

// ── Tests ──
