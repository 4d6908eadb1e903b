use anyhow::Result;
use tracing::{info, warn};

use crate::error::FatalError;
use crate::parser::{self, ParseOutcome, Posting};
use crate::store::NotifiedStore;

/// Counters for one pass over the document.
#[derive(Debug, Default)]
pub struct RunReport {
    pub matched: usize,
    pub notified: usize,
    pub duplicates: usize,
    pub failures: usize,
}

/// Run the full pass over a fetched document: parse, filter, push every
/// new posting through `send`, and record the keys of successful sends in
/// `store`. A failed send leaves its key unrecorded so the posting is
/// retried on the next run.
pub fn process_document<F>(
    doc: &str,
    store: &mut NotifiedStore,
    mut send: F,
) -> Result<RunReport, FatalError>
where
    F: FnMut(&Posting) -> Result<()>,
{
    let postings = match parser::parse_document(doc) {
        ParseOutcome::NoSection => return Err(FatalError::SectionNotFound),
        ParseOutcome::NoTable => {
            warn!("No table rows found");
            return Ok(RunReport::default());
        }
        ParseOutcome::Postings(postings) => postings,
    };

    let mut report = RunReport {
        matched: postings.len(),
        ..RunReport::default()
    };

    for posting in &postings {
        let key = posting.dedup_key();
        if store.contains(&key) {
            report.duplicates += 1;
            continue;
        }
        match send(posting) {
            Ok(()) => {
                info!(
                    "Notified: {} - {} - {}",
                    posting.company, posting.role, posting.location
                );
                store.insert(key);
                report.notified += 1;
            }
            Err(e) => {
                warn!("Failed sending webhook for {}: {:#}", posting.company, e);
                report.failures += 1;
            }
        }
    }

    Ok(report)
}

// ── Tests ──
