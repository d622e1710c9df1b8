//! Corpus store: the labelled reference set of previously evaluated papers.
//!
//! Loaded once at startup from a CSV export and treated as read-only for the
//! lifetime of the process. Novelty and relevance compare submissions against
//! the accepted subset only.

mod error;


pub use error::CorpusError;

use std::io::Read;
use std::path::Path;

use tracing::{info, warn};

/// A previously evaluated paper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusRecord {
    pub title: String,
    pub abstract_text: String,
    pub accepted: bool,
}

impl CorpusRecord {
    pub fn new(title: impl Into<String>, abstract_text: impl Into<String>, accepted: bool) -> Self {
        Self {
            title: title.into(),
            abstract_text: abstract_text.into(),
            accepted,
        }
    }

    /// Working text used for embedding and keyword extraction.
    pub fn text(&self) -> String {
        format!("{} {}", self.title, self.abstract_text)
    }
}

/// Immutable in-memory corpus.
#[derive(Debug, Clone, Default)]
pub struct CorpusStore {
    records: Vec<CorpusRecord>,
    skipped_rows: usize,
}

impl CorpusStore {
    const COL_TITLE: &'static str = "title";
    const COL_ABSTRACT: &'static str = "abstract";
    const COL_ACCEPTED: &'static str = "accepted";

    /// Builds a store from already-parsed records.
    pub fn from_records(records: Vec<CorpusRecord>) -> Self {
        Self {
            records,
            skipped_rows: 0,
        }
    }

    /// Loads the corpus CSV from disk.
    pub fn load(path: &Path) -> Result<Self, CorpusError> {
        let file = std::fs::File::open(path).map_err(|e| CorpusError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let store = Self::from_reader(file)?;

        info!(
            path = %path.display(),
            records = store.len(),
            accepted = store.accepted_count(),
            skipped_rows = store.skipped_rows,
            "Corpus loaded"
        );

        Ok(store)
    }

    /// Parses CSV from any reader. Requires `title`, `abstract` and `accepted`
    /// header columns; other columns are ignored.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CorpusError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let column = |name: &'static str| {
            headers
                .iter()
                .position(|h| h.eq_ignore_ascii_case(name))
                .ok_or(CorpusError::MissingColumn { name })
        };
        let title_idx = column(Self::COL_TITLE)?;
        let abstract_idx = column(Self::COL_ABSTRACT)?;
        let accepted_idx = column(Self::COL_ACCEPTED)?;

        let mut records = Vec::new();
        let mut skipped_rows = 0;

        for (row, result) in csv_reader.records().enumerate() {
            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    warn!(row = row + 1, error = %e, "Skipping malformed corpus row");
                    skipped_rows += 1;
                    continue;
                }
            };

            let field = |idx: usize| record.get(idx).unwrap_or_default();
            records.push(CorpusRecord {
                title: field(title_idx).to_string(),
                abstract_text: field(abstract_idx).to_string(),
                accepted: parse_accepted(field(accepted_idx)),
            });
        }

        Ok(Self {
            records,
            skipped_rows,
        })
    }

    pub fn records(&self) -> &[CorpusRecord] {
        &self.records
    }

    /// Iterates over accepted records in file order.
    pub fn accepted(&self) -> impl Iterator<Item = &CorpusRecord> {
        self.records.iter().filter(|r| r.accepted)
    }

    /// Working texts of the accepted subset.
    pub fn accepted_texts(&self) -> Vec<String> {
        self.accepted().map(CorpusRecord::text).collect()
    }

    pub fn accepted_count(&self) -> usize {
        self.accepted().count()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows dropped while parsing.
    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }
}

/// Interprets an acceptance label (`1`, `1.0`, `true`, `yes`).
pub fn parse_accepted(value: &str) -> bool {
    let value = value.trim();
    if value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("yes") {
        return true;
    }
    value.parse::<f64>().is_ok_and(|v| v == 1.0)
}
