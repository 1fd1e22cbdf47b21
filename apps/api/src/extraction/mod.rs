//! Text Extractor: best-effort plain text from uploaded resume documents.
//!
//! Each document kind has an ordered list of strategies. The first strategy that
//! yields non-blank text wins; failures are logged and skipped. A blank result is
//! skipped too, unless the strategy marks it final: a DOCX that parses but holds no
//! text must not fall through to decoding the ZIP container.
//! Callers never see an error: an empty string means nothing could be extracted.

pub mod docx;
pub mod pdf;

use std::panic::{self, AssertUnwindSafe};

use thiserror::Error;
use tracing::{debug, info, warn};

/// Supported upload formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    /// Maps a filename's extension (case-insensitive) to a kind.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let lower = filename.to_ascii_lowercase();
        if lower.ends_with(".pdf") {
            Some(DocumentKind::Pdf)
        } else if lower.ends_with(".docx") {
            Some(DocumentKind::Docx)
        } else {
            None
        }
    }

    fn strategies(self) -> &'static [Strategy] {
        match self {
            DocumentKind::Pdf => PDF_STRATEGIES,
            DocumentKind::Docx => DOCX_STRATEGIES,
        }
    }
}

const PDF_STRATEGIES: &[Strategy] = &[
    ("pdf-extract", pdf::extract_layout, OnBlank::Continue),
    ("lopdf", pdf::extract_pages, OnBlank::Continue),
    ("raw-utf8", decode_raw, OnBlank::Continue),
];

const DOCX_STRATEGIES: &[Strategy] = &[
    ("docx-rs", docx::extract_structured, OnBlank::Stop),
    ("raw-utf8", decode_raw, OnBlank::Continue),
];

/// Why a strategy produced nothing usable.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("DOCX extraction failed: {0}")]
    Docx(String),

    #[error("extraction library panicked: {0}")]
    Panicked(String),
}

/// What a strategy's successful but blank result means for the rest of the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OnBlank {
    Continue,
    Stop,
}

type StrategyFn = fn(&[u8]) -> Result<String, ExtractionError>;

/// A named extraction attempt.
type Strategy = (&'static str, StrategyFn, OnBlank);

/// Extracts plain text from `bytes`. Returns an empty string when every strategy fails.
pub fn extract(bytes: &[u8], kind: DocumentKind) -> String {
    run_strategies(bytes, kind.strategies())
}

fn run_strategies(bytes: &[u8], strategies: &[Strategy]) -> String {
    for &(name, strategy, on_blank) in strategies {
        match guarded(bytes, strategy) {
            Ok(text) if has_content(&text) => {
                info!("Extracted {} chars using {name}", text.chars().count());
                return text;
            }
            Ok(_) if on_blank == OnBlank::Stop => {
                debug!("{name} read the document but found no text");
                return String::new();
            }
            Ok(_) => debug!("{name} produced no text"),
            Err(e) => warn!("{name} failed: {e}"),
        }
    }
    warn!("All extraction strategies failed");
    String::new()
}

/// Runs a strategy, converting a library panic into an error.
fn guarded(bytes: &[u8], strategy: StrategyFn) -> Result<String, ExtractionError> {
    panic::catch_unwind(AssertUnwindSafe(|| strategy(bytes))).unwrap_or_else(|payload| {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());
        Err(ExtractionError::Panicked(message))
    })
}

fn has_content(text: &str) -> bool {
    !text.trim().is_empty()
}

/// Trims each piece and joins the non-blank ones with newlines.
fn join_non_blank<I, S>(pieces: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    pieces
        .into_iter()
        .filter_map(|p| {
            let p = p.as_ref().trim();
            (!p.is_empty()).then(|| p.to_string())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Decodes bytes as UTF-8, dropping invalid sequences.
fn decode_raw(bytes: &[u8]) -> Result<String, ExtractionError> {
    Ok(bytes.utf8_chunks().map(|chunk| chunk.valid()).collect())
}
