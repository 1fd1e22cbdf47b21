//! PDF strategies: layout-aware extraction first, then a per-page reader.

use lopdf::Document;
use tracing::debug;

use super::{join_non_blank, ExtractionError};

/// Layout-aware extraction via `pdf-extract`, one entry per page, keeping non-blank pages.
pub fn extract_layout(bytes: &[u8]) -> Result<String, ExtractionError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
        .map_err(|e| ExtractionError::Pdf(format!("pdf-extract: {e}")))?;
    Ok(join_non_blank(pages))
}

/// Simple page-by-page text reader via `lopdf`. Pages that fail to decode are skipped.
pub fn extract_pages(bytes: &[u8]) -> Result<String, ExtractionError> {
    let doc = Document::load_mem(bytes)
        .map_err(|e| ExtractionError::Pdf(format!("lopdf: {e}")))?;

    let pages = doc.get_pages().into_keys().filter_map(|page_num| {
        doc.extract_text(&[page_num])
            .map_err(|e| debug!("lopdf could not read page {page_num}: {e}"))
            .ok()
    });

    Ok(join_non_blank(pages))
}


#[cfg(test)]
mod tests {
    use super::fixtures::text_pdf;
    use super::*;

    #[test]
    fn test_layout_keeps_pages_on_separate_lines() {
        let bytes = text_pdf(&["page one", "page two"]);
        assert_eq!(extract_layout(&bytes).unwrap(), "page one\npage two");
    }

    #[test]
    fn test_pages_reader_keeps_pages_on_separate_lines() {
        let bytes = text_pdf(&["page one", "page two"]);
        assert_eq!(extract_pages(&bytes).unwrap(), "page one\npage two");
    }

    #[test]
    fn test_blank_page_is_dropped() {
        let bytes = text_pdf(&["Jane Doe", " ", "jane@example.com"]);
        assert_eq!(extract_pages(&bytes).unwrap(), "Jane Doe\njane@example.com");
    }

    #[test]
    fn test_layout_rejects_non_pdf() {
        assert!(matches!(
            extract_layout(b"plain text, not a pdf"),
            Err(ExtractionError::Pdf(_))
        ));
    }

    #[test]
    fn test_pages_rejects_non_pdf() {
        assert!(matches!(
            extract_pages(b"plain text, not a pdf"),
            Err(ExtractionError::Pdf(_))
        ));
    }
}
