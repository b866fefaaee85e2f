use std::path::Path;

use crate::error::{ExtractionError, Result};

use super::PdfBackend;

/// Extraction with `pdf-extract`.
///
/// The library renders the whole document in one call, so all page texts
/// are produced when the document is opened.
pub struct PdfExtractBackend {
    pages: Vec<String>,
}

impl PdfExtractBackend {
    pub fn open(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|source| ExtractionError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let pages = pdf_extract::extract_text_from_mem_by_pages(&bytes).map_err(|e| {
            ExtractionError::InvalidPdf {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
        })?;
        tracing::debug!("Extracted {} ({} pages)", path.display(), pages.len());

        Ok(Self { pages })
    }
}

impl PdfBackend for PdfExtractBackend {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_text(&self, index: usize) -> Result<String> {
        self.pages
            .get(index)
            .cloned()
            .ok_or_else(|| ExtractionError::Page {
                page: index + 1,
                message: "page out of range".to_string(),
            })
    }
}
