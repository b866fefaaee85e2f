use std::fs::File;
use std::path::Path;

use crate::error::{ExtractionError, Result};

use super::PdfBackend;

/// Page-by-page extraction with `lopdf`
pub struct LopdfBackend {
    doc: lopdf::Document,
    page_numbers: Vec<u32>,
}

impl LopdfBackend {
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| ExtractionError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        // `load_from` consumes the handle, so it is closed before we return
        let doc = lopdf::Document::load_from(file).map_err(|e| ExtractionError::InvalidPdf {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        // `get_pages` is keyed by page number, so keys come out in document order
        let page_numbers: Vec<u32> = doc.get_pages().into_keys().collect();
        tracing::debug!("Loaded {} ({} pages)", path.display(), page_numbers.len());

        Ok(Self { doc, page_numbers })
    }
}

impl PdfBackend for LopdfBackend {
    fn page_count(&self) -> usize {
        self.page_numbers.len()
    }

    fn page_text(&self, index: usize) -> Result<String> {
        let page_error = |message: String| ExtractionError::Page {
            page: index + 1,
            message,
        };

        let number = *self
            .page_numbers
            .get(index)
            .ok_or_else(|| page_error("page out of range".to_string()))?;

        self.doc
            .extract_text(&[number])
            .map_err(|e| page_error(e.to_string()))
    }
}
