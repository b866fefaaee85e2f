mod extract;
pub(crate) mod pdf;

use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};

use crate::cli::Engine;
use crate::error::{ExtractionError, Result};

/// Access to the pages of an opened PDF, backed by a PDF library.
pub trait PdfBackend {
    /// Number of pages in the document
    fn page_count(&self) -> usize;

    /// Extract the plain text of the page at `index` (0-based, document order)
    fn page_text(&self, index: usize) -> Result<String>;
}

/// A single page of a document and its extracted text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Page number (1-indexed)
    pub number: usize,
    pub text: String,
}

/// An opened PDF document.
///
/// The underlying file handle is only held while opening; once `open`
/// returns, on success or failure, it has been closed.
pub struct Document {
    path: PathBuf,
    backend: Box<dyn PdfBackend>,
}

impl Document {
    /// Open a PDF with the selected extraction engine
    pub fn open(path: &Path, engine: Engine) -> Result<Self> {
        tracing::debug!("Opening {} with {}", path.display(), engine);

        let backend: Box<dyn PdfBackend> = match engine {
            Engine::Lopdf => Box::new(guarded(|| pdf::LopdfBackend::open(path))?),
            Engine::PdfExtract => Box::new(guarded(|| extract::PdfExtractBackend::open(path))?),
        };

        Ok(Self::from_backend(path, backend))
    }

    pub(crate) fn from_backend(path: &Path, backend: Box<dyn PdfBackend>) -> Self {
        Self {
            path: path.to_path_buf(),
            backend,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn page_count(&self) -> usize {
        self.backend.page_count()
    }

    /// Iterate pages in document order, extracting each page's text as it is reached
    pub fn pages(&self) -> Pages<'_> {
        Pages {
            document: self,
            next: 0,
        }
    }
}

/// Lazy, forward-only sequence of the pages of a [`Document`]
pub struct Pages<'a> {
    document: &'a Document,
    next: usize,
}

impl Iterator for Pages<'_> {
    type Item = Result<Page>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.document.page_count() {
            return None;
        }

        let index = self.next;
        self.next += 1;

        let backend = self.document.backend.as_ref();
        let page = guarded(|| backend.page_text(index)).map(|text| Page {
            number: index + 1,
            text,
        });
        Some(page)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.document.page_count().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Pages<'_> {}

/// Run a call into a PDF library, turning a panic into an [`ExtractionError`]
fn guarded<T>(f: impl FnOnce() -> Result<T>) -> Result<T> {
    panic::catch_unwind(AssertUnwindSafe(f))
        .unwrap_or_else(|payload| Err(ExtractionError::from_panic(payload)))
}
