use std::path::PathBuf;
use thiserror::Error;

/// The single failure kind of an extraction run.
///
/// Variants only refine the message; callers treat every variant alike and
/// report it as `Error: <message>`.
#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("{}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: not a readable PDF: {message}", .path.display())]
    InvalidPdf { path: PathBuf, message: String },

    #[error("failed to extract text from page {page}: {message}")]
    Page { page: usize, message: String },

    #[error("PDF library panicked: {0}")]
    Panicked(String),
}

pub type Result<T> = std::result::Result<T, ExtractionError>;

impl ExtractionError {
    /// Build a `Panicked` error from a `catch_unwind` payload.
    pub fn from_panic(payload: Box<dyn std::any::Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic".to_string()
        };
        ExtractionError::Panicked(message)
    }
}
