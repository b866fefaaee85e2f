//! Page text accumulation and the stdout contract.
//!
//! A run produces either the full text (every page followed by `\n`) or a
//! single `Error: <message>` line. Nothing extracted before a failure is
//! ever printed.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

use crate::cli::Engine;
use crate::error::ExtractionError;
use crate::parser::Document;

/// Concatenate every page's text, each followed by a newline, in page order
pub fn collect_text(document: &Document) -> Result<String, ExtractionError> {
    let mut text = String::new();

    for page in document.pages() {
        let page = page?;
        tracing::debug!("Page {}: {} bytes of text", page.number, page.text.len());
        text.push_str(&page.text);
        text.push('\n');
    }

    Ok(text)
}

/// Open `path` and extract its text
pub fn extract_text(path: &Path, engine: Engine) -> Result<String, ExtractionError> {
    let document = Document::open(path, engine)?;
    tracing::info!(
        "Extracting {} pages from {}",
        document.page_count(),
        document.path().display()
    );
    collect_text(&document)
}

/// Turn an extraction outcome into exactly what goes to stdout
pub fn render(outcome: Result<String, ExtractionError>) -> String {
    match outcome {
        Ok(text) => text,
        Err(e) => {
            // The error report is always a single line
            let message = e.to_string().replace("\r\n", " ").replace(['\n', '\r'], " ");
            format!("Error: {}\n", message)
        }
    }
}

/// Extract `path` and write the result to `out` in a single write.
///
/// Extraction failures are reported in the output and never returned; the
/// only error surfaced is a failure to write `out` itself.
pub fn extract_and_write<W: Write>(path: &Path, engine: Engine, out: &mut W) -> Result<()> {
    let outcome = extract_text(path, engine);
    if let Err(e) = &outcome {
        tracing::debug!("Extraction of {} failed: {:?}", path.display(), e);
    }

    out.write_all(render(outcome).as_bytes())
        .context("Failed to write extracted text")?;
    out.flush().context("Failed to flush output")?;
    Ok(())
}

/// Extract `path` and print the result to stdout
pub fn extract_and_print(path: &Path, engine: Engine) -> Result<()> {
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    extract_and_write(path, engine, &mut lock)
}
