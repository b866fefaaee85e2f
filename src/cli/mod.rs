use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

/// File read when no path is given on the command line, in the environment
/// or in the configuration file.
pub const DEFAULT_PDF_PATH: &str = "Concept Note - AFF System Initiative.pdf";

#[derive(Parser)]
#[command(name = "pdftext")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Print the text of every page of a PDF to standard output", long_about = None)]
pub struct Cli {
    /// PDF file to read (defaults to "Concept Note - AFF System Initiative.pdf")
    #[arg(env = "PDFTEXT_PATH")]
    pub path: Option<PathBuf>,

    /// Text extraction engine
    #[arg(short, long, env = "PDFTEXT_ENGINE")]
    pub engine: Option<Engine>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Engine {
    /// Page-by-page extraction with lopdf
    #[default]
    Lopdf,
    /// Whole-document extraction with pdf-extract, split by page
    PdfExtract,
}

impl std::fmt::Display for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Engine::Lopdf => write!(f, "lopdf"),
            Engine::PdfExtract => write!(f, "pdf-extract"),
        }
    }
}
