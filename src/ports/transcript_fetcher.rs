//! Transcript fetching port.

use crate::domain::AppError;

/// A fetched transcript with derived metadata.
#[derive(Debug, Clone)]
pub struct Transcript {
    /// Visible paragraph text, paragraphs joined by blank lines.
    pub text: String,
    pub word_count: usize,
    pub themes: Vec<String>,
}

/// Port for fetching and parsing a transcript page.
pub trait TranscriptFetcher {
    /// Fetch `url`, validate it, extract paragraph text, and derive themes.
    fn fetch(&self, url: &str) -> Result<Transcript, AppError>;
}
