//! Transcript fetcher over blocking HTTP with retry and HTML extraction.

use std::thread;
use std::time::Duration;

use reqwest::blocking::Client;

use crate::domain::settings::EpisodeSettings;
use crate::domain::{episode, themes, AppError};
use crate::ports::{Transcript, TranscriptFetcher};

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);
const MAX_ATTEMPTS: u32 = 3;
const RENDER_WIDTH: usize = 500;

/// Paragraphs starting with this phrase are the closing prayer and are
/// excluded from the transcript text.
const CLOSING_PRAYER_PREFIX: &str = "I thank you, my God";

/// HTTP transport for transcript pages.
///
/// Performs up to three attempts per fetch with 1s/2s/4s backoff between
/// them, then extracts visible paragraph text from the returned HTML.
pub struct HttpTranscriptFetcher {
    client: Client,
    episode: EpisodeSettings,
}

impl HttpTranscriptFetcher {
    pub fn new(episode: EpisodeSettings) -> Result<Self, AppError> {
        let client = Client::builder().timeout(FETCH_TIMEOUT).build().map_err(|e| {
            AppError::Configuration(format!("Failed to create HTTP client: {e}"))
        })?;
        Ok(Self { client, episode })
    }

    fn get_with_retry(&self, url: &str) -> Result<String, AppError> {
        let mut last_error = String::new();

        for attempt in 1..=MAX_ATTEMPTS {
            match self.get_once(url) {
                Ok(body) => return Ok(body),
                Err(details) => {
                    last_error = details;
                    if attempt < MAX_ATTEMPTS {
                        // 1s, 2s, 4s
                        thread::sleep(Duration::from_secs(1 << (attempt - 1)));
                    }
                }
            }
        }

        Err(AppError::FetchFailed { url: url.to_string(), details: last_error })
    }

    fn get_once(&self, url: &str) -> Result<String, String> {
        let response = self.client.get(url).send().map_err(|e| e.to_string())?;
        let response = response.error_for_status().map_err(|e| e.to_string())?;
        response.text().map_err(|e| e.to_string())
    }
}

impl TranscriptFetcher for HttpTranscriptFetcher {
    fn fetch(&self, url: &str) -> Result<Transcript, AppError> {
        episode::validate_transcript_url(url, &self.episode)?;

        let html = self.get_with_retry(url)?;
        let text = extract_paragraph_text(&html);
        if text.is_empty() {
            return Err(AppError::EmptyTranscript(url.to_string()));
        }

        let word_count = text.split_whitespace().count();
        let themes = themes::extract_themes(&text);

        Ok(Transcript { text, word_count, themes })
    }
}

/// Render HTML to text and keep paragraph blocks, excluding the closing
/// prayer. Wrapped lines within a block are re-joined with single spaces.
pub fn extract_paragraph_text(html: &str) -> String {
    let rendered = html2text::from_read(html.as_bytes(), RENDER_WIDTH).unwrap_or_default();

    let paragraphs: Vec<String> = rendered
        .split("\n\n")
        .map(|block| {
            block
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .filter(|paragraph| !paragraph.is_empty())
        .filter(|paragraph| !paragraph.starts_with(CLOSING_PRAYER_PREFIX))
        .collect();

    paragraphs.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_paragraphs_and_drops_the_closing_prayer() {
        let html = "<html><body><article>\
            <p>First paragraph about peace.</p>\
            <p>I thank you, my God, for this day of prayer.</p>\
            <p>Second paragraph about trust.</p>\
            </article></body></html>";
        let text = extract_paragraph_text(html);
        assert!(text.contains("First paragraph about peace."));
        assert!(text.contains("Second paragraph about trust."));
        assert!(!text.contains("I thank you, my God"));
    }

    #[test]
    fn empty_document_extracts_nothing() {
        assert!(extract_paragraph_text("<html><body></body></html>").is_empty());
    }

    #[test]
    fn invalid_url_is_rejected_before_any_request() {
        let fetcher = HttpTranscriptFetcher::new(EpisodeSettings::default()).unwrap();
        assert!(matches!(
            fetcher.fetch("https://example.com/meditations/x/"),
            Err(AppError::InvalidUrl { .. })
        ));
    }
}
