mod clipboard_writer;
mod file_opener;
mod image_generator;
mod llm_provider;
mod state_store;
mod transcript_fetcher;
mod url_shortener;

pub use clipboard_writer::{ClipboardWriter, NoopClipboard};
pub use file_opener::FileOpener;
pub use image_generator::ImageGenerator;
pub use llm_provider::LlmProvider;
pub use state_store::StateStore;
pub use transcript_fetcher::{Transcript, TranscriptFetcher};
pub use url_shortener::UrlShortener;
