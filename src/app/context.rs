use crate::adapters::shortener_command::CommandUrlShortener;
use crate::ports::{
    ClipboardWriter, FileOpener, ImageGenerator, LlmProvider, StateStore, TranscriptFetcher,
};

/// Application context holding the wired collaborators for one command run.
///
/// Every external dependency sits behind a port so workflows stay testable
/// without processes, network, or a clipboard. The shortener stays concrete
/// because its cache is read back for persistence after the shorten step.
pub struct AppContext {
    pub store: Box<dyn StateStore>,
    pub fetcher: Box<dyn TranscriptFetcher>,
    pub llm: Box<dyn LlmProvider>,
    pub shortener: CommandUrlShortener,
    pub clipboard: Box<dyn ClipboardWriter>,
    pub opener: Box<dyn FileOpener>,
    pub images: Box<dyn ImageGenerator>,
}
