//! LLM text-generation provider port.

use crate::domain::AppError;

/// Port for free-text generation through an external LLM tool.
///
/// The core parsing and selection logic depends only on this trait, so it
/// stays fully unit-testable without spawning processes.
pub trait LlmProvider {
    /// Provider name for operator-facing messages ("gemini", "claude", ...).
    fn name(&self) -> &str;

    /// Send a prompt and return the raw text response.
    fn generate(&self, prompt: &str) -> Result<String, AppError>;
}
