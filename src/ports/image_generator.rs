//! Image-generation tool port.

use std::path::Path;

use crate::domain::prompt::GenerationPrompt;
use crate::domain::AppError;

/// Port for the external image-generation tool.
pub trait ImageGenerator {
    /// Generate `prompt.n` variations into `output_dir`.
    fn generate(&self, prompt: &GenerationPrompt, output_dir: &Path) -> Result<(), AppError>;
}
