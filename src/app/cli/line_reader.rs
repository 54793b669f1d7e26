//! Terminal-backed input for the interactive workflows.

use dialoguer::Input;

use crate::domain::selection::LineReader;
use crate::domain::AppError;

/// Reads one line per prompt from the terminal via dialoguer.
#[derive(Debug, Clone, Default)]
pub struct DialoguerLineReader;

impl LineReader for DialoguerLineReader {
    fn read_line(&mut self, prompt: &str) -> Result<String, AppError> {
        Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(|err| AppError::Configuration(format!("Failed to read input: {err}")))
    }
}
