pub mod comic;
pub mod finalize;
pub mod generate;
pub mod history;
pub mod image;
pub mod post;

use std::path::PathBuf;

use crate::domain::selection::LineReader;
use crate::domain::settings::OutputSettings;
use crate::domain::AppError;

/// Ask for one line of input, trimmed.
pub fn ask(input: &mut dyn LineReader, prompt: &str) -> Result<String, AppError> {
    Ok(input.read_line(prompt)?.trim().to_string())
}

/// Ask with a default shown in brackets; empty input takes the default.
pub fn ask_with_default(
    input: &mut dyn LineReader,
    prompt: &str,
    default: &str,
) -> Result<String, AppError> {
    let answer = input.read_line(&format!("{prompt} [{default}]"))?;
    let answer = answer.trim();
    Ok(if answer.is_empty() { default.to_string() } else { answer.to_string() })
}

/// Yes/no question defaulting to yes.
pub fn confirm(input: &mut dyn LineReader, prompt: &str) -> Result<bool, AppError> {
    Ok(ask_with_default(input, &format!("{prompt} [y/n]"), "y")?.eq_ignore_ascii_case("y"))
}

/// Resolve the configured image output directory, expanding a leading `~/`.
pub fn output_directory(output: &OutputSettings) -> PathBuf {
    let raw = &output.image_directory;
    if let Some(rest) = raw.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(rest);
    }
    PathBuf::from(raw)
}
