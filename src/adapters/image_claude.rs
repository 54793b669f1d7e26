//! Image generation through the Claude CLI and its image tooling.

use std::path::Path;
use std::time::Duration;

use crate::adapters::subprocess::run_with_timeout;
use crate::domain::prompt::GenerationPrompt;
use crate::domain::settings::ClaudeSettings;
use crate::domain::AppError;
use crate::ports::ImageGenerator;

const IMAGE_TIMEOUT: Duration = Duration::from_secs(120);

/// Drives image generation via `claude -p` with a rendering instruction
/// wrapped around the prepared prompt.
pub struct ClaudeImageGenerator {
    settings: ClaudeSettings,
}

impl ClaudeImageGenerator {
    pub fn new(settings: ClaudeSettings) -> Self {
        Self { settings }
    }

    fn instruction(prompt: &GenerationPrompt, output_dir: &Path) -> String {
        let files = (1..=prompt.n)
            .map(|i| format!("variation_{i}.png"))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "Generate {n} image variations with aspect ratio {ar} at {res} resolution using this prompt:\n\n{body}\n\nSave them into {dir} as {files}.",
            n = prompt.n,
            ar = prompt.aspect_ratio,
            res = prompt.resolution,
            body = prompt.prompt,
            dir = output_dir.display(),
            files = files,
        )
    }
}

impl ImageGenerator for ClaudeImageGenerator {
    fn generate(&self, prompt: &GenerationPrompt, output_dir: &Path) -> Result<(), AppError> {
        let instruction = Self::instruction(prompt, output_dir);
        let args = [self.settings.prompt_flag.as_str(), instruction.as_str()];

        let captured = run_with_timeout(
            &self.settings.command,
            &args,
            IMAGE_TIMEOUT,
            "Claude CLI",
            "Install the Claude Code CLI first.",
        )?;

        if !captured.success {
            let details = captured.stderr.trim();
            return Err(AppError::ToolFailed {
                tool: "Claude CLI".to_string(),
                details: if details.is_empty() {
                    "Unknown error".to_string()
                } else {
                    details.to_string()
                },
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::settings::ImageSettings;

    #[test]
    fn instruction_names_every_variation_file() {
        let prompt = GenerationPrompt {
            prompt: "scene body".to_string(),
            style_id: "hopper".to_string(),
            style_name: "Edward Hopper".to_string(),
            model_tier: "pro".to_string(),
            resolution: "high".to_string(),
            aspect_ratio: "4:3".to_string(),
            n: ImageSettings::default().variations_count,
        };
        let instruction = ClaudeImageGenerator::instruction(&prompt, Path::new("/tmp/out"));
        assert!(instruction.contains("scene body"));
        assert!(instruction.contains("variation_1.png, variation_2.png, variation_3.png"));
        assert!(instruction.contains("/tmp/out"));
        assert!(instruction.contains("aspect ratio 4:3"));
    }
}
