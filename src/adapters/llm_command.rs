//! LLM provider adapter spawning the configured command-line tools.

use std::time::Duration;

use crate::adapters::subprocess::run_with_timeout;
use crate::domain::settings::{LlmSettings, Provider};
use crate::domain::AppError;
use crate::ports::LlmProvider;

const LLM_TIMEOUT: Duration = Duration::from_secs(120);

/// Invokes one of the provider CLIs (gemini, claude, codex) per call.
pub struct CommandLlmProvider {
    provider: Provider,
    settings: LlmSettings,
}

impl CommandLlmProvider {
    pub fn new(provider: Provider, settings: LlmSettings) -> Self {
        Self { provider, settings }
    }

    fn missing_hint(&self) -> &'static str {
        match self.provider {
            Provider::Gemini => "Install with: pip install google-generativeai",
            Provider::Claude => "Install the Claude Code CLI first.",
            Provider::Codex => "Install with: npm install -g @openai/codex",
        }
    }

    fn tool_label(&self) -> &'static str {
        match self.provider {
            Provider::Gemini => "Gemini CLI",
            Provider::Claude => "Claude CLI",
            Provider::Codex => "Codex CLI",
        }
    }
}

impl LlmProvider for CommandLlmProvider {
    fn name(&self) -> &str {
        self.provider.name()
    }

    fn generate(&self, prompt: &str) -> Result<String, AppError> {
        let providers = &self.settings.providers;

        let (program, args): (&str, Vec<&str>) = match self.provider {
            Provider::Gemini => (
                &providers.gemini.command,
                vec![
                    prompt,
                    &providers.gemini.model_flag,
                    &self.settings.generation.model,
                ],
            ),
            Provider::Claude => {
                (&providers.claude.command, vec![&providers.claude.prompt_flag, prompt])
            }
            Provider::Codex => (&providers.codex.command, vec![&providers.codex.subcommand, prompt]),
        };

        let captured =
            run_with_timeout(program, &args, LLM_TIMEOUT, self.tool_label(), self.missing_hint())?;

        if !captured.success {
            let details = captured.stderr.trim();
            return Err(AppError::ToolFailed {
                tool: self.tool_label().to_string(),
                details: if details.is_empty() { "Unknown error".to_string() } else { details.to_string() },
            });
        }

        Ok(captured.stdout)
    }
}
