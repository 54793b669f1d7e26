//! Settings model for `config/settings.json`.
//!
//! Every field carries a serde default so a partially filled settings file
//! (or none at all) still yields a usable configuration.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Top-level settings document.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub llm: LlmSettings,
    #[serde(default)]
    pub image_generation: ImageSettings,
    #[serde(default)]
    pub url_shortener: ShortenerSettings,
    #[serde(default)]
    pub output: OutputSettings,
    #[serde(default)]
    pub episode: EpisodeSettings,
}

/// LLM provider selection plus per-provider command configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LlmSettings {
    #[serde(default)]
    pub generation: GenerationSettings,
    #[serde(default)]
    pub providers: ProviderSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GenerationSettings {
    #[serde(default = "default_provider")]
    pub provider: Provider,
    #[serde(default = "default_model")]
    pub model: String,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self { provider: default_provider(), model: default_model() }
    }
}

fn default_provider() -> Provider {
    Provider::Gemini
}

fn default_model() -> String {
    "gemini-2.5-pro".to_string()
}

/// External command names and flags, one block per provider CLI.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProviderSettings {
    #[serde(default)]
    pub gemini: GeminiSettings,
    #[serde(default)]
    pub claude: ClaudeSettings,
    #[serde(default)]
    pub codex: CodexSettings,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            gemini: GeminiSettings::default(),
            claude: ClaudeSettings::default(),
            codex: CodexSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeminiSettings {
    #[serde(default = "default_gemini_command")]
    pub command: String,
    #[serde(default = "default_gemini_model_flag")]
    pub model_flag: String,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self { command: default_gemini_command(), model_flag: default_gemini_model_flag() }
    }
}

fn default_gemini_command() -> String {
    "gemini".to_string()
}

fn default_gemini_model_flag() -> String {
    "--model".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClaudeSettings {
    #[serde(default = "default_claude_command")]
    pub command: String,
    #[serde(default = "default_claude_prompt_flag")]
    pub prompt_flag: String,
}

impl Default for ClaudeSettings {
    fn default() -> Self {
        Self { command: default_claude_command(), prompt_flag: default_claude_prompt_flag() }
    }
}

fn default_claude_command() -> String {
    "claude".to_string()
}

fn default_claude_prompt_flag() -> String {
    "-p".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CodexSettings {
    #[serde(default = "default_codex_command")]
    pub command: String,
    #[serde(default = "default_codex_subcommand")]
    pub subcommand: String,
}

impl Default for CodexSettings {
    fn default() -> Self {
        Self { command: default_codex_command(), subcommand: default_codex_subcommand() }
    }
}

fn default_codex_command() -> String {
    "codex".to_string()
}

fn default_codex_subcommand() -> String {
    "exec".to_string()
}

/// Fixed parameters handed to the image-generation collaborator.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ImageSettings {
    #[serde(default = "default_model_tier")]
    pub model_tier: String,
    #[serde(default = "default_resolution")]
    pub resolution: String,
    #[serde(default = "default_aspect_ratio")]
    pub aspect_ratio: String,
    #[serde(default = "default_variations_count")]
    pub variations_count: u32,
}

impl Default for ImageSettings {
    fn default() -> Self {
        Self {
            model_tier: default_model_tier(),
            resolution: default_resolution(),
            aspect_ratio: default_aspect_ratio(),
            variations_count: default_variations_count(),
        }
    }
}

fn default_model_tier() -> String {
    "pro".to_string()
}

fn default_resolution() -> String {
    "high".to_string()
}

fn default_aspect_ratio() -> String {
    "4:3".to_string()
}

fn default_variations_count() -> u32 {
    3
}

/// URL-shortener subprocess configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ShortenerSettings {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_true")]
    pub cache_enabled: bool,
    #[serde(default = "default_shortener_command")]
    pub command: String,
    #[serde(default)]
    pub script_path: Option<String>,
}

impl Default for ShortenerSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            cache_enabled: true,
            command: default_shortener_command(),
            script_path: None,
        }
    }
}

fn default_shortener_command() -> String {
    "python".to_string()
}

/// Finalization output behavior.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputSettings {
    #[serde(default = "default_true")]
    pub copy_to_clipboard: bool,
    #[serde(default = "default_true")]
    pub reveal_after_finalize: bool,
    #[serde(default = "default_image_directory")]
    pub image_directory: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            copy_to_clipboard: true,
            reveal_after_finalize: true,
            image_directory: default_image_directory(),
        }
    }
}

fn default_image_directory() -> String {
    "~/Desktop".to_string()
}

/// Expected hosts and podcast id for episode link validation.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EpisodeSettings {
    #[serde(default = "default_podcast_id")]
    pub podcast_id: String,
    #[serde(default = "default_transcript_host")]
    pub transcript_host: String,
}

impl Default for EpisodeSettings {
    fn default() -> Self {
        Self { podcast_id: default_podcast_id(), transcript_host: default_transcript_host() }
    }
}

fn default_podcast_id() -> String {
    "id1643273205".to_string()
}

fn default_transcript_host() -> String {
    "frconor-ebook.github.io".to_string()
}

fn default_true() -> bool {
    true
}

/// The pluggable LLM command-line providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Gemini,
    Claude,
    Codex,
}

impl Provider {
    pub fn name(&self) -> &'static str {
        match self {
            Provider::Gemini => "gemini",
            Provider::Claude => "claude",
            Provider::Codex => "codex",
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Provider {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "gemini" => Ok(Provider::Gemini),
            "claude" => Ok(Provider::Claude),
            "codex" => Ok(Provider::Codex),
            other => Err(AppError::UnknownProvider(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn empty_document_deserializes_to_full_defaults() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.llm.generation.provider, Provider::Gemini);
        assert_eq!(settings.llm.providers.claude.prompt_flag, "-p");
        assert_eq!(settings.image_generation.variations_count, 3);
        assert_eq!(settings.image_generation.aspect_ratio, "4:3");
        assert!(settings.url_shortener.enabled);
        assert!(settings.output.copy_to_clipboard);
        assert_eq!(settings.episode.podcast_id, "id1643273205");
    }

    #[test]
    fn partial_document_keeps_remaining_defaults() {
        let settings: Settings = serde_json::from_str(
            r#"{"llm": {"generation": {"provider": "claude"}}, "image_generation": {"resolution": "medium"}}"#,
        )
        .unwrap();
        assert_eq!(settings.llm.generation.provider, Provider::Claude);
        assert_eq!(settings.llm.generation.model, "gemini-2.5-pro");
        assert_eq!(settings.image_generation.resolution, "medium");
        assert_eq!(settings.image_generation.model_tier, "pro");
    }

    #[test]
    fn provider_parses_case_insensitively() {
        assert_eq!(Provider::from_str("Gemini").unwrap(), Provider::Gemini);
        assert_eq!(Provider::from_str("CODEX").unwrap(), Provider::Codex);
        assert!(Provider::from_str("gpt").is_err());
    }
}
