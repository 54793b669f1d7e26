//! Generation calls: render the prompt template, invoke the provider,
//! parse the raw response. Parse degradation is not an error here; a short
//! list is a valid outcome the selection loop is bounded by.

use crate::adapters::prompt_assets;
use crate::domain::styles::{ArtStyle, ComicStyle};
use crate::domain::{
    AppError, ComicConcept, Hook, ImageConcept, parse_comic_concepts, parse_concepts, parse_hooks,
};
use crate::ports::LlmProvider;

/// Generate hook candidates for an episode.
pub fn hooks(
    llm: &dyn LlmProvider,
    episode_title: &str,
    transcript_excerpt: &str,
) -> Result<Vec<Hook>, AppError> {
    let prompt = prompt_assets::render_hook_prompt(episode_title, transcript_excerpt)?;
    let response = llm.generate(&prompt)?;
    Ok(parse_hooks(&response))
}

/// Generate image concepts for a quote.
pub fn concepts(
    llm: &dyn LlmProvider,
    quote: &str,
    themes: &[String],
    style: &ArtStyle,
) -> Result<Vec<ImageConcept>, AppError> {
    let prompt = prompt_assets::render_concept_prompt(quote, themes, style)?;
    let response = llm.generate(&prompt)?;
    Ok(parse_concepts(&response))
}

/// Generate comic strip concepts from a transcript.
pub fn comic_concepts(
    llm: &dyn LlmProvider,
    themes: &[String],
    transcript_excerpt: &str,
    style: &ComicStyle,
) -> Result<Vec<ComicConcept>, AppError> {
    let prompt = prompt_assets::render_comic_prompt(themes, transcript_excerpt, style)?;
    let response = llm.generate(&prompt)?;
    Ok(parse_comic_concepts(&response))
}
