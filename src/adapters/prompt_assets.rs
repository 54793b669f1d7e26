//! Embedded LLM prompt templates, rendered with Minijinja.

use include_dir::{Dir, include_dir};
use minijinja::{Environment, UndefinedBehavior, context};

use crate::domain::styles::{ArtStyle, ComicStyle};
use crate::domain::AppError;

static PROMPTS_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/prompts");

const HOOK_TEMPLATE: &str = "hook_generation.md";
const CONCEPT_TEMPLATE: &str = "concept_generation.md";
const COMIC_TEMPLATE: &str = "comic_generation.md";

/// Themes fallback used when a transcript yielded none.
const DEFAULT_CONCEPT_THEMES: &str = "general meditation, peace, reflection";
const DEFAULT_COMIC_THEMES: &str = "meditation, peace, reflection";

/// Characters of transcript excerpt passed to the comic template.
const COMIC_EXCERPT_CAP: usize = 2000;

/// Render the hook-generation prompt.
pub fn render_hook_prompt(episode_title: &str, transcript_excerpt: &str) -> Result<String, AppError> {
    render(
        HOOK_TEMPLATE,
        context! { episode_title => episode_title, transcript_excerpt => transcript_excerpt },
    )
}

/// Render the image-concept-generation prompt.
pub fn render_concept_prompt(
    quote: &str,
    themes: &[String],
    style: &ArtStyle,
) -> Result<String, AppError> {
    let themes = join_themes(themes, DEFAULT_CONCEPT_THEMES);
    render(
        CONCEPT_TEMPLATE,
        context! {
            quote => quote,
            themes => themes,
            style_name => &style.name,
            style_description => &style.prompt_elements.style_description,
            color_palette => &style.prompt_elements.color_palette,
            composition => &style.prompt_elements.composition,
        },
    )
}

/// Render the comic-concept-generation prompt.
pub fn render_comic_prompt(
    themes: &[String],
    transcript_excerpt: &str,
    style: &ComicStyle,
) -> Result<String, AppError> {
    let themes = join_themes(themes, DEFAULT_COMIC_THEMES);
    let excerpt: String = transcript_excerpt.chars().take(COMIC_EXCERPT_CAP).collect();
    render(
        COMIC_TEMPLATE,
        context! {
            themes => themes,
            transcript_excerpt => excerpt,
            style_name => &style.name,
            style_description => &style.prompt_elements.style_description,
        },
    )
}

fn join_themes(themes: &[String], fallback: &str) -> String {
    if themes.is_empty() { fallback.to_string() } else { themes.join(", ") }
}

fn render(name: &str, ctx: minijinja::Value) -> Result<String, AppError> {
    let source = PROMPTS_DIR
        .get_file(name)
        .and_then(|file| file.contents_utf8())
        .ok_or_else(|| AppError::TemplateError {
            template: name.to_string(),
            reason: "embedded template missing".to_string(),
        })?;

    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.render_str(source, ctx).map_err(|e| AppError::TemplateError {
        template: name.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::styles::PromptElements;

    fn art_style() -> ArtStyle {
        ArtStyle {
            id: "hopper".to_string(),
            name: "Edward Hopper".to_string(),
            mood_keywords: Vec::new(),
            cultural_fit: Vec::new(),
            prompt_elements: PromptElements {
                style_description: "in quiet realism".to_string(),
                color_palette: "muted".to_string(),
                composition: "diagonals".to_string(),
                avoid: String::new(),
            },
        }
    }

    #[test]
    fn hook_prompt_substitutes_title_and_excerpt() {
        let prompt = render_hook_prompt("The Good Shepherd", "an excerpt").unwrap();
        assert!(prompt.contains("\"The Good Shepherd\""));
        assert!(prompt.contains("an excerpt"));
        assert!(prompt.contains("15"));
    }

    #[test]
    fn concept_prompt_substitutes_style_fields() {
        let prompt =
            render_concept_prompt("Begin again.", &["peace".to_string()], &art_style()).unwrap();
        assert!(prompt.contains("Begin again."));
        assert!(prompt.contains("peace"));
        assert!(prompt.contains("in quiet realism"));
        assert!(prompt.contains("Edward Hopper"));
    }

    #[test]
    fn empty_themes_fall_back_to_generic_list() {
        let prompt = render_concept_prompt("q", &[], &art_style()).unwrap();
        assert!(prompt.contains("general meditation, peace, reflection"));
    }

    #[test]
    fn comic_prompt_caps_the_excerpt() {
        let style = ComicStyle {
            id: "moebius".to_string(),
            name: "Moebius".to_string(),
            artists: Vec::new(),
            prompt_elements: PromptElements::default(),
        };
        let long = "x".repeat(5000);
        let prompt = render_comic_prompt(&[], &long, &style).unwrap();
        assert!(!prompt.contains(&"x".repeat(2001)));
        assert!(prompt.contains(&"x".repeat(2000)));
    }
}
