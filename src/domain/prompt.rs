//! Deterministic image-generation prompt construction.
//!
//! The technical requirements block is fixed domain policy and must stay
//! byte-identical across flows.

use crate::domain::comics::ComicConcept;
use crate::domain::concepts::ImageConcept;
use crate::domain::settings::ImageSettings;
use crate::domain::styles::{ArtStyle, ComicStyle};

/// A fully-rendered prompt, ready for the image-generation collaborator.
/// Built once per selection; never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationPrompt {
    pub prompt: String,
    pub style_id: String,
    pub style_name: String,
    pub model_tier: String,
    pub resolution: String,
    pub aspect_ratio: String,
    pub n: u32,
}

const TECHNICAL_REQUIREMENTS: &[&str] = &[
    "Technical Requirements:",
    "- Apply rule of thirds, position key elements along grid lines",
    "- 1-3 human figures maximum as primary subjects",
    "- No text, watermarks, or signatures in the image",
    "- Secular scene only (no explicitly religious iconography)",
];

/// Build the image prompt for a selected hook quote.
pub fn build_image_prompt(
    quote: &str,
    themes: &[String],
    style: &ArtStyle,
    image: &ImageSettings,
) -> GenerationPrompt {
    let elements = &style.prompt_elements;

    let mut parts = vec![
        format!("Create an image {}.", elements.style_description),
        String::new(),
        "Scene Requirements:".to_string(),
        format!("- The scene should visually evoke the feeling of: \"{quote}\""),
        format!("- Key themes to incorporate: {}", themes.join(", ")),
        format!("- Cultural context: {}", style.cultural_fit.join(", ")),
        format!("- Emotional mood: {}", style.mood_keywords.join(", ")),
        String::new(),
    ];
    parts.extend(visual_specifications(elements.color_palette.as_str(), &elements.composition, &elements.avoid));
    parts.extend(TECHNICAL_REQUIREMENTS.iter().map(|line| line.to_string()));

    assemble(parts, style.id.clone(), style.name.clone(), image)
}

/// Build the image prompt for a selected image concept.
pub fn build_concept_prompt(
    concept: &ImageConcept,
    style: &ArtStyle,
    image: &ImageSettings,
) -> GenerationPrompt {
    let elements = &style.prompt_elements;

    let mut parts = vec![
        format!("Create an image {}.", elements.style_description),
        String::new(),
        "Scene Requirements:".to_string(),
        format!("- Setting: {}", concept.setting),
        format!("- Scene: {}", concept.scene),
        format!("- Emotional mood: {}", concept.mood),
        format!("- Key elements: {}", concept.elements),
        String::new(),
    ];
    parts.extend(visual_specifications(&elements.color_palette, &elements.composition, &elements.avoid));
    parts.extend(TECHNICAL_REQUIREMENTS.iter().map(|line| line.to_string()));

    assemble(parts, style.id.clone(), style.name.clone(), image)
}

/// Build the four-panel comic prompt for a selected comic concept.
pub fn build_comic_prompt(
    comic: &ComicConcept,
    style: &ComicStyle,
    image: &ImageSettings,
) -> GenerationPrompt {
    let elements = &style.prompt_elements;

    let mut parts = vec![
        format!(
            "Create a single image containing a 4-panel comic strip {}.",
            elements.style_description
        ),
        String::new(),
        format!("Title: \"{}\"", comic.title),
        format!("Story arc: {}", comic.arc),
        String::new(),
        "Panels (left to right, top to bottom):".to_string(),
    ];
    for (index, (panel, dialogue)) in comic.panels.iter().zip(&comic.dialogue).enumerate() {
        parts.push(format!("- Panel {}: {}", index + 1, panel));
        parts.push(format!("  Lettering: {dialogue}"));
    }
    parts.push(String::new());
    parts.extend(visual_specifications(&elements.color_palette, &elements.composition, &elements.avoid));
    parts.extend([
        "Technical Requirements:".to_string(),
        "- Four equal panels with clean gutters in a 2x2 grid".to_string(),
        "- Hand-lettered dialogue exactly as written, nothing more".to_string(),
        "- No watermarks or signatures".to_string(),
        "- Secular scene only (no explicitly religious iconography)".to_string(),
    ]);

    assemble(parts, style.id.clone(), style.name.clone(), image)
}

fn visual_specifications(palette: &str, composition: &str, avoid: &str) -> Vec<String> {
    vec![
        "Visual Specifications:".to_string(),
        format!("- Color palette: {palette}"),
        format!("- Composition approach: {composition}"),
        format!("- Must avoid: {avoid}"),
        String::new(),
    ]
}

fn assemble(
    parts: Vec<String>,
    style_id: String,
    style_name: String,
    image: &ImageSettings,
) -> GenerationPrompt {
    GenerationPrompt {
        prompt: parts.join("\n"),
        style_id,
        style_name,
        model_tier: image.model_tier.clone(),
        resolution: image.resolution.clone(),
        aspect_ratio: image.aspect_ratio.clone(),
        n: image.variations_count,
    }
}

/// Format prompt metadata plus the prompt body for terminal display.
pub fn format_prompt_display(prompt: &GenerationPrompt) -> String {
    format!(
        "\nArt Style: {}\nModel: {}\nResolution: {}\nAspect Ratio: {}\nVariations: {}\n\nPrompt:\n{}\n{}\n{}\n",
        prompt.style_name,
        prompt.model_tier,
        prompt.resolution,
        prompt.aspect_ratio,
        prompt.n,
        "-".repeat(40),
        prompt.prompt,
        "-".repeat(40),
    )
}
