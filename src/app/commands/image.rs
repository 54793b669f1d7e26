//! Standalone image workflow: quote → concepts → prompt → generation.

use std::io;

use rand::seq::IndexedRandom;

use crate::app::commands::{confirm, generate, output_directory};
use crate::app::output::{print_header, print_section};
use crate::app::AppContext;
use crate::domain::selection::LineReader;
use crate::domain::{
    self, AppError, Selection, Settings, format_concepts_display, format_prompt_display, styles,
};
use crate::ports::{ImageGenerator, LlmProvider, StateStore, TranscriptFetcher};

#[derive(Debug, Default)]
pub struct ImageOptions {
    pub quote: String,
    pub transcript: Option<String>,
    pub style: Option<String>,
}

pub fn execute(
    ctx: &mut AppContext,
    settings: &Settings,
    options: ImageOptions,
    input: &mut dyn LineReader,
) -> Result<i32, AppError> {
    print_header("MEDIPOST IMAGE GENERATOR");
    println!("Generate meditation images from a quote.");
    println!();
    println!("LLM for concept generation: {}", ctx.llm.name());

    // Step 1: inputs
    print_section("STEP 1: INPUT");

    let quote = options.quote;
    println!("Quote: \"{quote}\"");

    let mut themes = Vec::new();
    if let Some(url) = &options.transcript {
        println!();
        println!("Transcript URL: {url}");
        println!("  Fetching transcript...");
        match ctx.fetcher.fetch(url) {
            Ok(transcript) => {
                themes = transcript.themes;
                println!("  Extracted themes: {}", themes.join(", "));
            }
            Err(e) => {
                println!("  Warning: Could not fetch transcript: {e}");
                println!("  Proceeding without themes.");
            }
        }
    } else {
        println!();
        println!("No transcript URL provided - using quote only for concept generation.");
    }

    // Step 2: art style
    print_section("STEP 2: ART STYLE");

    let rotation = ctx.store.load_art_styles()?;
    let style = match &options.style {
        Some(id) => {
            let style = styles::art_style_by_id(id, &rotation).cloned().ok_or_else(|| {
                AppError::UnknownStyle {
                    id: id.clone(),
                    available: styles::available_ids(rotation.iter().map(|s| &s.id)),
                }
            })?;
            println!("Using specified style: {}", style.name);
            style
        }
        None => {
            let style =
                rotation.choose(&mut rand::rng()).cloned().ok_or(AppError::EmptyStyleRotation)?;
            println!("Randomly selected style: {}", style.name);
            style
        }
    };
    println!("  Mood keywords: {}", style.mood_keywords.join(", "));
    println!();

    // Step 3: concepts
    print_section("STEP 3: IMAGE CONCEPTS");

    println!("Generating 3 concepts using {}...", ctx.llm.name());
    let concepts = generate::concepts(ctx.llm.as_ref(), &quote, &themes, &style)?;
    println!("Generated {} concepts", concepts.len());
    println!();
    println!("{}", format_concepts_display(&concepts));
    println!();

    let llm = ctx.llm.as_ref();
    let selected = match domain::choose(
        &mut io::stdout(),
        input,
        concepts,
        "concept",
        |concepts| format_concepts_display(concepts),
        || generate::concepts(llm, &quote, &themes, &style),
    )? {
        Selection::Chosen(concept) => concept,
        Selection::Cancelled => {
            println!("Cancelled.");
            return Ok(0);
        }
    };
    println!("\nSelected: [{}]", selected.setting);

    // Step 4: final prompt and generation
    print_section("STEP 4: IMAGE PROMPT");

    let image_prompt = domain::build_concept_prompt(&selected, &style, &settings.image_generation);
    println!("{}", format_prompt_display(&image_prompt));

    let output_dir = output_directory(&settings.output);
    println!("Images will be saved to: {}", output_dir.display());
    println!();

    if confirm(input, "Generate images now?")? {
        println!();
        println!("Generating images via Claude CLI (this may take a minute)...");
        match ctx.images.generate(&image_prompt, &output_dir) {
            Ok(()) => println!("  Images generated successfully!"),
            Err(e) => {
                println!("  Image generation failed: {e}");
                println!("  You can generate manually later.");
            }
        }
    } else {
        println!();
        println!("Skipping image generation.");
        println!("To generate later, copy the prompt above and run:");
        println!("  claude -p \"Generate {} images with: [prompt]\"", image_prompt.n);
    }

    println!();
    println!("Done!");
    Ok(0)
}
