//! Comic workflow: transcript → four strip concepts → prompt → generation.

use std::io;

use rand::seq::IndexedRandom;

use crate::app::commands::{confirm, generate, output_directory};
use crate::app::output::{print_header, print_section};
use crate::app::AppContext;
use crate::domain::selection::LineReader;
use crate::domain::{
    self, AppError, Selection, Settings, format_comic_concepts_display, format_prompt_display,
    styles, themes,
};
use crate::ports::{ImageGenerator, LlmProvider, StateStore, TranscriptFetcher};

#[derive(Debug, Default)]
pub struct ComicOptions {
    pub transcript: String,
    pub style: Option<String>,
}

pub fn execute(
    ctx: &mut AppContext,
    settings: &Settings,
    options: ComicOptions,
    input: &mut dyn LineReader,
) -> Result<i32, AppError> {
    print_header("MEDIPOST 4-PANEL COMIC GENERATOR");
    println!("Generate 4-panel comic strips from meditation transcripts.");
    println!();
    println!("LLM for concept generation: {}", ctx.llm.name());

    // Step 1: transcript
    print_section("STEP 1: FETCH TRANSCRIPT");

    println!("Transcript URL: {}", options.transcript);
    println!("  Fetching transcript...");
    let transcript = ctx.fetcher.fetch(&options.transcript)?;
    println!("  Word count: {}", transcript.word_count);
    println!("  Extracted themes: {}", transcript.themes.join(", "));

    let excerpt = themes::transcript_excerpt(&transcript.text, themes::EXCERPT_MAX_WORDS);

    // Step 2: comic style
    print_section("STEP 2: COMIC STYLE");

    let comic_styles = ctx.store.load_comic_styles()?;
    let style = match &options.style {
        Some(id) => {
            let style = styles::comic_style_by_id(id, &comic_styles).cloned().ok_or_else(|| {
                AppError::UnknownStyle {
                    id: id.clone(),
                    available: styles::available_ids(comic_styles.iter().map(|s| &s.id)),
                }
            })?;
            println!("Using specified style: {}", style.name);
            style
        }
        None => {
            let style = comic_styles
                .choose(&mut rand::rng())
                .cloned()
                .ok_or(AppError::EmptyStyleRotation)?;
            println!("Randomly selected style: {}", style.name);
            style
        }
    };
    println!("  Artists: {}", style.artists.join(", "));
    println!();

    // Step 3: concepts
    print_section("STEP 3: COMIC CONCEPTS");

    println!("Generating 4 comic strip concepts using {}...", ctx.llm.name());
    let concepts =
        generate::comic_concepts(ctx.llm.as_ref(), &transcript.themes, &excerpt, &style)?;
    println!("Generated {} concepts", concepts.len());
    println!();
    println!("{}", format_comic_concepts_display(&concepts));
    println!();

    let llm = ctx.llm.as_ref();
    let selected = match domain::choose(
        &mut io::stdout(),
        input,
        concepts,
        "concept",
        |concepts| format_comic_concepts_display(concepts),
        || generate::comic_concepts(llm, &transcript.themes, &excerpt, &style),
    )? {
        Selection::Chosen(concept) => concept,
        Selection::Cancelled => {
            println!("Cancelled.");
            return Ok(0);
        }
    };
    println!("\nSelected: [{}]", selected.title);

    // Step 4: final prompt and generation
    print_section("STEP 4: COMIC PROMPT");

    let image_prompt = domain::build_comic_prompt(&selected, &style, &settings.image_generation);
    println!("{}", format_prompt_display(&image_prompt));

    let output_dir = output_directory(&settings.output);
    println!("Images will be saved to: {}", output_dir.display());
    println!();

    if confirm(input, "Generate comic images now?")? {
        println!();
        println!("Generating comic via Claude CLI (this may take a minute)...");
        match ctx.images.generate(&image_prompt, &output_dir) {
            Ok(()) => println!("  Comic generated successfully!"),
            Err(e) => {
                println!("  Comic generation failed: {e}");
                println!("  You can generate manually later.");
            }
        }
    } else {
        println!();
        println!("Skipping comic generation.");
        println!("To generate later, copy the prompt above and run:");
        println!("  claude -p \"Generate {} images with: [prompt]\"", image_prompt.n);
    }

    println!();
    println!("Done!");
    Ok(0)
}
