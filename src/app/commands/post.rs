//! The full post workflow: URLs → transcript → hooks → style → image prompt
//! → compose → finalize.

use std::io::{self, Write};

use crate::app::commands::{ask, ask_with_default, confirm, finalize, generate, output_directory};
use crate::app::output::{format_success_message, print_header, print_section};
use crate::app::AppContext;
use crate::domain::selection::LineReader;
use crate::domain::styles::ArtStyle;
use crate::domain::{
    self, AppError, Selection, Settings, episode, format_hooks_display, format_post_preview,
    format_prompt_display, styles, themes,
};
use crate::ports::{ImageGenerator, LlmProvider, StateStore, TranscriptFetcher, UrlShortener};

/// Inputs taken from CLI flags; anything absent is asked interactively.
#[derive(Debug, Default)]
pub struct PostOptions {
    pub apple: Option<String>,
    pub spotify: Option<String>,
    pub transcript: Option<String>,
    pub style: Option<String>,
}

pub fn execute(
    ctx: &mut AppContext,
    settings: &Settings,
    options: PostOptions,
    input: &mut dyn LineReader,
) -> Result<i32, AppError> {
    print_header("MEDIPOST DAILY POST GENERATOR");
    println!("Ready to create today's meditation post!");
    println!();
    println!("LLM for hook generation: {}", ctx.llm.name());

    // Step 1: episode links
    print_section("STEP 1: INPUT URLS");

    let (apple_url, spotify_url, transcript_url) = match (
        options.apple,
        options.spotify,
        options.transcript,
    ) {
        (Some(apple), Some(spotify), Some(transcript)) => {
            println!("Using provided URLs:");
            println!("  Apple: {apple}");
            println!("  Spotify: {spotify}");
            println!("  Transcript: {transcript}");
            (apple, spotify, transcript)
        }
        _ => {
            println!("Please provide the three URLs:\n");
            let apple = ask(input, "1. Apple Podcasts URL")?;
            let spotify = ask(input, "2. Spotify URL")?;
            let transcript = ask(input, "3. Transcript URL")?;
            (apple, spotify, transcript)
        }
    };

    episode::validate_urls(&apple_url, &spotify_url, &transcript_url, &settings.episode)?;
    println!("\n✓ URLs validated");

    // Step 2: fetch and derive
    print_section("STEP 2: PROCESSING");

    let episode_title = episode::extract_title_from_apple_url(&apple_url, &settings.episode)?;
    println!("✓ Extracted title: \"{episode_title}\"");

    println!("  Fetching transcript...");
    let transcript = ctx.fetcher.fetch(&transcript_url)?;
    println!("✓ Fetched transcript ({} words)", transcript.word_count);
    println!("✓ Analyzed themes: {}", transcript.themes.join(", "));

    println!("  Shortening transcript URL...");
    let transcript_url_shortened = ctx.shortener.shorten(&transcript_url);
    if transcript_url_shortened != transcript_url {
        println!("✓ Shortened URL: {transcript_url_shortened}");
    } else {
        println!("  (Using original URL)");
    }
    if let Some(cache) = ctx.shortener.dirty_cache()
        && let Err(e) = ctx.store.save_shorten_cache(cache)
    {
        eprintln!("Warning: failed to save shortener cache: {e}");
    }

    // Step 3: hooks
    print_section("STEP 3: HOOK OPTIONS");

    let excerpt = themes::transcript_excerpt(&transcript.text, themes::EXCERPT_MAX_WORDS);

    println!("Generating 15 hooks using {}...", ctx.llm.name());
    let hooks = generate::hooks(ctx.llm.as_ref(), &episode_title, &excerpt)?;
    println!("✓ Generated {} hooks", hooks.len());
    println!();
    println!("{}", format_hooks_display(&hooks));
    println!();
    println!("{}", "─".repeat(40));

    let llm = ctx.llm.as_ref();
    let selected_hook = match domain::choose(
        &mut io::stdout(),
        input,
        hooks,
        "hook",
        |hooks| format_hooks_display(hooks),
        || generate::hooks(llm, &episode_title, &excerpt),
    )? {
        Selection::Chosen(hook) => hook,
        Selection::Cancelled => {
            println!("Cancelled.");
            return Ok(0);
        }
    };
    println!("\n✓ Selected: \"{}\"", selected_hook.text);

    // Step 4: art style and image prompt
    print_section("STEP 4: IMAGE GENERATION");

    let rotation = ctx.store.load_art_styles()?;
    let state = ctx.store.load_rotation()?;
    let default_style = styles::current_style(state.style_rotation_index, &rotation)?.clone();

    let style = match &options.style {
        Some(id) => styles::art_style_by_id(id, &rotation)
            .cloned()
            .ok_or_else(|| AppError::UnknownStyle {
                id: id.clone(),
                available: styles::available_ids(rotation.iter().map(|s| &s.id)),
            })?,
        None => select_art_style(input, &rotation, &default_style)?,
    };

    println!();
    println!("Art style: {}", style.name);
    println!("Theme alignment: {}", style.mood_keywords.join(", "));
    println!();

    let image_prompt =
        domain::build_image_prompt(&selected_hook.text, &transcript.themes, &style, &settings.image_generation);
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
        println!("To generate later, run:");
        println!("  claude -p \"Generate {} images with: [prompt above]\"", image_prompt.n);
    }

    println!();
    if !confirm(input, "Proceed to compose post?")? {
        println!("Stopping here.");
        return Ok(0);
    }

    // Step 5: compose and preview
    print_section("STEP 5: COMPOSE & PREVIEW");

    let mut post = domain::compose_post(
        &selected_hook.text,
        &episode_title,
        &apple_url,
        &spotify_url,
        &transcript_url_shortened,
        Some(&transcript_url),
        None,
    );

    println!("{}", format_post_preview(&post));

    let warnings = domain::validate_post(&post);
    if !warnings.is_empty() {
        println!("Warnings:");
        for warning in &warnings {
            println!("  ⚠ {warning}");
        }
    }

    println!();
    let choice = ask_with_default(input, "Approve? [y]es, [e]dit hook, [q]uit", "y")?;
    if choice.eq_ignore_ascii_case("q") {
        println!("Cancelled.");
        return Ok(0);
    }
    if choice.eq_ignore_ascii_case("e") {
        let new_hook = episode::clean_hook_text(&ask(input, "Enter new hook text")?)?;
        post = domain::compose_post(
            &new_hook,
            &episode_title,
            &apple_url,
            &spotify_url,
            &transcript_url_shortened,
            Some(&transcript_url),
            None,
        );
        println!("{}", format_post_preview(&post));
    }

    // Step 6: finalize
    print_section("STEP 6: FINALIZE");

    let report = finalize::run(
        ctx,
        settings,
        &post,
        &style.id,
        &style.name,
        Some(&image_prompt),
        None,
        &output_dir,
    );

    println!("{}", format_success_message(&report, &output_dir));

    if !report.warnings.is_empty() {
        println!("\nWarnings:");
        for warning in &report.warnings {
            println!("  ⚠ {warning}");
        }
    }

    io::stdout().flush()?;
    Ok(0)
}

/// Interactive style pick: number, id, or Enter for the rotation default.
/// Invalid input falls back to the default rather than looping.
fn select_art_style(
    input: &mut dyn LineReader,
    rotation: &[ArtStyle],
    default_style: &ArtStyle,
) -> Result<ArtStyle, AppError> {
    println!("Available art styles:");
    for (index, style) in rotation.iter().enumerate() {
        let marker = if style.id == default_style.id { " (default - rotation)" } else { "" };
        println!("  {}. {}{}", index + 1, style.name, marker);
    }
    println!();

    let choice = ask(
        input,
        &format!("Select style [1-{}] or Enter for default", rotation.len()),
    )?;

    if choice.is_empty() {
        println!("  Using rotation default: {}", default_style.name);
        return Ok(default_style.clone());
    }

    if let Ok(number) = choice.parse::<usize>() {
        if number >= 1 && number <= rotation.len() {
            let style = &rotation[number - 1];
            println!("  Selected: {}", style.name);
            return Ok(style.clone());
        }
        println!("  Invalid choice, using default: {}", default_style.name);
        return Ok(default_style.clone());
    }

    match styles::art_style_by_id(&choice, rotation) {
        Some(style) => {
            println!("  Selected: {}", style.name);
            Ok(style.clone())
        }
        None => {
            println!("  Invalid choice, using default: {}", default_style.name);
            Ok(default_style.clone())
        }
    }
}
