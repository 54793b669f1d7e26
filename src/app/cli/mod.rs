//! CLI Adapter.

mod line_reader;

use std::str::FromStr;

use clap::{Parser, Subcommand};

use crate::adapters::clipboard_arboard::ArboardClipboardWriter;
use crate::adapters::image_claude::ClaudeImageGenerator;
use crate::adapters::llm_command::CommandLlmProvider;
use crate::adapters::opener_system::SystemFileOpener;
use crate::adapters::shortener_command::CommandUrlShortener;
use crate::adapters::state_filesystem::FilesystemStateStore;
use crate::adapters::transcript_http::HttpTranscriptFetcher;
use crate::app::commands::comic::{self, ComicOptions};
use crate::app::commands::history;
use crate::app::commands::image::{self, ImageOptions};
use crate::app::commands::post::{self, PostOptions};
use crate::app::AppContext;
use crate::domain::settings::Provider;
use crate::domain::{AppError, Settings};
use crate::ports::{ClipboardWriter, StateStore};

use line_reader::DialoguerLineReader;

#[derive(Parser)]
#[command(name = "medipost")]
#[command(version)]
#[command(
    about = "Turn meditation transcripts into short social posts with generated artwork",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full daily post workflow
    #[clap(visible_alias = "p")]
    Post {
        /// LLM provider for hook generation (gemini, claude, codex)
        #[arg(short, long, value_name = "PROVIDER")]
        llm: Option<String>,
        /// Apple Podcasts URL
        #[arg(long, value_name = "URL")]
        apple: Option<String>,
        /// Spotify URL
        #[arg(long, value_name = "URL")]
        spotify: Option<String>,
        /// Transcript URL
        #[arg(long, value_name = "URL")]
        transcript: Option<String>,
        /// Art style ID (e.g. hopper, vermeer, hasui)
        #[arg(long, value_name = "ID")]
        style: Option<String>,
    },
    /// Generate meditation images from a quote
    #[clap(visible_alias = "i")]
    Image {
        /// Quote to visualize
        #[arg(short, long, value_name = "TEXT")]
        quote: String,
        /// Transcript URL for theme extraction
        #[arg(short, long, value_name = "URL")]
        transcript: Option<String>,
        /// Art style ID; random if not specified
        #[arg(short, long, value_name = "ID")]
        style: Option<String>,
        /// LLM provider for concept generation (gemini, claude, codex)
        #[arg(short, long, value_name = "PROVIDER")]
        llm: Option<String>,
    },
    /// Generate 4-panel comic strips from a transcript
    #[clap(visible_alias = "c")]
    Comic {
        /// Transcript URL
        #[arg(short, long, value_name = "URL")]
        transcript: String,
        /// Comic style ID; random if not specified
        #[arg(short, long, value_name = "ID")]
        style: Option<String>,
        /// LLM provider for concept generation (gemini, claude, codex)
        #[arg(short, long, value_name = "PROVIDER")]
        llm: Option<String>,
    },
    /// Show post history
    History,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<i32, AppError> = match cli.command {
        Commands::Post { llm, apple, spotify, transcript, style } => {
            run_post(llm, PostOptions { apple, spotify, transcript, style })
        }
        Commands::Image { quote, transcript, style, llm } => {
            run_image(llm, ImageOptions { quote, transcript, style })
        }
        Commands::Comic { transcript, style, llm } => {
            run_comic(llm, ComicOptions { transcript, style })
        }
        Commands::History => run_history(),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_post(llm: Option<String>, options: PostOptions) -> Result<i32, AppError> {
    let (mut ctx, settings) = wire(parse_provider(llm)?)?;
    post::execute(&mut ctx, &settings, options, &mut DialoguerLineReader)
}

fn run_image(llm: Option<String>, options: ImageOptions) -> Result<i32, AppError> {
    let (mut ctx, settings) = wire(parse_provider(llm)?)?;
    image::execute(&mut ctx, &settings, options, &mut DialoguerLineReader)
}

fn run_comic(llm: Option<String>, options: ComicOptions) -> Result<i32, AppError> {
    let (mut ctx, settings) = wire(parse_provider(llm)?)?;
    comic::execute(&mut ctx, &settings, options, &mut DialoguerLineReader)
}

fn run_history() -> Result<i32, AppError> {
    let store = FilesystemStateStore::from_env()?;
    history::execute(&store)
}

fn parse_provider(flag: Option<String>) -> Result<Option<Provider>, AppError> {
    flag.map(|value| Provider::from_str(&value)).transpose()
}

/// Build the full adapter set for one command run.
fn wire(provider_override: Option<Provider>) -> Result<(AppContext, Settings), AppError> {
    let store = FilesystemStateStore::from_env()?;
    let settings = store.load_settings()?;

    let provider = provider_override.unwrap_or(settings.llm.generation.provider);
    let llm = CommandLlmProvider::new(provider, settings.llm.clone());
    let fetcher = HttpTranscriptFetcher::new(settings.episode.clone())?;
    let shortener = CommandUrlShortener::new(
        settings.url_shortener.clone(),
        store.load_shorten_cache()?,
    );
    let clipboard: Box<dyn ClipboardWriter> = match ArboardClipboardWriter::new() {
        Ok(writer) => Box::new(writer),
        Err(e) => Box::new(UnavailableClipboard(e.to_string())),
    };
    let images = ClaudeImageGenerator::new(settings.llm.providers.claude.clone());

    let ctx = AppContext {
        store: Box::new(store),
        fetcher: Box::new(fetcher),
        llm: Box::new(llm),
        shortener,
        clipboard,
        opener: Box::new(SystemFileOpener),
        images: Box::new(images),
    };

    Ok((ctx, settings))
}

/// Stands in when no clipboard backend is available (e.g. headless), so the
/// failure surfaces as a finalize warning instead of aborting startup.
struct UnavailableClipboard(String);

impl ClipboardWriter for UnavailableClipboard {
    fn write_text(&mut self, _text: &str) -> Result<(), AppError> {
        Err(AppError::Configuration(self.0.clone()))
    }
}
