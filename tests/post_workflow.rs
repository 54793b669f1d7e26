//! Full post workflow driven end-to-end with stubbed collaborators.

use std::collections::BTreeMap;
use std::path::Path;

use medipost::adapters::shortener_command::CommandUrlShortener;
use medipost::adapters::state_filesystem::FilesystemStateStore;
use medipost::app::commands::post::{self, PostOptions};
use medipost::app::AppContext;
use medipost::domain::prompt::GenerationPrompt;
use medipost::domain::selection::LineReader;
use medipost::domain::settings::{Settings, ShortenerSettings};
use medipost::domain::AppError;
use medipost::ports::{
    FileOpener, ImageGenerator, LlmProvider, NoopClipboard, StateStore, Transcript,
    TranscriptFetcher,
};
use tempfile::TempDir;

struct ScriptedReader {
    lines: Vec<String>,
}

impl ScriptedReader {
    fn new(lines: &[&str]) -> Self {
        Self { lines: lines.iter().rev().map(|s| s.to_string()).collect() }
    }
}

impl LineReader for ScriptedReader {
    fn read_line(&mut self, _prompt: &str) -> Result<String, AppError> {
        self.lines.pop().ok_or_else(|| AppError::config_error("scripted input exhausted"))
    }
}

struct StubFetcher;

impl TranscriptFetcher for StubFetcher {
    fn fetch(&self, _url: &str) -> Result<Transcript, AppError> {
        let text = "A meditation on peace and quiet trust in the morning.".to_string();
        Ok(Transcript {
            word_count: text.split_whitespace().count(),
            themes: vec!["peace".to_string(), "trust".to_string()],
            text,
        })
    }
}

struct HookProvider;

impl LlmProvider for HookProvider {
    fn name(&self) -> &str {
        "stub"
    }

    fn generate(&self, _prompt: &str) -> Result<String, AppError> {
        Ok((1..=15).map(|i| format!("{i}. [Style {i}]: \"Hook {i}\"\n")).collect())
    }
}

struct StubOpener;

impl FileOpener for StubOpener {
    fn reveal(&self, _path: &Path) -> Result<(), AppError> {
        Ok(())
    }
}

struct StubImages;

impl ImageGenerator for StubImages {
    fn generate(&self, _prompt: &GenerationPrompt, _dir: &Path) -> Result<(), AppError> {
        Ok(())
    }
}

fn context(dir: &TempDir) -> AppContext {
    AppContext {
        store: Box::new(FilesystemStateStore::new(dir.path().to_path_buf())),
        fetcher: Box::new(StubFetcher),
        llm: Box::new(HookProvider),
        shortener: CommandUrlShortener::new(
            ShortenerSettings { enabled: false, ..ShortenerSettings::default() },
            BTreeMap::new(),
        ),
        clipboard: Box::new(NoopClipboard),
        opener: Box::new(StubOpener),
        images: Box::new(StubImages),
    }
}

fn options() -> PostOptions {
    PostOptions {
        apple: Some(
            "https://podcasts.apple.com/us/podcast/the-good-shepherd/id1643273205?i=1".to_string(),
        ),
        spotify: Some("https://open.spotify.com/episode/abc".to_string()),
        transcript: Some(
            "https://frconor-ebook.github.io/meditations/homilies/the-good-shepherd/".to_string(),
        ),
        style: Some("hopper".to_string()),
    }
}

fn settings(dir: &TempDir) -> Settings {
    let store = FilesystemStateStore::new(dir.path().to_path_buf());
    let mut settings = store.load_settings().unwrap();
    settings.output.image_directory = dir.path().join("out").display().to_string();
    settings.url_shortener.enabled = false;
    settings
}

#[test]
fn complete_run_logs_history_and_advances_rotation() {
    let dir = TempDir::new().unwrap();
    let mut ctx = context(&dir);
    let settings = settings(&dir);

    // hook 2; skip image generation; proceed; approve.
    let mut input = ScriptedReader::new(&["2", "n", "y", "y"]);
    let code = post::execute(&mut ctx, &settings, options(), &mut input).unwrap();
    assert_eq!(code, 0);

    let history = ctx.store.load_history().unwrap();
    assert_eq!(history.posts.len(), 1);
    let entry = &history.posts[0];
    assert_eq!(entry.content.hook, "Hook 2");
    assert_eq!(entry.episode.title, "The Good Shepherd");
    assert_eq!(entry.image.style_id, "hopper");
    assert!(entry.content.full_post_text.contains("Today's meditation: *The Good Shepherd*"));

    let state = ctx.store.load_rotation().unwrap();
    assert_eq!(state.style_rotation_index, 1);
    assert_eq!(state.total_posts, 1);
}

#[test]
fn quitting_at_hook_selection_cancels_cleanly() {
    let dir = TempDir::new().unwrap();
    let mut ctx = context(&dir);
    let settings = settings(&dir);

    let mut input = ScriptedReader::new(&["q"]);
    let code = post::execute(&mut ctx, &settings, options(), &mut input).unwrap();
    assert_eq!(code, 0);

    // Nothing logged, rotation untouched.
    assert!(ctx.store.load_history().unwrap().posts.is_empty());
    assert_eq!(ctx.store.load_rotation().unwrap().style_rotation_index, 0);
}

#[test]
fn invalid_selection_inputs_are_retried_then_accepted() {
    let dir = TempDir::new().unwrap();
    let mut ctx = context(&dir);
    let settings = settings(&dir);

    let mut input = ScriptedReader::new(&["bogus", "99", "3", "n", "y", "y"]);
    let code = post::execute(&mut ctx, &settings, options(), &mut input).unwrap();
    assert_eq!(code, 0);

    let history = ctx.store.load_history().unwrap();
    assert_eq!(history.posts[0].content.hook, "Hook 3");
}

#[test]
fn editing_the_hook_composes_a_new_post() {
    let dir = TempDir::new().unwrap();
    let mut ctx = context(&dir);
    let settings = settings(&dir);

    let mut input = ScriptedReader::new(&["1", "n", "y", "e", "A better hook"]);
    let code = post::execute(&mut ctx, &settings, options(), &mut input).unwrap();
    assert_eq!(code, 0);

    let history = ctx.store.load_history().unwrap();
    assert_eq!(history.posts[0].content.hook, "A better hook");
}

#[test]
fn stopping_before_compose_leaves_no_trace() {
    let dir = TempDir::new().unwrap();
    let mut ctx = context(&dir);
    let settings = settings(&dir);

    let mut input = ScriptedReader::new(&["1", "n", "n"]);
    let code = post::execute(&mut ctx, &settings, options(), &mut input).unwrap();
    assert_eq!(code, 0);

    assert!(ctx.store.load_history().unwrap().posts.is_empty());
    assert_eq!(ctx.store.load_rotation().unwrap().style_rotation_index, 0);
}
