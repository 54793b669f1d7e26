//! Post finalization: image copy, clipboard, history log, reveal, rotation.
//!
//! Every step is caught independently; the report carries partial success
//! plus the collected warnings instead of aborting the workflow.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::app::AppContext;
use crate::domain::prompt::GenerationPrompt;
use crate::domain::styles;
use crate::domain::{AppError, Post, Settings, history_entry, next_post_id};
use crate::ports::{ClipboardWriter, FileOpener, StateStore};

/// What finalization achieved, step by step.
#[derive(Debug, Default)]
pub struct FinalizeReport {
    pub image_saved: Option<PathBuf>,
    pub clipboard_copied: bool,
    pub history_id: Option<String>,
    pub revealed: bool,
    pub warnings: Vec<String>,
}

impl FinalizeReport {
    pub fn success(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Name of the final image copied into the output directory.
pub const FINAL_IMAGE_NAME: &str = "final_post.png";

/// Finalize a composed post.
///
/// The rotation index advances only here, on the finalize path; cancelled
/// and skipped workflows never move it.
pub fn run(
    ctx: &mut AppContext,
    settings: &Settings,
    post: &Post,
    style_id: &str,
    style_name: &str,
    image_prompt: Option<&GenerationPrompt>,
    selected_image: Option<&Path>,
    output_dir: &Path,
) -> FinalizeReport {
    let mut report = FinalizeReport::default();

    if let Some(source) = selected_image {
        match save_final_image(source, output_dir) {
            Ok(path) => report.image_saved = Some(path),
            Err(e) => report.warnings.push(format!("Failed to save image: {e}")),
        }
    }

    if settings.output.copy_to_clipboard {
        let text = crate::domain::format_post_text(post);
        match ctx.clipboard.write_text(&text) {
            Ok(()) => report.clipboard_copied = true,
            Err(e) => report.warnings.push(format!("Failed to copy to clipboard: {e}")),
        }
    }

    match log_to_history(ctx, post, style_id, style_name, image_prompt) {
        Ok(id) => report.history_id = Some(id),
        Err(e) => report.warnings.push(format!("Failed to log to history: {e}")),
    }

    if settings.output.reveal_after_finalize && output_dir.exists() {
        match ctx.opener.reveal(output_dir) {
            Ok(()) => report.revealed = true,
            Err(e) => report.warnings.push(format!("Failed to open output folder: {e}")),
        }
    }

    if let Err(e) = advance_rotation(ctx) {
        report.warnings.push(format!("Failed to advance rotation: {e}"));
    }

    report
}

fn save_final_image(source: &Path, output_dir: &Path) -> Result<PathBuf, AppError> {
    if !source.exists() {
        return Err(AppError::config_error(format!(
            "Source image not found: {}",
            source.display()
        )));
    }
    fs::create_dir_all(output_dir)?;
    let dest = output_dir.join(FINAL_IMAGE_NAME);
    fs::copy(source, &dest)?;
    Ok(dest)
}

fn log_to_history(
    ctx: &AppContext,
    post: &Post,
    style_id: &str,
    style_name: &str,
    image_prompt: Option<&GenerationPrompt>,
) -> Result<String, AppError> {
    let mut history = ctx.store.load_history()?;

    let now = Local::now();
    let id = next_post_id(&history, now.date_naive());
    let entry = history_entry(
        id.clone(),
        now.format("%Y-%m-%dT%H:%M:%S").to_string(),
        post,
        style_id,
        style_name,
        image_prompt.map(|p| p.prompt.as_str()),
    );
    history.posts.push(entry);
    ctx.store.save_history(&history)?;

    let mut state = ctx.store.load_rotation()?;
    state.last_post_date = Some(now.format("%Y-%m-%d").to_string());
    state.total_posts += 1;
    ctx.store.save_rotation(&state)?;

    Ok(id)
}

fn advance_rotation(ctx: &AppContext) -> Result<(), AppError> {
    let rotation = ctx.store.load_art_styles()?;
    let mut state = ctx.store.load_rotation()?;
    state.style_rotation_index = styles::advance_index(state.style_rotation_index, rotation.len())?;
    ctx.store.save_rotation(&state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::shortener_command::CommandUrlShortener;
    use crate::adapters::state_filesystem::FilesystemStateStore;
    use crate::domain::compose_post;
    use crate::domain::settings::ShortenerSettings;
    use crate::ports::{
        ClipboardWriter, FileOpener, ImageGenerator, LlmProvider, NoopClipboard, StateStore,
        Transcript, TranscriptFetcher,
    };
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    struct StubFetcher;
    impl TranscriptFetcher for StubFetcher {
        fn fetch(&self, _url: &str) -> Result<Transcript, AppError> {
            Err(AppError::config_error("not used"))
        }
    }

    struct StubLlm;
    impl LlmProvider for StubLlm {
        fn name(&self) -> &str {
            "stub"
        }
        fn generate(&self, _prompt: &str) -> Result<String, AppError> {
            Err(AppError::config_error("not used"))
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
        fn generate(&self, _p: &GenerationPrompt, _d: &Path) -> Result<(), AppError> {
            Ok(())
        }
    }

    struct FailingClipboard;
    impl ClipboardWriter for FailingClipboard {
        fn write_text(&mut self, _text: &str) -> Result<(), AppError> {
            Err(AppError::config_error("no clipboard in tests"))
        }
    }

    fn context(dir: &TempDir) -> AppContext {
        AppContext {
            store: Box::new(FilesystemStateStore::new(dir.path().to_path_buf())),
            fetcher: Box::new(StubFetcher),
            llm: Box::new(StubLlm),
            shortener: CommandUrlShortener::new(ShortenerSettings::default(), BTreeMap::new()),
            clipboard: Box::new(NoopClipboard),
            opener: Box::new(StubOpener),
            images: Box::new(StubImages),
        }
    }

    fn post() -> Post {
        compose_post("hook", "Title", "https://a", "https://s", "https://short", None, None)
    }

    #[test]
    fn full_finalize_logs_copies_and_advances_rotation() {
        let dir = TempDir::new().unwrap();
        let mut ctx = context(&dir);
        let settings = Settings::default();

        let before = ctx.store.load_rotation().unwrap().style_rotation_index;
        let report =
            run(&mut ctx, &settings, &post(), "hopper", "Edward Hopper", None, None, dir.path());

        assert!(report.success(), "warnings: {:?}", report.warnings);
        assert!(report.clipboard_copied);
        let id = report.history_id.expect("history id");
        assert!(id.ends_with("-001"));

        let state = ctx.store.load_rotation().unwrap();
        assert_eq!(state.style_rotation_index, before + 1);
        assert_eq!(state.total_posts, 1);
        assert!(state.last_post_date.is_some());
    }

    #[test]
    fn clipboard_failure_is_a_warning_not_an_abort() {
        let dir = TempDir::new().unwrap();
        let mut ctx = context(&dir);
        ctx.clipboard = Box::new(FailingClipboard);
        let settings = Settings::default();

        let report =
            run(&mut ctx, &settings, &post(), "hopper", "Edward Hopper", None, None, dir.path());

        assert!(!report.success());
        assert!(!report.clipboard_copied);
        assert!(report.warnings.iter().any(|w| w.contains("clipboard")));
        // Later steps still ran.
        assert!(report.history_id.is_some());
        assert_eq!(ctx.store.load_rotation().unwrap().style_rotation_index, 1);
    }

    #[test]
    fn missing_source_image_warns_but_continues() {
        let dir = TempDir::new().unwrap();
        let mut ctx = context(&dir);
        let settings = Settings::default();

        let report = run(
            &mut ctx,
            &settings,
            &post(),
            "hopper",
            "Edward Hopper",
            None,
            Some(Path::new("/definitely/missing.png")),
            dir.path(),
        );

        assert!(report.image_saved.is_none());
        assert!(report.warnings.iter().any(|w| w.contains("save image")));
        assert!(report.history_id.is_some());
    }

    #[test]
    fn second_post_same_day_gets_next_sequence() {
        let dir = TempDir::new().unwrap();
        let mut ctx = context(&dir);
        let settings = Settings::default();

        let first =
            run(&mut ctx, &settings, &post(), "hopper", "Edward Hopper", None, None, dir.path());
        let second =
            run(&mut ctx, &settings, &post(), "hopper", "Edward Hopper", None, None, dir.path());

        assert!(first.history_id.unwrap().ends_with("-001"));
        assert!(second.history_id.unwrap().ends_with("-002"));
    }
}
