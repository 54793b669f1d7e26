pub mod comics;
pub mod concepts;
pub mod episode;
pub mod error;
pub mod extract;
pub mod history;
pub mod hooks;
pub mod post;
pub mod prompt;
pub mod selection;
pub mod settings;
pub mod styles;
pub mod themes;

pub use comics::{COMIC_COUNT, ComicConcept, format_comic_concepts_display, parse_comic_concepts};
pub use concepts::{CONCEPT_COUNT, ImageConcept, format_concepts_display, parse_concepts};
pub use error::{AppError, UrlKind};
pub use history::{History, HistoryEntry, history_entry, next_post_id};
pub use hooks::{HOOK_COUNT, Hook, format_hooks_display, parse_hooks};
pub use post::{Post, compose_post, format_post_preview, format_post_text, validate_post};
pub use prompt::{
    GenerationPrompt, build_comic_prompt, build_concept_prompt, build_image_prompt,
    format_prompt_display,
};
pub use selection::{LineReader, Selection, choose};
pub use settings::{Provider, Settings};
pub use styles::{
    ArtStyle, ArtStyleBook, ComicStyle, ComicStyleBook, PromptElements, RotationState,
};
