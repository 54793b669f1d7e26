//! Post composition, rendering, preview, and validation.

use std::path::PathBuf;

/// A composed post. Immutable; editing the hook constructs a new `Post`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub hook: String,
    pub episode_title: String,
    pub apple_url: String,
    pub spotify_url: String,
    /// Original transcript URL when known, for the stored record.
    pub transcript_url: String,
    /// Shortened transcript URL, for the rendered text.
    pub transcript_url_shortened: String,
    pub image_path: Option<PathBuf>,
}

const HOOK_MAX_CHARS: usize = 280;
const POST_MAX_CHARS: usize = 1000;

/// Compose a post. The original transcript URL is preferred for the stored
/// record; the shortened one is what gets rendered.
pub fn compose_post(
    hook: &str,
    episode_title: &str,
    apple_url: &str,
    spotify_url: &str,
    transcript_url_shortened: &str,
    transcript_url_original: Option<&str>,
    image_path: Option<PathBuf>,
) -> Post {
    Post {
        hook: hook.to_string(),
        episode_title: episode_title.to_string(),
        apple_url: apple_url.to_string(),
        spotify_url: spotify_url.to_string(),
        transcript_url: transcript_url_original.unwrap_or(transcript_url_shortened).to_string(),
        transcript_url_shortened: transcript_url_shortened.to_string(),
        image_path,
    }
}

/// Render the shareable post text. Uses the shortened transcript URL.
pub fn format_post_text(post: &Post) -> String {
    format!(
        "{}\n\nToday's meditation: *{}*\n\n🎧 Apple: {}\nSpotify: {}\n\n📖 Transcript: {}",
        post.hook,
        post.episode_title,
        post.apple_url,
        post.spotify_url,
        post.transcript_url_shortened,
    )
}

/// Render a bordered terminal preview with a character count.
pub fn format_post_preview(post: &Post) -> String {
    let text = format_post_text(post);
    let char_count = text.chars().count();
    let border = "─".repeat(60);

    let image_info = match &post.image_path {
        Some(path) => format!("[IMAGE: {}]", path.display()),
        None => "[No image selected]".to_string(),
    };

    let indented =
        text.lines().map(|line| format!("  {line}")).collect::<Vec<_>>().join("\n");

    format!(
        "\n┌{border}┐\n│ FINAL POST PREVIEW\n├{border}┤\n\n  {image_info}\n\n{indented}\n\n├{border}┤\n│ Character count: {char_count}\n└{border}┘\n"
    )
}

/// Validate a post, returning warnings. Never fails.
pub fn validate_post(post: &Post) -> Vec<String> {
    let mut warnings = Vec::new();

    let hook_len = post.hook.chars().count();
    if hook_len > HOOK_MAX_CHARS {
        warnings
            .push(format!("Hook is {hook_len} characters (recommended max: {HOOK_MAX_CHARS})"));
    }

    let text_len = format_post_text(post).chars().count();
    if text_len > POST_MAX_CHARS {
        warnings.push(format!("Total post is {text_len} characters (may be long for WhatsApp)"));
    }

    if !post.apple_url.starts_with("http") {
        warnings.push("Apple URL doesn't look valid".to_string());
    }
    if !post.spotify_url.starts_with("http") {
        warnings.push("Spotify URL doesn't look valid".to_string());
    }

    warnings
}
