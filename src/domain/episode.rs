//! Episode link validation, title extraction, and hook text cleanup.

use url::Url;

use crate::domain::settings::EpisodeSettings;
use crate::domain::{AppError, UrlKind};

/// Validate an Apple Podcasts episode URL.
///
/// Expected shape: `https://podcasts.apple.com/*/podcast/{slug}/{podcast_id}?i=*`.
pub fn validate_apple_url(url: &str, episode: &EpisodeSettings) -> Result<(), AppError> {
    let parsed = parse(url, UrlKind::Apple)?;
    let valid = parsed.host_str() == Some("podcasts.apple.com")
        && parsed.path().contains("/podcast/")
        && url.contains(&episode.podcast_id);
    if valid {
        Ok(())
    } else {
        Err(AppError::InvalidUrl { kind: UrlKind::Apple, url: url.to_string() })
    }
}

/// Validate a Spotify episode URL (`https://open.spotify.com/episode/*`).
pub fn validate_spotify_url(url: &str) -> Result<(), AppError> {
    let parsed = parse(url, UrlKind::Spotify)?;
    let valid =
        parsed.host_str() == Some("open.spotify.com") && parsed.path().starts_with("/episode/");
    if valid {
        Ok(())
    } else {
        Err(AppError::InvalidUrl { kind: UrlKind::Spotify, url: url.to_string() })
    }
}

/// Validate a transcript URL against the configured host.
pub fn validate_transcript_url(url: &str, episode: &EpisodeSettings) -> Result<(), AppError> {
    let parsed = parse(url, UrlKind::Transcript)?;
    let valid = parsed.host_str() == Some(episode.transcript_host.as_str())
        && parsed.path().contains("/meditations/");
    if valid {
        Ok(())
    } else {
        Err(AppError::InvalidUrl { kind: UrlKind::Transcript, url: url.to_string() })
    }
}

/// Validate all three episode links, reporting the first failure.
pub fn validate_urls(
    apple: &str,
    spotify: &str,
    transcript: &str,
    episode: &EpisodeSettings,
) -> Result<(), AppError> {
    validate_apple_url(apple, episode)?;
    validate_spotify_url(spotify)?;
    validate_transcript_url(transcript, episode)?;
    Ok(())
}

/// Extract the episode title from an Apple Podcasts URL slug.
///
/// `.../podcast/the-good-shepherd/id1643273205?i=...` → `The Good Shepherd`.
pub fn extract_title_from_apple_url(
    url: &str,
    episode: &EpisodeSettings,
) -> Result<String, AppError> {
    validate_apple_url(url, episode)?;

    let parsed = parse(url, UrlKind::Apple)?;
    let segments: Vec<&str> =
        parsed.path().trim_matches('/').split('/').filter(|s| !s.is_empty()).collect();

    let slug = segments
        .iter()
        .position(|segment| *segment == "podcast")
        .and_then(|index| segments.get(index + 1))
        .ok_or_else(|| AppError::InvalidUrl { kind: UrlKind::Apple, url: url.to_string() })?;

    Ok(title_case(&slug.replace('-', " ")))
}

/// Extract the episode slug from a transcript URL.
///
/// `https://.../meditations/homilies/the-good-shepherd/` → `the-good-shepherd`.
pub fn extract_slug_from_transcript_url(
    url: &str,
    episode: &EpisodeSettings,
) -> Result<String, AppError> {
    validate_transcript_url(url, episode)?;

    let parsed = parse(url, UrlKind::Transcript)?;
    let slug = parsed
        .path()
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::InvalidUrl { kind: UrlKind::Transcript, url: url.to_string() })?;

    Ok(slug.to_string())
}

/// Trim hook text and reject mismatched `*`/`_` formatting pairs.
pub fn clean_hook_text(text: &str) -> Result<String, AppError> {
    let text = text.trim();

    if text.matches('*').count() % 2 != 0 {
        return Err(AppError::InvalidHook(format!("mismatched asterisks in: {text}")));
    }
    if text.matches('_').count() % 2 != 0 {
        return Err(AppError::InvalidHook(format!("mismatched underscores in: {text}")));
    }

    Ok(text.to_string())
}

fn parse(url: &str, kind: UrlKind) -> Result<Url, AppError> {
    Url::parse(url).map_err(|_| AppError::InvalidUrl { kind, url: url.to_string() })
}

fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
