//! Append-only post history (`state/post_history.json`).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::post::{Post, format_post_text};

/// The whole history document.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct History {
    #[serde(default)]
    pub posts: Vec<HistoryEntry>,
}

/// One logged post.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HistoryEntry {
    pub id: String,
    pub created_at: String,
    pub episode: EpisodeRecord,
    pub content: ContentRecord,
    pub image: ImageRecord,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EpisodeRecord {
    pub title: String,
    pub apple_url: String,
    pub spotify_url: String,
    pub transcript_url: String,
    pub transcript_url_shortened: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContentRecord {
    pub hook: String,
    pub full_post_text: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ImageRecord {
    pub style: String,
    pub style_id: String,
    pub file_path: Option<String>,
    pub prompt_used: Option<String>,
}

/// Derive the next post id for `today`: `{YYYY-MM-DD}-{seq:03}` where `seq`
/// is one more than the number of entries already logged for that date.
/// Ids stay reconstructible from the history itself.
pub fn next_post_id(history: &History, today: NaiveDate) -> String {
    let date = today.format("%Y-%m-%d").to_string();
    let seq = 1 + history.posts.iter().filter(|entry| entry.id.starts_with(&date)).count();
    format!("{date}-{seq:03}")
}

/// Build a history entry for a finalized post.
pub fn history_entry(
    id: String,
    created_at: String,
    post: &Post,
    style_id: &str,
    style_name: &str,
    prompt_used: Option<&str>,
) -> HistoryEntry {
    HistoryEntry {
        id,
        created_at,
        episode: EpisodeRecord {
            title: post.episode_title.clone(),
            apple_url: post.apple_url.clone(),
            spotify_url: post.spotify_url.clone(),
            transcript_url: post.transcript_url.clone(),
            transcript_url_shortened: post.transcript_url_shortened.clone(),
        },
        content: ContentRecord {
            hook: post.hook.clone(),
            full_post_text: format_post_text(post),
        },
        image: ImageRecord {
            style: style_name.to_string(),
            style_id: style_id.to_string(),
            file_path: post.image_path.as_ref().map(|p| p.display().to_string()),
            prompt_used: prompt_used.map(str::to_string),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::post::compose_post;

    fn entry(id: &str) -> HistoryEntry {
        let post = compose_post("h", "t", "a", "s", "short", None, None);
        history_entry(id.to_string(), "2026-08-07T09:00:00".to_string(), &post, "hopper", "Edward Hopper", None)
    }

    #[test]
    fn first_post_of_the_day_gets_seq_001() {
        let history = History { posts: vec![entry("2026-08-06-001")] };
        let today = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        assert_eq!(next_post_id(&history, today), "2026-08-07-001");
    }

    #[test]
    fn seq_counts_only_same_day_entries() {
        let history = History {
            posts: vec![entry("2026-08-07-001"), entry("2026-08-07-002"), entry("2026-08-06-004")],
        };
        let today = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        assert_eq!(next_post_id(&history, today), "2026-08-07-003");
    }

    #[test]
    fn entry_captures_rendered_text_and_style() {
        let e = entry("2026-08-07-001");
        assert_eq!(e.image.style_id, "hopper");
        assert!(e.content.full_post_text.contains("Today's meditation"));
        assert_eq!(e.episode.transcript_url, "short");
    }
}
