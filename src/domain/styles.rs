//! Art and comic style descriptors plus the round-robin rotation.

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Prompt fragments shared by art and comic styles.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PromptElements {
    #[serde(default)]
    pub style_description: String,
    #[serde(default)]
    pub color_palette: String,
    #[serde(default)]
    pub composition: String,
    #[serde(default)]
    pub avoid: String,
}

/// One visual style in the rotation list. Immutable once loaded.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArtStyle {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub mood_keywords: Vec<String>,
    #[serde(default)]
    pub cultural_fit: Vec<String>,
    #[serde(default)]
    pub prompt_elements: PromptElements,
}

/// One comic strip style. Immutable once loaded.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ComicStyle {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub artists: Vec<String>,
    #[serde(default)]
    pub prompt_elements: PromptElements,
}

/// `config/art_styles.json` document.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ArtStyleBook {
    #[serde(default)]
    pub rotation: Vec<ArtStyle>,
}

/// `config/comic_styles.json` document.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ComicStyleBook {
    #[serde(default)]
    pub styles: Vec<ComicStyle>,
}

/// Persisted rotation position and post counters (`state/state.json`).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RotationState {
    #[serde(default)]
    pub style_rotation_index: usize,
    #[serde(default)]
    pub last_post_date: Option<String>,
    #[serde(default)]
    pub total_posts: u64,
}

/// Style at the current rotation position.
pub fn current_style<'a>(index: usize, rotation: &'a [ArtStyle]) -> Result<&'a ArtStyle, AppError> {
    if rotation.is_empty() {
        return Err(AppError::EmptyStyleRotation);
    }
    Ok(&rotation[index % rotation.len()])
}

/// Next rotation index. Only persisted on a fully-successful finalize.
pub fn advance_index(index: usize, len: usize) -> Result<usize, AppError> {
    if len == 0 {
        return Err(AppError::EmptyStyleRotation);
    }
    Ok((index + 1) % len)
}

/// Look up an art style by id.
pub fn art_style_by_id<'a>(id: &str, rotation: &'a [ArtStyle]) -> Option<&'a ArtStyle> {
    rotation.iter().find(|style| style.id == id)
}

/// Look up a comic style by id.
pub fn comic_style_by_id<'a>(id: &str, styles: &'a [ComicStyle]) -> Option<&'a ComicStyle> {
    styles.iter().find(|style| style.id == id)
}

/// Comma-joined id list for unknown-style error messages.
pub fn available_ids(ids: impl Iterator<Item = impl AsRef<str>>) -> String {
    ids.map(|id| id.as_ref().to_string()).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rotation(n: usize) -> Vec<ArtStyle> {
        (0..n)
            .map(|i| ArtStyle {
                id: format!("style-{i}"),
                name: format!("Style {i}"),
                mood_keywords: Vec::new(),
                cultural_fit: Vec::new(),
                prompt_elements: PromptElements::default(),
            })
            .collect()
    }

    #[test]
    fn current_wraps_modulo_list_length() {
        let styles = rotation(3);
        assert_eq!(current_style(0, &styles).unwrap().id, "style-0");
        assert_eq!(current_style(4, &styles).unwrap().id, "style-1");
    }

    #[test]
    fn advance_round_trips_after_len_steps() {
        let styles = rotation(5);
        let start = 2;
        let mut index = start;
        for _ in 0..styles.len() {
            index = advance_index(index, styles.len()).unwrap();
        }
        assert_eq!(index, start);
    }

    #[test]
    fn advance_changes_current_style_when_more_than_one() {
        let styles = rotation(4);
        for start in 0..8 {
            let next = advance_index(start, styles.len()).unwrap();
            assert_ne!(
                current_style(start, &styles).unwrap().id,
                current_style(next, &styles).unwrap().id,
            );
        }
    }

    #[test]
    fn empty_rotation_is_a_configuration_error() {
        assert!(matches!(current_style(0, &[]), Err(AppError::EmptyStyleRotation)));
        assert!(matches!(advance_index(0, 0), Err(AppError::EmptyStyleRotation)));
    }

    #[test]
    fn style_lookup_by_id() {
        let styles = rotation(3);
        assert_eq!(art_style_by_id("style-2", &styles).unwrap().name, "Style 2");
        assert!(art_style_by_id("nope", &styles).is_none());
        assert_eq!(available_ids(styles.iter().map(|s| &s.id)), "style-0, style-1, style-2");
    }
}
