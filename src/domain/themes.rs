//! Keyword-frequency theme tagging over transcript text.

/// Maximum number of themes reported for one transcript.
const MAX_THEMES: usize = 5;

/// Theme → trigger keywords. A theme is tagged as soon as any one of its
/// keywords appears in the lowercased text.
const THEME_KEYWORDS: &[(&str, &[&str])] = &[
    ("love", &["love", "loving", "beloved"]),
    ("peace", &["peace", "peaceful", "calm", "tranquil"]),
    ("trust", &["trust", "trusting", "faith", "faithful"]),
    ("guidance", &["guide", "guidance", "lead", "leading", "path"]),
    ("forgiveness", &["forgive", "forgiveness", "mercy", "merciful"]),
    ("hope", &["hope", "hopeful", "promise"]),
    ("prayer", &["pray", "prayer", "praying"]),
    ("grace", &["grace", "gracious", "blessing"]),
    ("suffering", &["suffer", "suffering", "pain", "struggle"]),
    ("healing", &["heal", "healing", "restore", "restoration"]),
    ("joy", &["joy", "joyful", "happiness", "happy"]),
    ("silence", &["silence", "silent", "quiet", "stillness"]),
    ("surrender", &["surrender", "letting go", "release"]),
    ("belonging", &["belong", "belonging", "home"]),
    ("protection", &["protect", "protection", "shepherd", "safe"]),
    ("presence", &["presence", "present", "aware", "awareness"]),
    ("gratitude", &["grateful", "gratitude", "thankful", "thanks"]),
    ("humility", &["humble", "humility", "meek"]),
];

/// Extract up to five themes from transcript text, in table order.
/// Falls back to a generic pair when nothing matches.
pub fn extract_themes(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();

    let found: Vec<String> = THEME_KEYWORDS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|keyword| lower.contains(keyword)))
        .map(|(theme, _)| theme.to_string())
        .take(MAX_THEMES)
        .collect();

    if found.is_empty() {
        return vec!["reflection".to_string(), "meditation".to_string()];
    }
    found
}

/// Word budget for the excerpt handed to generation prompts.
pub const EXCERPT_MAX_WORDS: usize = 2000;

/// Excerpt a transcript for prompt use: the whole text when it fits the word
/// budget, otherwise the first 70% and last 30% of the budget joined by an
/// elision marker, to capture both the opening and the conclusion.
pub fn transcript_excerpt(text: &str, max_words: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();

    if words.len() <= max_words {
        return text.to_string();
    }

    let first_portion = (max_words as f64 * 0.7) as usize;
    let last_portion = max_words - first_portion;

    let first = words[..first_portion].join(" ");
    let last = words[words.len() - last_portion..].join(" ");

    format!("{first}\n\n[...]\n\n{last}")
}
