//! Four-panel comic strip concepts parsed from LLM output.

use std::sync::OnceLock;

use regex::Regex;

use crate::domain::extract::{self, FieldRule, HeaderRule, RawRecord, Schema};

/// Number of comic concepts requested from the generation call.
pub const COMIC_COUNT: usize = 4;

/// Panels per strip.
pub const PANEL_COUNT: usize = 4;

const PANEL_CAP: usize = 200;
const ARC_CAP: usize = 150;

const PANEL_PLACEHOLDERS: [&str; PANEL_COUNT] =
    ["Opening scene", "Development", "The turn", "Resolution"];
const DIALOGUE_PLACEHOLDER: &str = "CAPTION: \"...\"";
const ARC_PLACEHOLDER: &str = "A contemplative journey";

/// A 4-panel comic strip concept with per-panel dialogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComicConcept {
    pub number: u32,
    pub title: String,
    pub arc: String,
    pub panels: [String; PANEL_COUNT],
    pub dialogue: [String; PANEL_COUNT],
}

const FIELDS: &[FieldRule] = &[
    FieldRule { key: "arc", label: "arc:" },
    FieldRule { key: "panel_1", label: "panel 1:" },
    FieldRule { key: "dialogue_1", label: "dialogue 1:" },
    FieldRule { key: "panel_2", label: "panel 2:" },
    FieldRule { key: "dialogue_2", label: "dialogue 2:" },
    FieldRule { key: "panel_3", label: "panel 3:" },
    FieldRule { key: "dialogue_3", label: "dialogue 3:" },
    FieldRule { key: "panel_4", label: "panel 4:" },
    FieldRule { key: "dialogue_4", label: "dialogue 4:" },
];

const SCHEMA: Schema =
    Schema { expected: COMIC_COUNT, header: HeaderRule::Titled, fields: FIELDS, continuation: None };

const PANEL_KEYS: [&str; PANEL_COUNT] = ["panel_1", "panel_2", "panel_3", "panel_4"];
const DIALOGUE_KEYS: [&str; PANEL_COUNT] = ["dialogue_1", "dialogue_2", "dialogue_3", "dialogue_4"];

/// Parse an LLM response into at most [`COMIC_COUNT`] comic concepts.
///
/// Strict format:
///
/// ```text
/// 1. [Comic Title]
///    Arc: description
///    Panel 1: description
///    Dialogue 1: SPEECH/THOUGHT/CAPTION: "text"
///    ...
/// ```
pub fn parse_comic_concepts(response: &str) -> Vec<ComicConcept> {
    SCHEMA.parse(response, parse_lenient).into_iter().map(comic_from_raw).collect()
}

fn comic_from_raw(record: RawRecord) -> ComicConcept {
    ComicConcept {
        number: record.number,
        title: record.title.clone(),
        arc: record.field("arc").to_string(),
        panels: PANEL_KEYS.map(|key| record.field(key).to_string()),
        dialogue: DIALOGUE_KEYS.map(|key| record.field(key).to_string()),
    }
}

fn panel_marker() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)panel\s*(\d+)\s*:").unwrap())
}

fn panel_boundary() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)panel\s*\d+|dialogue").unwrap())
}

fn dialogue_marker() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)dialogue\s*(\d+)\s*:").unwrap())
}

fn dialogue_boundary() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)panel\s*\d+|dialogue\s*\d+").unwrap())
}

fn arc_marker() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)arc:").unwrap())
}

fn arc_boundary() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)panel").unwrap())
}

fn parse_lenient(response: &str) -> Vec<RawRecord> {
    let mut records = Vec::new();
    for chunk in extract::lenient_chunks(response) {
        let title = extract::lenient_title(chunk.first_line, None);

        let panels = extract::capture_indexed(
            chunk.text,
            panel_marker(),
            panel_boundary(),
            PANEL_COUNT,
            PANEL_CAP,
        );
        let dialogues = extract::capture_indexed(
            chunk.text,
            dialogue_marker(),
            dialogue_boundary(),
            PANEL_COUNT,
            PANEL_CAP,
        );
        let arc = extract::capture_section(chunk.text, arc_marker(), arc_boundary(), ARC_CAP)
            .unwrap_or_else(|| ARC_PLACEHOLDER.to_string());

        let mut record = RawRecord { number: chunk.number, title, fields: Default::default() };
        record.fields.insert("arc", arc);
        for (slot, value) in panels.into_iter().enumerate() {
            record.fields.insert(
                PANEL_KEYS[slot],
                value.unwrap_or_else(|| PANEL_PLACEHOLDERS[slot].to_string()),
            );
        }
        for (slot, value) in dialogues.into_iter().enumerate() {
            record.fields.insert(
                DIALOGUE_KEYS[slot],
                value.unwrap_or_else(|| DIALOGUE_PLACEHOLDER.to_string()),
            );
        }
        records.push(record);
    }
    records
}

fn clip(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

/// Format comic concepts for terminal display.
pub fn format_comic_concepts_display(concepts: &[ComicConcept]) -> String {
    let mut output: Vec<String> = Vec::new();
    output.push("4-PANEL COMIC CONCEPTS:".to_string());
    output.push("=".repeat(60));

    for concept in concepts {
        output.push(format!("\n  {}. [{}]", concept.number, concept.title));
        output.push(format!("     Arc: {}", concept.arc));
        for (index, (panel, dialogue)) in concept.panels.iter().zip(&concept.dialogue).enumerate() {
            output.push(format!("     Panel {}: {}...", index + 1, clip(panel, 60)));
            output.push(format!("       -> {}...", clip(dialogue, 60)));
        }
    }

    output.push(String::new());
    output.push("=".repeat(60));

    output.join("\n")
}
