//! Image concept records parsed from LLM output.

use crate::domain::extract::{self, FieldRule, HeaderRule, RawRecord, Schema};

/// Number of image concepts requested from the generation call.
pub const CONCEPT_COUNT: usize = 3;

const SCENE_CAP: usize = 200;
const TITLE_CAP: usize = 50;

/// A structured scene description used to build an image-generation prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageConcept {
    pub number: u32,
    pub setting: String,
    pub scene: String,
    pub mood: String,
    pub elements: String,
}

const FIELDS: &[FieldRule] = &[
    FieldRule { key: "scene", label: "scene:" },
    FieldRule { key: "mood", label: "mood:" },
    FieldRule { key: "elements", label: "elements:" },
];

const SCHEMA: Schema = Schema {
    expected: CONCEPT_COUNT,
    header: HeaderRule::Titled,
    fields: FIELDS,
    continuation: Some(("scene", "mood")),
};

/// Parse an LLM response into at most [`CONCEPT_COUNT`] image concepts.
///
/// Strict format:
///
/// ```text
/// 1. [Setting Title]
///    Scene: description
///    Mood: words
///    Elements: items
/// ```
pub fn parse_concepts(response: &str) -> Vec<ImageConcept> {
    SCHEMA.parse(response, parse_lenient).into_iter().map(concept_from_raw).collect()
}

fn concept_from_raw(record: RawRecord) -> ImageConcept {
    let scene = record.field("scene").to_string();
    let mood = record.field("mood").to_string();
    let elements = record.field("elements").to_string();
    ImageConcept {
        number: record.number,
        setting: record.title,
        scene,
        mood,
        elements,
    }
}

fn parse_lenient(response: &str) -> Vec<RawRecord> {
    let mut records = Vec::new();
    for chunk in extract::lenient_chunks(response) {
        let title = extract::lenient_title(chunk.first_line, Some(TITLE_CAP));

        // Everything after the first line becomes the scene; a one-line chunk
        // reuses its first line.
        let remaining = chunk.text.lines().skip(1).collect::<Vec<_>>().join("\n");
        let scene_source = if remaining.trim().is_empty() { chunk.first_line } else { &remaining };
        let scene: String = scene_source.trim().chars().take(SCENE_CAP).collect();

        let mut record = RawRecord { number: chunk.number, title, fields: Default::default() };
        record.fields.insert("scene", scene);
        record.fields.insert("mood", "contemplative".to_string());
        record.fields.insert("elements", "figure, light, space".to_string());
        records.push(record);
    }
    records
}

/// Format concepts for terminal display.
pub fn format_concepts_display(concepts: &[ImageConcept]) -> String {
    let mut output: Vec<String> = Vec::new();
    output.push("IMAGE CONCEPTS:".to_string());
    output.push("=".repeat(50));

    for concept in concepts {
        output.push(format!("\n  {}. [{}]", concept.number, concept.setting));
        output.push(format!("     Scene: {}", concept.scene));
        output.push(format!("     Mood: {}", concept.mood));
        output.push(format!("     Elements: {}", concept.elements));
    }

    output.push(String::new());
    output.push("=".repeat(50));

    output.join("\n")
}
