//! Hook (teaser text) records parsed from LLM output.

use std::sync::OnceLock;

use regex::Regex;

use crate::domain::extract::{self, HeaderRule, RawRecord, Schema};

/// Number of hooks requested from the generation call.
pub const HOOK_COUNT: usize = 15;

/// A generated hook candidate for the post text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hook {
    pub number: u32,
    pub style: String,
    pub text: String,
}

const SCHEMA: Schema =
    Schema { expected: HOOK_COUNT, header: HeaderRule::Valued, fields: &[], continuation: None };

/// Parse an LLM response into at most [`HOOK_COUNT`] hooks.
///
/// Strict format is one hook per line: `1. [Style]: "text"`. The bracketed
/// style label is optional; without it the style is inferred from the hook's
/// position in the list.
pub fn parse_hooks(response: &str) -> Vec<Hook> {
    SCHEMA.parse(response, parse_lenient).into_iter().map(hook_from_raw).collect()
}

fn hook_from_raw(record: RawRecord) -> Hook {
    let text = record.field("text").to_string();
    let style = if record.title.is_empty() {
        infer_style(record.number).to_string()
    } else {
        record.title
    };
    Hook { number: record.number, style, text }
}

fn lenient_line() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d+)[.)]\s*(.+)").unwrap())
}

fn parse_lenient(response: &str) -> Vec<RawRecord> {
    let mut records = Vec::new();
    for line in response.trim().lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let Some(caps) = lenient_line().captures(line) else { continue };
        let Ok(number) = caps[1].parse() else { continue };
        let mut record = RawRecord { number, title: String::new(), fields: Default::default() };
        record.fields.insert("text", extract::strip_quotes(&caps[2]).to_string());
        records.push(record);
    }
    records
}

/// Style label implied by a hook's position when the LLM omits the bracket.
pub fn infer_style(number: u32) -> &'static str {
    match number {
        1 => "Provocative Question",
        2 => "Minimalist Moment",
        3 => "Witty Reframe",
        4 => "Direct Invitation",
        5 => "Profound Tease",
        6..=10 => "Poignant",
        _ => "Varied",
    }
}

/// Format hooks for terminal display, grouped into the three tone sections.
pub fn format_hooks_display(hooks: &[Hook]) -> String {
    let mut output: Vec<String> = Vec::new();
    let mut current_section = "";

    for hook in hooks {
        let section = match hook.number {
            0..=5 => "CREATIVE STYLES",
            6..=10 => "POIGNANT & EMOTIONALLY DEVASTATING",
            _ => "VARIED TONES",
        };

        if section != current_section {
            if !current_section.is_empty() {
                output.push(String::new());
            }
            output.push(format!("\n{section}:"));
            output.push("-".repeat(40));
            current_section = section;
        }

        output.push(format!("  {:2}. [{}]", hook.number, hook.style));
        output.push(format!("      \"{}\"", hook.text));
    }

    output.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strict_response(count: usize) -> String {
        (1..=count)
            .map(|i| format!("{i}. [Style {i}]: \"Hook text {i}\""))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn parses_labeled_hook_line() {
        let hooks = parse_hooks(&strict_response(15));
        assert_eq!(hooks.len(), 15);
        assert_eq!(hooks[0].number, 1);
        assert_eq!(hooks[0].style, "Style 1");
        assert_eq!(hooks[0].text, "Hook text 1");
    }

    #[test]
    fn labeled_quoted_line_parses_exactly() {
        let rest: String =
            (2..=15).map(|i| format!("\n{i}. [Style {i}]: \"Hook text {i}\"")).collect();
        let hooks =
            parse_hooks(&format!("1. [Provocative Question]: \"What if peace began today?\"{rest}"));
        assert_eq!(hooks[0].number, 1);
        assert_eq!(hooks[0].style, "Provocative Question");
        assert_eq!(hooks[0].text, "What if peace began today?");
    }

    #[test]
    fn missing_label_infers_style_from_position() {
        let response = (1..=15).map(|i| format!("{i}. \"Text {i}\"")).collect::<Vec<_>>().join("\n");
        let hooks = parse_hooks(&response);
        assert_eq!(hooks[0].style, "Provocative Question");
        assert_eq!(hooks[4].style, "Profound Tease");
        assert_eq!(hooks[7].style, "Poignant");
        assert_eq!(hooks[11].style, "Varied");
    }

    #[test]
    fn shortfall_falls_back_to_lenient_numbering() {
        let response = "Here are some options:\n1) first option\n2) second option";
        let hooks = parse_hooks(response);
        assert_eq!(hooks.len(), 2);
        assert_eq!(hooks[0].text, "first option");
        assert_eq!(hooks[1].number, 2);
    }

    #[test]
    fn result_is_capped_at_fifteen() {
        let hooks = parse_hooks(&strict_response(20));
        assert_eq!(hooks.len(), HOOK_COUNT);
    }

    #[test]
    fn empty_response_yields_no_hooks() {
        assert!(parse_hooks("").is_empty());
        assert!(parse_hooks("no numbers here at all").is_empty());
    }

    #[test]
    fn display_groups_hooks_into_sections() {
        let hooks = parse_hooks(&strict_response(15));
        let display = format_hooks_display(&hooks);
        assert!(display.contains("CREATIVE STYLES:"));
        assert!(display.contains("POIGNANT & EMOTIONALLY DEVASTATING:"));
        assert!(display.contains("VARIED TONES:"));
        assert!(display.contains(" 1. [Style 1]"));
    }
}
