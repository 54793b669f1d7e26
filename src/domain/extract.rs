//! Schema-driven extraction of structured records from free-text LLM output.
//!
//! One engine serves all three record shapes (hooks, image concepts, comic
//! concepts). A strict line-scanning pass runs first; when it produces fewer
//! records than the schema expects, its results are discarded and a lenient
//! chunk-based pass runs instead. Malformed text never fails a parse, it only
//! degrades it.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;

/// How a numbered header line is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderRule {
    /// `1. [Title]`: the remainder of the line is the record title; field
    /// values follow on subsequent `label: value` lines.
    Titled,
    /// `1. [Label]: "text"`: the trailing text is itself the record value
    /// and the optional bracketed part is a label. Single-line records.
    Valued,
}

/// A strict-pass field: canonical key plus the line prefix that introduces it.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub key: &'static str,
    pub label: &'static str,
}

/// Static description of one record shape.
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    /// Requested record count. Also the hard cap on any parse result.
    pub expected: usize,
    pub header: HeaderRule,
    pub fields: &'static [FieldRule],
    /// `Some((target, until))`: while `target` is set and `until` is not,
    /// an unmatched non-empty line is appended (space-joined) to `target`.
    pub continuation: Option<(&'static str, &'static str)>,
}

/// One record produced by either pass. Every schema field is present in
/// `fields`, defaulting to the empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    pub number: u32,
    pub title: String,
    pub fields: BTreeMap<&'static str, String>,
}

impl RawRecord {
    fn new(schema: &Schema, number: u32, title: String) -> Self {
        let fields = schema.fields.iter().map(|f| (f.key, String::new())).collect();
        Self { number, title, fields }
    }

    /// Field value by key; empty string when the schema has no such field.
    pub fn field(&self, key: &str) -> &str {
        self.fields.get(key).map(String::as_str).unwrap_or("")
    }

    fn trim_fields(mut self) -> Self {
        for value in self.fields.values_mut() {
            *value = value.trim().to_string();
        }
        self
    }
}

fn titled_header() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d+)\.\s*\[?([^\]\n]+?)\]?$").unwrap())
}

fn valued_header() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"^(\d+)\.\s*(?:\[([^\]]+)\]:\s*)?["']?(.+?)["']?$"#).unwrap())
}

fn chunk_start() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?m)^\d+\.").unwrap())
}

fn chunk_number() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d+)[.)]").unwrap())
}

fn bracketed() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[([^\]]+)\]").unwrap())
}

fn leading_number() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+[.)]\s*").unwrap())
}

impl Schema {
    /// Run the strict pass; on a shortfall, discard it and run `lenient`.
    /// The result is capped at `expected` in either case.
    pub fn parse(&self, response: &str, lenient: impl Fn(&str) -> Vec<RawRecord>) -> Vec<RawRecord> {
        debug_assert!(
            self.header == HeaderRule::Valued || !self.fields.is_empty(),
            "titled schema must declare at least one field"
        );

        let mut records = self.parse_strict(response);
        if records.len() < self.expected {
            records = lenient(response);
        }
        records.truncate(self.expected);
        records
    }

    fn parse_strict(&self, response: &str) -> Vec<RawRecord> {
        let mut records = Vec::new();
        let mut current: Option<RawRecord> = None;

        for raw_line in response.trim().lines() {
            let line = raw_line.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(record) = self.match_header(line) {
                if let Some(open) = current.take() {
                    records.push(open.trim_fields());
                }
                match self.header {
                    // Valued records are complete at the header line.
                    HeaderRule::Valued => records.push(record),
                    HeaderRule::Titled => current = Some(record),
                }
                continue;
            }

            let Some(open) = current.as_mut() else { continue };

            if let Some((key, value)) = self.match_field(line) {
                open.fields.insert(key, value.to_string());
            } else if let Some((target, until)) = self.continuation {
                let target_set = !open.field(target).is_empty();
                let until_set = !open.field(until).is_empty();
                if target_set && !until_set {
                    let joined = format!("{} {}", open.field(target), line);
                    open.fields.insert(target, joined);
                }
            }
        }

        if let Some(open) = current.take() {
            records.push(open.trim_fields());
        }

        records
    }

    fn match_header(&self, line: &str) -> Option<RawRecord> {
        match self.header {
            HeaderRule::Titled => {
                let caps = titled_header().captures(line)?;
                let number = caps[1].parse().ok()?;
                let title = caps[2].trim().trim_matches(['[', ']']).trim().to_string();
                Some(RawRecord::new(self, number, title))
            }
            HeaderRule::Valued => {
                let caps = valued_header().captures(line)?;
                let number = caps[1].parse().ok()?;
                let title = caps
                    .get(2)
                    .map(|label| label.as_str().trim().to_string())
                    .unwrap_or_default();
                let mut record = RawRecord::new(self, number, title);
                record.fields.insert("text", strip_quotes(&caps[3]).to_string());
                Some(record)
            }
        }
    }

    fn match_field<'a>(&self, line: &'a str) -> Option<(&'static str, &'a str)> {
        for field in self.fields {
            // Labels are ASCII, so a byte-prefix comparison is safe.
            if line.len() >= field.label.len()
                && line.is_char_boundary(field.label.len())
                && line[..field.label.len()].eq_ignore_ascii_case(field.label)
            {
                return Some((field.key, line[field.label.len()..].trim()));
            }
        }
        None
    }
}

/// Trim surrounding double and single quotes, as LLMs wrap text in either.
pub fn strip_quotes(text: &str) -> &str {
    text.trim().trim_matches(['"', '\'']).trim()
}

/// A lenient-pass chunk: the record number, its first line, and the full
/// chunk text (first line included).
#[derive(Debug, Clone, Copy)]
pub struct Chunk<'a> {
    pub number: u32,
    pub first_line: &'a str,
    pub text: &'a str,
}

/// Split a response at newline boundaries that precede a `N.` header and
/// keep only chunks that actually start with a number. Text before the first
/// header is dropped, as is any chunk without a leading number.
pub fn lenient_chunks(response: &str) -> Vec<Chunk<'_>> {
    let text = response.trim();
    let mut starts: Vec<usize> = chunk_start().find_iter(text).map(|m| m.start()).collect();
    if starts.first() != Some(&0) {
        starts.insert(0, 0);
    }
    starts.push(text.len());

    let mut chunks = Vec::new();
    for window in starts.windows(2) {
        let part = text[window[0]..window[1]].trim();
        if part.is_empty() {
            continue;
        }
        let Some(caps) = chunk_number().captures(part) else { continue };
        let Ok(number) = caps[1].parse() else { continue };
        let first_line = part.lines().next().unwrap_or(part);
        chunks.push(Chunk { number, first_line, text: part });
    }
    chunks
}

/// Lenient title: bracketed content when present, else the first line minus
/// its `N.` prefix, truncated to `cap` characters when one is given.
pub fn lenient_title(first_line: &str, cap: Option<usize>) -> String {
    if let Some(caps) = bracketed().captures(first_line) {
        return caps[1].trim().to_string();
    }
    let stripped = leading_number().replace(first_line, "");
    let stripped = stripped.trim();
    match cap {
        Some(max) => stripped.chars().take(max).collect(),
        None => stripped.to_string(),
    }
}

/// First capture of `marker` in `text`, with the value running to the first
/// `boundary` match after it (or end of text), trimmed and truncated to
/// `cap` characters. `None` when the marker is absent or the value is empty.
pub fn capture_section(text: &str, marker: &Regex, boundary: &Regex, cap: usize) -> Option<String> {
    let m = marker.find(text)?;
    let value_end = boundary.find_at(text, m.end()).map(|b| b.start()).unwrap_or(text.len());
    let value: String = text[m.end()..value_end].trim().chars().take(cap).collect();
    let value = value.trim().to_string();
    if value.is_empty() { None } else { Some(value) }
}

/// All captures of an index-carrying `marker` (one digit group), each value
/// bounded by the next `boundary` match, filled into 1-based slots. Indices
/// outside `1..=slots` are ignored; unfilled slots stay `None`.
pub fn capture_indexed(
    text: &str,
    marker: &Regex,
    boundary: &Regex,
    slots: usize,
    cap: usize,
) -> Vec<Option<String>> {
    let mut values = vec![None; slots];
    for caps in marker.captures_iter(text) {
        let whole = caps.get(0).unwrap();
        let Ok(index) = caps[1].parse::<usize>() else { continue };
        if index < 1 || index > slots {
            continue;
        }
        let value_end =
            boundary.find_at(text, whole.end()).map(|b| b.start()).unwrap_or(text.len());
        let value: String = text[whole.end()..value_end].trim().chars().take(cap).collect();
        let value = value.trim().to_string();
        if !value.is_empty() {
            values[index - 1] = Some(value);
        }
    }
    values
}
