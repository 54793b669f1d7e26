//! Interactive record selection: display a numbered list, then loop on
//! operator input until a record is chosen, the list is regenerated, or the
//! workflow is cancelled.

use std::io::Write;

use crate::domain::AppError;

/// Input seam for the selection loop. Production reads the terminal; tests
/// feed a scripted sequence.
pub trait LineReader {
    /// Read one line of input for the given prompt label.
    fn read_line(&mut self, prompt: &str) -> Result<String, AppError>;
}

/// Terminal outcome of a selection loop.
#[derive(Debug, PartialEq, Eq)]
pub enum Selection<T> {
    Chosen(T),
    /// Normal user action, not an error. Callers stop the workflow and exit 0.
    Cancelled,
}

/// Drive the select/regenerate/quit loop over `records`.
///
/// `noun` names the record kind in the prompt ("hook", "concept"). The
/// accepted range is always bounded by the actual list length, which may be
/// below the nominal cap after a lenient parse. `regenerate` re-runs the
/// generation call and replaces the list; its errors propagate.
pub fn choose<T, W, R, D, G>(
    out: &mut W,
    input: &mut R,
    mut records: Vec<T>,
    noun: &str,
    display: D,
    mut regenerate: G,
) -> Result<Selection<T>, AppError>
where
    W: Write,
    R: LineReader + ?Sized,
    D: Fn(&[T]) -> String,
    G: FnMut() -> Result<Vec<T>, AppError>,
{
    loop {
        let prompt =
            format!("Enter {} number (1-{}), [r]egenerate, or [q]uit", noun, records.len());
        let choice = input.read_line(&prompt)?;
        let choice = choice.trim();

        if choice.eq_ignore_ascii_case("q") {
            return Ok(Selection::Cancelled);
        }

        if choice.eq_ignore_ascii_case("r") {
            writeln!(out, "\nRegenerating {noun}s...")?;
            records = regenerate()?;
            writeln!(out, "{}", display(&records))?;
            continue;
        }

        match choice.parse::<usize>() {
            Ok(n) if n >= 1 && n <= records.len() => {
                return Ok(Selection::Chosen(records.swap_remove(n - 1)));
            }
            Ok(_) => {
                writeln!(out, "Please enter a number between 1 and {}", records.len())?;
            }
            Err(_) => {
                writeln!(out, "Invalid input. Enter a number, 'r', or 'q'.")?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Scripted input for exercising the loop without a terminal.
    pub struct ScriptedReader {
        lines: Vec<String>,
        pub prompts: Vec<String>,
    }

    impl ScriptedReader {
        pub fn new(lines: &[&str]) -> Self {
            Self { lines: lines.iter().rev().map(|s| s.to_string()).collect(), prompts: Vec::new() }
        }
    }

    impl LineReader for ScriptedReader {
        fn read_line(&mut self, prompt: &str) -> Result<String, AppError> {
            self.prompts.push(prompt.to_string());
            self.lines.pop().ok_or_else(|| AppError::config_error("scripted input exhausted"))
        }
    }

    fn records() -> Vec<&'static str> {
        vec!["first", "second", "third"]
    }

    fn display(items: &[&str]) -> String {
        items.join(", ")
    }

    #[test]
    fn invalid_then_out_of_range_then_selects() {
        let mut out = Vec::new();
        let mut input = ScriptedReader::new(&["bogus", "99", "2"]);

        let outcome = choose(&mut out, &mut input, records(), "hook", display, || {
            panic!("regenerate must not run")
        })
        .unwrap();

        assert_eq!(outcome, Selection::Chosen("second"));
        let printed = String::from_utf8(out).unwrap();
        assert_eq!(printed.matches("Invalid input").count(), 1);
        assert_eq!(printed.matches("between 1 and 3").count(), 1);
    }

    #[test]
    fn q_cancels_in_either_case() {
        for q in ["q", "Q"] {
            let mut out = Vec::new();
            let mut input = ScriptedReader::new(&[q]);
            let outcome = choose(&mut out, &mut input, records(), "hook", display, || {
                panic!("regenerate must not run")
            })
            .unwrap();
            assert_eq!(outcome, Selection::Cancelled);
        }
    }

    #[test]
    fn r_regenerates_and_redisplays_before_selection() {
        let mut out = Vec::new();
        let mut input = ScriptedReader::new(&["r", "1"]);
        let mut calls = 0;

        let outcome = choose(&mut out, &mut input, records(), "concept", display, || {
            calls += 1;
            Ok(vec!["fresh"])
        })
        .unwrap();

        assert_eq!(calls, 1);
        assert_eq!(outcome, Selection::Chosen("fresh"));
        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("Regenerating concepts..."));
        assert!(printed.contains("fresh"));
    }

    #[test]
    fn range_hint_tracks_actual_list_length() {
        let mut out = Vec::new();
        let mut input = ScriptedReader::new(&["r", "2", "1"]);

        // Regeneration shrinks the list; the range and prompt must follow.
        let outcome = choose(&mut out, &mut input, records(), "hook", display, || Ok(vec!["only"]))
            .unwrap();

        assert_eq!(outcome, Selection::Chosen("only"));
        assert!(input.prompts[0].contains("(1-3)"));
        assert!(input.prompts[1].contains("(1-1)"));
        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("between 1 and 1"));
    }

    #[test]
    fn regenerate_errors_propagate() {
        let mut out = Vec::new();
        let mut input = ScriptedReader::new(&["r"]);
        let result = choose(&mut out, &mut input, records(), "hook", display, || {
            Err(AppError::config_error("generation failed"))
        });
        assert!(result.is_err());
    }
}
