//! Post history view.

use crate::app::output::print_header;
use crate::domain::AppError;
use crate::ports::StateStore;

/// Entries shown by the history view, newest first.
const SHOWN_ENTRIES: usize = 10;

pub fn execute(store: &dyn StateStore) -> Result<i32, AppError> {
    let history = store.load_history()?;

    if history.posts.is_empty() {
        println!("No posts in history yet.");
        return Ok(0);
    }

    print_header("MEDIPOST DAILY POST GENERATOR");
    println!("Post History ({} posts)", history.posts.len());
    println!("{}", "─".repeat(60));

    for entry in history.posts.iter().rev().take(SHOWN_ENTRIES) {
        println!("\n{}: {}", entry.id, entry.episode.title);
        println!("  Style: {}", entry.image.style);
        let mut hook = entry.content.hook.clone();
        if hook.chars().count() > 60 {
            hook = format!("{}...", hook.chars().take(57).collect::<String>());
        }
        println!("  Hook: \"{hook}\"");
    }

    Ok(0)
}
