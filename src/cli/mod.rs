// src/cli/mod.rs
pub mod args;

use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

/// Ask a y/N question on the terminal and read one line from stdin.
///
/// Anything short of an explicit yes counts as no, matching the cautious
/// default of the note window's delete dialog.
pub fn confirm(question: &str) -> Result<bool> {
    print!("{question} [y/N] ");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut answer = String::new();
    io::stdin()
        .lock()
        .read_line(&mut answer)
        .context("Failed to read from stdin")?;

    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes"
    ))
}
