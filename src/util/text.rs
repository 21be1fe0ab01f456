// src/util/text.rs
use crate::domain::placeholder;

/// Extract the first line of plain text from a note body.
///
/// This function:
/// 1. Removes inline image tokens (`[[IMG:<path>]]`)
/// 2. Extracts the first non-empty line
/// 3. Trims whitespace
///
/// Used for the one-line-per-note listing in the terminal companion.
///
/// # Examples
///
/// ```
/// use stickypad::util::text::preview_line;
///
/// let body = "[[IMG:receipt.png]]\nShopping for saturday\nmilk, eggs";
/// assert_eq!(preview_line(body), "Shopping for saturday");
/// ```
pub fn preview_line(body: &str) -> String {
    let without_images = placeholder::strip_tokens(body);

    without_images
        .lines()
        .map(|line| line.trim())
        .find(|line| !line.is_empty())
        .unwrap_or("")
        .to_string()
}
