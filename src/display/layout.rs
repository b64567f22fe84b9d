//! Fixed-width bordered text layout.
//!
//! Every report line is [`DISPLAY_WIDTH`] columns wide: either a full border
//! of `=` or text centered between two `=` characters.

use unicode_width::UnicodeWidthStr;

/// Width of every line in the report, borders included.
pub const DISPLAY_WIDTH: usize = 60;

const BORDER_CHAR: char = '=';

/// A full-width border line.
pub fn border() -> String {
    BORDER_CHAR.to_string().repeat(DISPLAY_WIDTH)
}

/// Centers `text` between border characters in a [`DISPLAY_WIDTH`]-wide line.
///
/// # Examples
///
/// ```
/// use salary_calculator::display::centered;
///
/// let line = centered("Hello World");
/// assert_eq!(line.len(), 60);
/// assert!(line.starts_with("=") && line.ends_with("="));
/// assert_eq!(line.trim_matches('=').trim(), "Hello World");
/// ```
pub fn centered(text: &str) -> String {
    centered_in(text, DISPLAY_WIDTH)
}

/// Centers `text` between border characters in a line `width` columns wide.
///
/// When the padding cannot be split evenly the extra column goes on the
/// right, except for odd field widths where it goes on the left. Text that
/// does not fit is written between the borders unpadded.
pub fn centered_in(text: &str, width: usize) -> String {
    let field = width.saturating_sub(2);
    let text_width = text.width();

    if text_width >= field {
        return format!("{BORDER_CHAR}{text}{BORDER_CHAR}");
    }

    let padding = field - text_width;
    let left = padding / 2 + (padding & field & 1);
    let right = padding - left;

    format!(
        "{BORDER_CHAR}{}{text}{}{BORDER_CHAR}",
        " ".repeat(left),
        " ".repeat(right)
    )
}
