//! Terminal control.

use std::io::Write;

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};

/// Clears the screen and moves the cursor to the top-left corner.
pub fn clear_screen<W: Write>(out: &mut W) -> std::io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    out.flush()
}
