//! Terminal control and line input for askfile.
//!
//! askfile does not take over the terminal: each prompt cycle clears the screen,
//! prints the listing and reads one line in cooked mode. These helpers work on any
//! reader/writer pair so the loop can be driven by scripted input.

use crossterm::{
    cursor::{MoveTo, Show},
    execute,
    terminal::{Clear, ClearType},
};
use std::io::{self, BufRead, Write};

/// Clears the whole screen and moves the cursor to the top left corner.
pub fn clear_screen<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))
}

/// Makes sure the cursor is visible again, used when bailing out of a run.
pub fn restore_cursor<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, Show)
}

/// Writes the prompt on its own line and flushes so it shows before blocking on input.
pub fn prompt<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    write!(out, "\n{}", text)?;
    out.flush()
}

/// Reads one line and trims surrounding whitespace.
/// # Returns
/// `None` once the input is exhausted.
pub fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut buf = String::new();
    match input.read_line(&mut buf)? {
        0 => Ok(None),
        _ => Ok(Some(buf.trim().to_string())),
    }
}
