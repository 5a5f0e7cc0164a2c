//! Terminal interaction: screen clearing and line prompts.

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, BufRead, Write};

/// Clear the whole screen and home the cursor.
///
/// Crossterm picks the mechanism per platform (ANSI sequences or the
/// Windows console API), so there is no OS branching here.
pub fn clear_screen(out: &mut impl Write) -> io::Result<()> {
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))
}

/// Print `prompt` without a newline, then read one line from `input`.
///
/// The caller owns the reader and writer; nothing here touches global
/// stdin. The trailing newline (and carriage return) are stripped.
pub fn prompt_line<R, W>(input: &mut R, output: &mut W, prompt: &str) -> io::Result<String>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}
