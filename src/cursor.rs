use std::fmt;
use std::io::{self, Write};

use crossterm::Command;
use crossterm::cursor::{Hide, Show};

/// Hides and restores the terminal cursor around an animation.
pub trait CursorControl: Send {
    fn hide(&self, out: &mut dyn Write) -> io::Result<()>;
    fn show(&self, out: &mut dyn Write) -> io::Result<()>;
}

/// Writes the ANSI hide/show sequences, framed by carriage returns.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiCursor;

impl CursorControl for AnsiCursor {
    fn hide(&self, out: &mut dyn Write) -> io::Result<()> {
        out.write_all(framed(&Hide)?.as_bytes())?;
        out.flush()
    }

    fn show(&self, out: &mut dyn Write) -> io::Result<()> {
        out.write_all(framed(&Show)?.as_bytes())?;
        out.flush()
    }
}

/// Leaves the cursor alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCursor;

impl CursorControl for NoCursor {
    fn hide(&self, _out: &mut dyn Write) -> io::Result<()> {
        Ok(())
    }

    fn show(&self, _out: &mut dyn Write) -> io::Result<()> {
        Ok(())
    }
}

/// Picks the controller matching a config's `hide_cursor` flag.
pub fn for_flag(hide_cursor: bool) -> Box<dyn CursorControl> {
    if hide_cursor {
        Box::new(AnsiCursor)
    } else {
        Box::new(NoCursor)
    }
}

fn framed(command: &impl Command) -> io::Result<String> {
    let mut seq = String::from("\r");
    command
        .write_ansi(&mut seq)
        .map_err(|fmt::Error| io::Error::other("failed to format cursor sequence"))?;
    seq.push('\r');
    Ok(seq)
}
