//! Text rendering of a board and terminal redraw

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};
use std::io::Write;

use crate::engine::grid::GridEngine;
use crate::io::configuration::{ALIVE_GLYPH, DEAD_GLYPH};
use crate::io::error::{Result, terminal_error};
use crate::session::control::Session;

/// Draw the board as text, one line per row
pub fn render_text(engine: &GridEngine) -> String {
    let size = engine.size();
    let mut out = String::with_capacity(size * (size * ALIVE_GLYPH.len_utf8() + 1));

    for (index, row) in engine.rows().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        out.extend(
            row.iter()
                .by_vals()
                .map(|alive| if alive { ALIVE_GLYPH } else { DEAD_GLYPH }),
        );
    }

    out
}

/// One-line summary of a session
pub fn status_line(session: &Session) -> String {
    let state = if session.is_running() {
        "running"
    } else {
        "stopped"
    };
    format!(
        "generation {} | population {} | {state}",
        session.generation(),
        session.engine().population()
    )
}

/// Redraws a session in place on a terminal-like writer
pub struct TerminalRenderer<W: Write> {
    out: W,
}

impl<W: Write> TerminalRenderer<W> {
    /// Wrap a writer, usually standard output
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Clear the screen and draw the board followed by the status line
    ///
    /// # Errors
    ///
    /// Returns `Terminal` if writing to the underlying writer fails
    pub fn draw(&mut self, session: &Session) -> Result<()> {
        let board = render_text(session.engine());
        let status = status_line(session);

        queue!(
            self.out,
            MoveTo(0, 0),
            Clear(ClearType::All),
            Print(board),
            Print('\n'),
            Print(status),
            Print('\n')
        )
        .map_err(terminal_error)?;
        self.out.flush().map_err(terminal_error)
    }

    /// Give back the wrapped writer
    pub fn into_inner(self) -> W {
        self.out
    }
}
