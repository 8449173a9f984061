use std::io::{self, Write};

use anyhow::{Context, Result};
use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::execute;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};

use crate::workspace::DiscardPrompt;

/// Blocking yes/no prompt drawn over the bottom terminal row. The next frame
/// repaints it away.
pub(super) fn confirm(message: &str) -> Result<bool> {
    let mut out = io::stdout();
    let (_cols, rows) = crossterm::terminal::size().context("terminal size")?;
    execute!(
        out,
        MoveTo(0, rows.saturating_sub(1)),
        Clear(ClearType::CurrentLine),
        Print(format!("{} [y/N] ", message)),
    )
    .context("draw confirm prompt")?;
    out.flush().ok();

    loop {
        if let Event::Key(key) = event::read().context("read event")? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            return Ok(matches!(key.code, KeyCode::Char('y') | KeyCode::Char('Y')));
        }
    }
}

/// The workbench's discard guard, backed by the blocking prompt. A prompt
/// that fails to draw or read counts as "keep my changes".
pub struct ConfirmDiscard;

impl DiscardPrompt for ConfirmDiscard {
    fn confirm_discard(&mut self) -> bool {
        confirm("Discard unsaved changes?").unwrap_or(false)
    }
}
