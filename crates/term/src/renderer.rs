//! TerminalRenderer: presents framebuffers on the real terminal.
//!
//! The background is set once when the surface opens, so a frame is just
//! glyphs with a foreground color. Only rows that changed since the previous
//! frame are rewritten; a size change or [`TerminalRenderer::invalidate`]
//! clears the screen and rewrites everything.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::fb::FrameBuffer;
use crate::types::{Rgb, BACKGROUND_COLOR, WINDOW_TITLE};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    shown: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            shown: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Raw mode, alternate screen, titled, pointer reporting on.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        encode_enter_into(&mut self.buf)?;
        self.flush_buf()
    }

    /// Undo [`TerminalRenderer::enter`].
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        encode_exit_into(&mut self.buf)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next present to repaint the whole screen (after a resize).
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    /// Write `fb` to the terminal, rewriting only rows that differ from the
    /// frame presented last.
    pub fn present(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        encode_frame_into(self.shown.as_ref(), fb, &mut self.buf)?;
        self.flush_buf()?;
        match self.shown.as_mut() {
            Some(shown) => shown.copy_from(fb),
            None => self.shown = Some(fb.clone()),
        }
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

pub fn encode_enter_into(out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::EnterAlternateScreen)?;
    out.queue(terminal::SetTitle(WINDOW_TITLE))?;
    out.queue(terminal::DisableLineWrap)?;
    out.queue(cursor::Hide)?;
    out.queue(EnableMouseCapture)?;
    out.queue(SetBackgroundColor(to_color(BACKGROUND_COLOR)))?;
    Ok(())
}

pub fn encode_exit_into(out: &mut Vec<u8>) -> Result<()> {
    out.queue(DisableMouseCapture)?;
    out.queue(ResetColor)?;
    out.queue(terminal::EnableLineWrap)?;
    out.queue(cursor::Show)?;
    out.queue(terminal::LeaveAlternateScreen)?;
    Ok(())
}

/// Encode the rows of `next` that differ from `shown` into `out`.
///
/// With no previous frame, or one of another size, the screen is cleared and
/// every row is written. Returns the number of rows written.
pub fn encode_frame_into(
    shown: Option<&FrameBuffer>,
    next: &FrameBuffer,
    out: &mut Vec<u8>,
) -> Result<u16> {
    let same_size = shown.is_some_and(|s| s.width() == next.width() && s.height() == next.height());
    if !same_size {
        out.queue(terminal::Clear(terminal::ClearType::All))?;
    }

    let mut color: Option<Rgb> = None;
    let mut rows = 0;
    for y in 0..next.height() {
        if same_size && shown.is_some_and(|s| s.row(y) == next.row(y)) {
            continue;
        }
        out.queue(cursor::MoveTo(0, y))?;
        for cell in next.row(y) {
            if color != Some(cell.color) {
                out.queue(SetForegroundColor(to_color(cell.color)))?;
                color = Some(cell.color);
            }
            out.queue(Print(cell.ch))?;
        }
        rows += 1;
    }
    Ok(rows)
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
