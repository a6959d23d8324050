//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The lane console is line-oriented (the operator types events under the
//! board), so every draw is a full redraw from the top-left corner rather than a
//! diff against the previous frame.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
    clear_screen: bool,
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
            buf: Vec::with_capacity(16 * 1024),
            clear_screen: true,
        }
    }

    /// Keep terminal scrollback: append each board instead of clearing first.
    pub fn with_clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }

    /// Draw a framebuffer and leave the cursor on the line below it.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        if self.clear_screen {
            encode_full_into(fb, &mut self.buf)?;
        } else {
            encode_rows_into(fb, &mut self.buf)?;
        }
        self.buf.queue(Print("\r\n"))?;
        self.flush_buf()
    }

    /// Print an operator prompt on its own line.
    pub fn prompt(&mut self, text: &str) -> Result<()> {
        self.buf.clear();
        self.buf.queue(Print(text))?;
        self.buf.queue(Print("\r\n"))?;
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode a clear-screen plus full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;
    encode_rows_into(fb, out)
}

/// Encode every framebuffer row at the current cursor position.
///
/// Style escapes are emitted only where the style changes within a row; each
/// row ends with a color reset so line breaks never carry a background.
pub fn encode_rows_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    for y in 0..fb.height() {
        if y > 0 {
            out.queue(Print("\r\n"))?;
        }
        let mut current: Option<CellStyle> = None;
        for cell in fb.row(y) {
            if current != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
        out.queue(ResetColor)?;
    }
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
