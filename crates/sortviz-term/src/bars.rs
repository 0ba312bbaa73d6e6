//! Bar-chart render sink for the terminal.
//!
//! Draws one vertical bar per array element, height proportional to the
//! value, with the frame's highlighted indices in a contrasting color.
//! The panel draws into a fixed region below the header; the engine only
//! ever sees the [`RenderSink`] contract.

use std::io::{stdout, Write};

use crossterm::cursor::MoveTo;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use crossterm::QueueableCommand;

use sortviz::prelude::*;

/// First terminal row of the bar region.
pub const PANEL_TOP: u16 = 4;

/// Rows available for bars.
pub const PANEL_HEIGHT: u16 = 20;

/// Terminal bar panel bound to one variant's render events.
pub struct BarPanel {
    max_value: u32,
}

impl BarPanel {
    /// Panel scaled to the configured upper value bound.
    pub fn new(max_value: u32) -> Self {
        Self {
            max_value: max_value.max(1),
        }
    }

    /// Bar height in rows for one value.
    fn bar_height(&self, value: u32) -> u16 {
        let scaled = (value as u64 * PANEL_HEIGHT as u64) / self.max_value as u64;
        (scaled as u16).clamp(1, PANEL_HEIGHT)
    }

    fn draw(&self, frame: &Frame<'_>) -> std::io::Result<()> {
        let mut out = stdout();

        // Status line: variant and step counter.
        out.queue(MoveTo(0, PANEL_TOP - 1))?;
        out.queue(Clear(ClearType::CurrentLine))?;
        out.queue(SetForegroundColor(Color::DarkGrey))?;
        out.queue(Print(format!("{} — step {}", frame.variant, frame.step)))?;
        out.queue(ResetColor)?;

        // Bars, drawn top row first.
        for row in 0..PANEL_HEIGHT {
            out.queue(MoveTo(0, PANEL_TOP + row))?;
            out.queue(Clear(ClearType::CurrentLine))?;
            let threshold = PANEL_HEIGHT - row;
            for (index, &value) in frame.array.iter().enumerate() {
                let color = if frame.highlights.contains(index) {
                    Color::Red
                } else {
                    Color::Cyan
                };
                let cell = if self.bar_height(value) >= threshold {
                    "█ "
                } else {
                    "  "
                };
                out.queue(SetForegroundColor(color))?;
                out.queue(Print(cell))?;
            }
            out.queue(ResetColor)?;
        }

        // Value labels under the bars.
        out.queue(MoveTo(0, PANEL_TOP + PANEL_HEIGHT))?;
        out.queue(Clear(ClearType::CurrentLine))?;
        for (index, &value) in frame.array.iter().enumerate() {
            let color = if frame.highlights.contains(index) {
                Color::Red
            } else {
                Color::DarkGrey
            };
            out.queue(SetForegroundColor(color))?;
            out.queue(Print(format!("{:<2}", value % 100)))?;
        }
        out.queue(ResetColor)?;

        out.flush()
    }
}

impl RenderSink for BarPanel {
    fn render(&mut self, frame: &Frame<'_>) {
        // Terminal write failures leave the frame undrawn; the run
        // continues and the next frame repaints the region.
        let _ = self.draw(frame);
    }
}
