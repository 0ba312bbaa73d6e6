//! Interactive event loop.
//!
//! Maps key presses onto the engine's control surface: digits pick a
//! variant, Enter starts it, `r` resets it, `+`/`-` adjust the animation
//! speed. Runs are not cancellable: while a sort animates, input stays
//! buffered until the run completes, which is exactly the engine's
//! single-flight policy.

use std::io::{stdout, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{poll, read, Event, KeyCode, KeyEventKind};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;

use sortviz::prelude::*;

/// Smallest and largest selectable pause, in milliseconds.
const SPEED_STEP_MS: u64 = 25;
const SPEED_MAX_MS: u64 = 1000;

/// Interactive session state around the animated processor.
pub struct App {
    viz: AnimatedSortviz,
    current: Variant,
    speed_ms: u64,
}

impl App {
    pub fn new(viz: AnimatedSortviz, speed_ms: u64) -> Self {
        Self {
            viz,
            current: Variant::Bubble,
            speed_ms,
        }
    }

    /// Run the event loop until the user quits.
    pub fn run(mut self) -> Result<()> {
        enable_raw_mode().context("enabling raw mode")?;
        stdout()
            .execute(EnterAlternateScreen)
            .and_then(|out| out.execute(Hide))
            .context("entering alternate screen")?;

        let outcome = self.event_loop();

        let _ = stdout().execute(Show);
        let _ = stdout().execute(LeaveAlternateScreen);
        let _ = disable_raw_mode();
        outcome
    }

    fn event_loop(&mut self) -> Result<()> {
        // First paint: the build-time idle renders went to a screen we
        // had not entered yet, so show the current variant from scratch.
        self.viz.reset(self.current);

        loop {
            self.draw_header().context("drawing header")?;

            if !poll(Duration::from_millis(100)).unwrap_or(false) {
                continue;
            }
            let Ok(Event::Key(key)) = read() else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char(c @ '1'..='5') => {
                    let index = c as usize - '1' as usize;
                    self.current = Variant::ALL[index];
                    self.viz.reset(self.current);
                }
                KeyCode::Enter | KeyCode::Char('s') => {
                    self.viz.start(self.current);
                }
                KeyCode::Char('r') => {
                    self.viz.reset(self.current);
                }
                KeyCode::Char('+') => {
                    self.speed_ms = (self.speed_ms + SPEED_STEP_MS).min(SPEED_MAX_MS);
                    self.viz.set_speed(self.speed_ms);
                }
                KeyCode::Char('-') => {
                    self.speed_ms = self.speed_ms.saturating_sub(SPEED_STEP_MS);
                    self.viz.set_speed(self.speed_ms);
                }
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                _ => {}
            }
        }
    }

    fn draw_header(&self) -> Result<()> {
        let mut out = stdout();

        out.execute(MoveTo(0, 0))?;
        out.execute(Clear(ClearType::CurrentLine))?;
        out.execute(SetForegroundColor(Color::Yellow))?;
        out.execute(Print("sortviz — sorting algorithm animation"))?;
        out.execute(ResetColor)?;

        out.execute(MoveTo(0, 1))?;
        out.execute(Clear(ClearType::CurrentLine))?;
        let menu: Vec<String> = Variant::ALL
            .iter()
            .enumerate()
            .map(|(i, v)| {
                if *v == self.current {
                    format!("[{} {}]", i + 1, v)
                } else {
                    format!(" {} {} ", i + 1, v)
                }
            })
            .collect();
        out.execute(Print(menu.join(" ")))?;

        out.execute(MoveTo(0, 2))?;
        out.execute(Clear(ClearType::CurrentLine))?;
        out.execute(SetForegroundColor(Color::DarkGrey))?;
        out.execute(Print(format!(
            "enter/s start   r reset   +/- speed ({} ms)   q quit",
            self.speed_ms
        )))?;
        out.execute(ResetColor)?;
        out.flush()?;
        Ok(())
    }
}
