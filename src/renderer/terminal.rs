//! Terminal output and ball animation
//!
//! Each animation frame clears the screen, redraws the ground with the ball
//! on it, then pauses. Frames run to completion before the outcome is shown.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use glam::IVec2;

use super::{GlyphSet, feedback, game_info, legend, render_grid};
use crate::sim::{Animator, DeliveryReport, Ground, MatchState};

pub struct TerminalRenderer<W: Write> {
    out: W,
    glyphs: GlyphSet,
    /// Pause between animation frames (None disables animation)
    frame_delay: Option<Duration>,
    /// Clear the screen before each board/frame
    clear: bool,
}

impl TerminalRenderer<io::Stdout> {
    pub fn stdout(glyphs: GlyphSet, frame_delay: Option<Duration>) -> Self {
        Self::new(io::stdout(), glyphs, frame_delay, true)
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, glyphs: GlyphSet, frame_delay: Option<Duration>, clear: bool) -> Self {
        Self {
            out,
            glyphs,
            frame_delay,
            clear,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn clear_screen(&mut self) -> io::Result<()> {
        if self.clear {
            execute!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }

    /// Full board between deliveries: match info, ground, legend
    pub fn show_board(&mut self, state: &MatchState, ground: &Ground) -> io::Result<()> {
        self.clear_screen()?;
        writeln!(self.out, "{}", game_info(state))?;
        write!(self.out, "{}", render_grid(ground, self.glyphs))?;
        writeln!(self.out, "{}", legend(self.glyphs))?;
        self.out.flush()
    }

    /// Print a line of text (prompts, messages)
    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")?;
        self.out.flush()
    }

    fn draw_frame(&mut self, ground: &Ground) -> io::Result<()> {
        self.clear_screen()?;
        write!(self.out, "{}", render_grid(ground, self.glyphs))?;
        writeln!(self.out, "\n🎾 Ball in the air...\n")?;
        self.out.flush()
    }
}

impl<W: Write> Animator for TerminalRenderer<W> {
    fn frame(&mut self, ground: &Ground, _step: u32, _ball: IVec2) {
        let Some(delay) = self.frame_delay else {
            return;
        };
        if let Err(e) = self.draw_frame(ground) {
            log::warn!("Frame draw failed: {e}");
            return;
        }
        thread::sleep(delay);
    }

    fn resolved(&mut self, report: &DeliveryReport, state: &MatchState) {
        if let Err(e) = self.line(&feedback(report, state)) {
            log::warn!("Feedback write failed: {e}");
        }
    }
}
