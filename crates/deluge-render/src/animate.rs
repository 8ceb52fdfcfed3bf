//! Paced, frame-by-frame drawing of a flood run.
//!
//! [`AnimatedRenderer`] attaches to the engine as a [`FloodObserver`] and
//! redraws the whole map after every admission, then sleeps. Pacing lives
//! here; the engine itself never waits.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use deluge_core::GridPoint;
use deluge_engine::{FloodObserver, FloodState};
use deluge_terrain::Terrain;
use log::warn;

use crate::frame::{render_frame, RenderStyle};

/// Blank lines written ahead of each frame to push the previous one off
/// screen. Portable across terminals without escape sequences.
const CLEAR_LINES: usize = 50;

/// Writes a cleared frame to `W` on each admission.
///
/// The first write error stops all further drawing and pacing. It is held
/// until [`finish`](Self::finish) so the run itself is not interrupted.
pub struct AnimatedRenderer<'t, W: Write> {
    out: W,
    terrain: &'t Terrain,
    style: RenderStyle,
    frame_delay: Duration,
    frames: usize,
    error: Option<io::Error>,
}

impl<'t, W: Write> AnimatedRenderer<'t, W> {
    /// Renderer for `terrain` drawing into `out` with no delay between frames.
    pub fn new(out: W, terrain: &'t Terrain, style: RenderStyle) -> Self {
        Self {
            out,
            terrain,
            style,
            frame_delay: Duration::ZERO,
            frames: 0,
            error: None,
        }
    }

    /// Sleep this long after each frame.
    pub fn with_frame_delay(mut self, delay: Duration) -> Self {
        self.frame_delay = delay;
        self
    }

    /// Style frames are drawn in.
    pub fn style(&self) -> RenderStyle {
        self.style
    }

    /// Frames written successfully so far.
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Clear the screen and draw `state` once, outside of any run.
    pub fn draw(&mut self, state: &FloodState) -> io::Result<()> {
        let frame = render_frame(self.terrain, state, self.style);
        self.out.write_all("\n".repeat(CLEAR_LINES).as_bytes())?;
        self.out.write_all(frame.as_bytes())?;
        self.out.flush()?;
        self.frames += 1;
        Ok(())
    }

    /// Report the first latched write error, or the number of frames drawn.
    /// Hands back the writer on success.
    pub fn finish(self) -> io::Result<(W, usize)> {
        match self.error {
            Some(e) => Err(e),
            None => Ok((self.out, self.frames)),
        }
    }
}

impl<W: Write> FloodObserver for AnimatedRenderer<'_, W> {
    fn on_admit(&mut self, _point: GridPoint, state: &FloodState) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.draw(state) {
            warn!("animation stopped after {} frames: {e}", self.frames);
            self.error = Some(e);
            return;
        }
        if !self.frame_delay.is_zero() {
            thread::sleep(self.frame_delay);
        }
    }
}
