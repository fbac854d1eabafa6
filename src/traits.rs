use std::time::{Duration, Instant};

use crate::key::KeyCode;

/// The text routines of a graphics or font library.
///
/// Both the input engine and the text layout engine draw exclusively through
/// this interface. Coordinates are in pixels; codepoints are single bytes.
pub trait TextBackend {
    /// Moves the text cursor to `(x, y)`.
    fn set_cursor(&mut self, x: u32, y: u32);
    fn cursor_x(&self) -> u32;
    fn cursor_y(&self) -> u32;

    /// Draws `codepoint` at the text cursor and advances the cursor by the
    /// glyph's width.
    fn draw_glyph(&mut self, codepoint: u8);

    fn glyph_width(&self, codepoint: u8) -> u32;

    /// Fills a rectangle with an 8bpp color. Used for the input cursor and
    /// for clearing input fields; backends that cannot fill leave it as a no-op.
    fn fill_rect(&mut self, _x: u32, _y: u32, _width: u32, _height: u32, _color: u8) {}
}

/// A keypad that can be polled without blocking.
pub trait Keypad {
    /// Returns the key currently pressed, if any.
    ///
    /// The input loops poll this back to back with no pause of their own.
    /// Hosts with an OS underneath should wait briefly for an event here
    /// (sleep, or block with a short timeout) rather than return at once.
    fn scan(&mut self) -> Option<KeyCode>;
}

/// Monotonic time source for timed input.
pub trait Clock {
    /// Time elapsed since an arbitrary, fixed epoch.
    fn elapsed(&self) -> Duration;
}

/// [`Clock`] backed by [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    epoch: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn elapsed(&self) -> Duration {
        self.epoch.elapsed()
    }
}
