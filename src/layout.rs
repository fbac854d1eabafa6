//! Line measurement, line splitting and justified printing.
//!
//! Text is a byte slice of single-byte codepoints. Lines end after the
//! window's newline codepoint, or before the first character that would
//! overflow the window width. Splitting ignores word boundaries, so a long
//! word is broken at the pixel limit.

use log::{trace, warn};

use crate::error::Result;
use crate::traits::TextBackend;
use crate::types::{PrintFormat, TextWindow};

/// Codepoint expanded to `tab_size` spaces.
pub const TAB: u8 = b'\t';

/// The text layout engine. Holds the one text window it prints into.
#[derive(Debug, Clone, Default)]
pub struct TextLayout {
    window: TextWindow,
}

impl TextLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_window(window: TextWindow) -> Self {
        Self { window }
    }

    pub fn window(&self) -> &TextWindow {
        &self.window
    }

    pub fn set_window(&mut self, x: u32, y: u32, width: u32, height: u32) {
        self.window.x = x;
        self.window.y = y;
        self.window.width = width;
        self.window.height = height;
    }

    pub fn set_line_spacing(&mut self, above: u8, below: u8) {
        self.window.spacing_above = above;
        self.window.spacing_below = below;
    }

    pub fn spacing_above(&self) -> u8 {
        self.window.spacing_above
    }

    pub fn spacing_below(&self) -> u8 {
        self.window.spacing_below
    }

    pub fn set_font_height(&mut self, height: u8) {
        self.window.font_height = height;
    }

    pub fn font_height(&self) -> u8 {
        self.window.font_height
    }

    /// Sets the print format from its code. Unknown codes are rejected and
    /// the current format is kept.
    pub fn set_print_format(&mut self, code: u8) -> Result<()> {
        match PrintFormat::try_from(code) {
            Ok(format) => {
                self.window.format = format;
                Ok(())
            }
            Err(err) => {
                warn!("{}", err);
                Err(err)
            }
        }
    }

    pub fn print_format(&self) -> PrintFormat {
        self.window.format
    }

    pub fn set_newline_code(&mut self, codepoint: u8) {
        self.window.newline = codepoint;
    }

    pub fn newline_code(&self) -> u8 {
        self.window.newline
    }

    pub fn set_tab_size(&mut self, size: u8) {
        self.window.tab_size = size;
    }

    pub fn tab_size(&self) -> u8 {
        self.window.tab_size
    }

    // ---- Measuring ----

    /// Pixel width of `c`; a tab is `tab_size` spaces wide.
    pub fn char_width<B: TextBackend>(&self, backend: &B, c: u8) -> u32 {
        if c == TAB {
            u32::from(self.window.tab_size) * backend.glyph_width(b' ')
        } else {
            backend.glyph_width(c)
        }
    }

    /// Pixel width of `line` up to its first newline.
    pub fn line_width<B: TextBackend>(&self, backend: &B, line: &[u8]) -> u32 {
        line.iter()
            .take_while(|&&c| c != self.window.newline)
            .map(|&c| self.char_width(backend, c))
            .sum()
    }

    /// Pixel width of the first `num_chars` characters of `text`. Newlines
    /// take no space.
    pub fn string_width<B: TextBackend>(&self, backend: &B, text: &[u8], num_chars: usize) -> u32 {
        text.iter()
            .take(num_chars)
            .filter(|&&c| c != self.window.newline)
            .map(|&c| self.char_width(backend, c))
            .sum()
    }

    // ---- Splitting ----

    /// Offset of the line that follows the one starting at `start`.
    ///
    /// Every line takes at least one character, even one wider than the
    /// window.
    pub fn next_line_start<B: TextBackend>(&self, backend: &B, text: &[u8], start: usize) -> usize {
        let mut width = 0;
        let mut i = start;
        while i < text.len() {
            let c = text[i];
            if c == self.window.newline {
                return i + 1;
            }
            let advance = self.char_width(backend, c);
            if i > start && width + advance > self.window.width {
                return i;
            }
            width += advance;
            i += 1;
        }
        text.len()
    }

    /// Offset of line `line_number` (0-indexed) of `text`. Line numbers past
    /// the end give `text.len()`.
    pub fn line_start<B: TextBackend>(&self, backend: &B, text: &[u8], line_number: usize) -> usize {
        let mut start = 0;
        for _ in 0..line_number {
            if start >= text.len() {
                return text.len();
            }
            start = self.next_line_start(backend, text, start);
        }
        start
    }

    /// The lines of `text`, each including its newline if it has one.
    pub fn lines<'a, B: TextBackend>(&'a self, backend: &'a B, text: &'a [u8]) -> Lines<'a, B> {
        Lines {
            layout: self,
            backend,
            text,
            pos: 0,
        }
    }

    // ---- Printing ----

    /// Offset from the window's left edge of a line `line_width` pixels wide.
    pub fn justify(&self, line_width: u32) -> u32 {
        let slack = self.window.width.saturating_sub(line_width);
        match self.window.format {
            PrintFormat::LeftMarginFlush => 0,
            PrintFormat::Centered => slack / 2,
            PrintFormat::RightMarginFlush => slack,
        }
    }

    /// Prints `text` into the window starting at row `y`.
    ///
    /// Lines below the window are still drawn; size the text to fit.
    pub fn print_text<B: TextBackend>(&self, backend: &mut B, text: &[u8], y: u32) {
        let line_height = u32::from(self.window.font_height)
            + u32::from(self.window.spacing_above)
            + u32::from(self.window.spacing_below);

        let mut y = y;
        let mut start = 0;
        while start < text.len() {
            let end = self.next_line_start(backend, text, start);
            let line = &text[start..end];
            let x = self.window.x + self.justify(self.line_width(backend, line));
            trace!("printing line at ({}, {}): {} chars", x, y, line.len());

            backend.set_cursor(x, y);
            for &c in line.iter().take_while(|&&c| c != self.window.newline) {
                self.print_char(backend, c);
            }

            y += line_height;
            start = end;
        }
    }

    /// Draws `c` at the backend cursor; a tab leaves a blank advance.
    pub fn print_char<B: TextBackend>(&self, backend: &mut B, c: u8) {
        if c == TAB {
            self.print_tab(backend);
        } else {
            backend.draw_glyph(c);
        }
    }

    pub fn print_tab<B: TextBackend>(&self, backend: &mut B) {
        let advance = self.char_width(backend, TAB);
        let (x, y) = (backend.cursor_x(), backend.cursor_y());
        backend.set_cursor(x + advance, y);
    }
}

/// Iterator over the lines of a text, see [`TextLayout::lines`].
pub struct Lines<'a, B> {
    layout: &'a TextLayout,
    backend: &'a B,
    text: &'a [u8],
    pos: usize,
}

impl<'a, B: TextBackend> Iterator for Lines<'a, B> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.text.len() {
            return None;
        }
        let end = self.layout.next_line_start(self.backend, self.text, self.pos);
        let line = &self.text[self.pos..end];
        self.pos = end;
        Some(line)
    }
}
