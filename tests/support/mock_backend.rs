use textio::TextBackend;

/// A glyph drawn by [`MockBackend`]: position and codepoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Drawn {
    pub x: u32,
    pub y: u32,
    pub codepoint: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fill {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub color: u8,
}

/// Records everything drawn instead of touching a screen.
pub struct MockBackend {
    x: u32,
    y: u32,
    widths: [u32; 256],
    pub drawn: Vec<Drawn>,
    pub fills: Vec<Fill>,
}

impl MockBackend {
    /// Every glyph is `width` pixels wide.
    pub fn monospace(width: u32) -> Self {
        Self {
            x: 0,
            y: 0,
            widths: [width; 256],
            drawn: Vec::new(),
            fills: Vec::new(),
        }
    }

    pub fn with_width(mut self, codepoint: u8, width: u32) -> Self {
        self.widths[codepoint as usize] = width;
        self
    }

    /// Codepoints drawn so far, in order.
    pub fn text(&self) -> Vec<u8> {
        self.drawn.iter().map(|d| d.codepoint).collect()
    }

    pub fn reset_log(&mut self) {
        self.drawn.clear();
        self.fills.clear();
    }
}

impl TextBackend for MockBackend {
    fn set_cursor(&mut self, x: u32, y: u32) {
        self.x = x;
        self.y = y;
    }

    fn cursor_x(&self) -> u32 {
        self.x
    }

    fn cursor_y(&self) -> u32 {
        self.y
    }

    fn draw_glyph(&mut self, codepoint: u8) {
        self.drawn.push(Drawn {
            x: self.x,
            y: self.y,
            codepoint,
        });
        self.x += self.widths[codepoint as usize];
    }

    fn glyph_width(&self, codepoint: u8) -> u32 {
        self.widths[codepoint as usize]
    }

    fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, color: u8) {
        self.fills.push(Fill {
            x,
            y,
            width,
            height,
            color,
        });
    }
}
