//! Terminal keypad demo using crossterm.
//!
//! Emulates the calculator keypad in a terminal: letters are translated to
//! the scan codes of the keys that produce them, so the built-in keymaps
//! work unchanged. One terminal cell stands in for one pixel.
//! Run with: cargo run --example terminal_keypad
//!
//! Keys: letters/digits type, Tab switches keymap, arrows move the cursor,
//! Backspace deletes, Esc clears, Enter prints the input and quits.

use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode as CKeyCode, KeyEvent as CKeyEvent, KeyEventKind},
    execute, queue,
    style::Print,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use textio::{Engine, Ids, KeyCode, Keymap, Keypad, TextBackend, TextLayout};

const BACKGROUND: u8 = 0xFF;

/// Draws glyphs as terminal cells.
struct TerminalBackend {
    out: Stdout,
    x: u32,
    y: u32,
}

impl TerminalBackend {
    fn new() -> Self {
        Self {
            out: io::stdout(),
            x: 0,
            y: 0,
        }
    }

    fn put(&mut self, x: u32, y: u32, s: &str) {
        let _ = queue!(self.out, MoveTo(x as u16, y as u16), Print(s));
    }
}

impl TextBackend for TerminalBackend {
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
        let glyph = match codepoint {
            0x20..=0x7E => (codepoint as char).to_string(),
            _ => "θ".to_string(),
        };
        self.put(self.x, self.y, &glyph);
        self.x += 1;
    }

    fn glyph_width(&self, _codepoint: u8) -> u32 {
        1
    }

    fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, color: u8) {
        let cell = if color == BACKGROUND { " " } else { "▏" };
        let row = cell.repeat(width as usize);
        for dy in 0..height {
            self.put(x, y + dy, &row);
        }
    }
}

/// Reads crossterm key events as keypad scan codes.
struct TerminalKeypad {
    quit: bool,
}

impl TerminalKeypad {
    fn translate(event: CKeyEvent) -> Option<KeyCode> {
        match event.code {
            CKeyCode::Left => Some(KeyCode::LEFT),
            CKeyCode::Right => Some(KeyCode::RIGHT),
            CKeyCode::Up => Some(KeyCode::UP),
            CKeyCode::Down => Some(KeyCode::DOWN),
            CKeyCode::Enter => Some(KeyCode::ENTER),
            CKeyCode::Backspace => Some(KeyCode::DEL),
            CKeyCode::Esc => Some(KeyCode::CLEAR),
            CKeyCode::Tab => Some(KeyCode::ALPHA),
            CKeyCode::Char(c) => Self::scan_code_for(c as u8),
            _ => None,
        }
    }

    // The key that types `c` in any built-in keymap.
    fn scan_code_for(c: u8) -> Option<KeyCode> {
        [Keymap::uppercase(), Keymap::lowercase(), Keymap::numerical()]
            .into_iter()
            .find_map(|map| {
                (1..=KeyCode::MAX_SCAN_CODE)
                    .map(KeyCode)
                    .find(|&key| {
                        let decoded = map.decode(key);
                        decoded == Some(c) || decoded == Some(c.to_ascii_uppercase())
                    })
            })
    }
}

impl Keypad for TerminalKeypad {
    fn scan(&mut self) -> Option<KeyCode> {
        let _ = io::stdout().flush();
        if !event::poll(Duration::from_millis(20)).ok()? {
            return None;
        }
        match event::read().ok()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if key.code == CKeyCode::Char('c')
                    && key.modifiers.contains(event::KeyModifiers::CONTROL)
                {
                    self.quit = true;
                    return Some(KeyCode::ENTER);
                }
                Self::translate(key)
            }
            _ => None,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    terminal::enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen, Hide)?;

    let mut backend = TerminalBackend::new();
    let mut keypad = TerminalKeypad { quit: false };
    let mut engine = Engine::builder()
        .blink_rate(10)
        .background_color(BACKGROUND)
        .build();

    let mut ids = Ids::alphanumerical(24, 4, 3, 16)?;
    ids.set_cursor_dimensions(1, 1)?;
    ids.set_cursor_color(0x00);

    let mut layout = TextLayout::new();
    layout.set_window(4, 6, 30, 10);
    layout.set_font_height(1);
    backend.put(4, 1, "textio keypad demo (Enter to finish)");

    loop {
        backend.put(2, 3, &(ids.current_keymap_indicator() as char).to_string());
        let key = engine.input(&mut ids, &mut backend, &mut keypad);
        if key == KeyCode::ALPHA {
            ids.next_keymap();
        }
        if key == KeyCode::ENTER || keypad.quit {
            break;
        }
    }

    layout.set_print_format(0x02)?;
    layout.print_text(&mut backend, ids.data(), 6);
    backend.put(4, 12, "press any key");
    io::stdout().flush()?;
    while keypad.scan().is_none() {}

    execute!(io::stdout(), Show, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    Ok(())
}
