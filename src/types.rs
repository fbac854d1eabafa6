use crate::error::TextioError;
use crate::key::KeyCode;

bitflags::bitflags! {
    /// Status flags of an input data structure.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct IdsFlags: u8 {
        /// Input is refused; the input routines only report the key pressed.
        const LOCKED      = 0b0001;
        /// The data buffer holds as many characters as it can.
        const BUFFER_FULL = 0b0010;
        /// A numeral may not be the first character of the buffer.
        const PRGM_NAME   = 0b0100;
    }
}

/// Keys that trigger the input engine's editing actions.
///
/// These apply to every IDS handled by the engine that owns them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyBindings {
    pub clear: KeyCode,
    pub backspace: KeyCode,
    pub cursor_left: KeyCode,
    pub cursor_right: KeyCode,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            clear: KeyCode::CLEAR,
            backspace: KeyCode::DEL,
            cursor_left: KeyCode::LEFT,
            cursor_right: KeyCode::RIGHT,
        }
    }
}

/// The editing action bound to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAction {
    Clear,
    Backspace,
    CursorLeft,
    CursorRight,
}

impl KeyBindings {
    /// The action bound to `key`, if any. Clear wins when a key is bound twice.
    pub fn action(&self, key: KeyCode) -> Option<EditAction> {
        if key == self.clear {
            Some(EditAction::Clear)
        } else if key == self.backspace {
            Some(EditAction::Backspace)
        } else if key == self.cursor_left {
            Some(EditAction::CursorLeft)
        } else if key == self.cursor_right {
            Some(EditAction::CursorRight)
        } else {
            None
        }
    }
}

/// Horizontal placement of printed lines inside the text window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum PrintFormat {
    #[default]
    LeftMarginFlush = 0x01,
    Centered = 0x02,
    RightMarginFlush = 0x03,
}

impl TryFrom<u8> for PrintFormat {
    type Error = TextioError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0x01 => Ok(PrintFormat::LeftMarginFlush),
            0x02 => Ok(PrintFormat::Centered),
            0x03 => Ok(PrintFormat::RightMarginFlush),
            other => Err(TextioError::InvalidPrintFormat(other)),
        }
    }
}

impl From<PrintFormat> for u8 {
    fn from(format: PrintFormat) -> Self {
        format as u8
    }
}

/// The rectangle and typesetting parameters used by the text layout engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextWindow {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub spacing_above: u8,
    pub spacing_below: u8,
    pub newline: u8,
    /// Tab width in spaces.
    pub tab_size: u8,
    /// Height of the current font; backends cannot report it.
    pub font_height: u8,
    pub format: PrintFormat,
}

impl Default for TextWindow {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            width: 320,
            height: 240,
            spacing_above: 0,
            spacing_below: 0,
            newline: b'\n',
            tab_size: 4,
            font_height: 8,
            format: PrintFormat::LeftMarginFlush,
        }
    }
}
