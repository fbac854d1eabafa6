use thiserror::Error;

/// Errors reported by IDS/keymap creation and by configuration setters.
///
/// Bounds conditions met while editing (full buffer, cursor already at the
/// start or end of the buffer) are not errors; the input engine ignores
/// those keystrokes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TextioError {
    #[error("Out of memory while allocating the input buffer")]
    OutOfMemory,

    #[error("An IDS needs at least one keymap slot")]
    NoKeymapSlots,

    #[error("{given} keymaps given but the IDS only has {slots} slots")]
    TooManyKeymaps { given: usize, slots: usize },

    #[error("Keymap index {index} out of range ({count} keymaps set)")]
    KeymapIndexOutOfRange { index: u8, count: usize },

    #[error("Keymap table is {0} bytes long, at most 57 allowed")]
    KeymapTooLong(usize),

    #[error("Unsupported print format code: {0}")]
    InvalidPrintFormat(u8),

    #[error("Invalid cursor dimensions: {width}x{height}")]
    InvalidCursorDimensions { width: u8, height: u8 },
}

pub type Result<T> = core::result::Result<T, TextioError>;
