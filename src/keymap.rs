//! Keymaps: decode tables from keypad scan codes to codepoints.
//!
//! A keymap is 57 bytes. Byte 0 is the keymap *indicator*, a codepoint a
//! host can draw next to an input field to show which keymap is active.
//! Bytes 1..=56 hold the codepoint for the key with that scan code, or 0
//! when the key has no mapping. This is the same table layout hosts use
//! to translate `os_GetCSC` results, so such a table can be passed to
//! [`Keymap::new`] unchanged.

use crate::error::{Result, TextioError};
use crate::key::KeyCode;

/// Size of a keymap in bytes: the indicator plus one slot per scan code.
pub const KEYMAP_LEN: usize = 57;

/// A decode table from [`KeyCode`] to codepoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Keymap {
    bytes: [u8; KEYMAP_LEN],
}

static UPPERCASE_LETTERS: Keymap = Keymap::from_table(
    b'A',
    b"\0\0\0\0\0\0\0\0\0\0\"WRMH\0\0?[VQLG\0\0:ZUPKFC\0 YTOJEB\0\0XSNIDA\0\0\0\0\0\0\0\0\0",
);

static LOWERCASE_LETTERS: Keymap = Keymap::from_table(
    b'a',
    b"\0\0\0\0\0\0\0\0\0\0\"wrmh\0\0?[vqlg\0\0:zupkfc\0 ytojeb\0\0xsnida\0\0\0\0\0\0\0\0\0",
);

// Letters and theta only; names may not contain punctuation or spaces.
static PRGM_NAME_LETTERS: Keymap = Keymap::from_table(
    b'A',
    b"\0\0\0\0\0\0\0\0\0\0\0WRMH\0\0\0[VQLG\0\0\0ZUPKFC\0\0YTOJEB\0\0XSNIDA\0\0\0\0\0\0\0\0\0",
);

static NUMERALS: Keymap = Keymap::from_table(
    b'1',
    b"\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0369\0\0\0\0\0258\0\0\0\00147\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0",
);

impl Keymap {
    const fn from_table(indicator: u8, table: &[u8; KEYMAP_LEN]) -> Keymap {
        let mut bytes = *table;
        bytes[0] = indicator;
        Keymap { bytes }
    }

    /// Builds a keymap from an `os_GetCSC`-style lookup table.
    ///
    /// Entry `n` of `table` is the codepoint for scan code `n`; entry 0 (the
    /// "no key" slot) is ignored and replaced by `indicator`. Shorter tables
    /// leave the remaining keys unmapped.
    pub fn new(indicator: u8, table: &[u8]) -> Result<Keymap> {
        if table.len() > KEYMAP_LEN {
            return Err(TextioError::KeymapTooLong(table.len()));
        }
        let mut bytes = [0u8; KEYMAP_LEN];
        bytes[..table.len()].copy_from_slice(table);
        bytes[0] = indicator;
        Ok(Keymap { bytes })
    }

    /// Wraps a raw 57-byte keymap as stored on the device.
    pub const fn from_bytes(bytes: [u8; KEYMAP_LEN]) -> Keymap {
        Keymap { bytes }
    }

    pub fn as_bytes(&self) -> &[u8; KEYMAP_LEN] {
        &self.bytes
    }

    pub fn indicator(&self) -> u8 {
        self.bytes[0]
    }

    /// Looks up the codepoint for `key`. Keys outside the keypad's scan code
    /// range and keys mapped to 0 decode to `None`.
    pub fn decode(&self, key: KeyCode) -> Option<u8> {
        if !key.is_scan_code() {
            return None;
        }
        match self.bytes[key.0 as usize] {
            0 => None,
            codepoint => Some(codepoint),
        }
    }

    /// Built-in uppercase letters keymap, indicator `'A'`.
    pub fn uppercase() -> &'static Keymap {
        &UPPERCASE_LETTERS
    }

    /// Built-in lowercase letters keymap, indicator `'a'`.
    pub fn lowercase() -> &'static Keymap {
        &LOWERCASE_LETTERS
    }

    /// Built-in program/appvar name letters keymap, indicator `'A'`.
    pub fn prgm_name() -> &'static Keymap {
        &PRGM_NAME_LETTERS
    }

    /// Built-in numerals keymap, indicator `'1'`.
    pub fn numerical() -> &'static Keymap {
        &NUMERALS
    }
}
