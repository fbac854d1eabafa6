/// A raw key code as reported by the keypad scanner.
///
/// The keypad is an 8×7 matrix. Scan codes run from 1 to 56 and index a
/// [`Keymap`](crate::Keymap) slot directly; 0 means no key is pressed.
/// Hosts with other hardware should translate their events into these codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyCode(pub u8);

impl KeyCode {
    /// No key was pressed.
    pub const NONE: KeyCode = KeyCode(0);
    /// Returned by timed input once the IDS timer has run out.
    pub const TIMEOUT: KeyCode = KeyCode(0xFF);

    pub const DOWN: KeyCode = KeyCode(0x01);
    pub const LEFT: KeyCode = KeyCode(0x02);
    pub const RIGHT: KeyCode = KeyCode(0x03);
    pub const UP: KeyCode = KeyCode(0x04);
    pub const ENTER: KeyCode = KeyCode(0x09);
    pub const ADD: KeyCode = KeyCode(0x0A);
    pub const SUB: KeyCode = KeyCode(0x0B);
    pub const MUL: KeyCode = KeyCode(0x0C);
    pub const DIV: KeyCode = KeyCode(0x0D);
    pub const POWER: KeyCode = KeyCode(0x0E);
    pub const CLEAR: KeyCode = KeyCode(0x0F);
    pub const CHS: KeyCode = KeyCode(0x11);
    pub const NUM_3: KeyCode = KeyCode(0x12);
    pub const NUM_6: KeyCode = KeyCode(0x13);
    pub const NUM_9: KeyCode = KeyCode(0x14);
    pub const RPAREN: KeyCode = KeyCode(0x15);
    pub const TAN: KeyCode = KeyCode(0x16);
    pub const VARS: KeyCode = KeyCode(0x17);
    pub const DECIMAL: KeyCode = KeyCode(0x19);
    pub const NUM_2: KeyCode = KeyCode(0x1A);
    pub const NUM_5: KeyCode = KeyCode(0x1B);
    pub const NUM_8: KeyCode = KeyCode(0x1C);
    pub const LPAREN: KeyCode = KeyCode(0x1D);
    pub const COS: KeyCode = KeyCode(0x1E);
    pub const PRGM: KeyCode = KeyCode(0x1F);
    pub const STAT: KeyCode = KeyCode(0x20);
    pub const NUM_0: KeyCode = KeyCode(0x21);
    pub const NUM_1: KeyCode = KeyCode(0x22);
    pub const NUM_4: KeyCode = KeyCode(0x23);
    pub const NUM_7: KeyCode = KeyCode(0x24);
    pub const COMMA: KeyCode = KeyCode(0x25);
    pub const SIN: KeyCode = KeyCode(0x26);
    pub const APPS: KeyCode = KeyCode(0x27);
    pub const GRAPH_VAR: KeyCode = KeyCode(0x28);
    pub const STORE: KeyCode = KeyCode(0x2A);
    pub const LN: KeyCode = KeyCode(0x2B);
    pub const LOG: KeyCode = KeyCode(0x2C);
    pub const SQUARE: KeyCode = KeyCode(0x2D);
    pub const RECIP: KeyCode = KeyCode(0x2E);
    pub const MATH: KeyCode = KeyCode(0x2F);
    pub const ALPHA: KeyCode = KeyCode(0x30);
    pub const GRAPH: KeyCode = KeyCode(0x31);
    pub const TRACE: KeyCode = KeyCode(0x32);
    pub const ZOOM: KeyCode = KeyCode(0x33);
    pub const WINDOW: KeyCode = KeyCode(0x34);
    pub const Y_EQU: KeyCode = KeyCode(0x35);
    pub const SECOND: KeyCode = KeyCode(0x36);
    pub const MODE: KeyCode = KeyCode(0x37);
    pub const DEL: KeyCode = KeyCode(0x38);

    /// Highest scan code the keypad can report.
    pub const MAX_SCAN_CODE: u8 = 56;

    /// Whether this code names a physical key, i.e. indexes a keymap slot.
    pub fn is_scan_code(self) -> bool {
        (1..=Self::MAX_SCAN_CODE).contains(&self.0)
    }

    /// Matrix position of the key as `(group, bit)`, groups 0..7, bits 0..8.
    pub fn matrix_position(self) -> Option<(u8, u8)> {
        if !self.is_scan_code() {
            return None;
        }
        let index = self.0 - 1;
        Some((index / 8, index % 8))
    }
}

impl From<u8> for KeyCode {
    fn from(code: u8) -> Self {
        KeyCode(code)
    }
}

impl From<KeyCode> for u8 {
    fn from(key: KeyCode) -> Self {
        key.0
    }
}
