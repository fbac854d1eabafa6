//! The Input Data Structure (IDS): per-field input state.
//!
//! An IDS owns its data buffer and borrows the keymaps it decodes with, so
//! one keymap can serve many fields. The buffer capacity is fixed when the
//! IDS is created; the engine never grows it.

use std::time::Duration;

use log::{debug, warn};

use crate::error::{Result, TextioError};
use crate::keymap::Keymap;
use crate::traits::TextBackend;
use crate::types::IdsFlags;

/// Bytes taken by the IDS header in the device memory layout.
pub const IDS_HEADER_SIZE: usize = 27;
/// Bytes taken by each keymap pointer in the device memory layout.
pub const KEYMAP_POINTER_SIZE: usize = 3;

#[derive(Debug, Clone)]
pub struct Ids<'k> {
    buffer: Vec<u8>,
    capacity: usize,
    x: u32,
    y: u32,
    visible_width: u32,
    // Index in `buffer` where the next character is inserted.
    edit_position: usize,
    // First buffer index drawn in the visible field.
    scroll: usize,
    cursor_x: u32,
    cursor_y: u32,
    cursor_width: u8,
    cursor_height: u8,
    cursor_color: u8,
    timer: u32,
    // Time already used up of the current timer second.
    timer_used: Duration,
    keymaps: Vec<&'k Keymap>,
    keymap_slots: u8,
    current_keymap: u8,
    flags: IdsFlags,
}

impl<'k> Ids<'k> {
    /// Creates an IDS holding up to `capacity` characters, drawn at `(x, y)`
    /// in a field `visible_width` pixels wide, with room for `num_keymaps`
    /// keymaps.
    pub fn new(
        capacity: usize,
        x: u32,
        y: u32,
        visible_width: u32,
        num_keymaps: u8,
    ) -> Result<Self> {
        if num_keymaps == 0 {
            warn!("refusing to create an IDS without keymap slots");
            return Err(TextioError::NoKeymapSlots);
        }

        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(capacity)
            .map_err(|_| TextioError::OutOfMemory)?;
        let mut keymaps = Vec::new();
        keymaps
            .try_reserve_exact(num_keymaps as usize)
            .map_err(|_| TextioError::OutOfMemory)?;

        debug!(
            "created IDS: capacity={} at ({}, {}) width={} keymap slots={}",
            capacity, x, y, visible_width, num_keymaps
        );

        Ok(Self {
            buffer,
            capacity,
            x,
            y,
            visible_width,
            edit_position: 0,
            scroll: 0,
            cursor_x: x,
            cursor_y: y,
            cursor_width: 1,
            cursor_height: 1,
            cursor_color: 0x00,
            timer: 0,
            timer_used: Duration::ZERO,
            keymaps,
            keymap_slots: num_keymaps,
            current_keymap: 0,
            flags: if capacity == 0 {
                IdsFlags::BUFFER_FULL
            } else {
                IdsFlags::empty()
            },
        })
    }

    /// An IDS using the uppercase and lowercase letter keymaps.
    pub fn alpha(capacity: usize, x: u32, y: u32, visible_width: u32) -> Result<Self> {
        let mut ids = Self::new(capacity, x, y, visible_width, 2)?;
        ids.set_keymaps(&[Keymap::uppercase(), Keymap::lowercase()])?;
        Ok(ids)
    }

    /// An IDS using the numerals keymap.
    pub fn numerical(capacity: usize, x: u32, y: u32, visible_width: u32) -> Result<Self> {
        let mut ids = Self::new(capacity, x, y, visible_width, 1)?;
        ids.set_keymaps(&[Keymap::numerical()])?;
        Ok(ids)
    }

    /// An IDS using the uppercase, lowercase and numerals keymaps.
    pub fn alphanumerical(capacity: usize, x: u32, y: u32, visible_width: u32) -> Result<Self> {
        let mut ids = Self::new(capacity, x, y, visible_width, 3)?;
        ids.set_keymaps(&[
            Keymap::uppercase(),
            Keymap::lowercase(),
            Keymap::numerical(),
        ])?;
        Ok(ids)
    }

    /// An IDS for program/appvar names: name letters and numerals, with
    /// [`IdsFlags::PRGM_NAME`] set.
    pub fn program_name(capacity: usize, x: u32, y: u32, visible_width: u32) -> Result<Self> {
        let mut ids = Self::new(capacity, x, y, visible_width, 2)?;
        ids.set_keymaps(&[Keymap::prgm_name(), Keymap::numerical()])?;
        ids.set_prgm_name(true);
        Ok(ids)
    }

    /// Size of an IDS with these parameters in the device memory layout.
    pub fn footprint(capacity: usize, num_keymaps: u8) -> usize {
        IDS_HEADER_SIZE + KEYMAP_POINTER_SIZE * num_keymaps as usize + capacity
    }

    // ---- Buffer ----

    pub fn data(&self) -> &[u8] {
        &self.buffer
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Index of the character the next insertion goes in front of.
    pub fn edit_position(&self) -> usize {
        self.edit_position
    }

    /// Index of the first character shown in the visible field.
    pub fn scroll_offset(&self) -> usize {
        self.scroll
    }

    /// Empties the data buffer and moves the cursor back to the field start.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.edit_position = 0;
        self.scroll = 0;
        self.cursor_x = self.x;
        self.flags.set(IdsFlags::BUFFER_FULL, self.capacity == 0);
    }

    // ---- Geometry ----

    pub fn x(&self) -> u32 {
        self.x
    }

    pub fn y(&self) -> u32 {
        self.y
    }

    pub fn visible_width(&self) -> u32 {
        self.visible_width
    }

    pub fn cursor_x(&self) -> u32 {
        self.cursor_x
    }

    pub fn cursor_y(&self) -> u32 {
        self.cursor_y
    }

    pub fn set_cursor_y(&mut self, y: u32) {
        self.cursor_y = y;
    }

    pub fn cursor_color(&self) -> u8 {
        self.cursor_color
    }

    pub fn set_cursor_color(&mut self, color: u8) {
        self.cursor_color = color;
    }

    pub fn cursor_width(&self) -> u8 {
        self.cursor_width
    }

    pub fn cursor_height(&self) -> u8 {
        self.cursor_height
    }

    pub fn set_cursor_dimensions(&mut self, width: u8, height: u8) -> Result<()> {
        if width == 0 || height == 0 {
            warn!("rejected cursor dimensions {}x{}", width, height);
            return Err(TextioError::InvalidCursorDimensions { width, height });
        }
        self.cursor_width = width;
        self.cursor_height = height;
        Ok(())
    }

    // ---- Timer ----

    /// Seconds left for timed input.
    pub fn timer(&self) -> u32 {
        self.timer
    }

    /// Sets the seconds left for timed input, starting a fresh second.
    pub fn set_timer(&mut self, seconds: u32) {
        self.timer = seconds;
        self.timer_used = Duration::ZERO;
    }

    // ---- Flags ----

    pub fn flags(&self) -> IdsFlags {
        self.flags
    }

    pub fn lock(&mut self, locked: bool) {
        self.flags.set(IdsFlags::LOCKED, locked);
    }

    pub fn is_locked(&self) -> bool {
        self.flags.contains(IdsFlags::LOCKED)
    }

    pub fn is_buffer_full(&self) -> bool {
        self.flags.contains(IdsFlags::BUFFER_FULL)
    }

    pub fn set_prgm_name(&mut self, enabled: bool) {
        self.flags.set(IdsFlags::PRGM_NAME, enabled);
    }

    pub fn is_prgm_name(&self) -> bool {
        self.flags.contains(IdsFlags::PRGM_NAME)
    }

    // ---- Keymaps ----

    /// Replaces the keymaps of this IDS. Index 0 is `keymaps[0]`, and so on.
    pub fn set_keymaps(&mut self, keymaps: &[&'k Keymap]) -> Result<()> {
        if keymaps.len() > self.keymap_slots as usize {
            warn!(
                "{} keymaps given for an IDS with {} slots",
                keymaps.len(),
                self.keymap_slots
            );
            return Err(TextioError::TooManyKeymaps {
                given: keymaps.len(),
                slots: self.keymap_slots as usize,
            });
        }
        self.keymaps.clear();
        self.keymaps.extend_from_slice(keymaps);
        if self.current_keymap as usize >= self.keymaps.len() {
            self.current_keymap = 0;
        }
        Ok(())
    }

    /// Number of keymaps currently set.
    pub fn num_keymaps(&self) -> usize {
        self.keymaps.len()
    }

    /// Number of keymap slots the IDS was created with.
    pub fn max_keymaps(&self) -> u8 {
        self.keymap_slots
    }

    pub fn current_keymap_index(&self) -> u8 {
        self.current_keymap
    }

    pub fn set_current_keymap(&mut self, index: u8) -> Result<()> {
        if index as usize >= self.keymaps.len() {
            warn!(
                "keymap index {} out of range ({} keymaps)",
                index,
                self.keymaps.len()
            );
            return Err(TextioError::KeymapIndexOutOfRange {
                index,
                count: self.keymaps.len(),
            });
        }
        self.current_keymap = index;
        Ok(())
    }

    /// Switches to the next keymap, wrapping around to the first.
    pub fn next_keymap(&mut self) {
        if self.keymaps.is_empty() {
            return;
        }
        self.current_keymap = ((self.current_keymap as usize + 1) % self.keymaps.len()) as u8;
        debug!("switched to keymap {}", self.current_keymap);
    }

    pub fn current_keymap(&self) -> Option<&'k Keymap> {
        self.keymaps.get(self.current_keymap as usize).copied()
    }

    /// Indicator of the current keymap, or 0 when no keymap is set.
    pub fn current_keymap_indicator(&self) -> u8 {
        self.current_keymap().map_or(0, Keymap::indicator)
    }

    // ---- Editing primitives used by the engine ----

    /// Inserts `codepoint` at the edit position. Returns false when full.
    pub(crate) fn insert(&mut self, codepoint: u8) -> bool {
        if self.buffer.len() >= self.capacity {
            return false;
        }
        self.buffer.insert(self.edit_position, codepoint);
        self.edit_position += 1;
        self.flags
            .set(IdsFlags::BUFFER_FULL, self.buffer.len() == self.capacity);
        true
    }

    /// Removes the character in front of the edit position.
    pub(crate) fn remove_before_cursor(&mut self) -> Option<u8> {
        if self.edit_position == 0 {
            return None;
        }
        self.edit_position -= 1;
        let removed = self.buffer.remove(self.edit_position);
        self.flags.remove(IdsFlags::BUFFER_FULL);
        Some(removed)
    }

    /// Moves the edit position one character left, returning the character
    /// crossed.
    pub(crate) fn step_left(&mut self) -> Option<u8> {
        if self.edit_position == 0 {
            return None;
        }
        self.edit_position -= 1;
        Some(self.buffer[self.edit_position])
    }

    /// Moves the edit position one character right, returning the character
    /// crossed.
    pub(crate) fn step_right(&mut self) -> Option<u8> {
        let crossed = *self.buffer.get(self.edit_position)?;
        self.edit_position += 1;
        Some(crossed)
    }

    pub(crate) fn timer_used(&self) -> Duration {
        self.timer_used
    }

    pub(crate) fn set_timer_used(&mut self, used: Duration) {
        self.timer_used = used;
    }

    pub(crate) fn tick_timer(&mut self) -> u32 {
        self.timer = self.timer.saturating_sub(1);
        self.timer
    }

    /// Recomputes the pixel cursor from the edit position, scrolling the
    /// visible field so the cursor stays inside it.
    pub(crate) fn sync_cursor<B: TextBackend>(&mut self, backend: &B) {
        if self.edit_position < self.scroll {
            self.scroll = self.edit_position;
        }
        let mut width: u32 = self.buffer[self.scroll..self.edit_position]
            .iter()
            .map(|&c| backend.glyph_width(c))
            .sum();
        let scrolled_from = self.scroll;
        while width > self.visible_width && self.scroll < self.edit_position {
            width -= backend.glyph_width(self.buffer[self.scroll]);
            self.scroll += 1;
        }
        if self.scroll != scrolled_from {
            debug!("input field scrolled to offset {}", self.scroll);
        }
        self.cursor_x = self.x + width;
    }
}
