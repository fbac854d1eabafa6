use std::time::Duration;

use log::{debug, trace};

use crate::ids::Ids;
use crate::key::KeyCode;
use crate::name::{self, NATIVE_THETA};
use crate::traits::{Clock, Keypad, TextBackend};
use crate::types::{EditAction, KeyBindings};

/// Default number of polls between cursor blink phases.
pub const DEFAULT_BLINK_RATE: u8 = 16;

const ONE_SECOND: Duration = Duration::from_secs(1);

#[derive(Debug, Clone)]
struct Blink {
    rate: u8,
    counter: u8,
    visible: bool,
}

impl Blink {
    fn new(rate: u8) -> Self {
        Self {
            rate,
            counter: 0,
            visible: true,
        }
    }

    /// Advances one poll. Returns true when the phase flipped.
    fn advance(&mut self) -> bool {
        if self.rate == 0 {
            return false;
        }
        self.counter = self.counter.saturating_add(1);
        if self.counter < self.rate {
            return false;
        }
        self.counter = 0;
        self.visible = !self.visible;
        true
    }

    fn reset(&mut self) {
        self.counter = 0;
        self.visible = true;
    }
}

/// The input engine.
///
/// Holds the settings shared by every IDS it edits: key bindings, cursor
/// blink rate, the theta codepoint and the field background color. The IDS
/// passed to each call is the only state the call edits.
#[derive(Debug, Clone)]
pub struct Engine {
    bindings: KeyBindings,
    blink: Blink,
    theta: u8,
    background: u8,
}

#[derive(Debug, Clone)]
pub struct EngineSnapshot {
    pub bindings: KeyBindings,
    pub blink_rate: u8,
    pub cursor_visible: bool,
    pub theta_codepoint: u8,
    pub background_color: u8,
}

pub struct EngineBuilder {
    bindings: KeyBindings,
    blink_rate: u8,
    theta: u8,
    background: u8,
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self {
            bindings: KeyBindings::default(),
            blink_rate: DEFAULT_BLINK_RATE,
            theta: NATIVE_THETA,
            background: 0xFF,
        }
    }
}

impl EngineBuilder {
    pub fn bindings(mut self, bindings: KeyBindings) -> Self {
        self.bindings = bindings;
        self
    }

    /// Polls between blink phases; 0 keeps the cursor steady.
    pub fn blink_rate(mut self, rate: u8) -> Self {
        self.blink_rate = rate;
        self
    }

    /// Codepoint the current font uses for theta. Only name fields
    /// ([`IdsFlags::PRGM_NAME`](crate::IdsFlags::PRGM_NAME)) store it; other
    /// fields keep the keymap's codepoint.
    pub fn theta_codepoint(mut self, codepoint: u8) -> Self {
        self.theta = codepoint;
        self
    }

    /// Color used to clear input fields and erase the cursor.
    pub fn background_color(mut self, color: u8) -> Self {
        self.background = color;
        self
    }

    pub fn build(self) -> Engine {
        Engine {
            bindings: self.bindings,
            blink: Blink::new(self.blink_rate),
            theta: self.theta,
            background: self.background,
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        EngineBuilder::default().build()
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            bindings: self.bindings,
            blink_rate: self.blink.rate,
            cursor_visible: self.blink.visible,
            theta_codepoint: self.theta,
            background_color: self.background,
        }
    }

    // ---- Settings ----

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    pub fn set_clear_key(&mut self, key: KeyCode) {
        self.bindings.clear = key;
    }

    pub fn set_backspace_key(&mut self, key: KeyCode) {
        self.bindings.backspace = key;
    }

    pub fn set_cursor_left_key(&mut self, key: KeyCode) {
        self.bindings.cursor_left = key;
    }

    pub fn set_cursor_right_key(&mut self, key: KeyCode) {
        self.bindings.cursor_right = key;
    }

    pub fn set_blink_rate(&mut self, rate: u8) {
        self.blink = Blink::new(rate);
    }

    pub fn theta_codepoint(&self) -> u8 {
        self.theta
    }

    /// See [`EngineBuilder::theta_codepoint`].
    pub fn set_theta_codepoint(&mut self, codepoint: u8) {
        self.theta = codepoint;
    }

    pub fn background_color(&self) -> u8 {
        self.background
    }

    pub fn set_background_color(&mut self, color: u8) {
        self.background = color;
    }

    /// Rewrites the engine's theta codepoint in `name` to the OS theta.
    pub fn to_native_name<'a>(&self, name: &'a mut [u8]) -> &'a mut [u8] {
        name::to_native_name(name, self.theta)
    }

    /// Rewrites the OS theta in `name` to the engine's theta codepoint.
    pub fn from_native_name<'a>(&self, name: &'a mut [u8]) -> &'a mut [u8] {
        name::from_native_name(name, self.theta)
    }

    // ---- Input ----

    /// Applies one keypress to `ids` and returns the key.
    ///
    /// Bound editing keys act on the buffer and cursor; any other key is
    /// decoded through the current keymap and inserted at the edit position.
    /// Keys that cannot apply (locked IDS, full buffer, unmapped key, cursor
    /// already at the buffer edge) leave the IDS untouched.
    pub fn process_key<B: TextBackend>(
        &mut self,
        ids: &mut Ids<'_>,
        backend: &mut B,
        key: KeyCode,
    ) -> KeyCode {
        trace!("processing key {:#04x}", key.0);
        if ids.is_locked() || key == KeyCode::NONE {
            return key;
        }

        let changed = match self.bindings.action(key) {
            Some(action) => Self::edit(ids, action),
            None => self.insert_decoded(ids, key),
        };

        if changed {
            ids.sync_cursor(backend);
            self.blink.reset();
            self.draw_field(ids, backend);
        }
        key
    }

    /// Counts down one second of timed input.
    ///
    /// Returns [`KeyCode::TIMEOUT`] once the timer reaches zero and
    /// [`KeyCode::NONE`] while time is left.
    pub fn tick(&mut self, ids: &mut Ids<'_>) -> KeyCode {
        if ids.timer() == 0 {
            return KeyCode::TIMEOUT;
        }
        if ids.tick_timer() == 0 {
            debug!("input timer expired");
            KeyCode::TIMEOUT
        } else {
            KeyCode::NONE
        }
    }

    /// Waits for a keypress, blinking the cursor, then processes it.
    pub fn input<B: TextBackend, K: Keypad>(
        &mut self,
        ids: &mut Ids<'_>,
        backend: &mut B,
        keypad: &mut K,
    ) -> KeyCode {
        let editable = !ids.is_locked();
        if editable {
            self.draw_field(ids, backend);
        }
        loop {
            if let Some(key) = keypad.scan().filter(|&k| k != KeyCode::NONE) {
                return self.process_key(ids, backend, key);
            }
            if editable {
                self.blink(ids, backend);
            }
        }
    }

    /// Like [`Engine::input`], but returns after at most one second without a
    /// keypress, counting the IDS timer down.
    ///
    /// Returns [`KeyCode::NONE`] when a second passed without input and
    /// [`KeyCode::TIMEOUT`] once the timer has run out; an expired IDS is not
    /// edited. Time spent waiting for a key counts against the timer too: the
    /// part of a second used up is kept on the IDS and carried into the next
    /// call, so steady typing still runs the timer out.
    pub fn timed_input<B: TextBackend, K: Keypad, C: Clock>(
        &mut self,
        ids: &mut Ids<'_>,
        backend: &mut B,
        keypad: &mut K,
        clock: &C,
    ) -> KeyCode {
        if ids.timer() == 0 {
            return KeyCode::TIMEOUT;
        }

        let started = clock.elapsed();
        let carried = ids.timer_used();
        let editable = !ids.is_locked();
        if editable {
            self.draw_field(ids, backend);
        }
        loop {
            let key = keypad.scan().filter(|&k| k != KeyCode::NONE);
            let used = carried + clock.elapsed().saturating_sub(started);
            let second_over = used >= ONE_SECOND;
            ids.set_timer_used(if second_over { used - ONE_SECOND } else { used });

            match key {
                Some(key) => {
                    if second_over && self.tick(ids) == KeyCode::TIMEOUT {
                        trace!("key {:#04x} arrived after the timer ran out", key.0);
                        return KeyCode::TIMEOUT;
                    }
                    return self.process_key(ids, backend, key);
                }
                None if second_over => return self.tick(ids),
                None => {}
            }
            if editable {
                self.blink(ids, backend);
            }
        }
    }

    /// Advances the cursor blink by one poll, redrawing the field when the
    /// cursor appears or disappears.
    pub fn blink<B: TextBackend>(&mut self, ids: &Ids<'_>, backend: &mut B) {
        if self.blink.advance() {
            self.draw_field(ids, backend);
        }
    }

    /// Whether the cursor is in the shown phase of its blink.
    pub fn cursor_visible(&self) -> bool {
        self.blink.visible
    }

    /// Redraws the visible part of the buffer and, when shown, the cursor.
    pub fn draw_field<B: TextBackend>(&self, ids: &Ids<'_>, backend: &mut B) {
        let height = u32::from(ids.cursor_height());
        let width = ids.visible_width() + u32::from(ids.cursor_width());
        backend.fill_rect(ids.x(), ids.y(), width, height, self.background);

        backend.set_cursor(ids.x(), ids.y());
        let mut used = 0;
        for &codepoint in &ids.data()[ids.scroll_offset()..] {
            let glyph = backend.glyph_width(codepoint);
            if used + glyph > ids.visible_width() {
                break;
            }
            backend.draw_glyph(codepoint);
            used += glyph;
        }

        if self.blink.visible {
            backend.fill_rect(
                ids.cursor_x(),
                ids.cursor_y(),
                u32::from(ids.cursor_width()),
                height,
                ids.cursor_color(),
            );
        }
    }

    fn edit(ids: &mut Ids<'_>, action: EditAction) -> bool {
        debug!("edit action {:?}", action);
        match action {
            EditAction::Clear => {
                ids.clear();
                true
            }
            EditAction::Backspace => ids.remove_before_cursor().is_some(),
            EditAction::CursorLeft => ids.step_left().is_some(),
            EditAction::CursorRight => ids.step_right().is_some(),
        }
    }

    fn insert_decoded(&self, ids: &mut Ids<'_>, key: KeyCode) -> bool {
        let Some(mut codepoint) = ids.current_keymap().and_then(|map| map.decode(key)) else {
            return false;
        };
        if ids.is_buffer_full() {
            trace!("buffer full, dropping {:#04x}", codepoint);
            return false;
        }
        if ids.is_prgm_name() && ids.edit_position() == 0 && codepoint.is_ascii_digit() {
            debug!("names cannot start with a numeral");
            return false;
        }
        if ids.is_prgm_name() && codepoint == NATIVE_THETA {
            codepoint = self.theta;
        }
        ids.insert(codepoint)
    }
}
