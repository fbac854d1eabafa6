use std::cell::Cell;
use std::collections::VecDeque;
use std::time::Duration;

use textio::{Clock, KeyCode, Keypad};

/// Replays a fixed sequence of scan results, then reports no key.
#[derive(Default)]
pub struct ScriptedKeypad {
    script: VecDeque<Option<KeyCode>>,
    pub scans: usize,
}

impl ScriptedKeypad {
    pub fn new() -> Self {
        Self::default()
    }

    /// `idle` empty scans followed by `key`.
    pub fn press_after(mut self, idle: usize, key: KeyCode) -> Self {
        self.script.extend(std::iter::repeat_n(None, idle));
        self.script.push_back(Some(key));
        self
    }

    pub fn press(self, key: KeyCode) -> Self {
        self.press_after(0, key)
    }
}

impl Keypad for ScriptedKeypad {
    fn scan(&mut self) -> Option<KeyCode> {
        self.scans += 1;
        self.script.pop_front().flatten()
    }
}

/// A clock that moves forward by `step` every time it is read.
pub struct SteppingClock {
    now: Cell<Duration>,
    step: Duration,
}

impl SteppingClock {
    pub fn new(step: Duration) -> Self {
        Self {
            now: Cell::new(Duration::ZERO),
            step,
        }
    }

    pub fn now(&self) -> Duration {
        self.now.get()
    }
}

impl Clock for SteppingClock {
    fn elapsed(&self) -> Duration {
        let now = self.now.get();
        self.now.set(now + self.step);
        now
    }
}
