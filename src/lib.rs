pub mod engine;
pub mod error;
pub mod ids;
pub mod key;
pub mod keymap;
pub mod layout;
pub mod name;
pub mod routines;
pub mod traits;
pub mod types;

pub use crate::engine::{Engine, EngineBuilder, EngineSnapshot};
pub use crate::error::{Result, TextioError};
pub use crate::ids::Ids;
pub use crate::key::KeyCode;
pub use crate::keymap::Keymap;
pub use crate::layout::TextLayout;
pub use crate::routines::LibraryRoutines;
pub use crate::traits::{Clock, Keypad, SystemClock, TextBackend};
pub use crate::types::{EditAction, IdsFlags, KeyBindings, PrintFormat, TextWindow};
