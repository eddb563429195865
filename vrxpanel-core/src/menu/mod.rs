//! Configuration menu
//!
//! A cursor over four editable fields, driven by four debounced buttons.
//! Only three rows are visible at a time: the field before the cursor, the
//! field at the cursor with its current value, and the field after it.

pub mod buttons;
pub mod config_menu;
pub mod labels;
pub mod observer;
pub mod state;

pub use buttons::{Button, ButtonPins, Buttons, DEFAULT_DEBOUNCE_MS};
pub use config_menu::{ConfigMenu, DEFAULT_BLOCK_WIDTH, DEFAULT_MENU_TITLE, DEFAULT_ORIGIN_Y};
pub use labels::{LabelTable, LabelTables};
pub use observer::{Callbacks, ConfigObserver};
pub use state::{ConfigItem, ConfigState, VrxMode};

#[cfg(test)]
mod testing;
