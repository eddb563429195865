//! Embassy async tasks
//!
//! Each task runs independently and communicates via signals.

pub mod battery;
pub mod ui;

pub use battery::battery_task;
pub use ui::{ui_task, UiPins};
