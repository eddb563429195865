//! Debounced four-button input
//!
//! Buttons are polled, not interrupt driven. After an accepted event every
//! read is ignored until the debounce window has elapsed, so holding a
//! button repeats once per window.

use vrxpanel_hal::{InputPin, Pull};

/// Minimum interval between accepted button events
pub const DEFAULT_DEBOUNCE_MS: u16 = 120;

/// Menu button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    Up,
    Down,
    Left,
    Right,
}

/// The four button inputs
pub struct ButtonPins<P> {
    pub up: P,
    pub down: P,
    pub left: P,
    pub right: P,
}

/// Debounced reader over [`ButtonPins`]
pub struct Buttons<P> {
    pins: ButtonPins<P>,
    debounce_ms: u16,
    last_accepted_ms: Option<u64>,
}

impl<P: InputPin> Buttons<P> {
    /// Take the pins and configure them as pulled-up inputs
    pub fn new(mut pins: ButtonPins<P>) -> Self {
        pins.up.set_pull(Pull::Up);
        pins.down.set_pull(Pull::Up);
        pins.left.set_pull(Pull::Up);
        pins.right.set_pull(Pull::Up);
        Self {
            pins,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            last_accepted_ms: None,
        }
    }

    pub fn set_debounce_ms(&mut self, debounce_ms: u16) {
        self.debounce_ms = debounce_ms;
    }

    pub fn debounce_ms(&self) -> u16 {
        self.debounce_ms
    }

    pub fn pins(&self) -> &ButtonPins<P> {
        &self.pins
    }

    /// First pressed button in up/down/left/right order, ignoring debounce
    pub fn pressed(&self) -> Option<Button> {
        if self.pins.up.is_low() {
            Some(Button::Up)
        } else if self.pins.down.is_low() {
            Some(Button::Down)
        } else if self.pins.left.is_low() {
            Some(Button::Left)
        } else if self.pins.right.is_low() {
            Some(Button::Right)
        } else {
            None
        }
    }

    /// Accept a press if the debounce window since the last one elapsed
    ///
    /// Pins are not read at all while inside the window.
    pub fn poll(&mut self, now_ms: u64) -> Option<Button> {
        if let Some(last) = self.last_accepted_ms {
            if now_ms.saturating_sub(last) < u64::from(self.debounce_ms) {
                return None;
            }
        }

        let button = self.pressed()?;
        self.last_accepted_ms = Some(now_ms);
        Some(button)
    }
}
