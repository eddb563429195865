//! Shared button fixtures for menu tests

use core::cell::Cell;

use vrxpanel_hal::mock::MockPin;

use super::buttons::{Button, ButtonPins};

/// Pin levels, HIGH (released) by default
pub struct Levels {
    pub up: Cell<bool>,
    pub down: Cell<bool>,
    pub left: Cell<bool>,
    pub right: Cell<bool>,
}

impl Levels {
    pub fn released() -> Self {
        Self {
            up: Cell::new(true),
            down: Cell::new(true),
            left: Cell::new(true),
            right: Cell::new(true),
        }
    }

    pub fn pins(&self) -> ButtonPins<MockPin<'_>> {
        ButtonPins {
            up: MockPin::new(&self.up),
            down: MockPin::new(&self.down),
            left: MockPin::new(&self.left),
            right: MockPin::new(&self.right),
        }
    }

    fn level(&self, button: Button) -> &Cell<bool> {
        match button {
            Button::Up => &self.up,
            Button::Down => &self.down,
            Button::Left => &self.left,
            Button::Right => &self.right,
        }
    }

    pub fn press(&self, button: Button) {
        self.level(button).set(false);
    }

    pub fn release(&self, button: Button) {
        self.level(button).set(true);
    }
}
