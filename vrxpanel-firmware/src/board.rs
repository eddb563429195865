//! Board wiring and HAL glue
//!
//! Pin assignments for the reference board (RP2040 + 3.5" ILI9486 SPI TFT).
//! `panel.toml` must agree with these; mismatches are logged at startup.

use defmt::*;
use display_interface_spi::SPIInterface;
use embassy_rp::gpio::{Flex, Output, Pin, Pull as RpPull};
use embassy_rp::peripherals::SPI0;
use embassy_rp::spi::{Blocking, Spi};
use embassy_rp::Peri;
use embassy_time::{Delay, Instant};
use embedded_hal_bus::spi::ExclusiveDevice;
use mipidsi::models::ILI9486Rgb565;

use vrxpanel_core::PanelConfig;
use vrxpanel_display::GraphicsDriver;
use vrxpanel_hal::{Clock, InputPin, OutputPin, Pull};

// SPI0 display bus: SCK GPIO18, MOSI GPIO19, CS GPIO17, DC GPIO20, RST GPIO21
pub const BACKLIGHT_PIN: u8 = 22;
pub const BUTTON_UP_PIN: u8 = 2;
pub const BUTTON_DOWN_PIN: u8 = 3;
pub const BUTTON_LEFT_PIN: u8 = 4;
pub const BUTTON_RIGHT_PIN: u8 = 5;
pub const MODE_SWITCH_PIN: u8 = 6;
pub const BATTERY_ADC_PIN: u8 = 26;

/// SPI clock for the TFT
pub const DISPLAY_SPI_HZ: u32 = 32_000_000;

pub type DisplaySpi = ExclusiveDevice<Spi<'static, SPI0, Blocking>, Output<'static>, Delay>;
pub type DisplayInterface = SPIInterface<DisplaySpi, Output<'static>>;
pub type DisplayPanel = mipidsi::Display<DisplayInterface, ILI9486Rgb565, Output<'static>>;

/// The panel as seen by the UI
pub type PanelDisplay = GraphicsDriver<DisplayPanel>;

/// Embassy GPIO used as an input behind the HAL trait
///
/// Starts floating; the owner picks the bias through [`InputPin::set_pull`].
pub struct BoardInput(Flex<'static>);

impl BoardInput {
    pub fn new(pin: Peri<'static, impl Pin>) -> Self {
        let mut flex = Flex::new(pin);
        flex.set_as_input();
        Self(flex)
    }
}

impl InputPin for BoardInput {
    fn set_pull(&mut self, pull: Pull) {
        self.0.set_pull(match pull {
            Pull::None => RpPull::None,
            Pull::Up => RpPull::Up,
            Pull::Down => RpPull::Down,
        });
    }

    fn is_high(&self) -> bool {
        self.0.is_high()
    }
}

/// Embassy output behind the HAL trait
pub struct BoardOutput(pub Output<'static>);

impl OutputPin for BoardOutput {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.0.is_set_high()
    }
}

/// Milliseconds since boot from the embassy time driver
#[derive(Clone, Copy)]
pub struct BoardClock;

impl Clock for BoardClock {
    fn now_ms(&self) -> u64 {
        Instant::now().as_millis()
    }
}

/// Warn about `panel.toml` pins that differ from the board wiring or lack a pull-up
pub fn check_wiring(config: &PanelConfig) {
    let expected = [
        ("up_pin", config.buttons.up.pin, BUTTON_UP_PIN),
        ("down_pin", config.buttons.down.pin, BUTTON_DOWN_PIN),
        ("left_pin", config.buttons.left.pin, BUTTON_LEFT_PIN),
        ("right_pin", config.buttons.right.pin, BUTTON_RIGHT_PIN),
        ("adc_pin", config.battery.adc_pin, BATTERY_ADC_PIN),
    ];
    for (key, configured, wired) in expected {
        if configured != wired {
            warn!("{} = gpio{} but board uses gpio{}", key, configured, wired);
        }
    }
    for key in config.buttons.missing_pullups() {
        warn!("{} has no '^' pull-up marker; buttons are pulled up regardless", key);
    }
    if let Some(mode) = config.buttons.mode {
        if mode.pin != MODE_SWITCH_PIN {
            warn!("mode_pin = gpio{} but board uses gpio{}", mode.pin, MODE_SWITCH_PIN);
        }
    }
    if let Some(backlight) = config.display.backlight {
        if backlight.pin != BACKLIGHT_PIN {
            warn!(
                "backlight_pin = gpio{} but board uses gpio{}",
                backlight.pin, BACKLIGHT_PIN
            );
        }
    }
}
