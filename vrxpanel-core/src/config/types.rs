//! Configuration types

use heapless::String;
use vrxpanel_display::{truncated, Orientation};

use crate::menu::{DEFAULT_BLOCK_WIDTH, DEFAULT_DEBOUNCE_MS, DEFAULT_MENU_TITLE, DEFAULT_ORIGIN_Y};
use crate::telemetry::dashboard::DEFAULT_TITLE;

/// Maximum length of configured titles
pub const MAX_TITLE_LEN: usize = 24;

/// GPIO pin assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinConfig {
    /// GPIO pin number (0-29 for RP2040)
    pub pin: u8,
    /// Enable internal pull-up
    pub pull_up: bool,
}

impl PinConfig {
    pub const fn new(pin: u8) -> Self {
        Self {
            pin,
            pull_up: false,
        }
    }

    /// Create a pin with pull-up enabled
    pub const fn with_pullup(pin: u8) -> Self {
        Self { pin, pull_up: true }
    }
}

/// `[display]` section
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    pub orientation: Orientation,
    /// Dashboard header title
    pub title: String<MAX_TITLE_LEN>,
    /// Backlight enable line, if wired
    pub backlight: Option<PinConfig>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::Landscape,
            title: truncated(DEFAULT_TITLE),
            backlight: None,
        }
    }
}

/// `[battery]` section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BatteryConfig {
    /// Cell count used until telemetry reports one
    pub cells: u8,
    /// ADC input pin (26-29 on RP2040)
    pub adc_pin: u8,
    /// Voltage divider ratio times 1000 (11000 = 1:11)
    pub divider_x1000: u32,
    /// ADC reference voltage in millivolts
    pub adc_ref_mv: u32,
}

impl Default for BatteryConfig {
    fn default() -> Self {
        Self {
            cells: 4,
            adc_pin: 26,
            divider_x1000: 11_000,
            adc_ref_mv: 3300,
        }
    }
}

impl BatteryConfig {
    /// Pack voltage from a raw 12-bit ADC reading
    pub fn pack_voltage(&self, raw: u16) -> f32 {
        let pin_mv = u64::from(raw) * u64::from(self.adc_ref_mv) / 4095;
        let pack_mv = pin_mv * u64::from(self.divider_x1000) / 1000;
        pack_mv as f32 / 1000.0
    }
}

/// `[menu]` section
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MenuConfig {
    pub title: String<MAX_TITLE_LEN>,
    pub origin_y: u16,
    pub block_width: u16,
    pub debounce_ms: u16,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            title: truncated(DEFAULT_MENU_TITLE),
            origin_y: DEFAULT_ORIGIN_Y,
            block_width: DEFAULT_BLOCK_WIDTH,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

/// `[buttons]` section
///
/// All inputs are active-low.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonConfig {
    pub up: PinConfig,
    pub down: PinConfig,
    pub left: PinConfig,
    pub right: PinConfig,
    /// Edit-mode switch (LOW = editing)
    pub mode: Option<PinConfig>,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            up: PinConfig::with_pullup(2),
            down: PinConfig::with_pullup(3),
            left: PinConfig::with_pullup(4),
            right: PinConfig::with_pullup(5),
            mode: Some(PinConfig::with_pullup(6)),
        }
    }
}

impl ButtonConfig {
    /// Keys of fitted inputs written without the `^` pull-up marker
    ///
    /// The buttons are wired to ground and only work pulled up, so each of
    /// these is a wiring file mistake.
    pub fn missing_pullups(&self) -> impl Iterator<Item = &'static str> {
        [
            ("up_pin", Some(self.up)),
            ("down_pin", Some(self.down)),
            ("left_pin", Some(self.left)),
            ("right_pin", Some(self.right)),
            ("mode_pin", self.mode),
        ]
        .into_iter()
        .filter_map(|(key, pin)| match pin {
            Some(pin) if !pin.pull_up => Some(key),
            _ => None,
        })
    }
}

/// Complete panel configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelConfig {
    pub display: DisplayConfig,
    pub battery: BatteryConfig,
    pub menu: MenuConfig,
    pub buttons: ButtonConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PanelConfig::default();
        assert_eq!(config.display.orientation, Orientation::Landscape);
        assert_eq!(config.display.title.as_str(), DEFAULT_TITLE);
        assert_eq!(config.menu.title.as_str(), "CONFIGURATION MODE");
        assert_eq!(config.menu.debounce_ms, 120);
        assert_eq!(config.battery.cells, 4);
        assert!(config.buttons.up.pull_up);
    }

    #[test]
    fn test_pack_voltage() {
        let battery = BatteryConfig::default();
        assert_eq!(battery.pack_voltage(0), 0.0);
        // Full scale: 3.3 V at the pin, 36.3 V at the pack
        assert!((battery.pack_voltage(4095) - 36.3).abs() < 0.01);
    }

    #[test]
    fn test_default_buttons_all_pulled_up() {
        assert_eq!(ButtonConfig::default().missing_pullups().count(), 0);
    }

    #[test]
    fn test_missing_pullups_reported() {
        let buttons = ButtonConfig {
            left: PinConfig::new(4),
            mode: Some(PinConfig::new(6)),
            ..ButtonConfig::default()
        };
        let keys: heapless::Vec<&str, 5> = buttons.missing_pullups().collect();
        assert_eq!(keys.as_slice(), &["left_pin", "mode_pin"]);

        let no_switch = ButtonConfig {
            mode: None,
            ..buttons
        };
        assert!(no_switch.missing_pullups().eq(["left_pin"]));
    }

    #[test]
    fn test_title_truncated() {
        let title: String<MAX_TITLE_LEN> =
            truncated("A VERY LONG PANEL TITLE THAT OVERFLOWS");
        assert_eq!(title.len(), MAX_TITLE_LEN);
    }
}
