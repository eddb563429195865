//! Editable configuration record

/// Receiver frequency regime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum VrxMode {
    /// 5.8 GHz, band selectable
    #[default]
    Band5G8 = 1,
    /// 1.2 GHz, band fixed
    Band1G2 = 2,
}

impl VrxMode {
    /// Decode the receiver's raw mode value
    pub fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            1 => Some(VrxMode::Band5G8),
            2 => Some(VrxMode::Band1G2),
            _ => None,
        }
    }

    /// Whether the band field can be edited in this mode
    pub fn band_selectable(self) -> bool {
        self == VrxMode::Band5G8
    }
}

/// Configuration the menu edits
///
/// Owned by the caller and lent to the menu on every call. Indices are
/// interpreted through the label tables and may be out of range; the menu
/// saturates instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ConfigState {
    pub mode: VrxMode,
    pub band: u8,
    pub channel: u8,
    /// 0 = stopped, 1 = recording
    pub record: u8,
    /// 0..=2 (off, on, auto)
    pub bypass: u8,
}

/// Menu field under the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigItem {
    #[default]
    Band,
    Channel,
    Record,
    Bypass,
}

impl ConfigItem {
    /// Number of fields
    pub const COUNT: u8 = 4;

    /// All fields in cursor order
    pub const ALL: [ConfigItem; 4] = [
        ConfigItem::Band,
        ConfigItem::Channel,
        ConfigItem::Record,
        ConfigItem::Bypass,
    ];

    /// Field at cursor position `index` (taken modulo [`Self::COUNT`])
    pub fn from_index(index: u8) -> Self {
        Self::ALL[usize::from(index % Self::COUNT)]
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    /// Following field, wrapping after the last
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Preceding field, wrapping before the first
    pub fn prev(self) -> Self {
        Self::from_index(self.index() + Self::COUNT - 1)
    }

    /// Row caption
    pub fn name(self) -> &'static str {
        match self {
            ConfigItem::Band => "VIDEO BAND",
            ConfigItem::Channel => "CHANNEL",
            ConfigItem::Record => "RECORDING",
            ConfigItem::Bypass => "V_BYPASS",
        }
    }
}
