//! Telemetry values shown on the dashboard

use heapless::String;
use vrxpanel_display::truncated;

/// Maximum control link name length ("ELRS", "CRSF", "SBUS", ...)
pub const CONTROL_NAME_LEN: usize = 8;

/// One set of values to display
///
/// The dashboard keeps the last rendered instance and compares each
/// incoming snapshot against it field by field.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TelemetrySnapshot {
    /// Pack voltage in volts
    pub voltage_v: f32,
    /// Battery cell count (3S, 4S, 6S...)
    pub cells: u8,
    /// Video frequency in MHz
    pub freq_mhz: u16,
    /// Video band letter ('A', 'B', 'E', 'F', 'R'...)
    pub band: Option<char>,
    /// Video channel
    pub channel: u8,
    /// Received signal strength in dB
    pub rssi_db: i16,
    /// Control link protocol name
    pub control: Option<String<CONTROL_NAME_LEN>>,
    /// DVR recording active
    pub recording: bool,
    /// Video bypass active
    pub bypass: bool,
    /// Compass azimuth in degrees (0..359)
    pub azimuth_deg: i16,
}

impl Default for TelemetrySnapshot {
    fn default() -> Self {
        Self {
            voltage_v: 0.0,
            cells: 4,
            freq_mhz: 0,
            band: None,
            channel: 0,
            rssi_db: 0,
            control: None,
            recording: false,
            bypass: false,
            azimuth_deg: 0,
        }
    }
}

impl TelemetrySnapshot {
    /// Set the control link name, truncated to [`CONTROL_NAME_LEN`]
    pub fn with_control(mut self, name: &str) -> Self {
        self.control = Some(truncated(name));
        self
    }

    /// Control link name, if known
    pub fn control_name(&self) -> Option<&str> {
        self.control.as_deref()
    }
}
