//! Battery charge estimation
//!
//! Linear per-cell model: 3.30 V is empty, 4.20 V is full.

use vrxpanel_display::Rgb;

/// Per-cell voltage reported as 0%
pub const CELL_EMPTY_V: f32 = 3.30;

/// Per-cell voltage reported as 100%
pub const CELL_FULL_V: f32 = 4.20;

/// Charge percentage from pack voltage
///
/// A cell count of zero is treated as a single cell. The result is clamped
/// to 0..=100 and rounded to the nearest integer.
pub fn voltage_to_percent(voltage_v: f32, cells: u8) -> u8 {
    let cells = cells.max(1);
    let per_cell = voltage_v / f32::from(cells);
    let percent = (per_cell - CELL_EMPTY_V) / (CELL_FULL_V - CELL_EMPTY_V) * 100.0;
    // NaN falls through clamp and saturates to 0 in the cast
    (percent.clamp(0.0, 100.0) + 0.5) as u8
}

/// Discrete charge tier used to colour the battery gauge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BatteryLevel {
    /// 60% and above
    Good,
    /// 25% to 59%
    Low,
    /// Below 25%
    Critical,
}

impl BatteryLevel {
    pub fn from_percent(percent: u8) -> Self {
        if percent >= 60 {
            BatteryLevel::Good
        } else if percent >= 25 {
            BatteryLevel::Low
        } else {
            BatteryLevel::Critical
        }
    }

    /// Gauge fill colour
    pub fn color(self) -> Rgb {
        match self {
            BatteryLevel::Good => Rgb::OK,
            BatteryLevel::Low => Rgb::WARN,
            BatteryLevel::Critical => Rgb::BAD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_full_and_empty_packs() {
        assert_eq!(voltage_to_percent(16.8, 4), 100);
        assert_eq!(voltage_to_percent(12.0, 4), 0);
        assert_eq!(voltage_to_percent(25.2, 6), 100);
    }

    #[test]
    fn test_midpoint_rounds() {
        // 3.75 V per cell is exactly half way
        assert_eq!(voltage_to_percent(15.0, 4), 50);
        // 3.60 V per cell is 33.3%
        assert_eq!(voltage_to_percent(10.8, 3), 33);
    }

    #[test]
    fn test_zero_cells_is_single_cell() {
        assert_eq!(voltage_to_percent(4.2, 0), 100);
        assert_eq!(voltage_to_percent(3.3, 0), 0);
    }

    #[test]
    fn test_overcharge_clamps() {
        assert_eq!(voltage_to_percent(30.0, 4), 100);
        assert_eq!(voltage_to_percent(-1.0, 4), 0);
        assert_eq!(voltage_to_percent(f32::NAN, 4), 0);
    }

    #[test]
    fn test_level_thresholds() {
        assert_eq!(BatteryLevel::from_percent(100), BatteryLevel::Good);
        assert_eq!(BatteryLevel::from_percent(60), BatteryLevel::Good);
        assert_eq!(BatteryLevel::from_percent(59), BatteryLevel::Low);
        assert_eq!(BatteryLevel::from_percent(25), BatteryLevel::Low);
        assert_eq!(BatteryLevel::from_percent(24), BatteryLevel::Critical);
        assert_eq!(BatteryLevel::from_percent(0), BatteryLevel::Critical);
        assert_eq!(BatteryLevel::Low.color(), Rgb::WARN);
    }

    proptest! {
        #[test]
        fn prop_percent_in_range(v in -5.0f32..60.0, cells in 0u8..=12) {
            prop_assert!(voltage_to_percent(v, cells) <= 100);
        }

        #[test]
        fn prop_percent_monotonic(v in 0.0f32..30.0, dv in 0.0f32..5.0, cells in 1u8..=8) {
            prop_assert!(voltage_to_percent(v + dv, cells) >= voltage_to_percent(v, cells));
        }
    }
}
