//! Embedded panel configuration

use defmt::*;

use vrxpanel_core::{parse_config, PanelConfig};

/// Panel configuration compiled into the firmware
/// Edit panel.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../panel.toml");

/// Parse the embedded configuration, falling back to defaults
///
/// build.rs already rejects malformed files, so the fallback only covers
/// keys the build-time check accepts but the on-target parser does not.
pub fn load() -> PanelConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!(
                "Config: {} cells, divider {}/1000, debounce {}ms",
                config.battery.cells, config.battery.divider_x1000, config.menu.debounce_ms
            );
            config
        }
        Err(e) => {
            error!("panel.toml rejected ({}), using defaults", e);
            PanelConfig::default()
        }
    }
}
