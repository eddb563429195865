//! Board-agnostic UI logic for the VRX panel
//!
//! This crate contains everything the panel shows and edits that does not
//! depend on a particular board:
//!
//! - Telemetry dashboard with differential (changed-fields-only) redraw
//! - Configuration menu: cursor, debounced buttons, saturating field edits
//! - Battery percentage math
//! - Panel configuration types and the TOML-subset parser
//!
//! Both screens draw through [`vrxpanel_display::DisplayDriver`], which the
//! caller lends for each call so the two can share one panel.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

// Must come first so the logging macros are visible in every module
mod fmt;

pub mod config;
pub mod menu;
pub mod telemetry;

pub use config::{parse_config, PanelConfig, ParseError};
pub use menu::{
    ButtonPins, Buttons, Callbacks, ConfigItem, ConfigMenu, ConfigObserver, ConfigState,
    LabelTable, LabelTables, VrxMode,
};
pub use telemetry::{voltage_to_percent, BatteryLevel, Dashboard, TelemetrySnapshot};
