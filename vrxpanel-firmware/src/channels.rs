//! Inter-task communication channels
//!
//! Static embassy-sync signals connecting the sampling tasks to the UI task
//! and the UI task to whoever acts on menu edits.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use vrxpanel_core::TelemetrySnapshot;

/// Latest telemetry from the receiver / flight controller link
///
/// Battery voltage in the snapshot is overridden by [`BATTERY_VOLTS`] when
/// the on-board sense is in use.
pub static TELEMETRY: Signal<CriticalSectionRawMutex, TelemetrySnapshot> = Signal::new();

/// Filtered pack voltage in volts (updated by the battery task)
pub static BATTERY_VOLTS: Signal<CriticalSectionRawMutex, f32> = Signal::new();

/// Recording value chosen in the menu (0 = stop, 1 = record)
pub static RECORD_REQUEST: Signal<CriticalSectionRawMutex, u8> = Signal::new();

/// Video bypass value chosen in the menu (0 = off, 1 = on, 2 = auto)
pub static BYPASS_REQUEST: Signal<CriticalSectionRawMutex, u8> = Signal::new();
