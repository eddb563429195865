//! Telemetry dashboard
//!
//! Shows battery, video link, control link and heading on one screen and
//! only repaints the parts whose value changed since the last render.

pub mod battery;
pub mod dashboard;
pub mod layout;
pub mod snapshot;

pub use battery::{voltage_to_percent, BatteryLevel};
pub use dashboard::Dashboard;
pub use layout::DashboardLayout;
pub use snapshot::{TelemetrySnapshot, CONTROL_NAME_LEN};
