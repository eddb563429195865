//! UI task
//!
//! Owns the panel and runs one of two screens at a fixed cadence: the
//! telemetry dashboard, or the configuration menu while the edit-mode
//! switch is held LOW.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_time::{Duration, Ticker};

use vrxpanel_core::menu::{ButtonPins, LabelTable, LabelTables};
use vrxpanel_core::{ConfigMenu, ConfigObserver, ConfigState, Dashboard, PanelConfig, TelemetrySnapshot};
use vrxpanel_hal::{InputPin, OutputPin, Pull};

use crate::board::{BoardClock, BoardInput, BoardOutput, PanelDisplay};
use crate::channels::{BATTERY_VOLTS, BYPASS_REQUEST, RECORD_REQUEST, TELEMETRY};

/// Frame interval
const UI_INTERVAL_MS: u64 = 50;

const BANDS: [&str; 7] = [
    "BOSCAM A", "BOSCAM B", "BOSCAM E", "FATSHARK", "RACEBAND", "LOWRACE", "BAND X",
];
const CHANNELS: [&str; 8] = ["CH 1", "CH 2", "CH 3", "CH 4", "CH 5", "CH 6", "CH 7", "CH 8"];
const RECORD: [&str; 2] = ["STOP", "REC"];
const BYPASS: [&str; 3] = ["OFF", "ON", "AUTO"];

const LABELS: LabelTables<'static> = LabelTables {
    bands: LabelTable::new(&BANDS),
    chans: LabelTable::new(&CHANNELS),
    rec: LabelTable::new(&RECORD),
    bypass: LabelTable::new(&BYPASS),
};

/// Inputs and outputs owned by the UI
pub struct UiPins {
    pub buttons: ButtonPins<BoardInput>,
    /// Edit-mode switch (LOW = editing), if fitted
    pub mode: Option<BoardInput>,
    pub backlight: BoardOutput,
}

/// Forwards menu edits to the link task
struct LinkObserver;

impl ConfigObserver for LinkObserver {
    fn record_changed(&mut self, value: u8) {
        info!("Recording -> {}", value);
        RECORD_REQUEST.signal(value);
    }

    fn bypass_changed(&mut self, value: u8) {
        info!("Video bypass -> {}", value);
        BYPASS_REQUEST.signal(value);
    }
}

#[embassy_executor::task]
pub async fn ui_task(mut display: PanelDisplay, pins: UiPins, config: &'static PanelConfig) {
    info!("UI task started");

    let UiPins {
        buttons,
        mut mode,
        mut backlight,
    } = pins;
    if let Some(switch) = mode.as_mut() {
        switch.set_pull(Pull::Up);
    }

    let mut dashboard = Dashboard::new(config.display.orientation, config.battery.cells)
        .with_title(&config.display.title);
    let mut menu = ConfigMenu::new(
        &display,
        buttons,
        BoardClock,
        LABELS,
        config.menu.origin_y,
        config.menu.block_width,
    )
    .with_title(&config.menu.title)
    .with_debounce(config.menu.debounce_ms)
    .with_observer(LinkObserver);

    if let Err(e) = dashboard.initialize(&mut display) {
        error!("Dashboard init failed: {}", e);
    }
    backlight.set_high();

    let mut snapshot = TelemetrySnapshot {
        cells: config.battery.cells,
        ..TelemetrySnapshot::default()
    };
    let mut battery_volts: Option<f32> = None;
    let mut state = ConfigState::default();
    let mut editing = false;
    let mut ticker = Ticker::every(Duration::from_millis(UI_INTERVAL_MS));

    loop {
        if let Either::Second(update) = select(ticker.next(), TELEMETRY.wait()).await {
            snapshot = update;
        }
        if let Some(volts) = BATTERY_VOLTS.try_take() {
            battery_volts = Some(volts);
        }
        if let Some(volts) = battery_volts {
            snapshot.voltage_v = volts;
        }

        let edit_requested = mode.as_ref().is_some_and(|switch| switch.is_low());
        if edit_requested != editing {
            editing = edit_requested;
            if editing {
                info!("Entering edit mode");
                menu.reset_cursor();
            } else {
                info!("Leaving edit mode");
                if let Err(e) = dashboard.draw_full_frame(&mut display) {
                    warn!("Dashboard redraw failed: {}", e);
                }
            }
        }

        let result = if editing {
            menu.tick(&mut display, &mut state, true).map(|changed| {
                if changed {
                    debug!("Menu: {} {}", menu.cursor(), state);
                }
            })
        } else {
            dashboard.render(&mut display, &snapshot)
        };

        if let Err(e) = result {
            warn!("Display error: {}", e);
        }
    }
}
