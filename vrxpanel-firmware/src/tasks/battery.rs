//! Battery sense task
//!
//! Samples the pack voltage divider on the ADC and publishes a smoothed
//! voltage for the dashboard.

use defmt::*;
use embassy_rp::adc::{Adc, Async, Channel};
use embassy_time::{Duration, Ticker};

use vrxpanel_core::config::BatteryConfig;

use crate::channels::BATTERY_VOLTS;

/// Sampling interval
const SAMPLE_INTERVAL_MS: u64 = 250;

/// Weight of a new sample in the exponential filter
const SMOOTHING: f32 = 0.25;

#[embassy_executor::task]
pub async fn battery_task(
    mut adc: Adc<'static, Async>,
    mut channel: Channel<'static>,
    config: BatteryConfig,
) {
    info!(
        "Battery task started (divider {}/1000, ref {}mV)",
        config.divider_x1000, config.adc_ref_mv
    );

    let mut ticker = Ticker::every(Duration::from_millis(SAMPLE_INTERVAL_MS));
    let mut filtered: Option<f32> = None;

    loop {
        ticker.next().await;

        let raw = match adc.read(&mut channel).await {
            Ok(raw) => raw,
            Err(_) => {
                warn!("Battery ADC read failed");
                continue;
            }
        };

        let volts = config.pack_voltage(raw);
        let smoothed = match filtered {
            Some(prev) => prev + (volts - prev) * SMOOTHING,
            None => volts,
        };
        filtered = Some(smoothed);
        trace!("Battery raw={} {}V", raw, smoothed);
        BATTERY_VOLTS.signal(smoothed);
    }
}
