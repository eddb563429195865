//! VRX Panel Firmware
//!
//! Telemetry dashboard and configuration menu for a video receiver /
//! flight accessory, on an RP2040 driving a 480x320 SPI TFT.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, InterruptHandler as AdcInterruptHandler};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Level, Output, Pull};
use embassy_rp::spi::{self, Spi};
use embassy_time::Delay;
use embedded_hal_bus::spi::ExclusiveDevice;
use mipidsi::models::ILI9486Rgb565;
use mipidsi::options::{ColorOrder, Orientation as PanelOrientation, Rotation};
use mipidsi::Builder;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use display_interface_spi::SPIInterface;
use vrxpanel_core::menu::ButtonPins;
use vrxpanel_core::PanelConfig;
use vrxpanel_display::{GraphicsDriver, Orientation};

use crate::board::{BoardInput, BoardOutput};
use crate::tasks::UiPins;

mod board;
mod channels;
mod config;
mod tasks;

bind_interrupts!(struct Irqs {
    ADC_IRQ_FIFO => AdcInterruptHandler;
});

// Configuration must live forever for task references
static PANEL_CONFIG: StaticCell<PanelConfig> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("VRX panel firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config: &'static PanelConfig = PANEL_CONFIG.init(config::load());
    board::check_wiring(config);

    // Display on SPI0 (SCK GPIO18, MOSI GPIO19, CS GPIO17, DC GPIO20, RST GPIO21)
    let mut spi_config = spi::Config::default();
    spi_config.frequency = board::DISPLAY_SPI_HZ;
    let spi = Spi::new_blocking_txonly(p.SPI0, p.PIN_18, p.PIN_19, spi_config);
    let cs = Output::new(p.PIN_17, Level::High);
    let dc = Output::new(p.PIN_20, Level::Low);
    let rst = Output::new(p.PIN_21, Level::High);

    let device = match ExclusiveDevice::new(spi, cs, Delay) {
        Ok(device) => device,
        Err(e) => match e {},
    };

    // The ILI9486 is natively 320x480 portrait
    let rotation = match config.display.orientation {
        Orientation::Landscape => Rotation::Deg90,
        Orientation::Portrait => Rotation::Deg0,
    };
    let panel = match Builder::new(ILI9486Rgb565, SPIInterface::new(device, dc))
        .reset_pin(rst)
        .color_order(ColorOrder::Bgr)
        .orientation(PanelOrientation::new().rotate(rotation))
        .init(&mut Delay)
    {
        Ok(panel) => panel,
        Err(_) => defmt::panic!("Display init failed"),
    };
    let display = GraphicsDriver::new(panel);
    info!("Display initialized");

    // Buttons; pulls are configured by the menu
    let pins = UiPins {
        buttons: ButtonPins {
            up: BoardInput::new(p.PIN_2),
            down: BoardInput::new(p.PIN_3),
            left: BoardInput::new(p.PIN_4),
            right: BoardInput::new(p.PIN_5),
        },
        mode: config.buttons.mode.map(|_| BoardInput::new(p.PIN_6)),
        backlight: BoardOutput(Output::new(p.PIN_22, Level::Low)),
    };

    // Battery sense (GPIO26 / ADC0)
    let adc = Adc::new(p.ADC, Irqs, embassy_rp::adc::Config::default());
    let battery_channel = Channel::new_pin(p.PIN_26, Pull::None);

    spawner
        .spawn(tasks::battery_task(adc, battery_channel, config.battery))
        .unwrap();
    spawner
        .spawn(tasks::ui_task(display, pins, config))
        .unwrap();

    info!("All tasks spawned");
}
