//! Telemetry dashboard renderer
//!
//! Draws the static chrome once, then on every [`Dashboard::render`] call
//! repaints only the rows whose value differs from the last value that was
//! successfully drawn. A full repaint of a 480x320 TFT over SPI takes long
//! enough to flicker, so unchanged fields must cost nothing.

use core::fmt::Write;

use heapless::String;
use vrxpanel_display::{
    fill_round_rect, truncated, Background, DisplayDriver, DisplayError, Font, Orientation, Rgb,
};

use super::battery::{voltage_to_percent, BatteryLevel};
use super::layout::{DashboardLayout, Rect};
use super::snapshot::TelemetrySnapshot;

/// Voltage change that triggers a header redraw
pub const VOLTAGE_EPSILON: f32 = 0.05;

/// RSSI below this value is highlighted as a poor link
pub const RSSI_POOR_DB: i16 = 30;

/// Maximum title length
pub const TITLE_LEN: usize = 24;

/// Title shown when none is configured
pub const DEFAULT_TITLE: &str = "VRX TELEMETRY";

const PLACEHOLDER: &str = "--";

/// Static row labels, top to bottom
const ROW_LABELS: [&str; 7] = [
    "VIDEO", "BAND", "CHANNEL", "RSSI", "CONTROL", "REC", "V_BYPASS",
];

const CARD_RADIUS: u32 = 6;
const COMPASS_RADIUS: u32 = 36;

/// Independently redrawn regions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
enum Field {
    Header,
    Video,
    Band,
    Channel,
    Rssi,
    Control,
    Record,
    Bypass,
    Azimuth,
}

impl Field {
    const fn bit(self) -> u16 {
        1 << self as u8
    }

    /// Value row index for row fields
    const fn row(self) -> usize {
        self as usize - 1
    }
}

/// Last successfully rendered values
///
/// `drawn` has one bit per [`Field`]; a cleared bit means the region was
/// wiped by a full frame and must be repainted whatever its value.
struct RenderCache {
    last: TelemetrySnapshot,
    drawn: u16,
}

impl RenderCache {
    fn new(cells: u8) -> Self {
        Self {
            last: TelemetrySnapshot {
                cells,
                ..TelemetrySnapshot::default()
            },
            drawn: 0,
        }
    }

    fn needs(&self, field: Field, changed: bool) -> bool {
        changed || self.drawn & field.bit() == 0
    }

    fn mark(&mut self, field: Field) {
        self.drawn |= field.bit();
    }

    fn invalidate(&mut self) {
        self.drawn = 0;
    }
}

/// Telemetry dashboard
pub struct Dashboard {
    layout: DashboardLayout,
    title: String<TITLE_LEN>,
    cache: RenderCache,
    initialized: bool,
}

impl Dashboard {
    /// Create a dashboard for the given orientation and initial cell count
    ///
    /// Nothing is drawn until [`Dashboard::initialize`].
    pub fn new(orientation: Orientation, cells: u8) -> Self {
        let (width, height) = orientation.screen_size();
        Self {
            layout: DashboardLayout::for_screen(width, height),
            title: truncated(DEFAULT_TITLE),
            cache: RenderCache::new(cells),
            initialized: false,
        }
    }

    /// Replace the header title (truncated to [`TITLE_LEN`])
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = truncated(title);
        self
    }

    /// Clear the screen and draw the static frame
    pub fn initialize<D: DisplayDriver + ?Sized>(
        &mut self,
        display: &mut D,
    ) -> Result<(), DisplayError> {
        debug!(
            "dashboard: init {}x{}",
            self.layout.width,
            self.layout.height
        );
        display.set_background(Background::Transparent);
        self.draw_full_frame(display)?;
        self.initialized = true;
        Ok(())
    }

    /// Logical screen size as (width, height)
    pub fn screen_size(&self) -> (u16, u16) {
        (self.layout.width, self.layout.height)
    }

    /// Resolved geometry
    pub fn layout(&self) -> &DashboardLayout {
        &self.layout
    }

    /// Override the cached cell count
    ///
    /// A following render with a different count repaints the header.
    pub fn set_cells(&mut self, cells: u8) {
        self.cache.last.cells = cells;
    }

    /// Redraw background, header, row labels and the azimuth card outline
    ///
    /// Every value region is wiped, so the next [`Dashboard::render`]
    /// repaints all fields.
    pub fn draw_full_frame<D: DisplayDriver + ?Sized>(
        &mut self,
        display: &mut D,
    ) -> Result<(), DisplayError> {
        self.cache.invalidate();

        display.set_color(Rgb::BACKGROUND);
        display.fill_rect(
            0,
            0,
            u32::from(self.layout.width),
            u32::from(self.layout.height),
        )?;

        self.draw_header_card(display)?;

        for (row, label) in ROW_LABELS.iter().enumerate() {
            self.draw_row_card(display, row, label)?;
        }

        self.draw_compass_card(display)
    }

    /// Repaint the fields that changed since the last render
    ///
    /// The cache only advances after a field was drawn, so a failed draw
    /// is retried on the next call.
    pub fn render<D: DisplayDriver + ?Sized>(
        &mut self,
        display: &mut D,
        snapshot: &TelemetrySnapshot,
    ) -> Result<(), DisplayError> {
        if !self.initialized {
            self.initialize(display)?;
        }

        // A non-finite value on either side yields NaN, which must count as a change
        let drift = libm::fabsf(snapshot.voltage_v - self.cache.last.voltage_v);
        let voltage_changed = drift.is_nan() || drift > VOLTAGE_EPSILON;
        let cells_changed = snapshot.cells != self.cache.last.cells;
        if self
            .cache
            .needs(Field::Header, voltage_changed || cells_changed)
        {
            let percent = voltage_to_percent(snapshot.voltage_v, snapshot.cells);
            trace!("dashboard: header {}%", percent);
            self.draw_header(display, snapshot.voltage_v, percent)?;
            self.cache.last.voltage_v = snapshot.voltage_v;
            self.cache.last.cells = snapshot.cells;
            self.cache.mark(Field::Header);
        }

        let mut buf: String<24> = String::new();

        if self
            .cache
            .needs(Field::Video, snapshot.freq_mhz != self.cache.last.freq_mhz)
        {
            let _ = write!(buf, "{} MHz", snapshot.freq_mhz);
            self.draw_value_row(display, Field::Video, &buf, false)?;
            self.cache.last.freq_mhz = snapshot.freq_mhz;
            self.cache.mark(Field::Video);
        }

        if self
            .cache
            .needs(Field::Band, snapshot.band != self.cache.last.band)
        {
            buf.clear();
            match snapshot.band {
                Some(band) => {
                    let _ = buf.push(band);
                }
                None => {
                    let _ = buf.push_str(PLACEHOLDER);
                }
            }
            self.draw_value_row(display, Field::Band, &buf, false)?;
            self.cache.last.band = snapshot.band;
            self.cache.mark(Field::Band);
        }

        if self
            .cache
            .needs(Field::Channel, snapshot.channel != self.cache.last.channel)
        {
            buf.clear();
            let _ = write!(buf, "{}", snapshot.channel);
            self.draw_value_row(display, Field::Channel, &buf, false)?;
            self.cache.last.channel = snapshot.channel;
            self.cache.mark(Field::Channel);
        }

        if self
            .cache
            .needs(Field::Rssi, snapshot.rssi_db != self.cache.last.rssi_db)
        {
            buf.clear();
            let _ = write!(buf, "{} dB", snapshot.rssi_db);
            let poor = snapshot.rssi_db < RSSI_POOR_DB;
            self.draw_value_row(display, Field::Rssi, &buf, poor)?;
            self.cache.last.rssi_db = snapshot.rssi_db;
            self.cache.mark(Field::Rssi);
        }

        if self
            .cache
            .needs(Field::Control, snapshot.control != self.cache.last.control)
        {
            let name = snapshot.control_name().unwrap_or(PLACEHOLDER);
            self.draw_value_row(display, Field::Control, name, false)?;
            self.cache.last.control = snapshot.control.clone();
            self.cache.mark(Field::Control);
        }

        if self.cache.needs(
            Field::Record,
            snapshot.recording != self.cache.last.recording,
        ) {
            let text = if snapshot.recording { "REC" } else { "STOP" };
            self.draw_value_row(display, Field::Record, text, snapshot.recording)?;
            self.cache.last.recording = snapshot.recording;
            self.cache.mark(Field::Record);
        }

        if self
            .cache
            .needs(Field::Bypass, snapshot.bypass != self.cache.last.bypass)
        {
            let text = if snapshot.bypass { "ON" } else { "OFF" };
            self.draw_value_row(display, Field::Bypass, text, snapshot.bypass)?;
            self.cache.last.bypass = snapshot.bypass;
            self.cache.mark(Field::Bypass);
        }

        if self.cache.needs(
            Field::Azimuth,
            snapshot.azimuth_deg != self.cache.last.azimuth_deg,
        ) {
            self.draw_azimuth(display, snapshot.azimuth_deg)?;
            self.cache.last.azimuth_deg = snapshot.azimuth_deg;
            self.cache.mark(Field::Azimuth);
        }

        Ok(())
    }

    fn draw_header_card<D: DisplayDriver + ?Sized>(
        &self,
        display: &mut D,
    ) -> Result<(), DisplayError> {
        let header = self.layout.header;
        fill_round_rect(
            display,
            header.x,
            header.y,
            header.width,
            header.height,
            CARD_RADIUS,
            Rgb::CARD,
        )?;
        print_at(
            display,
            &self.title,
            20,
            header.y + 16,
            Rgb::TEXT,
            self.layout.title_font,
        )
    }

    fn draw_header<D: DisplayDriver + ?Sized>(
        &self,
        display: &mut D,
        voltage_v: f32,
        percent: u8,
    ) -> Result<(), DisplayError> {
        self.draw_header_card(display)?;

        let Rect { x, y, .. } = self.layout.battery;
        fill_round_rect(
            display,
            x,
            y,
            self.layout.battery.width,
            self.layout.battery.height,
            CARD_RADIUS,
            Rgb::BACKGROUND,
        )?;

        // Battery icon: body, cap, fill proportional to charge
        const ICON_W: u32 = 46;
        const ICON_H: u32 = 20;
        const CAP_W: u32 = 5;
        let (ix, iy) = (x + 6, y + 8);

        display.set_color(Rgb::LABEL);
        display.draw_rect(ix - 1, iy - 1, ICON_W + CAP_W + 2, ICON_H + 2)?;
        display.fill_rect(ix + ICON_W as i32, iy + 5, CAP_W + 1, ICON_H - 9)?;

        let fill_w = u32::from(percent) * ICON_W / 100;
        if fill_w > 0 {
            display.set_color(BatteryLevel::from_percent(percent).color());
            display.fill_rect(ix, iy, fill_w, ICON_H)?;
        }
        if fill_w < ICON_W {
            display.set_color(Rgb::BACKGROUND);
            display.fill_rect(ix + fill_w as i32, iy, ICON_W - fill_w, ICON_H)?;
        }

        let mut line: String<24> = String::new();
        let _ = write!(line, "{:.2}V  ({}%)", voltage_v, percent);
        print_at(
            display,
            &line,
            ix + (ICON_W + CAP_W) as i32 + 10,
            y + 12,
            Rgb::TEXT,
            Font::Small,
        )
    }

    fn draw_row_card<D: DisplayDriver + ?Sized>(
        &self,
        display: &mut D,
        row: usize,
        label: &str,
    ) -> Result<(), DisplayError> {
        let y = self.layout.row_y(row);
        fill_round_rect(
            display,
            self.layout.rows_x,
            y,
            self.layout.row_width,
            self.layout.row_height,
            CARD_RADIUS,
            Rgb::CARD,
        )?;
        print_at(
            display,
            label,
            self.layout.rows_x + 10,
            y + 8,
            Rgb::LABEL,
            Font::Small,
        )
    }

    fn draw_value_row<D: DisplayDriver + ?Sized>(
        &self,
        display: &mut D,
        field: Field,
        value: &str,
        highlight: bool,
    ) -> Result<(), DisplayError> {
        let row = field.row();
        self.draw_row_card(display, row, ROW_LABELS[row])?;

        let y = self.layout.row_y(row);
        let value_x = self.layout.rows_x + 130;
        if highlight {
            fill_round_rect(
                display,
                self.layout.rows_x + 120,
                y + 4,
                160,
                self.layout.row_height - 8,
                CARD_RADIUS,
                Rgb::BLACK,
            )?;
            print_at(display, value, value_x, y + 8, Rgb::OK, Font::Small)
        } else {
            print_at(display, value, value_x, y + 8, Rgb::TEXT, Font::Small)
        }
    }

    fn draw_compass_card<D: DisplayDriver + ?Sized>(
        &self,
        display: &mut D,
    ) -> Result<(), DisplayError> {
        let card = self.layout.compass;
        fill_round_rect(
            display,
            card.x,
            card.y,
            card.width,
            card.height,
            CARD_RADIUS,
            Rgb::CARD,
        )?;
        print_at(
            display,
            "AZIMUTH",
            card.x + 10,
            card.y + 8,
            Rgb::LABEL,
            Font::Small,
        )
    }

    fn draw_azimuth<D: DisplayDriver + ?Sized>(
        &self,
        display: &mut D,
        azimuth_deg: i16,
    ) -> Result<(), DisplayError> {
        self.draw_compass_card(display)?;

        let card = self.layout.compass;
        let cx = card.x + card.width as i32 / 2;
        let cy = card.y + card.height as i32 / 2 + 4;

        display.set_color(Rgb::TEXT);
        display.draw_circle(cx, cy, COMPASS_RADIUS)?;
        display.draw_circle(cx, cy, 2)?;

        let (mx, my) = needle_position(cx, cy, COMPASS_RADIUS - 5, azimuth_deg);
        display.set_color(Rgb::OK);
        display.fill_circle(mx, my, 3)?;

        let mut caption: String<8> = String::new();
        let _ = write!(caption, "{}°", azimuth_deg.rem_euclid(360));
        print_at(
            display,
            &caption,
            cx - 24,
            card.y + card.height as i32 - 14,
            Rgb::TEXT,
            Font::Small,
        )
    }
}

/// Point on a compass rose: 0° is up, angles grow clockwise
fn needle_position(cx: i32, cy: i32, radius: u32, azimuth_deg: i16) -> (i32, i32) {
    let rad = f32::from(azimuth_deg.rem_euclid(360)) * core::f32::consts::PI / 180.0;
    let r = radius as f32;
    let dx = libm::roundf(libm::sinf(rad) * r) as i32;
    let dy = libm::roundf(libm::cosf(rad) * r) as i32;
    (cx + dx, cy - dy)
}

fn print_at<D: DisplayDriver + ?Sized>(
    display: &mut D,
    text: &str,
    x: i32,
    y: i32,
    color: Rgb,
    font: Font,
) -> Result<(), DisplayError> {
    display.set_font(font);
    display.set_color(color);
    display.set_background(Background::Transparent);
    display.print(text, x, y)
}
