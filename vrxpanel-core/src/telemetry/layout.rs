//! Dashboard geometry
//!
//! Landscape puts the azimuth card to the right of the value rows. Portrait
//! is too narrow for that, so the card moves below the rows and the title
//! switches to the small font to clear the battery gauge.

use vrxpanel_display::{centered_origin, Font};

/// Axis-aligned box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Margin around the header card
const HEADER_MARGIN: i32 = 6;
const HEADER_HEIGHT: u32 = 52;

const ROWS_X: i32 = 16;
const ROWS_Y: i32 = 72;
const ROW_WIDTH: u32 = 300;
const ROW_HEIGHT: u32 = 28;
const ROW_GAP: u32 = 6;

/// Number of value rows
pub const ROW_COUNT: usize = 7;

const COMPASS_WIDTH: u32 = 124;
const COMPASS_HEIGHT: u32 = 120;

/// Battery gauge box, measured from the right screen edge
const BATTERY_RIGHT_OFFSET: i32 = 180;
const BATTERY_WIDTH: u32 = 150;
const BATTERY_HEIGHT: u32 = 36;

/// Resolved positions of every dashboard element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DashboardLayout {
    pub width: u16,
    pub height: u16,
    pub header: Rect,
    pub title_font: Font,
    pub battery: Rect,
    pub rows_x: i32,
    pub rows_y: i32,
    pub row_width: u32,
    pub row_height: u32,
    pub row_gap: u32,
    pub compass: Rect,
}

impl DashboardLayout {
    /// Layout for a logical screen size
    pub fn for_screen(width: u16, height: u16) -> Self {
        let header = Rect::new(
            HEADER_MARGIN,
            HEADER_MARGIN,
            u32::from(width).saturating_sub(2 * HEADER_MARGIN as u32),
            HEADER_HEIGHT,
        );
        let battery = Rect::new(
            i32::from(width) - BATTERY_RIGHT_OFFSET,
            header.y + 8,
            BATTERY_WIDTH,
            BATTERY_HEIGHT,
        );

        if width >= height {
            Self {
                width,
                height,
                header,
                title_font: Font::Big,
                battery,
                rows_x: ROWS_X,
                rows_y: ROWS_Y,
                row_width: ROW_WIDTH,
                row_height: ROW_HEIGHT,
                row_gap: ROW_GAP,
                compass: Rect::new(
                    i32::from(width) - COMPASS_WIDTH as i32 - ROWS_X,
                    ROWS_Y,
                    COMPASS_WIDTH,
                    COMPASS_HEIGHT,
                ),
            }
        } else {
            let row_width = u32::from(width).saturating_sub(2 * ROWS_X as u32);
            let rows_bottom = ROWS_Y + ROW_COUNT as i32 * (ROW_HEIGHT + ROW_GAP) as i32;
            Self {
                width,
                height,
                header,
                title_font: Font::Small,
                battery,
                rows_x: ROWS_X,
                rows_y: ROWS_Y,
                row_width,
                row_height: ROW_HEIGHT,
                row_gap: ROW_GAP,
                compass: Rect::new(
                    centered_origin(width, COMPASS_WIDTH as u16),
                    rows_bottom + ROW_GAP as i32,
                    COMPASS_WIDTH,
                    COMPASS_HEIGHT,
                ),
            }
        }
    }

    /// Top edge of value row `row`
    pub fn row_y(&self, row: usize) -> i32 {
        self.rows_y + row as i32 * (self.row_height + self.row_gap) as i32
    }
}
