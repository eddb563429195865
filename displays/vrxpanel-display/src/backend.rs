//! Display driver trait
//!
//! Defines the interface the panel UI draws through. The trait mirrors a
//! classic stateful TFT library: a current foreground colour, a text
//! background mode and a selected font apply to the drawing calls that follow.

use crate::color::Rgb;

/// Display driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with the panel controller
    Communication,
    /// Shape dimensions out of range
    InvalidCoordinates,
}

/// Bitmap font selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Font {
    /// Label and value text
    #[default]
    Small,
    /// Titles
    Big,
}

/// Background behind printed glyphs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Background {
    /// Only glyph pixels are written
    #[default]
    Transparent,
    /// The whole glyph cell is filled with this colour
    Solid(Rgb),
}

/// Display driver trait
///
/// Coordinates are pixels from the top-left corner of the logical
/// (orientation-adjusted) screen. Shapes use the current colour set with
/// [`DisplayDriver::set_color`].
pub trait DisplayDriver {
    /// Logical screen size as (width, height) in pixels
    fn dimensions(&self) -> (u16, u16);

    /// Set the foreground colour for shapes and text
    fn set_color(&mut self, color: Rgb);

    /// Set the background used behind printed text
    fn set_background(&mut self, background: Background);

    /// Select the font used by [`DisplayDriver::print`]
    fn set_font(&mut self, font: Font);

    /// Fill an axis-aligned rectangle
    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32) -> Result<(), DisplayError>;

    /// Draw a one pixel rectangle outline
    fn draw_rect(&mut self, x: i32, y: i32, width: u32, height: u32) -> Result<(), DisplayError>;

    /// Fill a circle of radius `r` centred on (`cx`, `cy`)
    fn fill_circle(&mut self, cx: i32, cy: i32, r: u32) -> Result<(), DisplayError>;

    /// Draw a one pixel circle outline
    fn draw_circle(&mut self, cx: i32, cy: i32, r: u32) -> Result<(), DisplayError>;

    /// Print text with its top-left glyph cell at (`x`, `y`)
    fn print(&mut self, text: &str, x: i32, y: i32) -> Result<(), DisplayError>;
}
