//! Colours and the shared palette

/// 24-bit colour as handed to the display driver
///
/// Drivers narrow it to their native format (RGB565 on the TFT).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Screen background (dark blue-black)
    pub const BACKGROUND: Rgb = Rgb::new(8, 16, 24);
    /// Card fill
    pub const CARD: Rgb = Rgb::new(24, 48, 72);
    /// Primary text
    pub const TEXT: Rgb = Rgb::new(255, 255, 255);
    /// Static labels
    pub const LABEL: Rgb = Rgb::new(180, 180, 180);
    /// Inactive menu rows
    pub const DIM: Rgb = Rgb::new(150, 150, 150);
    /// Good / active value
    pub const OK: Rgb = Rgb::new(0, 255, 0);
    /// Warning
    pub const WARN: Rgb = Rgb::new(255, 255, 0);
    /// Critical
    pub const BAD: Rgb = Rgb::new(255, 0, 0);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
}
