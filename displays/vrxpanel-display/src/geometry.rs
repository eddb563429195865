//! Shared geometry helpers
//!
//! Rounded cards are emulated from rectangles and corner discs because the
//! driver contract only offers axis-aligned primitives.

use crate::backend::{DisplayDriver, DisplayError};
use crate::color::Rgb;

/// Panel orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Orientation {
    /// 480x320
    #[default]
    Landscape,
    /// 320x480
    Portrait,
}

impl Orientation {
    /// Logical screen size as (width, height)
    pub const fn screen_size(self) -> (u16, u16) {
        match self {
            Orientation::Landscape => (480, 320),
            Orientation::Portrait => (320, 480),
        }
    }
}

/// Fill a card with rounded corners
///
/// The radius is clamped to half of the smaller side. Zero-sized cards
/// draw nothing.
#[allow(clippy::too_many_arguments)]
pub fn fill_round_rect<D: DisplayDriver + ?Sized>(
    display: &mut D,
    x: i32,
    y: i32,
    width: u32,
    height: u32,
    radius: u32,
    color: Rgb,
) -> Result<(), DisplayError> {
    if width == 0 || height == 0 {
        return Ok(());
    }
    let r = radius.min(width / 2).min(height / 2);

    display.set_color(color);
    if r == 0 {
        return display.fill_rect(x, y, width, height);
    }

    let ri = r as i32;
    let right = x + width as i32 - 1 - ri;
    let bottom = y + height as i32 - 1 - ri;

    // Centre column spans the full height, side bands fill between corners
    display.fill_rect(x + ri, y, width - 2 * r, height)?;
    display.fill_rect(x, y + ri, r, height - 2 * r)?;
    display.fill_rect(x + width as i32 - ri, y + ri, r, height - 2 * r)?;

    display.fill_circle(x + ri, y + ri, r)?;
    display.fill_circle(right, y + ri, r)?;
    display.fill_circle(x + ri, bottom, r)?;
    display.fill_circle(right, bottom, r)
}

/// Offset that centres `inner` within `outer`
///
/// Saturates to 0 when `inner` does not fit.
pub const fn centered_origin(outer: u16, inner: u16) -> i32 {
    (outer.saturating_sub(inner) / 2) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{DrawOp, RecordingDisplay};

    #[test]
    fn test_round_rect_parts() {
        let mut display = RecordingDisplay::new(480, 320);
        fill_round_rect(&mut display, 10, 20, 100, 40, 6, Rgb::CARD).unwrap();

        let ops = display.ops();
        assert_eq!(ops.len(), 7);
        assert_eq!(
            ops[0],
            DrawOp::FillRect {
                x: 16,
                y: 20,
                width: 88,
                height: 40,
                color: Rgb::CARD
            }
        );
        assert_eq!(
            ops[6],
            DrawOp::FillCircle {
                cx: 103,
                cy: 53,
                r: 6,
                color: Rgb::CARD
            }
        );
    }

    #[test]
    fn test_round_rect_radius_clamped() {
        let mut display = RecordingDisplay::new(480, 320);
        fill_round_rect(&mut display, 0, 0, 10, 4, 8, Rgb::OK).unwrap();

        // radius clamps to 2 (half the height), so side bands are zero-height
        assert!(display
            .ops()
            .iter()
            .all(|op| !matches!(op, DrawOp::FillCircle { r, .. } if *r != 2)));
    }

    #[test]
    fn test_round_rect_empty() {
        let mut display = RecordingDisplay::new(480, 320);
        fill_round_rect(&mut display, 0, 0, 0, 10, 3, Rgb::OK).unwrap();
        assert!(display.ops().is_empty());
    }

    #[test]
    fn test_centered_origin() {
        assert_eq!(centered_origin(480, 440), 20);
        assert_eq!(centered_origin(320, 440), 0);
        assert_eq!(centered_origin(320, 216), 52);
    }

    #[test]
    fn test_orientation_sizes() {
        assert_eq!(Orientation::Landscape.screen_size(), (480, 320));
        assert_eq!(Orientation::Portrait.screen_size(), (320, 480));
    }
}
