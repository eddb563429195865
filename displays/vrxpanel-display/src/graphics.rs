//! embedded-graphics adapter
//!
//! Implements [`DisplayDriver`] on top of any `DrawTarget<Color = Rgb565>`,
//! which covers the `mipidsi` panel drivers used by the firmware as well as
//! framebuffers and simulators.

use embedded_graphics::mono_font::iso_8859_1::{FONT_10X20, FONT_8X13};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::{Rgb565, Rgb888};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};

use crate::backend::{Background, DisplayDriver, DisplayError, Font};
use crate::color::Rgb;

/// [`DisplayDriver`] over an embedded-graphics draw target
pub struct GraphicsDriver<T> {
    target: T,
    color: Rgb565,
    background: Option<Rgb565>,
    font: Font,
}

impl<T> GraphicsDriver<T>
where
    T: DrawTarget<Color = Rgb565>,
{
    /// Wrap a draw target
    pub fn new(target: T) -> Self {
        Self {
            target,
            color: Rgb565::WHITE,
            background: None,
            font: Font::Small,
        }
    }

    /// Access the wrapped target
    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }

    /// Release the wrapped target
    pub fn release(self) -> T {
        self.target
    }

    fn mono_font(&self) -> &'static MonoFont<'static> {
        match self.font {
            Font::Small => &FONT_8X13,
            Font::Big => &FONT_10X20,
        }
    }
}

/// Bounding-box diameter of a circle with radius `r`
fn diameter(r: u32) -> Result<u32, DisplayError> {
    r.checked_mul(2)
        .and_then(|d| d.checked_add(1))
        .ok_or(DisplayError::InvalidCoordinates)
}

/// Narrow a palette colour to RGB565
pub fn to_rgb565(color: Rgb) -> Rgb565 {
    Rgb565::from(Rgb888::new(color.r, color.g, color.b))
}

impl<T> DisplayDriver for GraphicsDriver<T>
where
    T: DrawTarget<Color = Rgb565>,
{
    fn dimensions(&self) -> (u16, u16) {
        let size = self.target.bounding_box().size;
        (size.width as u16, size.height as u16)
    }

    fn set_color(&mut self, color: Rgb) {
        self.color = to_rgb565(color);
    }

    fn set_background(&mut self, background: Background) {
        self.background = match background {
            Background::Transparent => None,
            Background::Solid(color) => Some(to_rgb565(color)),
        };
    }

    fn set_font(&mut self, font: Font) {
        self.font = font;
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32) -> Result<(), DisplayError> {
        Rectangle::new(Point::new(x, y), Size::new(width, height))
            .into_styled(PrimitiveStyle::with_fill(self.color))
            .draw(&mut self.target)
            .map_err(|_| DisplayError::Communication)
    }

    fn draw_rect(&mut self, x: i32, y: i32, width: u32, height: u32) -> Result<(), DisplayError> {
        Rectangle::new(Point::new(x, y), Size::new(width, height))
            .into_styled(PrimitiveStyle::with_stroke(self.color, 1))
            .draw(&mut self.target)
            .map_err(|_| DisplayError::Communication)
    }

    fn fill_circle(&mut self, cx: i32, cy: i32, r: u32) -> Result<(), DisplayError> {
        Circle::with_center(Point::new(cx, cy), diameter(r)?)
            .into_styled(PrimitiveStyle::with_fill(self.color))
            .draw(&mut self.target)
            .map_err(|_| DisplayError::Communication)
    }

    fn draw_circle(&mut self, cx: i32, cy: i32, r: u32) -> Result<(), DisplayError> {
        Circle::with_center(Point::new(cx, cy), diameter(r)?)
            .into_styled(PrimitiveStyle::with_stroke(self.color, 1))
            .draw(&mut self.target)
            .map_err(|_| DisplayError::Communication)
    }

    fn print(&mut self, text: &str, x: i32, y: i32) -> Result<(), DisplayError> {
        let builder = MonoTextStyleBuilder::new()
            .font(self.mono_font())
            .text_color(self.color);
        let style = match self.background {
            Some(bg) => builder.background_color(bg).build(),
            None => builder.build(),
        };

        Text::with_baseline(text, Point::new(x, y), style, Baseline::Top)
            .draw(&mut self.target)
            .map(|_| ())
            .map_err(|_| DisplayError::Communication)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::mock_display::MockDisplay;

    fn driver() -> GraphicsDriver<MockDisplay<Rgb565>> {
        let mut target = MockDisplay::new();
        target.set_allow_overdraw(true);
        target.set_allow_out_of_bounds_drawing(true);
        GraphicsDriver::new(target)
    }

    #[test]
    fn test_dimensions_follow_target() {
        let d = driver();
        assert_eq!(d.dimensions(), (64, 64));
    }

    #[test]
    fn test_fill_rect_uses_current_color() {
        let mut d = driver();
        d.set_color(Rgb::BAD);
        d.fill_rect(2, 3, 4, 5).unwrap();

        let target = d.release();
        assert_eq!(target.get_pixel(Point::new(2, 3)), Some(Rgb565::RED));
        assert_eq!(target.get_pixel(Point::new(5, 7)), Some(Rgb565::RED));
        assert_eq!(target.get_pixel(Point::new(6, 3)), None);
    }

    #[test]
    fn test_fill_circle_covers_centre_and_radius() {
        let mut d = driver();
        d.set_color(Rgb::OK);
        d.fill_circle(20, 20, 3).unwrap();

        let target = d.release();
        assert_eq!(target.get_pixel(Point::new(20, 20)), Some(Rgb565::GREEN));
        assert_eq!(target.get_pixel(Point::new(23, 20)), Some(Rgb565::GREEN));
        assert_eq!(target.get_pixel(Point::new(25, 20)), None);
    }

    #[test]
    fn test_print_transparent_leaves_cell_background() {
        let mut d = driver();
        d.set_color(Rgb::TEXT);
        d.set_background(Background::Transparent);
        d.print("-", 0, 0).unwrap();

        let target = d.release();
        // top-left of the glyph cell is blank for '-'
        assert_eq!(target.get_pixel(Point::new(0, 0)), None);
    }

    #[test]
    fn test_print_solid_background_fills_cell() {
        let mut d = driver();
        d.set_color(Rgb::TEXT);
        d.set_background(Background::Solid(Rgb::BLACK));
        d.print("-", 0, 0).unwrap();

        let target = d.release();
        assert_eq!(target.get_pixel(Point::new(0, 0)), Some(Rgb565::BLACK));
    }

    #[test]
    fn test_oversized_circle_rejected() {
        let mut d = driver();
        assert_eq!(
            d.fill_circle(0, 0, u32::MAX),
            Err(DisplayError::InvalidCoordinates)
        );
    }

    #[test]
    fn test_palette_narrowing() {
        assert_eq!(to_rgb565(Rgb::BLACK), Rgb565::BLACK);
        assert_eq!(to_rgb565(Rgb::TEXT), Rgb565::WHITE);
    }
}
