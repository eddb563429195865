//! Display abstraction and shared drawing helpers for the VRX panel
//!
//! This crate provides:
//! - `DisplayDriver` trait: the pixel-level collaborator the UI draws through
//!   (rectangles, circles, bitmap text, colour state)
//! - Palette, font and text-background types
//! - Shared geometry helpers (rounded cards, centering, orientation)
//! - Truncating copy into fixed-capacity strings
//! - `GraphicsDriver`: a `DisplayDriver` over any `embedded-graphics` target
//!
//! # Architecture
//!
//! The dashboard and configuration menu never touch the panel controller
//! directly. The firmware wraps its SPI TFT (driven through `mipidsi`) in a
//! [`GraphicsDriver`] and lends it to whichever screen is active. Host tests
//! use the recording driver from the `mock` feature instead.

#![no_std]
#![deny(unsafe_code)]

pub mod backend;
pub mod color;
pub mod geometry;
pub mod graphics;
pub mod text;
#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export key types
pub use backend::{Background, DisplayDriver, DisplayError, Font};
pub use color::Rgb;
pub use geometry::{centered_origin, fill_round_rect, Orientation};
pub use graphics::GraphicsDriver;
pub use text::truncated;
