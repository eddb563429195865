//! VRX Panel Hardware Abstraction Layer
//!
//! This crate defines the small set of hardware traits the panel UI needs.
//! Chip-specific glue (the RP2040 firmware, host mocks) implements them so
//! the dashboard and menu logic stays board-agnostic.
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  vrxpanel-core (dashboard, menu)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  vrxpanel-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │   firmware    │       │  mock (host   │
//! │   (RP2040)    │       │   tests)      │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::InputPin`], [`gpio::OutputPin`] - Digital I/O
//! - [`clock::Clock`] - Monotonic millisecond time source

#![no_std]
#![deny(unsafe_code)]

pub mod clock;
pub mod gpio;
#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use clock::Clock;
pub use gpio::{InputPin, OutputPin, Pull};
