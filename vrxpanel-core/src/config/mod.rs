//! Panel configuration
//!
//! Board wiring and UI tuning, read from a small TOML file embedded in the
//! firmware image.

pub mod parser;
pub mod types;

pub use parser::{parse_config, ParseError};
pub use types::*;
