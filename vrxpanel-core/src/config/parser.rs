//! Minimal TOML parser for panel configuration
//!
//! Handles only the subset the panel needs, without allocation:
//! - `[section]` headers (`display`, `battery`, `menu`, `buttons`)
//! - Key = value pairs (string, integer, boolean)
//! - Comments (# ...), including trailing ones
//!
//! Unknown keys are ignored so one file can serve several firmware
//! revisions. Unknown sections are an error.

use vrxpanel_display::{truncated, Orientation};

use super::types::{PanelConfig, PinConfig};

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Unknown or malformed section header
    InvalidSection,
    /// Value of the wrong type or out of range
    InvalidValue,
    /// Invalid pin string
    InvalidPin,
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Display,
    Battery,
    Menu,
    Buttons,
}

/// Parse TOML configuration into a [`PanelConfig`]
///
/// Missing keys keep their defaults.
pub fn parse_config(input: &str) -> Result<PanelConfig, ParseError> {
    let mut config = PanelConfig::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') {
            section = parse_section_header(line)?;
            continue;
        }

        if let Some((key, value)) = parse_key_value(line) {
            apply_value(section, key, value, &mut config)?;
        }
    }

    Ok(config)
}

/// Parse a header line like "[display]" or "[menu] # comment"
fn parse_section_header(line: &str) -> Result<Section, ParseError> {
    let end = line.find(']').ok_or(ParseError::InvalidSection)?;
    let rest = line[end + 1..].trim();
    if !rest.is_empty() && !rest.starts_with('#') {
        return Err(ParseError::InvalidSection);
    }

    match line[1..end].trim() {
        "display" => Ok(Section::Display),
        "battery" => Ok(Section::Battery),
        "menu" => Ok(Section::Menu),
        "buttons" => Ok(Section::Buttons),
        _ => Err(ParseError::InvalidSection),
    }
}

/// Split "key = value", dropping a trailing comment outside quotes
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = line[eq_pos + 1..].trim();

    let value = match value.find('#') {
        Some(hash_pos) if value[..hash_pos].matches('"').count() % 2 == 0 => {
            value[..hash_pos].trim()
        }
        _ => value,
    };

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

fn apply_value(
    section: Section,
    key: &str,
    value: &str,
    config: &mut PanelConfig,
) -> Result<(), ParseError> {
    match section {
        Section::Root => {}
        Section::Display => match key {
            "orientation" => config.display.orientation = parse_orientation(value)?,
            "title" => config.display.title = truncated(parse_string(value)?),
            "backlight_pin" => config.display.backlight = Some(parse_pin(value)?),
            _ => {}
        },
        Section::Battery => match key {
            "cells" => config.battery.cells = parse_int(value)?,
            "adc_pin" => config.battery.adc_pin = parse_pin(value)?.pin,
            "divider" => config.battery.divider_x1000 = parse_ratio(value)?,
            "adc_ref_mv" => config.battery.adc_ref_mv = parse_int(value)?,
            _ => {}
        },
        Section::Menu => match key {
            "title" => config.menu.title = truncated(parse_string(value)?),
            "origin_y" => config.menu.origin_y = parse_int(value)?,
            "block_width" => config.menu.block_width = parse_int(value)?,
            "debounce_ms" => config.menu.debounce_ms = parse_int(value)?,
            _ => {}
        },
        Section::Buttons => match key {
            "up_pin" => config.buttons.up = parse_pin(value)?,
            "down_pin" => config.buttons.down = parse_pin(value)?,
            "left_pin" => config.buttons.left = parse_pin(value)?,
            "right_pin" => config.buttons.right = parse_pin(value)?,
            "mode_pin" => config.buttons.mode = Some(parse_pin(value)?),
            "mode_enabled" => {
                if !parse_bool(value)? {
                    config.buttons.mode = None;
                }
            }
            _ => {}
        },
    }
    Ok(())
}

/// Parse a string value (removes quotes)
fn parse_string(value: &str) -> Result<&str, ParseError> {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        Ok(&value[1..value.len() - 1])
    } else if value.contains('"') {
        Err(ParseError::InvalidValue)
    } else {
        // Allow unquoted strings for simple values
        Ok(value)
    }
}

fn parse_int<T: core::str::FromStr>(value: &str) -> Result<T, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidValue)
}

fn parse_bool(value: &str) -> Result<bool, ParseError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ParseError::InvalidValue),
    }
}

/// Parse a pin string like "gpio11" or "^gpio4" (pull-up)
fn parse_pin(value: &str) -> Result<PinConfig, ParseError> {
    let value = parse_string(value)?;
    let (pull_up, name) = match value.strip_prefix('^') {
        Some(rest) => (true, rest),
        None => (false, value),
    };

    let number = name.strip_prefix("gpio").ok_or(ParseError::InvalidPin)?;
    let pin: u8 = number.parse().map_err(|_| ParseError::InvalidPin)?;
    if pin > 29 {
        return Err(ParseError::InvalidPin);
    }

    Ok(PinConfig { pin, pull_up })
}

fn parse_orientation(value: &str) -> Result<Orientation, ParseError> {
    match parse_string(value)? {
        "landscape" | "Landscape" => Ok(Orientation::Landscape),
        "portrait" | "Portrait" => Ok(Orientation::Portrait),
        _ => Err(ParseError::InvalidValue),
    }
}

/// Parse a divider ratio like "11" or "10.5" into thousandths
fn parse_ratio(value: &str) -> Result<u32, ParseError> {
    let (whole, frac) = match value.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (value, ""),
    };
    if frac.len() > 3 || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidValue);
    }

    let whole: u32 = parse_int(whole)?;
    let mut thousandths = 0u32;
    for (i, digit) in frac.bytes().enumerate() {
        thousandths += u32::from(digit - b'0') * 10u32.pow(2 - i as u32);
    }

    let ratio = whole
        .checked_mul(1000)
        .and_then(|v| v.checked_add(thousandths))
        .ok_or(ParseError::InvalidValue)?;
    if ratio == 0 {
        return Err(ParseError::InvalidValue);
    }
    Ok(ratio)
}
