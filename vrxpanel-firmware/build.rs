//! Build script for vrxpanel-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates panel.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

const SECTIONS: [&str; 4] = ["display", "battery", "menu", "buttons"];
const PIN_KEYS: [&str; 5] = ["up_pin", "down_pin", "left_pin", "right_pin", "mode_pin"];

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate panel.toml configuration at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=panel.toml");

    let config_path = Path::new("panel.toml");
    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail(&[format!("cannot read panel.toml: {}", e)]),
    };

    let config: toml::Value = match toml::from_str(&content) {
        Ok(value) => value,
        Err(e) => fail(&e.to_string().lines().map(str::to_string).collect::<Vec<_>>()),
    };

    let mut errors = Vec::new();

    if let toml::Value::Table(root) = &config {
        for (name, value) in root {
            if !SECTIONS.contains(&name.as_str()) {
                errors.push(format!("unknown section [{}]", name));
            } else if !value.is_table() {
                errors.push(format!("[{}] must be a table", name));
            }
        }
    }

    validate_display(&config, &mut errors);
    validate_battery(&config, &mut errors);
    validate_menu(&config, &mut errors);
    validate_buttons(&config, &mut errors);

    if !errors.is_empty() {
        fail(&errors);
    }

    println!("cargo:warning=panel.toml validated successfully");
}

fn validate_display(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(display) = config.get("display") else {
        return;
    };

    if let Some(orientation) = display.get("orientation") {
        if !matches!(orientation.as_str(), Some("landscape" | "portrait")) {
            errors.push("[display] orientation must be 'landscape' or 'portrait'".into());
        }
    }
    check_title(display, "display", errors);
    if let Some(pin) = display.get("backlight_pin") {
        check_pin(pin, "display", "backlight_pin", errors);
    }
}

fn validate_battery(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(battery) = config.get("battery") else {
        return;
    };

    check_range(battery, "battery", "cells", 1, 12, errors);
    check_range(battery, "battery", "adc_ref_mv", 1000, 5000, errors);
    if let Some(divider) = battery.get("divider") {
        let ok = match divider {
            toml::Value::Integer(v) => *v > 0,
            toml::Value::Float(v) => *v > 0.0,
            _ => false,
        };
        if !ok {
            errors.push("[battery] divider must be a positive number".into());
        }
    }
    if let Some(pin) = battery.get("adc_pin") {
        match pin.as_str().and_then(pin_number) {
            Some(26..=29) => {}
            _ => errors.push("[battery] adc_pin must be one of gpio26-gpio29".into()),
        }
    }
}

fn validate_menu(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(menu) = config.get("menu") else {
        return;
    };

    check_title(menu, "menu", errors);
    check_range(menu, "menu", "origin_y", 0, 480, errors);
    check_range(menu, "menu", "block_width", 1, 480, errors);
    check_range(menu, "menu", "debounce_ms", 0, 2000, errors);
}

fn validate_buttons(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(buttons) = config.get("buttons") else {
        return;
    };

    let mut seen = Vec::new();
    for key in PIN_KEYS {
        if let Some(pin) = buttons.get(key) {
            check_pin(pin, "buttons", key, errors);
            if let Some(number) = pin.as_str().and_then(pin_number) {
                if seen.contains(&number) {
                    errors.push(format!("[buttons] {} reuses gpio{}", key, number));
                }
                seen.push(number);
            }
        }
    }
}

fn check_title(table: &toml::Value, section: &str, errors: &mut Vec<String>) {
    if let Some(title) = table.get("title") {
        match title.as_str() {
            Some(t) if t.chars().count() <= 24 => {}
            _ => errors.push(format!("[{}] title must be a string of at most 24 characters", section)),
        }
    }
}

fn check_range(
    table: &toml::Value,
    section: &str,
    key: &str,
    min: i64,
    max: i64,
    errors: &mut Vec<String>,
) {
    if let Some(value) = table.get(key) {
        match value.as_integer() {
            Some(v) if (min..=max).contains(&v) => {}
            _ => errors.push(format!("[{}] {} must be an integer {}-{}", section, key, min, max)),
        }
    }
}

fn check_pin(value: &toml::Value, section: &str, key: &str, errors: &mut Vec<String>) {
    match value.as_str().and_then(pin_number) {
        Some(0..=29) => {}
        _ => errors.push(format!(
            "[{}] {} must look like \"gpioNN\" or \"^gpioNN\" (0-29)",
            section, key
        )),
    }
}

/// Pin number from "gpioNN" / "^gpioNN"
fn pin_number(value: &str) -> Option<u8> {
    let value = value.strip_prefix('^').unwrap_or(value);
    value.strip_prefix("gpio")?.parse().ok()
}

fn fail(lines: &[String]) -> ! {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: Invalid panel.toml                                       ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        lines
            .iter()
            .map(|line| format!("║  • {:<62} ║", line))
            .collect::<Vec<_>>()
            .join("\n")
    );
}
