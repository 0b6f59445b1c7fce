//! Entry point for the **outlay** command.
//!
//! Reads the display inventory as JSON (from the file named by the first
//! argument, or stdin), arranges it according to the user's settings and
//! prints the resulting `xrandr` command.  Verbose information goes
//! through the logger; run with `RUST_LOG=info` to see it.
//!
//! With `"info": true` in the settings only the detected displays are
//! reported and nothing is printed to stdout.

use log::{error, info};
use outlay::arrange::{arrange, report};
use outlay::config::Settings;
use outlay::inventory::Inventory;
use outlay::monitors::{LidMonitors, ACPI_LID_DIR};
use outlay::xrandr::render_cmd;
use std::io::Read;
use std::path::Path;

fn read_inventory() -> std::io::Result<String> {
    match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut json = String::new();
            std::io::stdin().read_to_string(&mut json)?;
            Ok(json)
        }
    }
}

fn main() {
    env_logger::init();

    let path = Settings::default_path();
    let settings = Settings::load(&path).unwrap_or_else(|e| {
        info!("{}; using default settings", e);
        Settings::default()
    });

    let displays = match read_inventory()
        .map_err(|e| format!("failed to read inventory: {}", e))
        .and_then(|json| {
            Inventory::from_json(&json)
                .and_then(Inventory::into_displays)
                .map_err(|e| e.to_string())
        }) {
        Ok(displays) => displays,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };
    info!("found {} display(s)", displays.len());

    let monitors =
        LidMonitors::from_lid_dir(settings.laptop_prefix.clone(), Path::new(ACPI_LID_DIR));
    info!("laptop lid closed: {}", monitors.lid_closed());

    if settings.info {
        for line in report(&displays) {
            info!("{}", line);
        }
        return;
    }

    let arrangement = match arrange(displays, &settings, &monitors) {
        Ok(a) => a,
        Err(e) => {
            error!("layout failed: {}", e);
            std::process::exit(1);
        }
    };

    for line in arrangement.report() {
        info!("{}", line);
    }

    println!(
        "{}",
        render_cmd(&arrangement.displays, &arrangement.selection, settings.dpi)
    );
}
