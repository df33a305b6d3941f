//! Config command - Show the resolved settings

use std::path::Path;

use onboard_core::Settings;

/// Print the settings in effect and where they came from
pub fn show_settings(settings: &Settings, explicit: Option<&Path>) -> anyhow::Result<()> {
    println!("Onboard Configuration");
    println!("=====================");
    println!();

    match explicit {
        Some(path) => println!("Config file: {}", path.display()),
        None => {
            if let Some(path) = Settings::default_config_path() {
                println!("Config file: {}", path.display());
                if path.exists() {
                    println!("  (exists)");
                } else {
                    println!("  (not found - using defaults)");
                }
            }
        }
    }
    println!();
    print!("{}", toml::to_string_pretty(settings)?);

    Ok(())
}
