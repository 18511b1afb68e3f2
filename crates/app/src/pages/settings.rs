//! Settings page.
//!
//! Reads and mutates the user settings store. Scale values are validated as
//! positive numbers before being stored, matching the original settings
//! page's numeric checks.

use anyhow::Result;
use clap::Subcommand;

use infotools_core::AppConfig;
use infotools_core::settings::{self, SettingsStore};

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Print all stored settings
    List,
    /// Print one setting
    Get { key: String },
    /// Store a setting and save the file
    Set { key: String, value: String },
}

pub fn run(config: &AppConfig, action: SettingsAction) -> Result<()> {
    let mut store = SettingsStore::load_or_create(&config.settings_path)?;

    match action {
        SettingsAction::List => {
            let mut entries: Vec<(&str, &str)> = store.iter().collect();
            entries.sort();
            for (key, value) in entries {
                println!("{key} = {value}");
            }
        }
        SettingsAction::Get { key } => match store.get(&key) {
            Some(value) => println!("{value}"),
            None => println!("(not set)"),
        },
        SettingsAction::Set { key, value } => {
            let is_scale = key == settings::ALERT_BAR_SCALE_X || key == settings::ALERT_BAR_SCALE_Y;
            if is_scale && !is_positive_number(&value) {
                println!("{key} must be a valid positive number.");
                return Ok(());
            }
            store.set(&key, &value);
            store.save()?;
            println!("Settings applied.");
        }
    }

    Ok(())
}

/// Scale values must parse as positive numbers.
fn is_positive_number(value: &str) -> bool {
    value.parse::<f64>().map(|v| v > 0.0).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_positive_number() {
        assert!(is_positive_number("1.5"));
        assert!(is_positive_number("2"));
        assert!(!is_positive_number("0"));
        assert!(!is_positive_number("-1"));
        assert!(!is_positive_number("abc"));
        assert!(!is_positive_number(""));
    }
}
