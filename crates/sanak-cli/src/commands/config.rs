//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use std::path::Path;

/// Execute the config command.
pub fn execute_config(args: ConfigArgs, config: &mut Config, path: &Path, formatter: &Formatter) -> Result<()> {
    match args.action {
        ConfigAction::Show => show_settings(config),
        ConfigAction::Path => {
            println!("{}", path.display());
            Ok(())
        }
        ConfigAction::Set { key, value } => set_setting(config, path, &key, &value, formatter),
    }
}

/// Show current settings.
fn show_settings(config: &Config) -> Result<()> {
    println!("color:  {}", config.settings.color);
    println!("format: {:?}", config.settings.format);
    println!("locale: {}", config.settings.locale);
    Ok(())
}

/// Change a setting and persist it.
fn set_setting(config: &mut Config, path: &Path, key: &str, value: &str, formatter: &Formatter) -> Result<()> {
    config.set(key, value)?;
    config.save_to(path)?;
    println!("{}", formatter.success(&format!("Set {} = {}", key, value)));
    Ok(())
}
