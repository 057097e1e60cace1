//! Subcommand handlers for config actions.

use std::path::Path;

use super::args::ConfigAction;
use crate::config::Settings;

/// Commented default written by `config init`.
pub const DEFAULT_CONFIG: &str = r#"# craftlogic configuration

[pattern]
# Wording: beginner (spelled out) or advanced (abbreviations)
style = "beginner"

[units]
# Unit for custom dimensions when you keep the default: in, ft, cm, m
default = "in"

[materials]
# Suggested in materials lists
yarn = "Worsted weight (#4)"
hook = "5.0 mm"
"#;

/// Handle config subcommand actions.
///
/// Returns a message for stderr on failure.
pub fn handle_config_action(
    action: ConfigAction,
    settings: &Settings,
    config_path: &Path,
) -> Result<(), String> {
    match action {
        ConfigAction::Show => {
            println!("{}", describe_settings(settings, config_path));
            Ok(())
        }
        ConfigAction::Init => {
            init_config(config_path)?;
            println!("Created config file: {}", config_path.display());
            Ok(())
        }
    }
}

/// Human-readable summary of the resolved settings.
pub fn describe_settings(settings: &Settings, config_path: &Path) -> String {
    let status = if config_path.exists() {
        "exists"
    } else {
        "not found"
    };
    format!(
        "Current configuration:\n  \
         Style: {}\n  \
         Default unit: {}\n  \
         Yarn: {}\n  \
         Hook: {}\n\n\
         Config file: {} ({})",
        settings.render.style,
        settings.default_unit,
        settings.render.materials.yarn,
        settings.render.materials.hook,
        config_path.display(),
        status
    )
}

/// Write [`DEFAULT_CONFIG`] to `config_path`, refusing to overwrite.
pub fn init_config(config_path: &Path) -> Result<(), String> {
    if config_path.exists() {
        return Err(format!(
            "Config file already exists: {}\nUse 'craftlogic config show' to view current settings.",
            config_path.display()
        ));
    }

    // Create parent directories if needed
    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Error creating config directory: {}", e))?;
    }

    std::fs::write(config_path, DEFAULT_CONFIG)
        .map_err(|e| format!("Error writing config file: {}", e))?;
    log::info!("wrote default config to {}", config_path.display());
    Ok(())
}
