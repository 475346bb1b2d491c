use std::fs;
use std::path::Path;

use crate::config::{Config, ConfigLoader, FileConfigLoader};

/// Load configuration from `config_path`, the working directory, or defaults.
///
/// # Errors
/// Returns an error if an explicit config file is missing, or if any config
/// file cannot be read, parsed or validated.
pub(crate) fn load_config(config_path: Option<&Path>, no_config: bool) -> crate::Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// Write output to a file or stdout.
///
/// The `quiet` flag only affects stdout; file writes always proceed.
pub(crate) fn write_output(
    output_path: Option<&Path>,
    content: &str,
    quiet: bool,
) -> crate::Result<()> {
    if let Some(path) = output_path {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
