use std::fs;

use crate::cli::InitArgs;
use crate::output::print_error_full;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result, StngGuardError};

#[must_use]
pub fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            print_error_full(e.error_type(), &e.to_string(), None, e.suggestion());
            EXIT_CONFIG_ERROR
        }
    }
}

/// Writes a default configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(StngGuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# stng-guard configuration file
# Command-line flags override the values below.

[scanner]
# Directory to scan, relative to the working directory (default: "src")
root = "src"

# File extensions to check, without the leading dot
extensions = ["tsx", "jsx"]

# Glob patterns for files to skip, relative to root
exclude = [
    "**/node_modules/**",
    "**/*.stories.tsx",
]

# Respect .gitignore files while scanning (default: false)
gitignore = false

[check]
# Exit with code 1 when a file cannot be read (default: false)
fail_on_unreadable = false
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
