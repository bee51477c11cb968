use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

pub mod commands;

/// Install the stderr tracing subscriber. `RUST_LOG` overrides the default
/// `warn` level.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

/// Canonicalize the directory if possible, falling back to the given string
/// relative to the current working directory.
pub fn canonicalize_or_current(dir: &str) -> Result<PathBuf> {
    let path = Path::new(dir);
    if path == Path::new(".") {
        Ok(env::current_dir().context("Failed to get current directory")?)
    } else {
        // The directory may not exist yet; it is created when the mod is written.
        match path.canonicalize() {
            Ok(p) => Ok(p),
            Err(_) => {
                let cwd = env::current_dir().context("Failed to get current directory")?;
                Ok(cwd.join(path))
            }
        }
    }
}

/// Resolve where a mod file goes. Absolute file paths win over `output_dir`.
pub fn resolve_output_path(output_dir: &str, file_name: &str) -> Result<PathBuf> {
    let file = Path::new(file_name);
    if file.is_absolute() {
        return Ok(file.to_path_buf());
    }
    Ok(canonicalize_or_current(output_dir)?.join(file))
}

/// Path of the id reference written next to a config template.
pub fn reference_path_for(config_path: &Path) -> PathBuf {
    let stem = config_path.file_stem().and_then(|s| s.to_str()).unwrap_or("balance_config");
    config_path.with_file_name(format!("{stem}_reference.txt"))
}
