//! Rendering and writing `.c5m` mod files.
//!
//! Every ritual becomes one block:
//!
//! ```text
//! selectritual "<name>"
//! cost <code> <new>  # <new> <Resource> (was <base>)
//! ```
//!
//! followed by a blank line. Rendering is pure; only [`write_mod_file`] does IO.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::scale::{Percentage, ScaledCost};

/// Error type for writing mod files.
#[derive(Debug, Error)]
pub enum EmitError {
    #[error("Failed to write mod file at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type EmitResult<T> = Result<T, EmitError>;

/// Default output file name for a uniform percentage.
pub fn default_output_name(pct: Percentage) -> String {
    format!("ritual_costs_{pct}pct.c5m")
}

/// Render the `selectritual`/`cost` block for one scaled ritual.
pub fn render_block(scaled: &ScaledCost) -> String {
    let mut out = String::new();
    push_block(&mut out, scaled);
    out
}

pub(crate) fn push_block(out: &mut String, scaled: &ScaledCost) {
    out.push_str(&format!("selectritual \"{}\"\n", scaled.name));
    out.push_str(&format!(
        "cost {} {}  # {} {} (was {})\n\n",
        scaled.resource_type.code(),
        scaled.new_cost,
        scaled.new_cost,
        scaled.resource_type.display_name(),
        scaled.base_cost
    ));
}

/// Render a full mod that applies one percentage to every ritual.
pub fn render_uniform_mod(scaled: &[ScaledCost], pct: Percentage) -> String {
    let mut out = String::new();
    out.push_str("# Ritual Cost Modifier\n");
    out.push_str("#\n");
    out.push_str(&format!(
        "# This mod adjusts all ritual costs to {pct}% of their original values.\n"
    ));
    out.push_str("#\n");
    out.push_str(&format!("# Total rituals modified: {}\n", scaled.len()));
    out.push_str("#\n\n");

    for item in scaled {
        push_block(&mut out, item);
    }
    out
}

/// Write `contents` to `path`, creating parent directories and replacing any
/// existing file.
pub fn write_mod_file(path: &Path, contents: &str) -> EmitResult<()> {
    let io_err = |source| EmitError::Io { path: path.to_path_buf(), source };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    fs::write(path, contents).map_err(io_err)?;
    debug!(path = %path.display(), bytes = contents.len(), "wrote mod file");
    Ok(())
}
