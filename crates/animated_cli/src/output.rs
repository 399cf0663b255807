//! Emitting generated text

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Where the generated text goes
#[derive(Debug, Clone, Copy)]
pub enum Destination<'a> {
    Stdout,
    File(&'a Path),
    /// Compare with an existing file, write nothing
    Check(&'a Path),
}

/// Terminate the blob with a single newline, like a line-oriented print
pub fn finish(mut text: String) -> String {
    text.push('\n');
    text
}

pub fn emit(text: &str, destination: Destination<'_>) -> Result<()> {
    match destination {
        Destination::Stdout => {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            lock.write_all(text.as_bytes())
                .context("Failed to write to stdout")?;
            lock.flush().context("Failed to flush stdout")?;
        }
        Destination::File(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {}", path.display());
        }
        Destination::Check(path) => {
            let current = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            if current != text {
                anyhow::bail!("{} is out of date; regenerate it", path.display());
            }
            tracing::info!("{} is up to date", path.display());
        }
    }
    Ok(())
}
