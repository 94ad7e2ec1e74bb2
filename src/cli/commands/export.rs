use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::cli::Cli;
use crate::export::generate_script;

pub fn execute_export(cli: Cli) -> Result<()> {
    let output_file = cli.output_file.clone();
    let params = cli.into_params()?;

    let script = generate_script(&params);
    debug!(bytes = script.len(), "writing {}", output_file);

    write_script(Path::new(&output_file), &script)?;
    eprintln!("Content written to {}", output_file);

    Ok(())
}

/// Write `content` plus a trailing newline to `path`, replacing any
/// existing file. The write goes through a tempfile in the destination
/// directory, so a failure never leaves a partial script behind.
fn write_script(path: &Path, content: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
    tmp.write_all(content.as_bytes())?;
    tmp.write_all(b"\n")?;
    tmp.persist(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_script_appends_trailing_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.sh");
        write_script(&path, "EOF\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "EOF\n\n");
    }

    #[test]
    fn test_write_script_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.sh");
        std::fs::write(&path, "stale content").unwrap();
        write_script(&path, "fresh").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "fresh\n");
    }

    #[test]
    fn test_write_script_missing_directory_fails_cleanly() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("export.sh");
        assert!(write_script(&path, "content").is_err());
        assert!(!path.exists());
    }
}
