//! Whole-file replacement through a temporary file and rename.

use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Replace `path` with `content` so that readers see either the old file or
/// the new one, never a partial write.
///
/// The temp file is created next to the target (rename is only atomic within
/// one filesystem) and is removed automatically if any step fails. Missing
/// parent directories are created first.
pub async fn atomic_write(path: &Path, content: String) -> io::Result<()> {
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
        .to_path_buf();
    let target_path = path.to_path_buf();

    tokio::fs::create_dir_all(&parent).await?;

    tokio::task::spawn_blocking(move || -> io::Result<()> {
        let mut temp_file = NamedTempFile::new_in(&parent)?;
        temp_file.write_all(content.as_bytes())?;
        temp_file.flush()?;
        temp_file.as_file().sync_all()?;
        temp_file.persist(&target_path).map_err(|e| e.error)?;
        Ok(())
    })
    .await
    .map_err(io::Error::other)?
}
