//! Hash-gated atomic writer for the generated markup.
//!
//! Write flow: normalise line endings → SHA-256 the content → compare
//! against the file already on disk → skip if identical → write to a
//! `.vitae.tmp` sibling → rename (atomic on POSIX). Skipping identical
//! content keeps the file's mtime stable, which lets the pipeline skip
//! an unnecessary recompile.

use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::error::{io_err, BuildError};

/// Outcome of an individual file write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written (content changed or did not previously exist).
    Written { path: PathBuf },
    /// File was skipped — content matches what is on disk.
    Unchanged { path: PathBuf },
    /// Dry-run mode: the file *would* have been written.
    WouldWrite { path: PathBuf },
}

impl WriteResult {
    pub fn path(&self) -> &Path {
        match self {
            WriteResult::Written { path }
            | WriteResult::Unchanged { path }
            | WriteResult::WouldWrite { path } => path,
        }
    }
}

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// Atomically write `content` to `path` unless the file already holds it.
pub fn write_if_changed(
    path: &Path,
    content: &str,
    dry_run: bool,
) -> Result<WriteResult, BuildError> {
    let normalized = content.replace("\r\n", "\n");
    let content = normalized.as_str();

    if path.exists() {
        let existing = std::fs::read(path).map_err(|e| io_err(path, e))?;
        if sha256_hex(&existing) == sha256_hex(content.as_bytes()) {
            tracing::debug!("unchanged: {}", path.display());
            return Ok(WriteResult::Unchanged {
                path: path.to_path_buf(),
            });
        }
    }

    if dry_run {
        tracing::info!("[dry-run] would write: {}", path.display());
        return Ok(WriteResult::WouldWrite {
            path: path.to_path_buf(),
        });
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
    }

    let tmp = PathBuf::from(format!("{}.vitae.tmp", path.display()));
    std::fs::write(&tmp, content).map_err(|e| io_err(&tmp, e))?;
    if let Err(e) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(io_err(path, e));
    }

    tracing::info!("wrote: {}", path.display());
    Ok(WriteResult::Written {
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn first_write_returns_written() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("cv.typ");
        let result = write_if_changed(&path, "= Jane Doe", false).unwrap();
        assert!(matches!(result, WriteResult::Written { .. }));
        assert!(path.exists());
    }

    #[test]
    fn second_write_same_content_returns_unchanged() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("cv.typ");
        write_if_changed(&path, "same content", false).unwrap();
        let result = write_if_changed(&path, "same content", false).unwrap();
        assert!(matches!(result, WriteResult::Unchanged { .. }));
    }

    #[test]
    fn unchanged_write_preserves_mtime() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("cv.typ");
        write_if_changed(&path, "stable", false).unwrap();
        let mtime_1 = fs::metadata(&path).unwrap().modified().unwrap();

        std::thread::sleep(std::time::Duration::from_millis(1100));
        write_if_changed(&path, "stable", false).unwrap();
        let mtime_2 = fs::metadata(&path).unwrap().modified().unwrap();
        assert_eq!(mtime_2, mtime_1, "mtime changed; file was rewritten");
    }

    #[test]
    fn changed_content_returns_written() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("cv.typ");
        write_if_changed(&path, "v1", false).unwrap();
        let result = write_if_changed(&path, "v2", false).unwrap();
        assert!(matches!(result, WriteResult::Written { .. }));
        assert_eq!(fs::read_to_string(&path).unwrap(), "v2");
    }

    #[test]
    fn dry_run_does_not_write_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nope.typ");
        let result = write_if_changed(&path, "content", true).unwrap();
        assert!(matches!(result, WriteResult::WouldWrite { .. }));
        assert!(!path.exists(), "dry-run must not create files");
    }

    #[test]
    fn tmp_file_removed_after_write() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("clean.typ");
        write_if_changed(&path, "data", false).unwrap();
        let tmp_path = PathBuf::from(format!("{}.vitae.tmp", path.display()));
        assert!(!tmp_path.exists(), ".vitae.tmp must be cleaned up");
    }

    #[test]
    fn creates_parent_directories() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("generated").join("cv.typ");
        write_if_changed(&path, "content", false).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn crlf_and_lf_content_share_the_same_hash() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("normalize.typ");

        let first = write_if_changed(&path, "line1\r\nline2\r\n", false).unwrap();
        assert!(matches!(first, WriteResult::Written { .. }));

        let second = write_if_changed(&path, "line1\nline2\n", false).unwrap();
        assert!(matches!(second, WriteResult::Unchanged { .. }));

        assert_eq!(fs::read_to_string(&path).unwrap(), "line1\nline2\n");
    }
}
