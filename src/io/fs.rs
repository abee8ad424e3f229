use std::{fs::File, io::Write, path::{Path, PathBuf}};

use anyhow::{bail, Context, Result};
use tempfile::NamedTempFile;

/// Write-then-rename wrapper for atomic outputs.
struct PendingWrite {
    target: PathBuf,
    tmp: NamedTempFile,
}

impl PendingWrite {
    /// Open a temp file next to `target`. Refuses to clobber an existing
    /// file unless `force` is set.
    fn open(target: &Path, force: bool) -> Result<Self> {
        let parent = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create dir {}", parent.display()))?;
        if !force && target.exists() {
            bail!("Refusing to overwrite existing file: {} (use --force)", target.display());
        }
        let tmp = NamedTempFile::new_in(parent)
            .context("create temp file")?;

        Ok(Self { target: target.to_path_buf(), tmp })
    }

    /// Flush, fsync and move the temp file into place.
    fn finalize(self) -> Result<()> {
        let Self { target, mut tmp } = self;
        tmp.flush()?;
        tmp.as_file().sync_all().ok(); // best-effort fsync file
        tmp.persist(&target)
            .with_context(|| format!("rename to {}", target.display()))?;
        if let Some(dir) = target.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            let _ = File::open(dir).and_then(|f| f.sync_all());
        }
        Ok(())
    }
}

/// Atomically write `bytes` to `path`.
pub(crate) fn write_atomic(path: &Path, bytes: &[u8], force: bool) -> Result<()> {
    let mut pending = PendingWrite::open(path, force)?;
    pending.tmp.write_all(bytes)
        .with_context(|| format!("write {}", path.display()))?;
    pending.finalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_and_refuses_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("map.svg");

        write_atomic(&path, b"one", false).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"one");

        let err = write_atomic(&path, b"two", false).unwrap_err();
        assert!(err.to_string().contains("Refusing to overwrite"));

        write_atomic(&path, b"two", true).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"two");
    }
}
