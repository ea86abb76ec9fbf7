//! Owner-only filesystem helpers shared by the key manager and the vault store.
//!
//! Directories are created `0700` and files are written `0600` on Unix.
//! Writes go to a temp file in the same directory and are renamed over
//! the target, so readers never observe a half-written file.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::errors::{PassVaultError, Result};

/// Permission bits for directories we create.
#[cfg(unix)]
const DIR_MODE: u32 = 0o700;

/// Permission bits for files we write.
#[cfg(unix)]
const FILE_MODE: u32 = 0o600;

/// Create `dir` (and parents) with owner-only permissions if it is absent.
pub fn ensure_private_dir(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        return Ok(());
    }

    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIR_MODE);
    }

    builder
        .create(dir)
        .map_err(PassVaultError::io(format!("create directory {}", dir.display())))
}

/// Replace the contents of `path` with `data` atomically.
///
/// 1. Ensure the parent directory exists (owner-only).
/// 2. Write to `.<name>.tmp` next to the target with mode `0600`.
/// 3. Flush to disk, then rename over the target.
///
/// The temp file is removed if any step before the rename fails.
pub fn write_private_atomic(path: &Path, data: &[u8]) -> Result<()> {
    let parent = path.parent().unwrap_or(Path::new("."));
    ensure_private_dir(parent)?;

    let tmp_path = temp_path_for(path);
    if let Err(e) = write_new_private_file(&tmp_path, data) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e);
    }

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        PassVaultError::io(format!("replace {}", path.display()))(e)
    })
}

/// The temp file used while replacing `path`, e.g. `.vault.json.enc.tmp`.
fn temp_path_for(path: &Path) -> PathBuf {
    let parent = path.parent().unwrap_or(Path::new("."));
    parent.join(format!(
        ".{}.tmp",
        path.file_name().unwrap_or_default().to_string_lossy()
    ))
}

fn write_new_private_file(path: &Path, data: &[u8]) -> Result<()> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(FILE_MODE);
    }

    let context = || format!("write {}", path.display());
    let mut file = options.open(path).map_err(PassVaultError::io(context()))?;

    // A stale temp file keeps its old mode; tighten it explicitly.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(fs::Permissions::from_mode(FILE_MODE))
            .map_err(PassVaultError::io(context()))?;
    }

    file.write_all(data).map_err(PassVaultError::io(context()))?;
    file.sync_all().map_err(PassVaultError::io(context()))?;
    Ok(())
}
