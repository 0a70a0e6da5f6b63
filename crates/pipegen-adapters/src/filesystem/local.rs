//! Local filesystem adapter using std::fs.
//!
//! Writes go through a temporary file in the target's directory and are
//! then persisted over the final name, so a reader never sees a partial file.
//! Without `overwrite` the persist is exclusive: if another process created
//! the target after the service's existence check, the write fails with
//! `TargetExists` instead of clobbering it.
//!
//! A new file gets the mode `File::create` would give it (`0o666` minus the
//! umask). An overwritten file keeps the permissions it had.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::{Builder, NamedTempFile};
use tracing::debug;

use pipegen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{PipegenError, PipegenResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_dir_all(&self, path: &Path) -> PipegenResult<()> {
        fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str, overwrite: bool) -> PipegenResult<()> {
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };

        let mut tmp = temp_file_in(parent).map_err(|e| map_io_error(path, e, "create temp file"))?;
        if overwrite {
            match fs::metadata(path) {
                Ok(existing) => tmp
                    .as_file()
                    .set_permissions(existing.permissions())
                    .map_err(|e| map_io_error(path, e, "copy permissions"))?,
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => return Err(map_io_error(path, e, "stat")),
            }
        }
        tmp.write_all(content.as_bytes())
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|e| map_io_error(path, e, "write file"))?;

        let persisted = if overwrite {
            tmp.persist(path)
        } else {
            tmp.persist_noclobber(path)
        };

        // On failure the temp file is dropped with the error and removed.
        persisted.map_err(|e| {
            if e.error.kind() == io::ErrorKind::AlreadyExists {
                ApplicationError::TargetExists {
                    path: path.to_path_buf(),
                }
                .into()
            } else {
                map_io_error(path, e.error, "write file")
            }
        })?;

        debug!(path = %path.display(), bytes = content.len(), overwrite, "File persisted");
        Ok(())
    }

    fn list_files(&self, dir: &Path) -> PipegenResult<Vec<PathBuf>> {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(map_io_error(dir, e, "read directory")),
        };

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| map_io_error(dir, e, "read directory entry"))?;
            let file_type = entry
                .file_type()
                .map_err(|e| map_io_error(&entry.path(), e, "stat"))?;
            if file_type.is_file() {
                files.push(entry.path());
            }
        }

        files.sort();
        Ok(files)
    }
}

/// `tempfile` defaults to `0o600`; ask for `0o666` so the umask decides.
#[cfg(unix)]
fn temp_file_in(dir: &Path) -> io::Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;

    Builder::new()
        .permissions(fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn temp_file_in(dir: &Path) -> io::Result<NamedTempFile> {
    Builder::new().tempfile_in(dir)
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> PipegenError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {operation}: {e}"),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn write_creates_file_with_content() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("out.py");

        LocalFilesystem::new()
            .write_file(&target, "class A:\n    pass\n", false)
            .unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "class A:\n    pass\n");
    }

    #[test]
    fn exclusive_write_refuses_existing_file_and_keeps_it() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("out.py");
        fs::write(&target, "original").unwrap();

        let err = LocalFilesystem::new()
            .write_file(&target, "replacement", false)
            .unwrap_err();

        assert_eq!(
            err,
            ApplicationError::TargetExists {
                path: target.clone()
            }
            .into()
        );
        assert_eq!(fs::read_to_string(&target).unwrap(), "original");
    }

    #[test]
    fn failed_exclusive_write_leaves_no_temp_files() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("out.py");
        fs::write(&target, "original").unwrap();

        let _ = LocalFilesystem::new().write_file(&target, "replacement", false);

        let names: Vec<_> = fs::read_dir(temp.path()).unwrap().collect();
        assert_eq!(names.len(), 1);
    }

    #[test]
    fn overwrite_replaces_existing_file() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("out.py");
        fs::write(&target, "original").unwrap();

        LocalFilesystem::new()
            .write_file(&target, "replacement", true)
            .unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "replacement");
    }

    #[cfg(unix)]
    fn mode_of(path: &Path) -> u32 {
        use std::os::unix::fs::PermissionsExt;
        fs::metadata(path).unwrap().permissions().mode() & 0o777
    }

    #[cfg(unix)]
    #[test]
    fn new_file_follows_the_umask_like_file_create() {
        let temp = TempDir::new().unwrap();
        let reference = temp.path().join("reference");
        fs::File::create(&reference).unwrap();
        let target = temp.path().join("user_events.py");

        LocalFilesystem::new().write_file(&target, "x", false).unwrap();

        assert_eq!(mode_of(&target), mode_of(&reference));
    }

    #[cfg(unix)]
    #[test]
    fn forced_overwrite_keeps_existing_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let target = temp.path().join("user_events.py");
        fs::write(&target, "original").unwrap();
        fs::set_permissions(&target, fs::Permissions::from_mode(0o644)).unwrap();

        LocalFilesystem::new()
            .write_file(&target, "replacement", true)
            .unwrap();

        assert_eq!(mode_of(&target), 0o644);
        assert_eq!(fs::read_to_string(&target).unwrap(), "replacement");
    }

    #[test]
    fn write_into_missing_directory_is_a_filesystem_error() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("missing").join("out.py");

        let err = LocalFilesystem::new()
            .write_file(&target, "x", false)
            .unwrap_err();
        assert!(matches!(
            err,
            PipegenError::Application(ApplicationError::FilesystemError { .. })
        ));
    }

    #[test]
    fn list_files_skips_directories_and_sorts() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("b.py"), "").unwrap();
        fs::write(temp.path().join("a.py"), "").unwrap();
        fs::create_dir(temp.path().join("sub")).unwrap();

        let files = LocalFilesystem::new().list_files(temp.path()).unwrap();
        assert_eq!(
            files,
            vec![temp.path().join("a.py"), temp.path().join("b.py")]
        );
    }

    #[test]
    fn list_files_of_missing_dir_is_empty() {
        let temp = TempDir::new().unwrap();
        let files = LocalFilesystem::new()
            .list_files(&temp.path().join("nope"))
            .unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn is_dir_distinguishes_files() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("f");
        fs::write(&file, "").unwrap();

        let fs_adapter = LocalFilesystem::new();
        assert!(fs_adapter.is_dir(temp.path()));
        assert!(!fs_adapter.is_dir(&file));
        assert!(fs_adapter.exists(&file));
    }
}
