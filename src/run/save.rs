//! Save step: write the finished document to disk.

use std::fs::{self, Permissions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::Builder;

use crate::core::buffer::ContentBuffer;
use crate::error::SessionError;

/// Mode requested for a newly created save file, before the umask applies
#[cfg(unix)]
const NEW_FILE_MODE: u32 = 0o666;

/// Resolve a save destination, refusing device files and other special nodes.
///
/// The destination itself may not exist yet; its parent directory must. A
/// symlink resolves to the file it points at, so the save writes through it.
pub fn validate_target_path(path: &Path) -> Result<PathBuf, SessionError> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let canonical_parent = parent
        .canonicalize()
        .map_err(|source| SessionError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;

    let filename = path
        .file_name()
        .ok_or_else(|| SessionError::InvalidTarget {
            path: path.to_path_buf(),
            reason: "missing filename",
        })?;
    let target = follow_symlink(canonical_parent.join(filename));

    // Block special file types that could hang the save
    #[cfg(unix)]
    {
        use std::os::unix::fs::FileTypeExt;
        if let Ok(metadata) = std::fs::metadata(&target) {
            let ft = metadata.file_type();
            let reason = if ft.is_dir() {
                Some("destination is a directory")
            } else if ft.is_char_device() {
                Some("destination is a character device")
            } else if ft.is_block_device() {
                Some("destination is a block device")
            } else if ft.is_fifo() {
                Some("destination is a FIFO")
            } else if ft.is_socket() {
                Some("destination is a socket")
            } else {
                None
            };
            if let Some(reason) = reason {
                return Err(SessionError::InvalidTarget {
                    path: path.to_path_buf(),
                    reason,
                });
            }
        }
    }

    #[cfg(not(unix))]
    {
        if target.is_dir() {
            return Err(SessionError::InvalidTarget {
                path: path.to_path_buf(),
                reason: "destination is a directory",
            });
        }
    }

    Ok(target)
}

/// Path a symlink points at, or `target` itself when it is not a link.
///
/// A dangling link resolves to its destination so the save creates that file.
fn follow_symlink(target: PathBuf) -> PathBuf {
    let is_link = fs::symlink_metadata(&target)
        .map(|m| m.file_type().is_symlink())
        .unwrap_or(false);
    if !is_link {
        return target;
    }

    if let Ok(resolved) = fs::canonicalize(&target) {
        return resolved;
    }
    match fs::read_link(&target) {
        Ok(dest) => match target.parent() {
            Some(parent) => parent.join(dest),
            None => dest,
        },
        Err(_) => target,
    }
}

/// Write the buffer as space-joined words plus a trailing newline.
///
/// Content goes to a temporary file beside the destination, is synced, and is
/// then renamed over the destination, so a failed save never leaves a
/// half-written file behind. The temporary file is removed on every error
/// path when it is dropped. An existing destination keeps its permissions; a
/// new one gets the usual umask-derived mode.
pub fn save_buffer(path: &Path, buffer: &ContentBuffer) -> Result<PathBuf, SessionError> {
    let target = validate_target_path(path)?;
    let dir = target.parent().unwrap_or(Path::new("."));
    let existing: Option<Permissions> = fs::metadata(&target).ok().map(|m| m.permissions());

    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(Permissions::from_mode(NEW_FILE_MODE));
    }
    let temp_file = builder
        .tempfile_in(dir)
        .map_err(|source| SessionError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;

    let write_err = |source: std::io::Error| SessionError::Write {
        path: path.to_path_buf(),
        source,
    };

    {
        let mut writer = BufWriter::new(temp_file.as_file());
        writeln!(writer, "{}", buffer).map_err(write_err)?;
        writer.flush().map_err(write_err)?;
    }
    if let Some(permissions) = existing {
        temp_file
            .as_file()
            .set_permissions(permissions)
            .map_err(write_err)?;
    }
    temp_file.as_file().sync_all().map_err(write_err)?;

    temp_file
        .persist(&target)
        .map_err(|e| SessionError::FileOpen {
            path: path.to_path_buf(),
            source: e.error,
        })?;

    tracing::info!(path = %target.display(), words = buffer.len(), "saved");
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::buffer::Word;
    use std::fs;

    fn buffer_of(words: &[&str]) -> ContentBuffer {
        let mut buffer = ContentBuffer::new();
        for w in words {
            buffer.append(Word::new(*w).unwrap());
        }
        buffer
    }

    #[test]
    fn test_save_writes_space_joined_words() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let saved = save_buffer(&path, &buffer_of(&["alpha", "beta", "gamma"])).unwrap();
        assert_eq!(fs::read_to_string(&saved).unwrap(), "alpha beta gamma\n");
    }

    #[test]
    fn test_save_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        fs::write(&path, "old contents that are longer\n").unwrap();
        save_buffer(&path, &buffer_of(&["new"])).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");
    }

    #[test]
    fn test_missing_parent_is_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("out.txt");
        let err = save_buffer(&path, &buffer_of(&["x"])).unwrap_err();
        assert!(matches!(err, SessionError::FileOpen { .. }));
        assert_eq!(err.exit_code(), crate::error::EXIT_SAVE_FAILED);
    }

    #[test]
    fn test_directory_target_is_refused() {
        let dir = tempfile::tempdir().unwrap();
        let err = save_buffer(dir.path(), &buffer_of(&["x"])).unwrap_err();
        assert!(matches!(err, SessionError::InvalidTarget { .. }));
    }

    #[test]
    fn test_no_temp_files_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        save_buffer(&dir.path().join("a.txt"), &buffer_of(&["x"])).unwrap();
        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[cfg(unix)]
    fn mode_of(path: &Path) -> u32 {
        use std::os::unix::fs::PermissionsExt;
        fs::metadata(path).unwrap().permissions().mode() & 0o777
    }

    #[cfg(unix)]
    #[test]
    fn test_new_file_gets_umask_mode() {
        let dir = tempfile::tempdir().unwrap();
        // std creates files with 0o666 minus the umask
        let reference = dir.path().join("reference.txt");
        fs::write(&reference, "").unwrap();

        let path = dir.path().join("fresh.txt");
        save_buffer(&path, &buffer_of(&["x"])).unwrap();
        assert_eq!(mode_of(&path), mode_of(&reference));
    }

    #[cfg(unix)]
    #[test]
    fn test_overwrite_keeps_existing_mode() {
        use std::os::unix::fs::PermissionsExt;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kept.txt");
        fs::write(&path, "old\n").unwrap();
        fs::set_permissions(&path, Permissions::from_mode(0o640)).unwrap();

        save_buffer(&path, &buffer_of(&["new"])).unwrap();
        assert_eq!(mode_of(&path), 0o640);
        assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_save_writes_through_symlink() {
        let dir = tempfile::tempdir().unwrap();
        let real = dir.path().join("real.txt");
        let link = dir.path().join("link.txt");
        fs::write(&real, "old\n").unwrap();
        std::os::unix::fs::symlink(&real, &link).unwrap();

        let saved = save_buffer(&link, &buffer_of(&["r"])).unwrap();
        assert_eq!(saved, real.canonicalize().unwrap());
        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(fs::read_to_string(&real).unwrap(), "r\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_creates_its_target() {
        let dir = tempfile::tempdir().unwrap();
        let link = dir.path().join("link.txt");
        std::os::unix::fs::symlink("later.txt", &link).unwrap();

        save_buffer(&link, &buffer_of(&["made"])).unwrap();
        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(
            fs::read_to_string(dir.path().join("later.txt")).unwrap(),
            "made\n"
        );
    }
}
