/// File intake: bring a picked file into app-private storage.
///
/// The picker hands over a path plus an optional display name. The file is
/// copied into the workspace directory under that name and the copy is
/// what gets analysed. Any failure here is terminal for the request: there
/// is nothing to build a report from.
use crate::error::IntakeError;
use crate::model::{file_name_of, FileDescriptor};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, info, warn};

/// A file that is ready for analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedFile {
    /// Local path the analyzers read from.
    pub local_path: PathBuf,
    /// Snapshot of the local file.
    pub descriptor: FileDescriptor,
    /// `true` if `local_path` is a copy owned by the workspace.
    pub is_copy: bool,
}

/// Snapshot a file that is analysed where it is.
pub fn describe(path: &Path, display_name: Option<&str>) -> Result<ImportedFile, IntakeError> {
    let metadata = regular_file_metadata(path)?;
    let name = display_name
        .and_then(sanitize_name)
        .or_else(|| file_name_of(path))
        .unwrap_or_else(fallback_name);

    Ok(ImportedFile {
        local_path: path.to_path_buf(),
        descriptor: FileDescriptor::from_metadata(name, &metadata),
        is_copy: false,
    })
}

/// Copy `source` into `workspace` and snapshot the copy.
///
/// The target name is the display name, else the source's own name, else
/// `file_<unix millis>`. Only the final path component of a display name
/// is used, so a name can never escape the workspace. An existing file
/// with the same name is replaced.
pub fn import_file(
    source: &Path,
    display_name: Option<&str>,
    workspace: &Path,
) -> Result<ImportedFile, IntakeError> {
    import_file_until(source, display_name, workspace, || false)
}

/// [`import_file`], polling `cancelled` between copied chunks.
///
/// On cancellation the partial target is removed and
/// [`IntakeError::Cancelled`] is returned. A source that already is the
/// target is not copied and comes back with `is_copy == false`: the
/// workspace does not own it and must never delete it.
pub fn import_file_until(
    source: &Path,
    display_name: Option<&str>,
    workspace: &Path,
    cancelled: impl Fn() -> bool,
) -> Result<ImportedFile, IntakeError> {
    regular_file_metadata(source)?;
    ensure_directory(workspace)?;

    let name = display_name
        .and_then(sanitize_name)
        .or_else(|| file_name_of(source))
        .unwrap_or_else(fallback_name);
    let target = workspace.join(&name);

    let is_copy = !is_same_file(source, &target);
    if is_copy {
        copy_contents(source, &target, &cancelled)?;
        info!("Imported {} as {}", source.display(), target.display());
    } else {
        debug!("{} already lives in the workspace", source.display());
    }

    let metadata = fs::metadata(&target).map_err(|source| IntakeError::Metadata {
        path: target.clone(),
        source,
    })?;

    Ok(ImportedFile {
        descriptor: FileDescriptor::from_metadata(name, &metadata),
        local_path: target,
        is_copy,
    })
}

/// Create `path` (and parents) if it does not exist yet.
pub fn ensure_directory(path: &Path) -> Result<(), IntakeError> {
    fs::create_dir_all(path).map_err(|source| IntakeError::Workspace {
        path: path.to_path_buf(),
        source,
    })
}

/// Delete an imported copy. Returns whether a file was removed.
pub fn discard(path: &Path) -> io::Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => {
            debug!("Discarded {}", path.display());
            Ok(true)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => {
            warn!("Could not discard {}: {e}", path.display());
            Err(e)
        }
    }
}

fn regular_file_metadata(path: &Path) -> Result<fs::Metadata, IntakeError> {
    let metadata = fs::metadata(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            IntakeError::NotFound(path.to_path_buf())
        } else {
            IntakeError::Metadata {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    if !metadata.is_file() {
        return Err(IntakeError::NotAFile(path.to_path_buf()));
    }
    Ok(metadata)
}

/// Bytes copied between cancellation checks.
const COPY_CHUNK: usize = 64 * 1024;

fn copy_contents(
    source: &Path,
    target: &Path,
    cancelled: &impl Fn() -> bool,
) -> Result<(), IntakeError> {
    let copy_err = |e: io::Error| IntakeError::Copy {
        path: source.to_path_buf(),
        source: e,
    };
    let mut input = fs::File::open(source).map_err(copy_err)?;
    let mut output = fs::File::create(target).map_err(copy_err)?;

    let mut buf = vec![0u8; COPY_CHUNK];
    let outcome = loop {
        if cancelled() {
            break Err(IntakeError::Cancelled(source.to_path_buf()));
        }
        match input.read(&mut buf) {
            Ok(0) => break Ok(()),
            Ok(n) => {
                if let Err(e) = output.write_all(&buf[..n]) {
                    break Err(copy_err(e));
                }
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => break Err(copy_err(e)),
        }
    };

    if outcome.is_err() {
        drop(output);
        let _ = discard(target);
    }
    outcome
}

/// Both paths resolve to the same existing file. Copying a file onto
/// itself would truncate it.
fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Final path component of a display name, if it is a usable file name.
fn sanitize_name(name: &str) -> Option<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return None;
    }
    // Normalise Windows separators so `..\\x` is handled on every platform.
    let unified = trimmed.replace('\\', "/");
    match unified.rsplit('/').next() {
        Some(last) if !last.is_empty() && last != "." && last != ".." => Some(last.to_string()),
        _ => None,
    }
}

fn fallback_name() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    format!("file_{millis}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_bytes(path: &Path, bytes: &[u8]) {
        let mut f = fs::File::create(path).unwrap();
        f.write_all(bytes).unwrap();
    }

    #[test]
    fn sanitize_keeps_last_component() {
        assert_eq!(sanitize_name("photo.jpg").as_deref(), Some("photo.jpg"));
        assert_eq!(sanitize_name("../../etc/passwd").as_deref(), Some("passwd"));
        assert_eq!(sanitize_name("..\\evil.txt").as_deref(), Some("evil.txt"));
        assert_eq!(sanitize_name("  "), None);
        assert_eq!(sanitize_name("dir/"), None);
        assert_eq!(sanitize_name(".."), None);
    }

    #[test]
    fn fallback_name_is_timestamped() {
        let name = fallback_name();
        assert!(name.starts_with("file_"));
        assert!(name["file_".len()..].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn import_copies_under_display_name() {
        let src_dir = tempfile::tempdir().unwrap();
        let workspace = tempfile::tempdir().unwrap();
        let source = src_dir.path().join("tmp-1234");
        write_bytes(&source, b"hello");

        let imported = import_file(&source, Some("greeting.txt"), &workspace.path().join("FileAgent"))
            .unwrap();
        assert!(imported.is_copy);
        assert_eq!(imported.descriptor.name, "greeting.txt");
        assert_eq!(imported.descriptor.size_bytes, 5);
        assert_eq!(fs::read(&imported.local_path).unwrap(), b"hello");
        assert!(imported.local_path.starts_with(workspace.path()));
        // Source is left untouched.
        assert!(source.exists());
    }

    #[test]
    fn import_without_display_name_uses_source_name() {
        let src_dir = tempfile::tempdir().unwrap();
        let workspace = tempfile::tempdir().unwrap();
        let source = src_dir.path().join("data.csv");
        write_bytes(&source, b"a,b\n");

        let imported = import_file(&source, None, workspace.path()).unwrap();
        assert_eq!(imported.descriptor.name, "data.csv");
    }

    #[test]
    fn import_missing_source_is_not_found() {
        let workspace = tempfile::tempdir().unwrap();
        let err = import_file(Path::new("/definitely/not/here.txt"), None, workspace.path())
            .unwrap_err();
        assert!(matches!(err, IntakeError::NotFound(_)));
    }

    #[test]
    fn import_directory_is_rejected() {
        let src_dir = tempfile::tempdir().unwrap();
        let workspace = tempfile::tempdir().unwrap();
        let err = import_file(src_dir.path(), None, workspace.path()).unwrap_err();
        assert!(matches!(err, IntakeError::NotAFile(_)));
    }

    /// Re-importing a file that already lives in the workspace must not
    /// truncate it.
    #[test]
    fn import_from_workspace_onto_itself_keeps_contents() {
        let workspace = tempfile::tempdir().unwrap();
        let path = workspace.path().join("keep.txt");
        write_bytes(&path, b"keep me");

        let imported = import_file(&path, None, workspace.path()).unwrap();
        assert_eq!(fs::read(&imported.local_path).unwrap(), b"keep me");
        // The user's own file: clearing the selection must not delete it.
        assert!(!imported.is_copy);
    }

    #[test]
    fn cancelled_import_leaves_no_partial_copy() {
        let src_dir = tempfile::tempdir().unwrap();
        let workspace = tempfile::tempdir().unwrap();
        let source = src_dir.path().join("big.bin");
        write_bytes(&source, &vec![9u8; COPY_CHUNK * 4]);

        // Let two chunks through, then cancel.
        let polls = std::cell::Cell::new(0);
        let err = import_file_until(&source, None, workspace.path(), || {
            polls.set(polls.get() + 1);
            polls.get() > 2
        })
        .unwrap_err();

        assert!(matches!(err, IntakeError::Cancelled(_)));
        assert_eq!(polls.get(), 3);
        assert!(!workspace.path().join("big.bin").exists());
        assert!(source.exists());
    }

    #[test]
    fn chunked_copy_is_complete() {
        let src_dir = tempfile::tempdir().unwrap();
        let workspace = tempfile::tempdir().unwrap();
        let source = src_dir.path().join("odd.bin");
        let bytes: Vec<u8> = (0..COPY_CHUNK * 2 + 17).map(|i| (i % 251) as u8).collect();
        write_bytes(&source, &bytes);

        let imported = import_file_until(&source, None, workspace.path(), || false).unwrap();
        assert!(imported.is_copy);
        assert_eq!(fs::read(&imported.local_path).unwrap(), bytes);
    }

    #[test]
    fn describe_in_place_is_not_a_copy() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("song.mp3");
        write_bytes(&path, &[1, 2, 3]);

        let described = describe(&path, None).unwrap();
        assert!(!described.is_copy);
        assert_eq!(described.local_path, path);
        assert_eq!(described.descriptor.size_bytes, 3);
        assert!(described.descriptor.last_modified.is_some());
    }

    #[test]
    fn discard_reports_whether_a_file_was_removed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("x.bin");
        write_bytes(&path, b"x");
        assert!(discard(&path).unwrap());
        assert!(!discard(&path).unwrap());
    }
}
