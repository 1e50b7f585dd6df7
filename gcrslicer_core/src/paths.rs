//! Path helpers for the resolver
//!
//! Inputs are resolved against a root directory, inspected to decide how the
//! resolver should handle them, and yielded relative to that same root.

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::error::{IoError, ValidationError};

/// What a path refers to on the filesystem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Nothing there (or the entry cannot be inspected)
    Missing,
    /// Regular file, possibly through a symbolic link
    File,
    /// Directory, possibly through a symbolic link
    Directory,
    /// Device, FIFO, socket or a symbolic link whose target is gone
    Other,
}

impl EntryKind {
    /// Inspect `path`, following symbolic links
    pub fn of(path: &Path) -> Self {
        // The link itself decides existence, its target decides the kind
        if let Err(e) = fs::symlink_metadata(path) {
            if !is_not_found(&e) {
                log::warn!("Cannot inspect {}: {e}", path.display());
            }
            return Self::Missing;
        }

        match fs::metadata(path) {
            Ok(metadata) if metadata.is_file() => Self::File,
            Ok(metadata) if metadata.is_dir() => Self::Directory,
            Ok(_) => Self::Other,
            Err(e) => {
                log::debug!("Dangling entry {}: {e}", path.display());
                Self::Other
            }
        }
    }
}

fn is_not_found(error: &io::Error) -> bool {
    matches!(
        error.kind(),
        io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
    )
}

/// Returns the absolute root directory to resolve against
///
/// A relative root is joined onto the process current directory, which is
/// also the fallback when no root is given.
pub fn resolve_root(root_dir: Option<&Path>) -> Result<PathBuf, IoError> {
    match root_dir {
        Some(root) if root.is_absolute() => Ok(normalize(root)),
        Some(root) => {
            let cwd = std::env::current_dir().map_err(IoError::current_dir)?;
            Ok(normalize(&cwd.join(root)))
        }
        None => std::env::current_dir().map_err(IoError::current_dir),
    }
}

/// Fold `.` and `..` components without touching the filesystem
///
/// `..` directly under the filesystem root is dropped; leading `..` of a
/// relative path are kept.
pub fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => normalized.push(Component::ParentDir),
            },
            other => normalized.push(other),
        }
    }

    normalized
}

// Both sides are normalized first so `root/../elsewhere` cannot pass as
// being under `root`
fn strip_root(root: &Path, path: &Path) -> Option<PathBuf> {
    let relative = normalize(path)
        .strip_prefix(normalize(root))
        .ok()?
        .to_path_buf();

    if relative
        .components()
        .any(|c| matches!(c, Component::ParentDir))
    {
        return None;
    }
    Some(relative)
}

/// Express `path` relative to `root`
pub fn relative_path(root: &Path, path: &Path) -> Result<PathBuf, ValidationError> {
    strip_root(root, path).ok_or_else(|| ValidationError::outside_root(path, root))
}

/// Express `dir/file_name` relative to `root`
///
/// `dir` must live under `root`; anything else means the resolver was
/// configured with a root that does not contain its inputs.
pub fn relative_to_root(
    root: &Path,
    dir: &Path,
    file_name: &OsStr,
) -> Result<PathBuf, ValidationError> {
    match strip_root(root, dir) {
        Some(relative_dir) => Ok(relative_dir.join(file_name)),
        None => Err(ValidationError::outside_root(&dir.join(file_name), root)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;
    use tempfile::TempDir;

    #[test]
    fn test_relative_to_root_strips_the_root() {
        let path = relative_to_root(
            Path::new("/music"),
            Path::new("/music/data3/gabbaghoul"),
            OsStr::new("freshmeat.eat"),
        )
        .unwrap();

        assert_eq!(path, PathBuf::from("data3/gabbaghoul/freshmeat.eat"));
    }

    #[test]
    fn test_relative_to_root_for_the_root_itself() {
        let path =
            relative_to_root(Path::new("/music"), Path::new("/music"), OsStr::new("a.wav")).unwrap();

        assert_eq!(path, PathBuf::from("a.wav"));
    }

    #[test]
    fn test_relative_to_root_with_relative_root() {
        let path = relative_to_root(
            Path::new("samples"),
            Path::new("samples/data2/"),
            OsStr::new("somefile.blr"),
        )
        .unwrap();

        assert_eq!(path, PathBuf::from("data2/somefile.blr"));
    }

    #[test]
    fn test_relative_to_root_rejects_foreign_directories() {
        let error = relative_to_root(
            Path::new("/music"),
            Path::new("/musical/data"),
            OsStr::new("a.wav"),
        )
        .unwrap_err();

        match error {
            ValidationError::OutsideRoot { path, root } => {
                assert_eq!(path, PathBuf::from("/musical/data/a.wav"));
                assert_eq!(root, PathBuf::from("/music"));
            }
            other => panic!("Expected OutsideRoot, got {other:?}"),
        }
    }

    #[test]
    fn test_relative_path() {
        assert_eq!(
            relative_path(Path::new("/music"), Path::new("/music/data3/oldaudio.mp1")).unwrap(),
            PathBuf::from("data3/oldaudio.mp1")
        );
        assert!(relative_path(Path::new("/music"), Path::new("/tmp/a.wav")).is_err());
    }

    #[test]
    fn test_relative_path_rejects_parent_escapes() {
        let root = Path::new("/music/lib");

        assert!(relative_path(root, Path::new("/music/lib/../outside/secret.wav")).is_err());
        assert!(relative_to_root(root, Path::new("/music/lib/.."), OsStr::new("a.wav")).is_err());
        assert_eq!(
            relative_path(root, Path::new("/music/lib/./data/../data2/x.wav")).unwrap(),
            PathBuf::from("data2/x.wav")
        );
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
        assert_eq!(normalize(Path::new("/..")), PathBuf::from("/"));
        assert_eq!(normalize(Path::new("a/../../b")), PathBuf::from("../b"));
        assert_eq!(normalize(Path::new("samples/data2/")), PathBuf::from("samples/data2"));
    }

    #[test]
    fn test_resolve_root_prefers_explicit_root() {
        let root = resolve_root(Some(Path::new("/music"))).unwrap();
        assert_eq!(root, PathBuf::from("/music"));
    }

    #[test]
    fn test_resolve_root_absolutizes_relative_root() {
        let root = resolve_root(Some(Path::new("samples/./data2"))).unwrap();

        assert!(root.is_absolute());
        assert_eq!(root, std::env::current_dir().unwrap().join("samples/data2"));
    }

    #[test]
    fn test_resolve_root_defaults_to_current_dir() {
        let root = resolve_root(None).unwrap();
        assert_eq!(root, std::env::current_dir().unwrap());
    }

    #[test]
    fn test_entry_kind() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("a.wav");
        std::fs::write(&file, b"RIFF").unwrap();

        assert_eq!(EntryKind::of(dir.path()), EntryKind::Directory);
        assert_eq!(EntryKind::of(&file), EntryKind::File);
        assert_eq!(EntryKind::of(&dir.path().join("missing")), EntryKind::Missing);
        assert_eq!(
            EntryKind::of(&file.join("below_a_file")),
            EntryKind::Missing
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_entry_kind_special_entries() {
        let dir = TempDir::new().unwrap();
        let dangling = dir.path().join("dangling");
        std::os::unix::fs::symlink(dir.path().join("nowhere"), &dangling).unwrap();

        assert_eq!(EntryKind::of(Path::new("/dev/null")), EntryKind::Other);
        assert_eq!(EntryKind::of(&dangling), EntryKind::Other);
    }
}
