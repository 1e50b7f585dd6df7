//! Directory level walker
//!
//! Enumerates a directory tree one directory per step, producing the
//! directory path together with its subdirectory and regular file names.
//! Levels come out in pre-order: a directory is listed before any of its
//! subdirectories, and sibling subdirectories are fully walked in name order.

use std::ffi::OsString;
use std::fs;
use std::path::PathBuf;
use walkdir::WalkDir;

/// One directory of a walk
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkLevel {
    /// Path of the directory, built from the walk root
    pub dir: PathBuf,
    /// Names of the subdirectories, sorted
    pub subdirs: Vec<OsString>,
    /// Names of the regular files, sorted
    pub files: Vec<OsString>,
}

/// Lazy, top-down directory walker
///
/// Each call to `next` lists one directory. Unreadable directories
/// and entries are logged and skipped.
#[derive(Debug)]
pub struct LevelWalker {
    /// Directories still to be listed, next one on top
    pending: Vec<PendingDir>,
    /// Follow symbolic links to files and directories
    follow_links: bool,
}

/// A directory waiting to be listed
#[derive(Debug)]
struct PendingDir {
    path: PathBuf,
    /// Canonical paths of the directories above it (only tracked when following links)
    ancestors: Vec<PathBuf>,
}

impl LevelWalker {
    /// Create a walker rooted at `dir`
    pub fn new(dir: impl Into<PathBuf>, follow_links: bool) -> Self {
        Self {
            pending: vec![PendingDir {
                path: dir.into(),
                ancestors: Vec::new(),
            }],
            follow_links,
        }
    }

    /// Ancestor chain for the children of `dir`, or `None` if `dir` closes a symlink cycle
    fn descend(&self, dir: &PendingDir) -> Option<Vec<PathBuf>> {
        if !self.follow_links {
            return Some(Vec::new());
        }

        let canonical = match fs::canonicalize(&dir.path) {
            Ok(canonical) => canonical,
            Err(e) => {
                log::warn!("Cannot resolve {}: {e}", dir.path.display());
                return None;
            }
        };

        if dir.ancestors.contains(&canonical) {
            log::warn!("Skipping symlink cycle at {}", dir.path.display());
            return None;
        }

        let mut ancestors = dir.ancestors.clone();
        ancestors.push(canonical);
        Some(ancestors)
    }

    /// List a single directory
    fn read_level(&self, dir: PathBuf) -> Option<WalkLevel> {
        let entries = WalkDir::new(&dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(self.follow_links)
            .sort_by_file_name();

        let mut level = WalkLevel {
            dir,
            ..WalkLevel::default()
        };

        for entry in entries {
            match entry {
                Ok(entry) => {
                    let file_type = entry.file_type();
                    if file_type.is_dir() {
                        level.subdirs.push(entry.file_name().to_os_string());
                    } else if file_type.is_file() {
                        level.files.push(entry.file_name().to_os_string());
                    } else {
                        log::debug!("Skipping non-regular entry {}", entry.path().display());
                    }
                }
                Err(e) if e.depth() == 0 => {
                    log::warn!("Cannot read directory {}: {e}", level.dir.display());
                    return None;
                }
                Err(e) => {
                    log::warn!("Walk error: {e}");
                }
            }
        }

        Some(level)
    }
}

impl Iterator for LevelWalker {
    type Item = WalkLevel;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(dir) = self.pending.pop() {
            let Some(ancestors) = self.descend(&dir) else {
                continue;
            };

            let Some(level) = self.read_level(dir.path) else {
                continue;
            };

            // Reverse so the first subdirectory is walked next
            self.pending
                .extend(level.subdirs.iter().rev().map(|name| PendingDir {
                    path: level.dir.join(name),
                    ancestors: ancestors.clone(),
                }));

            return Some(level);
        }

        None
    }
}
