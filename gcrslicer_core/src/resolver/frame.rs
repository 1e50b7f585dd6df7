//! Walk frame: the in-progress traversal of one directory input

use std::collections::VecDeque;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::walk::LevelWalker;

/// Resumable state for draining one directory subtree
///
/// Holds the level cursor, the directory currently being drained and the
/// file names of that level that have not been handed out yet.
#[derive(Debug)]
pub(crate) struct WalkFrame {
    levels: LevelWalker,
    current_dir: PathBuf,
    pending_files: VecDeque<OsString>,
}

impl WalkFrame {
    pub(crate) fn new(dir: PathBuf, follow_links: bool) -> Self {
        Self {
            levels: LevelWalker::new(dir.clone(), follow_links),
            current_dir: dir,
            pending_files: VecDeque::new(),
        }
    }

    /// Directory the last returned file name belongs to
    pub(crate) fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    /// Next file name of the subtree, advancing to the next level as needed
    ///
    /// Returns `None` once the subtree is exhausted.
    pub(crate) fn next_file(&mut self) -> Option<OsString> {
        loop {
            if let Some(name) = self.pending_files.pop_front() {
                return Some(name);
            }

            let level = self.levels.next()?;
            log::trace!(
                "Entering {} ({} files)",
                level.dir.display(),
                level.files.len()
            );
            self.current_dir = level.dir;
            self.pending_files = level.files.into();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_frame_drains_levels_in_order() {
        let dir = TempDir::new().unwrap();
        let base = dir.path();
        fs::write(base.join("top.wav"), b"x").unwrap();
        fs::create_dir(base.join("empty")).unwrap();
        fs::create_dir(base.join("sub")).unwrap();
        fs::write(base.join("sub/inner.wav"), b"x").unwrap();

        let mut frame = WalkFrame::new(base.to_path_buf(), true);

        assert_eq!(frame.next_file(), Some(OsString::from("top.wav")));
        assert_eq!(frame.current_dir(), base);
        assert_eq!(frame.next_file(), Some(OsString::from("inner.wav")));
        assert_eq!(frame.current_dir(), base.join("sub"));
        assert_eq!(frame.next_file(), None);
        assert_eq!(frame.next_file(), None);
    }

    #[test]
    fn test_frame_over_empty_directory() {
        let dir = TempDir::new().unwrap();

        let mut frame = WalkFrame::new(dir.path().to_path_buf(), false);
        assert_eq!(frame.next_file(), None);
    }
}
