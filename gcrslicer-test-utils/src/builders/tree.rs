//! Builder for temporary directory trees

use gcrslicer_core::{PathResolver, ResolverOptions};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree, removed when dropped
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Root of the tree
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path of an entry of the tree
    pub fn join(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.dir.path().join(relative)
    }

    /// Create a resolver rooted at this tree
    pub fn resolver<I, S>(
        &self,
        inputs: I,
        options: ResolverOptions,
    ) -> gcrslicer_core::Result<PathResolver>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PathResolver::new(inputs, options.with_root_dir(self.path()))
    }

    /// Resolve `inputs` against this tree and collect every path
    pub fn resolve<I, S>(
        &self,
        inputs: I,
        options: ResolverOptions,
    ) -> gcrslicer_core::Result<Vec<PathBuf>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.resolver(inputs, options)?.collect()
    }
}

#[derive(Debug, Clone)]
enum TreeEntry {
    File { path: PathBuf, content: Vec<u8> },
    Dir(PathBuf),
    Symlink { link: PathBuf, target: PathBuf },
}

/// Builder describing a tree of files and directories
///
/// Paths are relative to the tree root; parent directories are created as
/// needed.
#[derive(Debug, Clone, Default)]
pub struct TestTreeBuilder {
    entries: Vec<TreeEntry>,
}

impl TestTreeBuilder {
    /// Create an empty tree builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file with placeholder content
    pub fn file(self, path: &str) -> Self {
        self.file_with_content(path, b"test")
    }

    /// Add a file with specific content
    pub fn file_with_content(mut self, path: &str, content: &[u8]) -> Self {
        self.entries.push(TreeEntry::File {
            path: PathBuf::from(path),
            content: content.to_vec(),
        });
        self
    }

    /// Add several placeholder files
    pub fn files(self, paths: &[&str]) -> Self {
        paths.iter().fold(self, |builder, path| builder.file(path))
    }

    /// Add an (empty) directory
    pub fn dir(mut self, path: &str) -> Self {
        self.entries.push(TreeEntry::Dir(PathBuf::from(path)));
        self
    }

    /// Add a symbolic link; `target` is relative to the tree root
    ///
    /// Links are only created on Unix; elsewhere the entry is ignored.
    pub fn symlink(mut self, link: &str, target: &str) -> Self {
        self.entries.push(TreeEntry::Symlink {
            link: PathBuf::from(link),
            target: PathBuf::from(target),
        });
        self
    }

    /// Create the tree in a fresh temporary directory
    pub fn build(self) -> io::Result<TestTree> {
        let dir = TempDir::new()?;
        let root = dir.path();

        for entry in self.entries {
            match entry {
                TreeEntry::File { path, content } => {
                    let path = root.join(path);
                    if let Some(parent) = path.parent() {
                        fs::create_dir_all(parent)?;
                    }
                    fs::write(path, content)?;
                }
                TreeEntry::Dir(path) => fs::create_dir_all(root.join(path))?,
                TreeEntry::Symlink { link, target } => {
                    let link = root.join(link);
                    if let Some(parent) = link.parent() {
                        fs::create_dir_all(parent)?;
                    }
                    create_symlink(&root.join(target), &link)?;
                }
            }
        }

        Ok(TestTree { dir })
    }
}

#[cfg(unix)]
fn create_symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(not(unix))]
fn create_symlink(_target: &Path, _link: &Path) -> io::Result<()> {
    Ok(())
}
