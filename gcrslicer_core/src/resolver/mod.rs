//! Lazy path resolution
//!
//! [`PathResolver`] turns a list of search paths (files or directories) into
//! a stream of regular file paths relative to a root directory. Work is done
//! on demand: each pull inspects at most one input or reads at most one
//! directory level before handing back a path, so large trees are never
//! loaded up front.
//!
//! A path is yielded at most once per pass, even when inputs overlap. Inputs
//! that do not exist are skipped. An input that exists but is neither
//! a file nor a directory, or a path that falls outside the root, stops the
//! whole iteration with an error; every pull after that reports
//! end-of-sequence.

mod frame;

use std::collections::HashSet;
use std::iter::FusedIterator;
use std::path::{Path, PathBuf};

use self::frame::WalkFrame;
use crate::error::{Result, ValidationError};
use crate::filter::ExtensionFilter;
use crate::paths::{self, EntryKind};

/// Options for path resolution
#[derive(Debug, Clone)]
pub struct ResolverOptions {
    /// Directory inputs are resolved against (None = current directory)
    pub root_dir: Option<PathBuf>,
    /// Accepted file extensions (empty = accept everything)
    pub extensions: Vec<String>,
    /// Follow symbolic links while walking directories
    pub follow_links: bool,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            root_dir: None,
            extensions: Vec::new(),
            follow_links: true,
        }
    }
}

impl ResolverOptions {
    /// Create new options with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the root directory
    pub fn with_root_dir(mut self, root_dir: impl Into<PathBuf>) -> Self {
        self.root_dir = Some(root_dir.into());
        self
    }

    /// Set the accepted extensions
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Set whether to follow symbolic links
    pub fn with_follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }
}

/// Observable phase of a [`PathResolver`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolverPhase {
    /// The next pull consumes an input
    AwaitingInput,
    /// A directory subtree is being drained
    InDirectoryWalk,
    /// Nothing left; every pull signals end-of-sequence
    Exhausted,
}

#[derive(Debug)]
enum ResolverState {
    AwaitingInput,
    InDirectoryWalk(WalkFrame),
    Exhausted,
}

/// Pull-based resolver from search paths to file paths
#[derive(Debug)]
pub struct PathResolver {
    inputs: Vec<String>,
    /// Index of the next input to consume
    cursor: usize,
    root_dir: PathBuf,
    filter: ExtensionFilter,
    follow_links: bool,
    state: ResolverState,
    /// Paths already yielded since construction or the last reset
    emitted: HashSet<PathBuf>,
}

impl PathResolver {
    /// Create a resolver over `inputs`
    ///
    /// Fails only when no root directory is given and the current directory
    /// cannot be determined.
    pub fn new<I, S>(inputs: I, options: ResolverOptions) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let root_dir = paths::resolve_root(options.root_dir.as_deref())?;
        let filter = ExtensionFilter::new(&options.extensions);
        let inputs: Vec<String> = inputs.into_iter().map(Into::into).collect();

        log::debug!(
            "Resolving {} input(s) against {} (filter: {:?})",
            inputs.len(),
            root_dir.display(),
            filter.suffixes()
        );

        Ok(Self {
            inputs,
            cursor: 0,
            root_dir,
            filter,
            follow_links: options.follow_links,
            state: ResolverState::AwaitingInput,
            emitted: HashSet::new(),
        })
    }

    /// Pull the next file path
    ///
    /// `Ok(None)` is end-of-sequence and is returned again on every later
    /// call. An error is returned once, after which the resolver is
    /// exhausted.
    pub fn pull(&mut self) -> Result<Option<PathBuf>> {
        match self.advance() {
            Ok(path) => Ok(path),
            Err(e) => {
                log::debug!("Resolution stopped: {e}");
                self.state = ResolverState::Exhausted;
                Err(e.into())
            }
        }
    }

    /// Rewind to the first input, dropping any walk in progress
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.state = ResolverState::AwaitingInput;
        self.emitted.clear();
    }

    /// Current phase of the state machine
    pub fn phase(&self) -> ResolverPhase {
        match self.state {
            ResolverState::AwaitingInput => ResolverPhase::AwaitingInput,
            ResolverState::InDirectoryWalk(_) => ResolverPhase::InDirectoryWalk,
            ResolverState::Exhausted => ResolverPhase::Exhausted,
        }
    }

    /// Whether every later pull signals end-of-sequence
    pub fn is_exhausted(&self) -> bool {
        matches!(self.state, ResolverState::Exhausted)
    }

    /// Root directory yielded paths are relative to
    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    /// Extension filter applied to yielded files
    pub fn extension_filter(&self) -> &ExtensionFilter {
        &self.filter
    }

    /// Search paths this resolver was created with
    pub fn inputs(&self) -> &[String] {
        &self.inputs
    }

    fn advance(&mut self) -> std::result::Result<Option<PathBuf>, ValidationError> {
        loop {
            match &mut self.state {
                ResolverState::Exhausted => return Ok(None),
                ResolverState::InDirectoryWalk(frame) => match frame.next_file() {
                    Some(name) => {
                        if !self.filter.accepts_name(&name) {
                            continue;
                        }
                        let path =
                            paths::relative_to_root(&self.root_dir, frame.current_dir(), &name)?;
                        if let Some(path) = self.first_emission(path) {
                            return Ok(Some(path));
                        }
                    }
                    None => {
                        log::debug!("Finished directory walk");
                        self.state = ResolverState::AwaitingInput;
                    }
                },
                ResolverState::AwaitingInput => {
                    let Some(input) = self.inputs.get(self.cursor) else {
                        log::debug!("All inputs consumed");
                        self.state = ResolverState::Exhausted;
                        return Ok(None);
                    };
                    self.cursor += 1;

                    let path = self.root_dir.join(input);
                    match EntryKind::of(&path) {
                        EntryKind::Missing => {
                            log::debug!("Skipping nonexistent input: {input}");
                        }
                        EntryKind::File => {
                            if !self.filter.accepts(&path) {
                                log::debug!("Skipping filtered input: {input}");
                                continue;
                            }
                            let path = paths::relative_path(&self.root_dir, &path)?;
                            if let Some(path) = self.first_emission(path) {
                                return Ok(Some(path));
                            }
                        }
                        EntryKind::Directory => {
                            log::debug!("Walking directory input: {input}");
                            self.state = ResolverState::InDirectoryWalk(WalkFrame::new(
                                path,
                                self.follow_links,
                            ));
                        }
                        EntryKind::Other => {
                            return Err(ValidationError::unrecognized_entry(&path));
                        }
                    }
                }
            }
        }
    }

    fn first_emission(&mut self, path: PathBuf) -> Option<PathBuf> {
        if self.emitted.insert(path.clone()) {
            Some(path)
        } else {
            log::debug!("Already yielded {}", path.display());
            None
        }
    }
}

impl Iterator for PathResolver {
    type Item = Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        self.pull().transpose()
    }
}

impl FusedIterator for PathResolver {}

/// Convenience function to resolve every input at once
pub fn resolve_files<I, S>(inputs: I, options: ResolverOptions) -> Result<Vec<PathBuf>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    PathResolver::new(inputs, options)?.collect()
}
