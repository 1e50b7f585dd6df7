//! GCR Slicer Core Library
//!
//! Locates candidate audio files from user supplied search paths and hands
//! them out one at a time, so downstream stages (plotting, silence analysis,
//! slicing) never need a whole directory tree in memory.
//!
//! ```no_run
//! use gcrslicer_core::{PathResolver, ResolverOptions};
//!
//! let options = ResolverOptions::new().with_extensions([".wav"]);
//! for path in PathResolver::new(["samples/", "kick.wav"], options)? {
//!     println!("{}", path?.display());
//! }
//! # Ok::<(), gcrslicer_core::Error>(())
//! ```

pub mod error;
pub mod extensions;
pub mod filter;
pub mod paths;
pub mod resolver;
pub mod walk;

// Re-export main types
pub use error::{Error, Result};
pub use extensions::SUPPORTED_READ_EXTENSIONS;
pub use filter::{ExtensionFilter, FilterExtensions};
pub use resolver::{PathResolver, ResolverOptions, ResolverPhase, resolve_files};
pub use walk::{LevelWalker, WalkLevel};
