//! Default audio file extensions
//!
//! Entries are suffixes matched literally by [`ExtensionFilter`], so the dot
//! is part of each one.
//!
//! [`ExtensionFilter`]: crate::filter::ExtensionFilter

/// Extensions the slicer is able to read
pub const SUPPORTED_READ_EXTENSIONS: &[&str] = &[".wav"];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::ExtensionFilter;
    use std::path::Path;

    #[test]
    fn test_supported_extensions_keep_their_dot() {
        for ext in SUPPORTED_READ_EXTENSIONS {
            assert!(ext.starts_with('.'), "{ext} should include the dot");
        }
    }

    #[test]
    fn test_default_filter_reads_wav_only() {
        let filter = ExtensionFilter::new(SUPPORTED_READ_EXTENSIONS);

        assert!(filter.accepts(Path::new("takes/kick.WAV")));
        assert!(!filter.accepts(Path::new("takes/kick.flac")));
        assert!(!filter.accepts(Path::new("takes/kickwav")));
    }
}
