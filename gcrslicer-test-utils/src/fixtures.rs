//! Sample directory layouts shared by the test suites

use crate::builders::{TestTree, TestTreeBuilder};
use std::io;

/// Files of `data2/`, in yield order
pub const DATA2_FILES: &[&str] = &["data2/anotherfile2.blr", "data2/somefile.blr"];

/// Files of `data3/`, in yield order
pub const DATA3_FILES: &[&str] = &[
    "data3/oldaudio.mp1",
    "data3/gabbaghoul/freshmeat.eat",
    "data3/gabbaghoul/rottenm-eats.tar.xz",
    "data3/gabbaghoul/littlepeppercorns/thatonethere.gps3",
    "data3/gabbaghoul/littlepeppercorns/thisonehere.gps",
];

/// Builder for the sample library: `data2/` (flat) and `data3/` (nested)
pub fn sample_library_builder() -> TestTreeBuilder {
    // Created out of order so tests do not depend on creation order
    TestTreeBuilder::new()
        .file("data2/somefile.blr")
        .file("data2/anotherfile2.blr")
        .file("data3/gabbaghoul/littlepeppercorns/thisonehere.gps")
        .file("data3/gabbaghoul/littlepeppercorns/thatonethere.gps3")
        .file("data3/gabbaghoul/rottenm-eats.tar.xz")
        .file("data3/gabbaghoul/freshmeat.eat")
        .file("data3/oldaudio.mp1")
}

/// Create the sample library in a temporary directory
pub fn sample_library() -> io::Result<TestTree> {
    sample_library_builder().build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_library_contains_every_listed_file() {
        let tree = sample_library().unwrap();

        for file in DATA2_FILES.iter().chain(DATA3_FILES) {
            assert!(tree.join(file).is_file(), "missing fixture file {file}");
        }
    }
}
