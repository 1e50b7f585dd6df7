//! Tests that depend on the process working directory
//!
//! These change the current directory, so they run serially.

use gcrslicer_core::{ResolverOptions, resolve_files};
use gcrslicer_test_utils::{DATA2_FILES, sample_library};
use serial_test::serial;
use std::env;
use std::path::PathBuf;

struct RestoreDir(PathBuf);

impl Drop for RestoreDir {
    fn drop(&mut self) {
        let _ = env::set_current_dir(&self.0);
    }
}

#[test]
#[serial]
fn test_root_defaults_to_current_directory() {
    let tree = sample_library().unwrap();
    let _restore = RestoreDir(env::current_dir().unwrap());
    env::set_current_dir(tree.path()).unwrap();

    let found = resolve_files(["data2"], ResolverOptions::new()).unwrap();

    let expected: Vec<PathBuf> = DATA2_FILES.iter().map(PathBuf::from).collect();
    assert_eq!(found, expected);
}

#[test]
#[serial]
fn test_relative_root_is_resolved_against_current_directory() {
    let tree = sample_library().unwrap();
    let _restore = RestoreDir(env::current_dir().unwrap());
    env::set_current_dir(tree.path()).unwrap();

    let found = resolve_files(["somefile.blr"], ResolverOptions::new().with_root_dir("data2")).unwrap();

    assert_eq!(found, vec![PathBuf::from("somefile.blr")]);
}

#[test]
#[serial]
fn test_absolute_input_under_relative_root() {
    let tree = sample_library().unwrap();
    let _restore = RestoreDir(env::current_dir().unwrap());
    env::set_current_dir(tree.path()).unwrap();

    // Spelled the way the process sees its working directory
    let input = env::current_dir().unwrap().join("data2/somefile.blr");
    let found = resolve_files(
        [input.to_string_lossy().into_owned()],
        ResolverOptions::new().with_root_dir("data2"),
    )
    .unwrap();

    assert_eq!(found, vec![PathBuf::from("somefile.blr")]);
}
