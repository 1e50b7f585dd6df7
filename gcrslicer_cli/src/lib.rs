//! GCR Slicer command line front end
//!
//! Parses arguments, layers configuration, and streams the files found by
//! [`gcrslicer_core::PathResolver`] into a report for the selected mode.

pub mod cli;
pub mod config;
pub mod error;
pub mod orchestrators;
pub mod output;
pub mod paths;
pub mod terminal;
