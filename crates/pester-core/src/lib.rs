//! Pester Adapter Core Library
//!
//! This crate provides test script discovery for Pester-based projects:
//! - The `*.Tests.ps1` naming convention
//! - Recursive, validated listing of test scripts under a project directory
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Project    │────▶│   Script    │────▶│ Test Script │
//! │  Directory  │     │   Lister    │     │   Paths     │
//! └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use std::path::Path;
//! use pester_core::list_test_scripts;
//!
//! for script in list_test_scripts(Some(Path::new("./my-module")))? {
//!     println!("Script: {}", script.display());
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod convention;
pub mod discovery;
pub mod error;

pub use convention::{TEST_SCRIPT_SUFFIX, is_test_script_name};
pub use discovery::{ScriptLister, TestScripts, list_test_scripts, walk_test_scripts};
pub use error::{Error, Result};
