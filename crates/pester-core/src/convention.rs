//! Test script naming convention
//!
//! Pester picks up scripts named `<Name>.Tests.ps1`. The match applies to the
//! final path component only, ignores ASCII case and is anchored at the end of
//! the name, so `Build.Tests.ps1.log` is not a test script.

use std::ffi::OsStr;

/// Filename suffix that marks a Pester test script
pub const TEST_SCRIPT_SUFFIX: &str = ".Tests.ps1";

/// Check whether a file name follows the `*.Tests.ps1` convention.
///
/// The stem before the suffix may be empty: `.Tests.ps1` matches, the same way
/// the `*` of a `*.Tests.ps1` glob matches zero characters. `Tests.ps1` does
/// not, because the leading dot is part of the suffix.
pub fn is_test_script_name(name: &OsStr) -> bool {
    let name = name.as_encoded_bytes();
    let suffix = TEST_SCRIPT_SUFFIX.as_bytes();

    name.len() >= suffix.len() && name[name.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
}
