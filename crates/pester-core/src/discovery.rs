//! Test script discovery
//!
//! Walks a project directory and yields every file that follows the
//! `*.Tests.ps1` convention, at any depth.
//!
//! Paths are produced in the order the filesystem enumerates them. Nothing is
//! sorted, so callers that need a stable listing must sort themselves.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::convention::is_test_script_name;
use crate::error::{Error, Result};

/// Parameter name reported by validation errors
const PROJECT_DIRECTORY_PARAM: &str = "projectDirectory";

/// Lists Pester test scripts under a validated project directory
#[derive(Debug, Clone)]
pub struct ScriptLister {
    root: PathBuf,
}

impl ScriptLister {
    /// Validate `project_directory` and create a lister rooted at it.
    ///
    /// # Errors
    ///
    /// * [`Error::MissingArgument`] if the path is absent or empty
    /// * [`Error::InvalidDirectory`] if the path is non-empty but is not an
    ///   existing directory (a whitespace-only path included)
    pub fn new(project_directory: Option<&Path>) -> Result<Self> {
        let root = match project_directory {
            Some(path) if !path.as_os_str().is_empty() => path,
            _ => {
                return Err(Error::MissingArgument {
                    param: PROJECT_DIRECTORY_PARAM,
                });
            }
        };

        if !root.is_dir() {
            return Err(Error::InvalidDirectory {
                param: PROJECT_DIRECTORY_PARAM,
                message: "Project directory doesn't exist".to_string(),
            });
        }

        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    /// The project directory this lister walks
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Start a lazy walk over the project directory.
    pub fn iter(&self) -> TestScripts {
        tracing::debug!("Discovering test scripts under {}", self.root.display());
        TestScripts {
            inner: WalkDir::new(&self.root).min_depth(1).into_iter(),
        }
    }

    /// Walk the whole tree and collect every matching script.
    ///
    /// The first traversal error aborts the listing; no partial result is
    /// returned.
    pub fn collect(&self) -> Result<Vec<PathBuf>> {
        let scripts = self.iter().collect::<Result<Vec<_>>>()?;
        tracing::debug!(
            "Found {} test script(s) under {}",
            scripts.len(),
            self.root.display()
        );
        Ok(scripts)
    }
}

/// Lazy sequence of test script paths.
///
/// Owns the underlying directory walker. Open directory handles are released
/// when the walk finishes or when this value is dropped.
#[derive(Debug)]
pub struct TestScripts {
    inner: walkdir::IntoIter,
}

impl Iterator for TestScripts {
    type Item = Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(err) => return Some(Err(Error::Walk(err))),
            };

            if is_file_entry(&entry) && is_test_script_name(entry.file_name()) {
                tracing::debug!("Found test script: {}", entry.path().display());
                return Some(Ok(entry.into_path()));
            }

            tracing::trace!("Skipping {}", entry.path().display());
        }
    }
}

/// Regular files, plus symlinks whose target is a regular file.
///
/// Links are not followed during the walk, so a linked script is reported at
/// its own path inside the root. Dangling links are skipped.
fn is_file_entry(entry: &walkdir::DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}

/// List every test script under `project_directory`.
///
/// Returns the paths in enumeration order. Each path is `project_directory`
/// joined with the script's relative location, so relative input yields
/// relative output.
///
/// # Example
///
/// ```rust,ignore
/// let scripts = list_test_scripts(Some(Path::new("./src")))?;
/// ```
pub fn list_test_scripts(project_directory: Option<&Path>) -> Result<Vec<PathBuf>> {
    ScriptLister::new(project_directory)?.collect()
}

/// Validate `project_directory` and return a lazy iterator over its scripts.
pub fn walk_test_scripts(project_directory: Option<&Path>) -> Result<TestScripts> {
    Ok(ScriptLister::new(project_directory)?.iter())
}
