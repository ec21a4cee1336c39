//! Call-site resolution
//!
//! Every contract method is `#[track_caller]`, so `Location::caller()` inside
//! an implementation yields the frame that called into the logger rather than
//! a frame of this crate.

use std::fmt;
use std::panic::Location;
use std::path::{Path, PathBuf};

/// A resolved `file:line` pair with the working-directory prefix removed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite {
    pub file: String,
    pub line: u32,
}

impl CallSite {
    /// Resolve `location`, shortening its path relative to `working_dir`
    ///
    /// Returns `None` when the location carries no file path.
    pub fn resolve(location: &Location<'_>, working_dir: Option<&Path>) -> Option<Self> {
        if location.file().is_empty() {
            return None;
        }

        Some(Self {
            file: shorten_path(location.file(), working_dir),
            line: location.line(),
        })
    }

    /// Resolve the caller of the enclosing `#[track_caller]` chain
    #[track_caller]
    pub fn here(working_dir: Option<&Path>) -> Option<Self> {
        Self::resolve(Location::caller(), working_dir)
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Strip `working_dir` and any leading separator from `file`
pub fn shorten_path(file: &str, working_dir: Option<&Path>) -> String {
    let Some(dir) = working_dir else {
        return file.to_string();
    };

    match Path::new(file).strip_prefix(dir) {
        Ok(relative) => relative
            .to_string_lossy()
            .trim_start_matches(std::path::MAIN_SEPARATOR)
            .to_string(),
        Err(_) => file.to_string(),
    }
}

/// Working directory of the process, used as the base for shortened paths
pub fn current_working_dir() -> std::io::Result<PathBuf> {
    std::env::current_dir()
}
