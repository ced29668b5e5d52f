//! Static directory resolution
//!
//! Picks the directory to serve with a first-match probe:
//!
//! 1. `./<module_dir>/<subdir>`, for a launch from the project's parent
//! 2. `<directory of the executable>/<subdir>`
//! 3. `./<subdir>`, taken without checking that it exists

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::AssetsConfig;
use crate::error::StartupError;

/// The directory whose contents are served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticDir(PathBuf);

impl StaticDir {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for StaticDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// The three probe locations, in priority order.
#[derive(Debug, Clone)]
pub struct Candidates {
    module: PathBuf,
    executable: PathBuf,
    fallback: PathBuf,
}

impl Candidates {
    /// Candidates relative to the current working directory
    pub fn new(module_dir: &str, executable_dir: &Path, subdir: &str) -> Self {
        Self::relative_to(Path::new("."), module_dir, executable_dir, subdir)
    }

    /// Candidates with the working-directory-relative entries anchored at `base`
    pub fn relative_to(base: &Path, module_dir: &str, executable_dir: &Path, subdir: &str) -> Self {
        Self {
            module: base.join(module_dir).join(subdir),
            executable: executable_dir.join(subdir),
            fallback: base.join(subdir),
        }
    }

    /// Pick the first existing candidate; the last one is unconditional.
    pub fn select(self) -> StaticDir {
        if exists(&self.module) {
            return StaticDir(self.module);
        }
        if exists(&self.executable) {
            return StaticDir(self.executable);
        }
        StaticDir(self.fallback)
    }
}

/// Resolve the static directory for this process.
///
/// The executable lookup happens before any probing, so a platform that
/// cannot report it fails even when the first candidate exists.
pub fn resolve_static_dir(assets: &AssetsConfig) -> Result<StaticDir, StartupError> {
    let executable = std::env::current_exe().map_err(StartupError::ExecutableLocation)?;
    let executable_dir = executable.parent().unwrap_or_else(|| Path::new("."));

    Ok(Candidates::new(&assets.module_dir, executable_dir, &assets.subdir).select())
}

// Only a definite "not found" rules a candidate out; other stat failures
// (permissions, I/O) leave it selected.
fn exists(path: &Path) -> bool {
    match fs::metadata(path) {
        Ok(_) => true,
        Err(e) => e.kind() != io::ErrorKind::NotFound,
    }
}
