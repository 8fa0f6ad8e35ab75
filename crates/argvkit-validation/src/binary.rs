//! Executable resolution
//!
//! [`bin`] decides whether an executable reference can be used. It owns the
//! decision logic and the error taxonomy; the actual PATH lookup and
//! filesystem probes come from an [`Environment`].

use argvkit_error::{ArgvError, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Host collaborators consulted by [`bin`].
pub trait Environment {
    /// Whether a bare program name resolves through the search path.
    fn is_in_path(&self, name: &str) -> bool;

    fn exists(&self, path: &Path) -> bool;

    fn is_executable(&self, path: &Path) -> bool;
}

/// [`Environment`] backed by the real process environment and filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn is_in_path(&self, name: &str) -> bool {
        which::which(name).is_ok()
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    #[cfg(unix)]
    fn is_executable(&self, path: &Path) -> bool {
        use std::os::unix::fs::PermissionsExt;

        std::fs::metadata(path)
            .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
            .unwrap_or(false)
    }

    // No execute bit outside unix; a regular file is taken as runnable.
    #[cfg(not(unix))]
    fn is_executable(&self, path: &Path) -> bool {
        std::fs::metadata(path)
            .map(|meta| meta.is_file())
            .unwrap_or(false)
    }
}

/// Whether `reference` names a path rather than a bare program name.
#[must_use]
pub fn is_path_like(reference: &str) -> bool {
    reference.contains('/') || (cfg!(windows) && reference.contains('\\'))
}

/// Resolve an executable reference.
///
/// - A reference containing a path separator must exist
///   (`BinaryNotFound`) and be executable (`BinaryNotExecutable`).
/// - A bare name must resolve through the search path (`BinaryNotInPath`).
///
/// Returns the reference as a path on success.
///
/// # Example
///
/// ```rust
/// use argvkit_error::ErrorKind;
/// use argvkit_validation::{bin, Environment};
/// use std::path::Path;
///
/// struct EmptyPath;
///
/// impl Environment for EmptyPath {
///     fn is_in_path(&self, _name: &str) -> bool { false }
///     fn exists(&self, _path: &Path) -> bool { false }
///     fn is_executable(&self, _path: &Path) -> bool { false }
/// }
///
/// let err = bin(&EmptyPath, "rg", "search").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::BinaryNotInPath);
/// ```
pub fn bin(env: &dyn Environment, reference: &str, label: &str) -> Result<PathBuf> {
    if reference.is_empty() {
        return Err(ArgvError::invalid(label, "executable reference is empty"));
    }

    if is_path_like(reference) {
        let path = PathBuf::from(reference);
        if !env.exists(&path) {
            debug!(label = %label, path = %reference, "Executable path does not exist");
            return Err(ArgvError::BinaryNotFound {
                label: label.to_string(),
                path,
            });
        }
        if !env.is_executable(&path) {
            debug!(label = %label, path = %reference, "Executable path lacks execute permission");
            return Err(ArgvError::BinaryNotExecutable {
                label: label.to_string(),
                path,
            });
        }
        debug!(label = %label, path = %reference, "Resolved executable path");
        return Ok(path);
    }

    if !env.is_in_path(reference) {
        debug!(label = %label, name = %reference, "Executable not found in PATH");
        return Err(ArgvError::BinaryNotInPath {
            label: label.to_string(),
            name: reference.to_string(),
        });
    }

    debug!(label = %label, name = %reference, "Resolved executable on PATH");
    Ok(PathBuf::from(reference))
}
