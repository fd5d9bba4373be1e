use std::path::{Path, PathBuf};

use crate::error::RewriteError;

/// Location of the patch directory relative to the directory holding the executable.
pub const RELATIVE_PATCH_DIR: &str = "../src/";

/// Joins the directory containing `exe` with [`RELATIVE_PATCH_DIR`].
///
/// An `exe` without a parent component resolves against `.`.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use fix_canvas::target::resolve_from;
///
/// let dir = resolve_from(Path::new("/opt/patches/bin/fix-canvas"));
/// assert_eq!(dir, Path::new("/opt/patches/bin/../src/"));
/// ```
pub fn resolve_from(exe: &Path) -> PathBuf {
    let base = match exe.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    base.join(RELATIVE_PATCH_DIR)
}

/// Resolves the patch directory from the running executable's own path.
///
/// The result does not depend on the process's working directory.
///
/// # Errors
///
/// Returns [`RewriteError::CurrentExe`] if the executable path cannot be
/// determined.
pub fn resolve() -> Result<PathBuf, RewriteError> {
    let exe = std::env::current_exe().map_err(|source| RewriteError::CurrentExe { source })?;
    Ok(resolve_from(&exe))
}
