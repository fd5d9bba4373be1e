use std::{
    ffi::OsString,
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use tracing::{debug, info};

use crate::{
    error::RewriteError,
    header::{is_patch_file_name, line_count, replace_first_line},
};

/// A patch file selected for rewriting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchFile {
    /// Bare file name, as reported in the `Updated:` line.
    pub name: OsString,
    /// Full path inside the target directory.
    pub path: PathBuf,
}

/// Lists the patch files directly inside `dir`, sorted by file name.
///
/// Subdirectories are not descended into, and entries that are not regular
/// files are skipped even when their name ends in `.pd`.
///
/// # Errors
///
/// * [`RewriteError::ReadDir`] if `dir` is missing or unreadable.
/// * [`RewriteError::DirEntry`] if an entry cannot be read or stat'ed.
pub fn list_patch_files(dir: &Path) -> Result<Vec<PatchFile>, RewriteError> {
    let entries = fs::read_dir(dir).map_err(|source| RewriteError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut patches = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| RewriteError::DirEntry {
            path: dir.to_path_buf(),
            source,
        })?;

        let name = entry.file_name();
        if !is_patch_file_name(&name) {
            debug!(name = %name.to_string_lossy(), "skipping non-patch entry");
            continue;
        }

        let path = entry.path();
        // Follows symlinks, so a link to a patch file is rewritten in place.
        let meta = fs::metadata(&path).map_err(|source| RewriteError::DirEntry {
            path: path.clone(),
            source,
        })?;
        if !meta.is_file() {
            debug!(path = %path.display(), "skipping entry that is not a regular file");
            continue;
        }

        patches.push(PatchFile { name, path });
    }

    patches.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(patches)
}

/// Rewrites line 1 of a single patch file in place.
///
/// The file is read fully, closed, then truncated and written back. An empty
/// file is written back empty.
///
/// # Errors
///
/// * [`RewriteError::ReadFile`] if the file cannot be read.
/// * [`RewriteError::WriteFile`] if the file cannot be written.
pub fn rewrite_file(patch: &PatchFile) -> Result<(), RewriteError> {
    let original = fs::read(&patch.path).map_err(|source| RewriteError::ReadFile {
        path: patch.path.clone(),
        source,
    })?;

    let updated = replace_first_line(&original);
    debug!(
        path = %patch.path.display(),
        lines = line_count(&updated),
        "rewriting canvas header"
    );

    fs::write(&patch.path, &updated).map_err(|source| RewriteError::WriteFile {
        path: patch.path.clone(),
        source,
    })
}

/// Rewrites the canvas header of every patch file in `target_dir`.
///
/// Writes one `Updated: <name>` line to `out` per file, right after that file
/// is persisted. The first failure aborts the run: files already rewritten stay
/// rewritten and the rest are left untouched.
///
/// Returns the paths of the rewritten files in processing order.
///
/// # Errors
///
/// Any [`RewriteError`] from listing, reading, writing, or reporting.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
///
/// let mut stdout = std::io::stdout();
/// fix_canvas::rewriter::run(Path::new("patches"), &mut stdout)?;
/// # Ok::<(), fix_canvas::error::RewriteError>(())
/// ```
pub fn run<W: Write>(target_dir: &Path, out: &mut W) -> Result<Vec<PathBuf>, RewriteError> {
    let patches = list_patch_files(target_dir)?;
    let updated = rewrite_patches(patches, out)?;

    info!(
        dir = %target_dir.display(),
        count = updated.len(),
        "canvas headers rewritten"
    );
    Ok(updated)
}

/// Rewrites `patches` in order, reporting each one to `out` once it is written.
///
/// Stops at the first failure; patches before it stay rewritten.
pub fn rewrite_patches<W: Write>(
    patches: Vec<PatchFile>,
    out: &mut W,
) -> Result<Vec<PathBuf>, RewriteError> {
    let mut updated = Vec::with_capacity(patches.len());
    for patch in patches {
        rewrite_file(&patch)?;
        writeln!(out, "Updated: {}", patch.name.to_string_lossy())
            .map_err(|source| RewriteError::Output { source })?;
        updated.push(patch.path);
    }
    Ok(updated)
}
