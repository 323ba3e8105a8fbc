use std::path::{Path, PathBuf};

/// Directory name of the toolchain's bundled runtime under `<root>/lib`.
pub const TOOLCHAIN_NAME: &str = "chic";

/// Computes `<root>/lib/chic` for an executable installed at `<root>/bin/<exe>`.
///
/// Paths with fewer than two components degrade to whatever prefix remains,
/// so a bare `frontend` yields the relative `lib/chic`.
#[must_use]
pub fn runtime_library_path(executable: &Path) -> PathBuf {
    let bin_dir = remove_filename(executable);
    let root = remove_filename(bin_dir);
    root.join("lib").join(TOOLCHAIN_NAME)
}

fn remove_filename(path: &Path) -> &Path {
    path.parent().unwrap_or(path)
}
