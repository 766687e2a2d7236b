//! Depth-first directory traversal.

use std::io;
use std::path::{Path, PathBuf};

/// One visited directory: where it sits, how deep below the walk root,
/// and the names of the files directly inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirVisit {
    pub path: PathBuf,
    /// 0 for the walk root, parent depth + 1 below it.
    pub depth: usize,
    /// Immediate non-directory children, sorted by name.
    pub files: Vec<String>,
}

/// Walk the tree under `root` depth-first and top-down, producing one
/// `DirVisit` per directory with the root itself first.
///
/// Sibling entries are visited in name order, so two walks over an
/// unchanged tree yield identical results. Directories reached through
/// symlinks are not descended into. An unreadable directory anywhere in
/// the tree aborts the walk with the underlying error.
pub fn walk(root: &Path) -> io::Result<Vec<DirVisit>> {
    let mut visits = Vec::new();
    walk_dir(root, 0, &mut visits)?;
    Ok(visits)
}

fn walk_dir(path: &Path, depth: usize, visits: &mut Vec<DirVisit>) -> io::Result<()> {
    let mut entries = std::fs::read_dir(path)?.collect::<io::Result<Vec<_>>>()?;
    entries.sort_by_key(|entry| entry.file_name());

    let mut files = Vec::new();
    let mut subdirs = Vec::new();
    for entry in entries {
        let entry_path = entry.path();
        if entry_path.is_dir() {
            // Never descend through a symlink; following one can loop forever.
            if !entry_path.is_symlink() {
                subdirs.push(entry_path);
            }
        } else {
            files.push(entry.file_name().to_string_lossy().to_string());
        }
    }

    visits.push(DirVisit {
        path: path.to_path_buf(),
        depth,
        files,
    });

    for subdir in subdirs {
        walk_dir(&subdir, depth + 1, visits)?;
    }

    Ok(())
}
