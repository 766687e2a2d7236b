//! Report formatting and persistence.
//!
//! A report is a plain-text listing: a header naming the walked root, a
//! blank line, then one `[D]` line per directory and one `[F]` line per
//! file, indented four spaces per tree level.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::walk::{DirVisit, walk};

/// Output filename used when the caller does not pick one.
pub const DEFAULT_OUTPUT_NAME: &str = "directory_structure.txt";

/// One indentation step per tree level.
const INDENT: &str = "    ";

/// Stream the indented listing of the tree under `root` into `out`.
///
/// The header names `root` exactly as given; callers wanting an absolute
/// header pass an absolute path.
pub fn write_report(root: &Path, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Directory Structure of: {}", root.display())?;
    writeln!(out)?;

    for visit in walk(root)? {
        write_visit(out, &visit)?;
    }
    Ok(())
}

fn write_visit(out: &mut impl Write, visit: &DirVisit) -> io::Result<()> {
    writeln!(
        out,
        "{}[D] {}",
        INDENT.repeat(visit.depth),
        dir_label(&visit.path)
    )?;
    for file in &visit.files {
        writeln!(out, "{}[F] {}", INDENT.repeat(visit.depth + 1), file)?;
    }
    Ok(())
}

/// Base name shown on a directory's own `[D]` line.
fn dir_label(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| ".".to_string())
}

/// Walk `root` and write its listing to `output_path`, replacing any
/// previous report, then print a confirmation line on stdout.
///
/// The file handle is released on every exit path. On failure the error
/// propagates, no confirmation is printed, and the file may be left
/// empty or truncated.
pub fn generate_report(root: &Path, output_path: &Path) -> io::Result<()> {
    let file = File::create(output_path)?;
    let mut out = BufWriter::new(file);
    write_report(root, &mut out)?;
    out.flush()?;

    println!("Directory structure written to {}", output_path.display());
    Ok(())
}
