//! CLI entry point for dirscribe

use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use dirscribe::DEFAULT_OUTPUT_NAME;

#[derive(Parser, Debug)]
#[command(name = "dirscribe")]
#[command(about = "Writes an indented listing of a directory tree to a text file")]
#[command(version)]
struct Args {
    /// Directory to list (defaults to the directory containing this executable)
    root: Option<PathBuf>,

    /// File the report is written to
    #[arg(short, long, default_value = DEFAULT_OUTPUT_NAME)]
    output: PathBuf,
}

fn main() {
    let args = Args::parse();

    let root = match args.root {
        Some(path) if path.is_absolute() => path,
        Some(path) => std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path),
        None => match exe_dir() {
            Ok(dir) => dir,
            Err(e) => {
                eprintln!("dirscribe: cannot locate own executable: {}", e);
                process::exit(1);
            }
        },
    };

    if let Err(e) = dirscribe::generate_report(&root, &args.output) {
        eprintln!("dirscribe: error writing report: {}", e);
        process::exit(1);
    }
}

/// Directory containing the running executable, the default listing root.
fn exe_dir() -> io::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    match exe.parent() {
        Some(dir) => Ok(dir.to_path_buf()),
        None => Err(io::Error::new(
            io::ErrorKind::NotFound,
            "executable path has no parent directory",
        )),
    }
}
