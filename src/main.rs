//! Wunderlist to Org Mode converter - Main Entry Point
//!
//! This is the main entry point for the converter application.
//! The actual implementation is in the `wunder2org` library.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use std::io::Write;
use std::path::PathBuf;
use wunder2org::{Storage, formatting, logging, outline};

/// Convert a Wunderlist export into an Org Mode outline on stdout
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the Wunderlist export file (JSON)
    file: PathBuf,
}

fn main() -> Result<()> {
    // Check if no arguments were provided (except the program name)
    if std::env::args_os().len() == 1 {
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!();
        std::process::exit(2);
    }

    let args = Args::parse();
    logging::init();

    let storage = Storage::new(&args.file);
    let export = storage
        .load()
        .with_context(|| format!("failed to convert '{}'", storage.path().display()))?;

    let entries = outline::map_export(&export);
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(formatting::render(&entries).as_bytes())?;
    stdout.flush()?;
    Ok(())
}
