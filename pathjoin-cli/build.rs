//! Build script for pathjoin-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("pathjoin")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Join, normalize and resolve paths lexically")
        .long_about(
            "Command-line tool for joining, normalizing and resolving Unix and Windows paths \
             without touching the filesystem",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .subcommands(vec![
            Command::new("join")
                .about("Join and normalize paths")
                .long_about("Join path arguments with '/' and resolve '.' and '..' segments"),
            Command::new("resolve")
                .about("Resolve paths to an absolute path")
                .long_about(
                    "Join path arguments onto the current directory unless the first is absolute",
                ),
            Command::new("is-absolute")
                .about("Check whether a path is absolute")
                .long_about("Print whether a path is absolute in Unix or Windows style"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("pathjoin.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
