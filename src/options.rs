//! Collect all functions and structs that are used to parse the command line arguments.
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Default, Parser)]
#[clap(
    name = "dirtree",
    about = "Print the directories (and optionally files with sizes) below a path as a tree"
)]
/// Arguments to the application.
pub struct Options {
    #[clap(value_parser)]
    /// Path to the directory to traverse into
    pub path: PathBuf,

    #[clap(short = 'f', long)]
    /// Also list files, each followed by its size
    pub files: bool,
}
