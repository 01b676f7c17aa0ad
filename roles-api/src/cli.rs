use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
pub struct Cli {
    /// The path to the directory where role entries are persisted
    #[clap(long)]
    pub storage_path: PathBuf,
}
