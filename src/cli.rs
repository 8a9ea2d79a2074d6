use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "sonnet-search")]
#[command(about = "Interactive literal search over a corpus of sonnets", long_about = None)]
pub struct Cli {
    /// JSON corpus to search instead of the cached or built-in one
    #[arg(short, long)]
    pub corpus: Option<PathBuf>,

    /// Settings file (default: <config dir>/sonnet-search/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
