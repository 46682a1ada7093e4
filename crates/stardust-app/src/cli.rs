use std::path::PathBuf;

use clap::Parser;

/// Stardust: an animated point-cloud viewer.
#[derive(Parser, Debug)]
#[command(name = "stardust", version, about)]
pub struct Args {
    /// TOML file overriding any subset of the built-in settings.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter directive (e.g. "stardust=debug", "warn").
    #[arg(long)]
    pub log_level: Option<String>,

    /// Seed for point generation; overrides the config file.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Stop after rendering this many frames.
    #[arg(long)]
    pub frames: Option<u64>,

    /// Render without a window or GPU.
    #[arg(long)]
    pub headless: bool,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
