use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "resize-pngs",
    version,
    about = "Batch downsample PNG images into a mirrored destination directory"
)]
pub struct CliArgs {
    /// Source directory containing PNG files
    #[arg(long)]
    pub src: PathBuf,

    /// Destination directory for resized PNGs
    #[arg(long)]
    pub dst: PathBuf,

    /// Downsampling factor applied to both axes (e.g. 4: 4096x3000 -> 1024x750)
    #[arg(long, default_value_t = 4)]
    pub scale: u32,

    /// Number of parallel worker threads (0 or 1 = sequential)
    #[arg(long, default_value_t = 0)]
    pub workers: usize,

    /// Recursively search for PNGs in subdirectories
    #[arg(long, default_value_t = false)]
    pub recursive: bool,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
