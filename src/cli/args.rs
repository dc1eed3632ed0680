use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "bgstrip",
    version,
    about = "Make near-white image backgrounds transparent and save as PNG"
)]
pub struct CliArgs {
    /// Input image (single file mode)
    #[arg(short, long, conflicts_with = "input_dir")]
    pub input: Option<PathBuf>,

    /// Output PNG (single file mode); defaults to the input name with .png
    #[arg(short, long, requires = "input")]
    pub output: Option<PathBuf>,

    /// Directory of images to process (batch mode, default: public/image)
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Write outputs here instead of next to each input
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Whitening threshold: pixels with R, G and B all above it become transparent
    #[arg(short, long)]
    pub threshold: Option<u8>,

    /// Extensions considered in batch mode, comma separated (e.g. png,jpg,jpeg)
    #[arg(long, value_delimiter = ',')]
    pub extensions: Option<Vec<String>>,

    /// JSON config file; explicit flags take precedence
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
