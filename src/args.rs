use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    /// Render front matter as an HTML table
    Table(TableArgs),
    /// Print the document body without its front matter
    Strip(StripArgs),
    /// Render front matter as a sanitized vertical table
    Render(RenderArgs),
    /// Render the metadata table followed by the Markdown body
    Page(PageArgs),
}

#[derive(Args, Debug)]
pub struct CommonOpts {
    /// Write one output file per input into this directory
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
    /// Maximum input size in bytes
    #[arg(long, default_value_t = 10 * 1024 * 1024)]
    pub max_size: usize,
}

#[derive(Args, Debug)]
pub struct TableArgs {
    /// Table layout: horizontal or vertical
    #[arg(long, default_value = "vertical")]
    pub layout: String,
    /// Sanitize the generated markup
    #[arg(long)]
    pub sanitize: bool,
    #[command(flatten)]
    pub opts: CommonOpts,

    /// Input files or directories; stdin when empty
    pub files: Vec<PathBuf>,
}

#[derive(Args, Debug)]
pub struct StripArgs {
    #[command(flatten)]
    pub opts: CommonOpts,

    /// Input files or directories; stdin when empty
    pub files: Vec<PathBuf>,
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub opts: CommonOpts,

    /// Input files or directories; stdin when empty
    pub files: Vec<PathBuf>,
}

#[derive(Args, Debug)]
pub struct PageArgs {
    /// Body mode: gfm renders the stripped body, anything else the raw text
    #[arg(long, default_value = "gfm")]
    pub mode: String,
    /// Table layout: horizontal or vertical
    #[arg(long, default_value = "vertical")]
    pub layout: String,
    #[command(flatten)]
    pub opts: CommonOpts,

    /// Input files or directories; stdin when empty
    pub files: Vec<PathBuf>,
}
