use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info, warn};
use std::io::{Read, Write};
use std::path::PathBuf;

use mattertable::{
    args::{Commands, CommonOpts},
    core::Layout,
    io::{output_path, read_input, resolve_files, write_output, ReaderConfig},
    page::{render_page, BodyMode, PageOptions},
    render::{render_metadata_with_selector, strip_metadata_from_text, MetadataRenderer},
    sanitize::Sanitizer,
};

#[derive(Parser)]
#[command(name = "mattertable", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let sanitizer = Sanitizer::ugc();
    let renderer = MetadataRenderer::new(&sanitizer);

    match cli.command {
        Commands::Table(args) => {
            warn_unknown_layout(&args.layout);
            run(&args.files, &args.opts, "html", |raw| {
                let table = render_metadata_with_selector(raw, &args.layout);
                if args.sanitize {
                    sanitizer.sanitize_bytes(&table)
                } else {
                    table.into_owned()
                }
            })
        }
        Commands::Strip(args) => run(&args.files, &args.opts, "md", |raw| {
            strip_metadata_from_text(raw).into_owned()
        }),
        Commands::Render(args) => run(&args.files, &args.opts, "html", |raw| {
            renderer.render_sanitized(raw)
        }),
        Commands::Page(args) => {
            warn_unknown_layout(&args.layout);
            let options = PageOptions {
                mode: args.mode.parse::<BodyMode>().unwrap_or_default(),
                layout: args.layout.clone(),
            };
            debug!("Page options: {:?}", options);
            run(&args.files, &args.opts, "html", |raw| {
                render_page(&renderer, raw, &options)
            })
        }
    }
}

fn warn_unknown_layout(selector: &str) {
    if let Err(e) = selector.parse::<Layout>() {
        warn!("{}; front matter will not be rendered as a table", e);
    }
}

/// Apply `transform` to every input and emit the results
fn run<F>(files: &[PathBuf], opts: &CommonOpts, extension: &str, transform: F) -> Result<()>
where
    F: Fn(&[u8]) -> Vec<u8>,
{
    let mut stdout = std::io::stdout().lock();

    if files.is_empty() {
        if opts.out_dir.is_some() {
            warn!("--out-dir is ignored when reading from stdin");
        }
        let mut raw = Vec::new();
        std::io::stdin()
            .read_to_end(&mut raw)
            .context("failed to read stdin")?;
        if raw.len() > opts.max_size {
            anyhow::bail!(
                "Input too large: {} bytes (limit: {} bytes)",
                raw.len(),
                opts.max_size
            );
        }
        stdout.write_all(&transform(&raw))?;
        return Ok(());
    }

    let inputs = resolve_files(files);
    if inputs.is_empty() {
        warn!("No files found to process");
        return Ok(());
    }

    let config = ReaderConfig {
        max_file_size: Some(opts.max_size),
    };
    for file in &inputs {
        debug!("Processing file: {}", file.display());
        let raw = read_input(file, &config)
            .with_context(|| format!("failed to read {}", file.display()))?;
        let output = transform(&raw);

        match &opts.out_dir {
            Some(dir) => {
                let target = output_path(dir, file, extension);
                write_output(&target, &output)
                    .with_context(|| format!("failed to write {}", target.display()))?;
                info!("Wrote: {}", target.display());
            }
            None => stdout.write_all(&output)?,
        }
    }

    info!("Processed {} files", inputs.len());
    Ok(())
}
