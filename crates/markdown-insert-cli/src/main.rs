use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use markdown_insert_config::Config;
use markdown_insert_engine::{LineOrder, Pipeline, Splicer, io, render_html};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Insert the contents of other files into a markdown document.
///
/// A line reading `&[<ranges>](<file>)` is replaced by the lines of <file>
/// named in <ranges> (1-based, e.g. `1-4 7 10-12`), or by the whole file
/// when <ranges> is empty. The marker's indentation is applied to every
/// inserted line.
#[derive(Parser)]
#[command(name = "markdown-insert", version, long_about)]
struct Cli {
    /// Markdown document to process; reads stdin when omitted or `-`
    input: Option<PathBuf>,

    /// Write the result here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Directory that marker file references are relative to
    #[arg(short, long)]
    base_path: Option<String>,

    /// Config file to use instead of ~/.config/markdown-insert/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// How ranges pick lines: in file order, or in the order written
    #[arg(long, value_enum)]
    line_order: Option<LineOrderArg>,

    /// Render the result to HTML
    #[arg(long)]
    html: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum LineOrderArg {
    Source,
    Listed,
}

impl From<LineOrderArg> for LineOrder {
    fn from(arg: LineOrderArg) -> Self {
        match arg {
            LineOrderArg::Source => LineOrder::Source,
            LineOrderArg::Listed => LineOrder::Listed,
        }
    }
}

/// Flags win over the config file, which wins over built-in defaults.
fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from_path(path)?
            .with_context(|| format!("Config file not found: {}", path.display()))?,
        None => Config::load()?.unwrap_or_default(),
    };

    if let Some(base_path) = &cli.base_path {
        config.base_path = base_path.clone();
    }
    if let Some(line_order) = cli.line_order {
        config.line_order = line_order.into();
    }

    Ok(config)
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path != Path::new("-") => io::read_document(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = resolve_config(&cli)?;
    log::info!(
        "Base path: {}, line order: {}",
        config.base_path,
        config.line_order
    );

    let text = read_input(cli.input.as_deref())?;
    let pipeline = Pipeline::with_splicer(Splicer::new(config.splicer_config()));
    let mut result = pipeline.run(&text)?;
    if cli.html {
        result = render_html(&result);
    }

    match &cli.output {
        Some(path) => {
            io::write_document(path, &result)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("Wrote {}", path.display());
        }
        None => print!("{result}"),
    }

    Ok(())
}
