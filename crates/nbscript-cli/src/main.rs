//! nbscript: edit Jupyter notebooks as percent-format scripts
//!
//! Each subcommand drives the same lifecycle handlers an editor integration
//! would, with a file standing in for the editor buffer.

mod host;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use host::FileHost;
use nbscript_config::Config;
use nbscript_engine::{
    EncodeOptions, FsNotebookWriter, HookOutcome, Lifecycle, SerializeOptions, normalize,
};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "nbscript")]
#[command(about = "Convert Jupyter notebooks to and from percent-format scripts")]
#[command(version)]
struct Cli {
    /// Config file (defaults to ~/.config/nbscript/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a notebook as a percent script
    ToScript {
        notebook: PathBuf,

        /// Write the script here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write a percent script out as a notebook
    ToNotebook {
        script: PathBuf,

        /// Notebook path (defaults to the script path with an .ipynb extension)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the normalized script once the notebook is written
        #[arg(long)]
        print: bool,
    },

    /// Re-format a script the way a save and reopen would
    Normalize {
        script: PathBuf,

        /// Rewrite the file instead of printing to stdout
        #[arg(long)]
        in_place: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(cli.config.as_deref())?;
    let options = SerializeOptions {
        merge_code_cells: config.script.merge_code_cells,
    };

    match cli.command {
        Command::ToScript { notebook, output } => {
            to_script(&lifecycle(&config, options), &notebook, output.as_deref())
        }
        Command::ToNotebook {
            script,
            output,
            print,
        } => to_notebook(&lifecycle(&config, options), &script, output, print),
        Command::Normalize { script, in_place } => normalize_script(&script, in_place, &options),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    // RUST_LOG, when set, overrides the -v level
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let Some(path) = explicit else {
        return Ok(Config::load()?.unwrap_or_default());
    };

    let path = Config::expand_path(path);
    match Config::load_from_path(&path)? {
        Some(config) => Ok(config),
        None => bail!("Config file not found: {}", path.display()),
    }
}

fn lifecycle(config: &Config, options: SerializeOptions) -> Lifecycle<FsNotebookWriter> {
    let writer = FsNotebookWriter::new(
        EncodeOptions {
            indent: config.notebook.indent,
        },
        config.notebook.keep_metadata,
    );
    Lifecycle::with_options(writer, options)
}

fn to_script(
    lifecycle: &Lifecycle<FsNotebookWriter>,
    notebook: &Path,
    output: Option<&Path>,
) -> Result<()> {
    if !Lifecycle::<FsNotebookWriter>::handles(notebook) {
        log::warn!("{} does not have an .ipynb extension", notebook.display());
    }

    let mut host = FileHost::open(notebook)
        .with_context(|| format!("Failed to read {}", notebook.display()))?;

    if lifecycle.on_open(&mut host) == HookOutcome::Failed {
        bail!(host.errors().join("\n"));
    }

    write_output(output, &host.text())
}

fn to_notebook(
    lifecycle: &Lifecycle<FsNotebookWriter>,
    script: &Path,
    output: Option<PathBuf>,
    print: bool,
) -> Result<()> {
    let content = fs::read_to_string(script)
        .with_context(|| format!("Failed to read {}", script.display()))?;
    let destination = output.unwrap_or_else(|| script.with_extension("ipynb"));
    if !Lifecycle::<FsNotebookWriter>::handles(&destination) {
        bail!(
            "Notebook path must have an .ipynb extension: {}",
            destination.display()
        );
    }

    let mut host = FileHost::with_content(&destination, &content);
    if lifecycle.on_save_pre(&mut host) == HookOutcome::Failed {
        bail!(host.errors().join("\n"));
    }
    log::debug!(
        "buffer writable again after save: {}",
        host.is_modifiable()
    );

    if lifecycle.on_save_post(&mut host) == HookOutcome::Failed {
        bail!(host.errors().join("\n"));
    }

    if print {
        write_output(None, &host.text())?;
    }
    Ok(())
}

fn normalize_script(script: &Path, in_place: bool, options: &SerializeOptions) -> Result<()> {
    let content = fs::read_to_string(script)
        .with_context(|| format!("Failed to read {}", script.display()))?;
    let normalized = normalize(&content, options);

    if in_place {
        write_output(Some(script), &normalized)
    } else {
        write_output(None, &normalized)
    }
}

fn write_output(output: Option<&Path>, text: &str) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))
        }
        None => {
            print!("{text}");
            Ok(())
        }
    }
}
