//! ansible-spec — generate Ansible module skeletons from YAML spec files.
//!
//! `ansible-spec compile spec.yaml --output library/ping.py` renders the
//! module in a fixed section order:
//!
//! 1. **Shebang** and **license** header
//! 2. **ANSIBLE_METADATA**
//! 3. **DOCUMENTATION**, **EXAMPLES** and **RETURN** blocks
//! 4. **Imports** and the `main()` **body** with its `argument_spec`
//!
//! Any invalid input aborts the run before anything is written.

mod buffer;
mod error;
mod loader;
mod model;
mod render;
mod wrap;

use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand};
use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "ansible-spec",
    version,
    about = "Generate Ansible modules from spec files",
    disable_help_subcommand = true
)]
struct Cli {
    /// Enable debug output
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Display this help message
    Help,
    /// Compile a spec file into a module skeleton
    Compile(CompileArgs),
}

#[derive(Args)]
struct CompileArgs {
    /// Input spec file to process
    spec: PathBuf,

    /// Module author field in the format of First Last (@GithubId)
    #[arg(long)]
    author: Option<String>,

    /// Module version_added field value in the form of X.Y
    #[arg(long)]
    version_added: Option<String>,

    /// Filename to write output to (default: stdout)
    #[arg(long)]
    output: Option<PathBuf>,
}

impl CompileArgs {
    fn invocation_options(&self) -> model::InvocationOptions {
        model::InvocationOptions {
            author: self.author.clone(),
            version_added: self.version_added.clone(),
            output: self.output.clone(),
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let result = match cli.command {
        Command::Help => print_help(),
        Command::Compile(ref args) => compile(args),
    };

    if let Err(err) = result {
        error!("{:#}", err);
        process::exit(1);
    }
}

/// Log to stderr so generated code on stdout stays clean.
///
/// `RUST_LOG` wins over `--debug`; the default shows errors only.
fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "error" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .init();
}

fn print_help() -> Result<()> {
    Cli::command()
        .print_long_help()
        .context("failed to print help")
}

/// Load the spec, render every section, then write the result in one go.
fn compile(args: &CompileArgs) -> Result<()> {
    let doc = loader::load(&args.spec)?;
    let options = args.invocation_options();
    let contents = render::compile(&doc, &options)?;

    match options.output {
        Some(ref path) => {
            fs::write(path, &contents)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), bytes = contents.len(), "wrote module");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(contents.as_bytes())
                .context("failed to write to stdout")?;
            stdout.flush().context("failed to flush stdout")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn compile_flags() {
        let cli = Cli::try_parse_from([
            "ansible-spec",
            "compile",
            "ping.yaml",
            "--author",
            "Jane Doe (@jdoe)",
            "--version-added",
            "2.4",
            "--output",
            "ping.py",
        ])
        .unwrap();
        let Command::Compile(args) = cli.command else {
            panic!("expected compile");
        };
        let options = args.invocation_options();
        assert_eq!(args.spec, PathBuf::from("ping.yaml"));
        assert_eq!(options.author.as_deref(), Some("Jane Doe (@jdoe)"));
        assert_eq!(options.version_added.as_deref(), Some("2.4"));
        assert_eq!(options.output, Some(PathBuf::from("ping.py")));
    }

    #[test]
    fn debug_flag_is_global() {
        let cli = Cli::try_parse_from(["ansible-spec", "compile", "x.yaml", "--debug"]).unwrap();
        assert!(cli.debug);
    }

    #[test]
    fn spec_path_is_required() {
        assert!(Cli::try_parse_from(["ansible-spec", "compile"]).is_err());
    }

    #[test]
    fn help_subcommand() {
        let cli = Cli::try_parse_from(["ansible-spec", "help"]).unwrap();
        assert!(matches!(cli.command, Command::Help));
    }
}
