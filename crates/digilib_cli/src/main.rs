//! digilib CLI: synthesizes combinational components and prints their
//! equations.
//!
//! Provides `digilib synth` for a single component, `digilib table` for an
//! exhaustive truth table, and `digilib build` for every component declared
//! in a `digilib.toml` manifest.

#![warn(missing_docs)]

mod build;
mod report;
mod synth;
mod table;

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand, ValueEnum};
use digilib_config::{ComponentDecl, OutputFormat};
use digilib_ir::{ComponentKind, ComponentSpec};
use tracing_subscriber::EnvFilter;

/// digilib: a library of synthesized combinational logic components.
#[derive(Parser, Debug)]
#[command(name = "digilib", version, about = "Combinational component library")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Enable verbose (debug-level) output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Synthesize one component and print its lines and equations.
    Synth(SynthArgs),
    /// Print the exhaustive truth table of one component.
    Table(TableArgs),
    /// Synthesize every component declared in a manifest.
    Build(BuildArgs),
}

/// Kind and width of a single component, shared by `synth` and `table`.
#[derive(Args, Debug)]
pub struct ComponentArgs {
    /// Component kind (half_adder, full_adder, mux, demux, encoder, decoder).
    pub kind: ComponentKind,

    /// Channel count `N` (must be a power of two).
    #[arg(short, long, conflicts_with = "address_bits")]
    pub lines: Option<u64>,

    /// Address width `n`, giving `N = 2^n` channels.
    #[arg(short, long)]
    pub address_bits: Option<u32>,

    /// Instance name (defaults to the kind).
    #[arg(long)]
    pub name: Option<String>,
}

impl ComponentArgs {
    /// Instance name, falling back to the kind name.
    pub fn name(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| self.kind.as_str().to_string())
    }

    /// Validates the flags the same way a manifest entry is validated.
    pub fn spec(&self) -> Result<ComponentSpec, digilib_config::ConfigError> {
        let decl = ComponentDecl {
            name: self.name(),
            kind: self.kind,
            lines: self.lines,
            address_bits: self.address_bits,
        };
        digilib_config::resolve_component(&decl).map(|resolved| resolved.spec)
    }
}

/// Arguments for the `digilib synth` subcommand.
#[derive(Args, Debug)]
pub struct SynthArgs {
    /// The component to build.
    #[command(flatten)]
    pub component: ComponentArgs,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Print line names as `<component>.<line>`.
    #[arg(long)]
    pub qualify: bool,
}

/// Arguments for the `digilib table` subcommand.
#[derive(Args, Debug)]
pub struct TableArgs {
    /// The component to tabulate.
    #[command(flatten)]
    pub component: ComponentArgs,
}

/// Arguments for the `digilib build` subcommand.
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Manifest file, or a directory containing `digilib.toml`
    /// (default: the current directory).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write the report to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override the manifest's output format.
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

/// Report output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable text.
    Text,
    /// Machine-readable JSON.
    Json,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => ReportFormat::Text,
            OutputFormat::Json => ReportFormat::Json,
        }
    }
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Whether to print verbose/debug information.
    pub verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let global = GlobalArgs {
        quiet: cli.quiet,
        verbose: cli.verbose,
    };
    init_tracing(&global);

    let result = match cli.command {
        Command::Synth(ref args) => synth::run(args, &global),
        Command::Table(ref args) => table::run(args, &global),
        Command::Build(ref args) => build::run(args, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

/// Installs the stderr subscriber. `--verbose` and `--quiet` override
/// `RUST_LOG`.
fn init_tracing(global: &GlobalArgs) {
    let filter = if global.verbose {
        EnvFilter::new("debug")
    } else if global.quiet {
        EnvFilter::new("error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
