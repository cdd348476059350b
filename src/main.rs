//! amf2scad - AMF to OpenSCAD polyhedron converter
//!
//! Usage:
//!   amf2scad                  Convert Test.amf into Test_convert.scad
//!   amf2scad part.amf         Convert part.amf into part_convert.scad
//!   amf2scad part.amf -o x    Write to x instead
//!
//! Paste the three lines per mesh from the output into an OpenSCAD file.

use amf2scad::config::DEFAULT_INPUT;
use amf2scad::convert::{convert_file, convert_str, output_path_for};
use amf2scad::ConvertOptions;
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "amf2scad", version, about = "Convert AMF meshes into OpenSCAD polyhedra")]
struct Cli {
    /// AMF file to convert
    #[arg(default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Output file (defaults to <input stem>_convert.scad next to the input)
    #[arg(short, long, conflicts_with = "stdout")]
    output: Option<PathBuf>,

    /// Print the statements instead of writing a file
    #[arg(long)]
    stdout: bool,

    /// Log per-block details
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

fn init_tracing(cli: &Cli) {
    let level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let options = ConvertOptions::default();

    if cli.stdout {
        let text = std::fs::read_to_string(&cli.input)
            .with_context(|| format!("Failed to read {}", cli.input.display()))?;
        let conversion = convert_str(&text, &options)
            .with_context(|| format!("Failed to convert {}", cli.input.display()))?;
        print!("{}", conversion.render());
        return Ok(());
    }

    let output = match &cli.output {
        Some(path) => path.clone(),
        None => output_path_for(&cli.input)
            .with_context(|| format!("Cannot derive an output name from {}", cli.input.display()))?,
    };
    convert_file(&cli.input, &output, &options)
        .with_context(|| format!("Failed to convert {}", cli.input.display()))?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);
    run(&cli)
}
