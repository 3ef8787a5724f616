//! raycast: parse a scene description for the renderer.
//!
//! Validates the command line, parses the input scene and reports what it
//! found. Rendering itself is not implemented yet; the output path is checked
//! but not written.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use raycast_core::{parse_file, ParseOptions, SceneDocument, UnknownPropertyPolicy};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => log::LevelFilter::Trace,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Error => log::LevelFilter::Error,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "raycast")]
#[command(version)]
#[command(about = "Parse a raycast scene file")]
#[command(long_about = "
Parses a JSON-like scene description (an array of camera, sphere and plane
objects) and reports the objects it contains.

Example usage:
  raycast 640 480 scene.json out.json
  raycast 640 480 scene.json out.json --strict --dump-json
")]
struct Cli {
    /// Output image width in pixels
    width: u32,

    /// Output image height in pixels
    height: u32,

    /// Scene description to read (must be a .json file)
    input: PathBuf,

    /// Output path (must be a .json path)
    output: PathBuf,

    /// Set logging level (trace, debug, info, warn, error)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<LogLevel>,

    /// Fail on unknown properties instead of skipping them
    #[arg(long)]
    strict: bool,

    /// Treat a scene with no objects as an error
    #[arg(long)]
    reject_empty: bool,

    /// Print the parsed scene as JSON on stdout
    #[arg(long)]
    dump_json: bool,
}

impl Cli {
    fn parse_options(&self) -> ParseOptions {
        let policy = if self.strict {
            UnknownPropertyPolicy::Reject
        } else {
            UnknownPropertyPolicy::Skip
        };
        ParseOptions::new()
            .allow_empty_scene(!self.reject_empty)
            .unknown_properties(policy)
    }

    /// Checks clap cannot express.
    fn validate(&self) -> anyhow::Result<()> {
        if !has_json_extension(&self.input) {
            bail!("input file \"{}\" is not a json file", self.input.display());
        }
        if !has_json_extension(&self.output) {
            bail!("output file \"{}\" is not a json file", self.output.display());
        }
        Ok(())
    }
}

/// The path contains `.json` somewhere.
fn has_json_extension(path: &Path) -> bool {
    path.to_string_lossy().contains(".json")
}

fn init_logging(level: Option<LogLevel>) {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_level(level.into());
    }
    builder.init();
}

fn report(doc: &SceneDocument, cli: &Cli) {
    for warning in doc.warnings() {
        warn!("{}", warning);
    }

    info!(
        "{} objects ({} spheres, {} planes) for a {}x{} image",
        doc.len(),
        doc.spheres().count(),
        doc.planes().count(),
        cli.width,
        cli.height
    );
    match doc.camera() {
        Some(camera) => info!("camera viewport {} x {}", camera.width, camera.height),
        None => warn!("scene has no camera"),
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    cli.validate()?;

    let doc = parse_file(&cli.input, &cli.parse_options())
        .with_context(|| format!("failed to parse scene \"{}\"", cli.input.display()))?;
    report(&doc, cli);

    if cli.dump_json {
        let json = serde_json::to_string_pretty(doc.objects())?;
        println!("{}", json);
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            // Usage errors exit 1; --help and --version exit 0.
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    init_logging(cli.log_level);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
