//! `recover`: reconstruct threshold secrets from JSON test cases.

mod args;
mod config;
mod output;

use std::fs;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use recovery_core::{wire, Reconstructor, TestCase};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::args::Cli;

const SAMPLES: [&str; 2] = [
    include_str!("../samples/case1.json"),
    include_str!("../samples/case2.json"),
];

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_cases(cli: &Cli) -> Result<Vec<TestCase>> {
    if cli.inputs.is_empty() {
        info!("no input files, using bundled samples");
        let mut cases = Vec::new();
        for sample in SAMPLES {
            cases.extend(wire::parse_cases(sample).context("bundled sample")?);
        }
        return Ok(cases);
    }

    let mut cases = Vec::new();
    for path in &cli.inputs {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let parsed = wire::parse_cases(&text)
            .with_context(|| format!("parsing {}", path.display()))?;
        info!(path = %path.display(), cases = parsed.len(), "loaded test cases");
        cases.extend(parsed);
    }
    Ok(cases)
}

fn run(cli: &Cli) -> Result<bool> {
    let config = config::load(cli)?;
    let cases = load_cases(cli)?;
    let reconstructor = Reconstructor::new(config)?;
    let render = output::Render {
        format: cli.format,
        echo_base: cli.echo_base,
    };

    let mut all_ok = true;
    for (i, outcome) in reconstructor.reconstruct_all(&cases).iter().enumerate() {
        if let Err(err) = outcome {
            error!(case = i + 1, "{err}");
            all_ok = false;
        }
        println!("{}", render.case(i + 1, outcome)?);
    }
    Ok(all_ok)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
