use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

mod harness;
mod normalize;
mod simulator;

use harness::Case;
use simulator::Simulator;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    ", ",
    env!("GIT_DIRTY"),
    ")"
);

#[derive(Parser)]
#[command(name = "testsim")]
#[command(version, long_version = LONG_VERSION)]
#[command(about = "Run a program under ./vmshell and compare its output with an expected-output file")]
struct Cli {
    /// Program file, passed to the simulator as `--src <PROGRAM>`
    program: PathBuf,
    /// Text file holding the expected simulator output
    expected: PathBuf,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .init();

    let case = Case {
        program: cli.program,
        expected: cli.expected,
    };
    let outcome = harness::run(&case, &Simulator::default())?;
    println!("{}", outcome.indicator());
    Ok(ExitCode::from(outcome.exit_code()))
}
