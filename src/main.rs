//! Filekit CLI - file, directory and regex helpers

use anyhow::Context;
use clap::Parser;
use filekit::cli::Args;
use filekit::{execute_command, format_output, ExecutionContext, OutputFormat};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() {
    let args = Args::parse();

    match run(args) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

fn run(args: Args) -> anyhow::Result<bool> {
    let log_level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to install the log subscriber")?;

    let ctx = ExecutionContext {
        output_format: OutputFormat::from_json_flag(args.json),
    };

    let result = execute_command(&args.command)?;
    let rendered = format_output(&result, &ctx.output_format);
    if !rendered.is_empty() {
        println!("{}", rendered);
    }

    Ok(result.is_success())
}
