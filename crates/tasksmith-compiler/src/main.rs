use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tasksmith_compiler::config::{self, CompilerConfig, Mode};
use tasksmith_compiler::{pipeline, TracingProgress};
use tasksmith_core::TaskRecord;
use tracing::{error, info};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match CompilerConfig::try_parse() {
        Ok(config) => config,
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(config::usage_exit_status(&e));
        }
    };

    match run(&config) {
        Ok(code) => code,
        Err(e) => {
            error!("Error during conversion: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &CompilerConfig) -> Result<ExitCode> {
    match config.mode()? {
        Mode::Check => check(config),
        Mode::Json => {
            let records = compile(config)?;
            println!("{}", pipeline::render_json(&records)?);
            Ok(ExitCode::SUCCESS)
        }
        Mode::File(output) => {
            let records = compile(config)?;
            pipeline::write_records(&output, &records)?;
            info!(
                "converted markdown to {} validation tasks, saved to '{}'",
                records.len(),
                output.display()
            );
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn compile(config: &CompilerConfig) -> Result<Vec<TaskRecord>> {
    let environment = config.environment()?;
    info!("processing '{}'", config.input.display());
    Ok(pipeline::compile_file(&config.input, &environment, &TracingProgress)?)
}

fn check(config: &CompilerConfig) -> Result<ExitCode> {
    let report = pipeline::check_file(&config.input, &TracingProgress)?;
    if report.is_valid() {
        info!("'{}' is a valid task file", config.input.display());
        return Ok(ExitCode::SUCCESS);
    }
    for message in report.errors() {
        error!("{message}");
    }
    Ok(ExitCode::FAILURE)
}
