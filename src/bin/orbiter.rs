use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use orbiter::cli::{CliArgs, Command};
use orbiter::config::OrbiterConfig;
use orbiter::logging::init_logging;
use orbiter::orbiter_errors::OrbitError;
use orbiter::time::{parse_epoch, FrameClock};
use orbiter::trace::{render_frames, write_frames, write_outline};

fn output_writer(path: Option<&Path>) -> Result<Box<dyn Write>, OrbitError> {
    Ok(match path {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout().lock()),
    })
}

fn run(args: CliArgs) -> Result<(), OrbitError> {
    let mut config = match &args.config {
        Some(path) => OrbiterConfig::load_or_default(path)?,
        None => OrbiterConfig::default(),
    };
    config.apply_cli_overrides(&args);
    init_logging(Some(&config.log_level));

    match &args.command {
        Command::InitConfig { path } => {
            config.save(path)?;
            info!(path = %path.display(), "config written");
        }
        Command::Outline { output, .. } => {
            let orbit = config.geometry()?;
            let outline = orbit.outline(config.outline_samples);
            write_outline(output_writer(output.as_deref())?, &outline)?;
        }
        Command::Frames {
            start,
            count,
            output,
            ..
        } => {
            let orbit = config.geometry()?;
            let epoch = parse_epoch(start)?;
            let clock = FrameClock::from_epoch(epoch, config.frame_rate, config.time_unit)?;
            info!(
                %epoch,
                period = orbit.period(config.central_mass)?,
                frames = count,
                "sampling frames"
            );

            let report = render_frames(&orbit, config.central_mass, clock.ticks(*count));
            write_frames(output_writer(output.as_deref())?, &report.states)?;
            if !report.skipped.is_empty() {
                info!(skipped = report.skipped.len(), "some frames were skipped");
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = CliArgs::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // logging may not be installed yet if the config failed to load
            init_logging(None);
            error!(%err, "orbiter failed");
            ExitCode::FAILURE
        }
    }
}
