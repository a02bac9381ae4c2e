//! Command-line arguments of the `orbiter` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::OrbiterConfig;
use crate::time::TimeUnit;

/// Keplerian orbit sampler.
///
/// CLI values override settings loaded from the RON config.
#[derive(Parser, Debug)]
#[command(name = "orbiter", about = "Sample a Keplerian elliptical orbit")]
pub struct CliArgs {
    /// Path to a RON config file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Average orbit radius.
    #[arg(long, global = true)]
    pub radius: Option<f64>,

    /// Eccentricity, in [0, 1).
    #[arg(long, global = true)]
    pub eccentricity: Option<f64>,

    /// Rotation of the major axis, degrees.
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub rotation: Option<f64>,

    /// Mass of the central body.
    #[arg(long, global = true)]
    pub mass: Option<f64>,

    /// Unit of the time values.
    #[arg(long, global = true, value_enum)]
    pub time_unit: Option<TimeUnit>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Write the closed ellipse outline as CSV.
    Outline {
        /// Number of angle steps (the output has one more point).
        #[arg(long)]
        samples: Option<usize>,

        /// Output file, stdout when omitted.
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Write per-frame position and speed as CSV.
    Frames {
        /// First frame epoch, e.g. "2024-03-01T12:00:00 UTC", or "now".
        #[arg(long, default_value = "now")]
        start: String,

        /// Number of frames.
        #[arg(long, default_value_t = 30)]
        count: usize,

        /// Frames per second.
        #[arg(long)]
        fps: Option<f64>,

        /// Output file, stdout when omitted.
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Write the default config as RON.
    InitConfig {
        /// Destination file.
        path: PathBuf,
    },
}

impl OrbiterConfig {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(r) = args.radius {
            self.orbit.average_radius = r;
        }
        if let Some(e) = args.eccentricity {
            self.orbit.eccentricity = e;
        }
        if let Some(rot) = args.rotation {
            self.orbit.rotation = rot;
        }
        if let Some(m) = args.mass {
            self.central_mass = m;
        }
        if let Some(unit) = args.time_unit {
            self.time_unit = unit;
        }
        if let Some(ref level) = args.log_level {
            self.log_level = level.clone();
        }
        match &args.command {
            Command::Outline {
                samples: Some(n), ..
            } => self.outline_samples = *n,
            Command::Frames { fps: Some(f), .. } => self.frame_rate = *f,
            _ => {}
        }
    }
}
