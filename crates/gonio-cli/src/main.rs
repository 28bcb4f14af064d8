//! gonio CLI: shoulder position and arm length from hand sweeps.

use std::fs;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use gonio_cli::config::{load_config, RunConfig};
use gonio_cli::input::{load_samples, parse_vec3};
use gonio_cli::runner::{run_session, synthetic_samples, LogObserver};
use gonio_cli::CliError;
use gonio_core::math::arm_angle;
use gonio_core::session::SessionReport;
use gonio_core::Vec3;

#[derive(Parser)]
#[command(name = "gonio")]
#[command(about = "Estimate shoulder position and arm length from tracked hand sweeps")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a measurement session over recorded or synthetic samples.
    Run(RunArgs),

    /// Print the arm angle of a hand position relative to a shoulder.
    Angle {
        /// Hand position as x,y,z [m].
        #[arg(long, value_parser = parse_vec3_arg, allow_hyphen_values = true)]
        hand: Vec3,

        /// Shoulder position as x,y,z [m].
        #[arg(long, value_parser = parse_vec3_arg, allow_hyphen_values = true)]
        shoulder: Vec3,
    },
}

#[derive(Debug, Clone, Args)]
struct RunArgs {
    /// Runner configuration (JSON). Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Recorded hand samples (JSON array of [x, y, z]). A synthetic sweep is
    /// generated when omitted.
    #[arg(long)]
    samples: Option<PathBuf>,

    /// Reference point for outlier rejection as x,y,z, e.g. the head position.
    #[arg(long, value_parser = parse_vec3_arg, allow_hyphen_values = true)]
    reference: Option<Vec3>,

    /// Random seed, overriding the configuration.
    #[arg(long)]
    seed: Option<u64>,

    /// Path to write the session report (JSON).
    #[arg(long)]
    json_out: Option<PathBuf>,
}

fn parse_vec3_arg(text: &str) -> Result<Vec3, String> {
    parse_vec3(text).map_err(|e| e.to_string())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run(args) => run(args),
        Commands::Angle { hand, shoulder } => {
            println!("{:.1}", arm_angle(&hand, &shoulder));
            Ok(())
        }
    };

    if let Err(err) = result {
        log::error!("{err}");
        std::process::exit(1);
    }
}

fn run(args: RunArgs) -> Result<(), CliError> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => RunConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if args.reference.is_some() {
        config.reference = args.reference;
    }

    let (samples, reference) = match &args.samples {
        Some(path) => {
            log::info!("Loading samples: {}", path.display());
            let samples = load_samples(path)?;
            let reference = config.reference.ok_or(CliError::MissingReference)?;
            (samples, reference)
        }
        None => {
            log::info!(
                "Generating synthetic sweep: shoulder [{:.2}, {:.2}, {:.2}], arm length {:.2} m",
                config.sweep.shoulder.x,
                config.sweep.shoulder.y,
                config.sweep.shoulder.z,
                config.sweep.arm_length
            );
            (synthetic_samples(&config), config.synthetic_reference())
        }
    };

    let mut observer = LogObserver::default();
    let report = run_session(&config, &samples, &reference, &mut observer);

    print_summary(&report, samples.last());

    if let Some(path) = &args.json_out {
        let json = serde_json::to_string_pretty(&report)?;
        fs::write(path, json).map_err(|source| CliError::Io {
            path: path.clone(),
            source,
        })?;
        log::info!("Report written to {}", path.display());
    }

    Ok(())
}

fn print_summary(report: &SessionReport, last_sample: Option<&Vec3>) {
    for message in &report.messages {
        println!("{message}");
    }

    println!(
        "samples: {} received, {} recorded",
        report.samples_received, report.samples_recorded
    );

    match report.batch.center {
        Some(c) => println!("shoulder (4d matrix): [{:.3}, {:.3}, {:.3}]", c.x, c.y, c.z),
        None => println!("shoulder (4d matrix): none"),
    }

    match &report.incremental {
        Some(circle) => println!(
            "shoulder (3d matrix): [{:.3}, {:.3}, {:.3}], arm length {:.3} m",
            circle.center.x, circle.center.y, circle.center.z, circle.radius
        ),
        None => println!("shoulder (3d matrix): none"),
    }

    if let Some(angle) = last_sample.and_then(|hand| report.arm_angle(hand)) {
        println!("arm angle at last sample: {angle:.1} deg");
    }
}
