//! Beach Paradise - native entry point

use std::path::PathBuf;
use std::process::ExitCode;

use beach_paradise::{QualityPreset, Settings, platform};
use clap::Parser;

#[derive(Parser)]
#[command(name = "beach-paradise")]
#[command(about = "Animated beach scene with day/night, zoom and a movable umbrella", long_about = None)]
struct Cli {
    /// Settings file (JSON)
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Rendering quality: low, medium or high (overrides the settings file)
    #[arg(short, long, value_parser = parse_quality)]
    quality: Option<QualityPreset>,
}

fn parse_quality(s: &str) -> Result<QualityPreset, String> {
    QualityPreset::from_str(s).ok_or_else(|| format!("unknown quality preset '{s}' (expected low, medium or high)"))
}

fn load_settings(cli: &Cli) -> beach_paradise::Result<Settings> {
    let Some(path) = &cli.settings else {
        return Ok(cli.quality.map(Settings::from_preset).unwrap_or_default());
    };
    let mut settings = Settings::load(path)?;
    if let Some(quality) = cli.quality {
        settings.quality = quality;
    }
    Ok(settings)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    log::info!("Beach Paradise starting...");
    let result = load_settings(&cli).and_then(|settings| {
        log::info!("Quality: {}", settings.quality.as_str());
        platform::run(settings)
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
