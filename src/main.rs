use clap::Parser;
use log::{error, info};
use smart_room::config::Config;
use smart_room::factory::SensorFactory;
use smart_room::sensors::{LoggingSensorDecorator, MeasurementType, SmoothingSensorDecorator};
use smart_room::simulation::run_sampling_loop;
use smart_room::strategy::{CoolingStrategy, PresenceLightStrategy};
use smart_room::{Result, SmartRoom};
use std::path::PathBuf;
use tokio::signal;

/// Run the smart room demo and export a CSV report.
#[derive(Parser, Debug)]
#[command(name = "smart-room", version, about)]
struct Cli {
    /// JSON configuration file; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Sensor polling period in milliseconds
    #[arg(long)]
    interval_ms: Option<u64>,

    /// How long to keep polling after sampling, in milliseconds
    #[arg(long)]
    duration_ms: Option<u64>,

    /// Where to write the CSV report
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Luminosity below which the light turns on when someone is present
    #[arg(long)]
    lux_threshold: Option<f64>,

    /// Temperature at or above which the fan turns on
    #[arg(long)]
    temp_threshold: Option<f64>,

    /// Smoothing window for the decorated temperature sensor
    #[arg(long)]
    window: Option<usize>,

    /// Number of decorated temperature samples to take
    #[arg(long)]
    samples: Option<usize>,

    /// Fixed RNG seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
}

impl Cli {
    fn into_config(self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };

        if let Some(v) = self.interval_ms {
            config.interval_ms = v;
        }
        if let Some(v) = self.duration_ms {
            config.demo_duration_ms = v;
        }
        if let Some(v) = self.output {
            config.report_path = v;
        }
        if let Some(v) = self.lux_threshold {
            config.lux_threshold = v;
        }
        if let Some(v) = self.temp_threshold {
            config.temp_threshold = v;
        }
        if let Some(v) = self.window {
            config.smoothing_window = v;
        }
        if let Some(v) = self.samples {
            config.sample_count = v;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        Ok(config)
    }
}

fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
}

#[tokio::main]
async fn main() {
    init_logger();
    info!("Starting Smart Room");

    if let Err(e) = run(Cli::parse()).await {
        error!("Smart Room failed: {}", e);
        std::process::exit(1);
    }

    info!("Smart Room stopped");
}

async fn run(cli: Cli) -> Result<()> {
    let config = cli.into_config()?;
    info!("Configuration loaded:");
    info!("  Interval: {} ms", config.interval_ms);
    info!("  Lux threshold: {}", config.lux_threshold);
    info!("  Temperature threshold: {}", config.temp_threshold);
    info!("  Report: {}", config.report_path.display());

    let factory = match config.seed {
        Some(seed) => SensorFactory::seeded(seed),
        None => SensorFactory::new(),
    };
    let room = SmartRoom::with_sensor_factory(factory);

    let light = room.add_device("light", "L1")?;
    let fan = room.add_device("fan", "F1")?;

    let temp = room.add_sensor("temperature", "T1")?;
    room.add_sensor("luminosity", "LU1")?;
    room.add_sensor("presence", "P1")?;

    // Scheduled reads see the plain sensor; the chain is sampled separately.
    let chain = LoggingSensorDecorator::new(SmoothingSensorDecorator::new(
        temp,
        config.smoothing_window,
    )?);

    room.add_strategy(PresenceLightStrategy::new(
        room.device("L1")?,
        room.latest_of(MeasurementType::Luminosity),
        config.lux_threshold,
    ));
    room.add_strategy(CoolingStrategy::new(
        room.device("F1")?,
        config.temp_threshold,
    ));

    room.schedule_read_all(config.interval())?;

    let samples = run_sampling_loop(chain, config.sample_count, config.sample_pause()).await?;
    info!("Sampled {} smoothed temperature reading(s)", samples.len());

    info!("Press Ctrl+C to stop early");
    tokio::select! {
        _ = tokio::time::sleep(config.demo_duration()) => {}
        result = signal::ctrl_c() => match result {
            Ok(()) => info!("Received shutdown signal"),
            Err(e) => error!("Failed to listen for shutdown signal: {}", e),
        },
    }

    let out = room.export_csv(&config.report_path)?;
    room.shutdown().await;

    let shown = std::path::absolute(&out).unwrap_or(out);
    info!("Report exported to: {}", shown.display());
    info!("{} readings recorded", room.history().len());
    info!(
        "Light isOn: {} ({} switch(es))",
        light.is_on(),
        light.switch_count()
    );
    info!("Fan isOn: {} ({} switch(es))", fan.is_on(), fan.switch_count());

    Ok(())
}
