// Copyright (c) 2026 bad-antics
// Licensed under the MIT License. See LICENSE file in the project root.

//! zonetemp - print sysfs sensor readings
//!
//! Reads the microphone noise and webcam colour sensors at the given
//! index and prints one line per sensor. `--temperature` adds the
//! thermal zone reading in front.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

use zonetemp::{
    CameraColorSensor, Config, MicrophoneNoiseSensor, ScaledValue, Sensor, SensorIndex,
    SensorKind, SensorReading, VERSION,
};

/// Read sysfs-style sensor files as exact decimals
#[derive(Parser, Debug)]
#[command(name = "zonetemp")]
#[command(version = VERSION)]
#[command(about = "Read thermal zone and sysfs-style sensor values")]
struct Args {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Sensor index substituted into each path template
    #[arg(short, long, default_value = "0")]
    index: String,

    /// Also print the thermal zone temperature
    #[arg(short, long)]
    temperature: bool,

    /// Print one JSON reading per line
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable trace-level logging
    #[arg(long)]
    trace: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config_path = args.config.clone().unwrap_or_else(Config::default_path);
    let config = Config::load_or_default(&config_path)?;

    // Initialize logging
    let log_level = if args.trace {
        Level::TRACE
    } else if args.debug {
        Level::DEBUG
    } else {
        config.level()?
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_file(args.debug)
        .with_line_number(args.debug)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    debug!("zonetemp v{}", VERSION);
    if config_path.exists() {
        info!("Configuration loaded from {:?}", config_path);
    } else {
        info!("No configuration at {:?}, using defaults", config_path);
    }

    let index: SensorIndex = args.index.parse()?;

    if args.temperature {
        let mut zone = Sensor::from_config(SensorKind::Thermal, index, &config.sensors)?;
        let temperature = zone.cached_value()?;
        emit(&zone, temperature, args.json)?;
    }

    let microphone = MicrophoneNoiseSensor::from_config(index, &config.sensors)?;
    let noise_level = microphone.noise_level()?;
    emit(&microphone, noise_level, args.json)?;

    let camera = CameraColorSensor::from_config(index, &config.sensors)?;
    let camera_color = camera.camera_color()?;
    emit(&camera, camera_color, args.json)?;

    Ok(())
}

fn emit(sensor: &Sensor, value: ScaledValue, json: bool) -> Result<()> {
    let reading = SensorReading::new(sensor, value);
    debug!("{} = {} ({})", reading.sensor_id, reading.value, sensor.path().display());

    if json {
        println!("{}", serde_json::to_string(&reading)?);
    } else {
        println!("{}", reading.summary());
    }
    Ok(())
}
