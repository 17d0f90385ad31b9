use chrono::{Datelike, Local, NaiveDate};
use clap::{Parser, Subcommand};
use fire_danger_core::fbp::{
    critical_ffmc, foliar_moisture_for_date, predict_with_wind_limit, CriticalFfmc, FbpInputs,
    FuelConditions, SlopeConditions,
};
use fire_danger_core::hfi::{
    calculate_planning_area_results, evaluate_stations, validate_date_range, FireStartRange,
    StationSeries,
};
use fire_danger_core::{
    AdvisoryConfig, FireCentre, FuelType, FwiCalculator, MoistureCodes, WeatherObservation,
};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Fire danger calculator demo
#[derive(Parser, Debug)]
#[command(name = "fire-danger-demo")]
#[command(about = "CFFDRS fire weather, fire behaviour and HFI calculator demo", long_about = None)]
struct Args {
    /// JSON file with advisory thresholds (defaults apply when omitted)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the FWI System for one station over repeated daily weather
    Fwi {
        /// Station latitude in degrees
        #[arg(long, default_value_t = 50.7)]
        latitude: f64,

        /// Month of the first day (1-12)
        #[arg(long, default_value_t = 7)]
        month: u32,

        /// Number of days to run
        #[arg(short, long, default_value_t = 7)]
        days: u32,

        /// Noon temperature in °C
        #[arg(short, long, default_value_t = 28.0)]
        temperature: f64,

        /// Noon relative humidity in %
        #[arg(long, default_value_t = 25.0)]
        humidity: f64,

        /// Noon wind speed in km/h
        #[arg(short, long, default_value_t = 15.0)]
        wind_speed: f64,

        /// 24-hour rainfall in mm
        #[arg(short, long, default_value_t = 0.0)]
        rain: f64,
    },

    /// Predict fire behaviour for one fuel type
    Predict {
        /// FBP fuel type code, e.g. C-2 or O-1b
        #[arg(short, long, default_value = "C-2")]
        fuel: FuelType,

        #[arg(long, default_value_t = 90.0)]
        ffmc: f64,

        #[arg(long, default_value_t = 60.0)]
        bui: f64,

        /// 10 m wind speed in km/h
        #[arg(short, long, default_value_t = 20.0)]
        wind_speed: f64,

        /// Direction the wind blows from, degrees
        #[arg(long, default_value_t = 270.0)]
        wind_direction: f64,

        /// Ground slope in %
        #[arg(long, default_value_t = 0.0)]
        slope: f64,

        /// Direction the slope faces, degrees
        #[arg(long, default_value_t = 0.0)]
        aspect: f64,

        /// Grass curing in %, required for O-1 fuel types
        #[arg(long)]
        grass_cure: Option<f64>,

        /// Date used for foliar moisture (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Run a fire centre's HFI calculation from a JSON batch file
    Batch {
        /// Batch file: fire centre, station series and fire starts
        input: PathBuf,

        /// Write results here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Input document for the `batch` command
#[derive(Debug, Deserialize)]
struct Batch {
    fire_centre: FireCentre,
    stations: Vec<StationSeries>,
    /// Stations included in the aggregates; every station when omitted
    #[serde(default)]
    selected_stations: Option<Vec<u32>>,
    /// Fire start ranges per planning area id, one per prep day
    #[serde(default)]
    fire_starts: FxHashMap<u32, Vec<FireStartRange>>,
    #[serde(default)]
    start_date: Option<NaiveDate>,
    #[serde(default)]
    end_date: Option<NaiveDate>,
}

fn load_config(path: Option<&Path>) -> Result<AdvisoryConfig, Box<dyn Error>> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path)?;
            let config = serde_json::from_str(&text)?;
            tracing::info!(path = %path.display(), "Loaded advisory config");
            Ok(config)
        }
        None => Ok(AdvisoryConfig::default()),
    }
}

fn run_fwi(latitude: f64, month: u32, days: u32, observation: WeatherObservation) {
    println!("=== FWI System ===\n");
    println!(
        "Latitude {:.1}°, month {}, {} days of T {} RH {} WS {} P {}\n",
        latitude,
        month,
        days,
        observation.temperature,
        observation.relative_humidity,
        observation.wind_speed,
        observation.precipitation
    );
    println!("Day   FFMC    DMC     DC    ISI    BUI    FWI    DSR");

    let mut calc = FwiCalculator::with_codes(latitude, MoistureCodes::STARTUP);
    for day in 1..=days {
        let out = calc.advance(&observation, month);
        println!(
            "{:>3} {:>6.1} {:>6.1} {:>6.1} {:>6.1} {:>6.1} {:>6.1} {:>6.2}",
            day,
            out.codes.ffmc,
            out.codes.dmc,
            out.codes.dc,
            out.indices.isi,
            out.indices.bui,
            out.indices.fwi,
            out.indices.dsr()
        );
    }
}

fn run_predict(inputs: &FbpInputs, config: &AdvisoryConfig) {
    let p = predict_with_wind_limit(inputs, config.max_wind_speed);

    println!("=== FBP Prediction: {} ===\n", inputs.fuel);
    println!("FFMC {:.1}, BUI {:.1}, wind {:.1} km/h", inputs.ffmc, inputs.bui, inputs.wind_speed);
    println!("Net effective wind: {:.1} km/h towards {:.0}°", p.net_wind_speed, p.spread_azimuth);
    println!("ISI:               {:.1}", p.isi);
    println!("Head ROS:          {}", p.ros);
    println!("Flank / back ROS:  {} / {}", p.fros, p.bros);
    println!("Fuel consumption:  {} (surface {})", p.total_fuel_consumption, p.surface_fuel_consumption);
    println!("Crown fraction:    {:.2} ({})", p.crown_fraction_burned, p.fire_type.abbreviation());
    println!("Head fire HFI:     {}", p.hfi);
    match p.intensity_group {
        Some(group) => println!("Intensity group:   {group}"),
        None => println!("Intensity group:   undefined"),
    }
    println!("Flame length:      {}", p.flame_length);
    println!("Size after {:.0} min: {}", inputs.elapsed_minutes, p.fire_size);

    if !p.valid {
        println!("\nWARNING: prediction flagged invalid: {:?}", p.invalid_reasons);
    }

    println!();
    for (label, target) in [("Advisory", config.advisory_hfi), ("Warning", config.warning_hfi)] {
        match critical_ffmc(inputs, target) {
            CriticalFfmc::At(ffmc) => println!("{label} HFI ({target:.0} kW/m) reached at FFMC {ffmc:.1}"),
            CriticalFfmc::AlwaysExceeded => println!("{label} HFI ({target:.0} kW/m) exceeded at any FFMC"),
            CriticalFfmc::Unreachable => println!("{label} HFI ({target:.0} kW/m) not reachable"),
        }
    }
}

fn run_batch(
    input: &Path,
    output: Option<&Path>,
    config: &AdvisoryConfig,
) -> Result<(), Box<dyn Error>> {
    let batch: Batch = serde_json::from_str(&fs::read_to_string(input)?)?;
    batch.fire_centre.validate()?;

    let dailies = evaluate_stations(&batch.stations, config)?;
    let selected: FxHashSet<u32> = match &batch.selected_stations {
        Some(codes) => codes.iter().copied().collect(),
        None => batch.stations.iter().map(|s| s.station.code).collect(),
    };
    let today = Local::now().date_naive();
    let range = validate_date_range(batch.start_date, batch.end_date, today, config);

    let results = calculate_planning_area_results(
        &batch.fire_centre,
        &dailies,
        &selected,
        &batch.fire_starts,
        &range,
        config,
    )?;

    let json = serde_json::to_string_pretty(&results)?;
    match output {
        Some(path) => {
            fs::write(path, json)?;
            println!("Wrote {} planning area results to {}", results.len(), path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "fire_danger_core=info,warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;

    match args.command {
        Command::Fwi {
            latitude,
            month,
            days,
            temperature,
            humidity,
            wind_speed,
            rain,
        } => {
            let observation = WeatherObservation::new(temperature, humidity, wind_speed, rain);
            run_fwi(latitude, month, days, observation);
        }
        Command::Predict {
            fuel,
            ffmc,
            bui,
            wind_speed,
            wind_direction,
            slope,
            aspect,
            grass_cure,
            date,
        } => {
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            // Central BC reference location for foliar moisture
            let fmc = foliar_moisture_for_date(52.0, -122.0, 600.0, date);
            let mut conditions = FuelConditions::defaults_for(fuel, fmc);
            conditions.grass_cure = grass_cure;
            let inputs = FbpInputs::new(fuel, ffmc, bui, wind_speed, conditions).on_slope(
                SlopeConditions {
                    slope_percent: slope,
                    aspect,
                },
                wind_direction,
            );
            println!("Foliar moisture on day {}: {:.0}%\n", date.ordinal(), fmc);
            run_predict(&inputs, &config);
        }
        Command::Batch { input, output } => {
            if let Err(e) = run_batch(&input, output.as_deref(), &config) {
                tracing::error!(error = %e, input = %input.display(), "Batch run failed");
                return Err(e);
            }
        }
    }

    Ok(())
}
