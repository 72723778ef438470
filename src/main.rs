use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use azimuth_calc::{batch, AzimuthCalculator, CalculationInput, Ellipsoid, GeodesyEngine};

const INVALID_INPUT_EXIT: u8 = 2;

#[derive(Debug, Parser)]
#[command(name = "azimuth-calc", version, about = "Target position and back-azimuth calculator")]
struct Cli {
    /// Reference ellipsoid (wgs84, grs80)
    #[arg(long, global = true, default_value = "wgs84")]
    ellipsoid: Ellipsoid,

    /// Log verbosity (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: Level,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Calculate one target; values may use `,` as decimal separator
    Calc(CalcArgs),
    /// Calculate every row of a CSV file
    Batch(BatchArgs),
}

#[derive(Debug, Args)]
struct CalcArgs {
    /// Latitude of point A
    #[arg(long, allow_hyphen_values = true)]
    lat_a: String,
    /// Longitude of point A
    #[arg(long, allow_hyphen_values = true)]
    lon_a: String,
    /// Azimuth from A in degrees
    #[arg(long, allow_hyphen_values = true)]
    azimuth: String,
    /// Distance from A in kilometers
    #[arg(long, allow_hyphen_values = true)]
    distance: String,
    /// Latitude of point B
    #[arg(long, allow_hyphen_values = true)]
    lat_b: String,
    /// Longitude of point B
    #[arg(long, allow_hyphen_values = true)]
    lon_b: String,
    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Args)]
struct BatchArgs {
    /// Input CSV (lat_a,lon_a,azimuth,distance_km,lat_b,lon_b[,name])
    input: PathBuf,
    /// Output CSV
    #[arg(short, long, default_value = "azimuth_results.csv")]
    output: PathBuf,
    /// Maximum number of rows to accept
    #[arg(long, default_value_t = 100_000)]
    max_rows: usize,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    FmtSubscriber::builder()
        .with_max_level(cli.log_level)
        .with_writer(std::io::stderr)
        .init();

    let calculator = AzimuthCalculator::new(GeodesyEngine::new(cli.ellipsoid));

    match cli.command {
        Command::Calc(args) => run_calc(&calculator, args),
        Command::Batch(args) => {
            let stats = batch::process_file(&calculator, &args.input, &args.output, args.max_rows)?;
            println!(
                "{} rows: {} successful, {} failed ({:.2} ms) -> {}",
                stats.total,
                stats.successful,
                stats.failed,
                stats.execution_time_ms(),
                args.output.display()
            );
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run_calc(calculator: &AzimuthCalculator, args: CalcArgs) -> anyhow::Result<ExitCode> {
    let input = CalculationInput {
        lat_a: args.lat_a,
        lon_a: args.lon_a,
        azimuth: args.azimuth,
        distance_km: args.distance,
        lat_b: args.lat_b,
        lon_b: args.lon_b,
    };

    let Some(request) = input.parse() else {
        eprintln!("Please enter valid values");
        return Ok(ExitCode::from(INVALID_INPUT_EXIT));
    };

    let result = calculator.try_calculate_request(&request)?;
    let distance_from_b_km = calculator.engine().distance_km(request.point_b, result.target);

    if args.json {
        let json = serde_json::json!({
            "target": result.target,
            "azimuth_from_b": result.azimuth_from_b,
            "distance_from_b_km": distance_from_b_km,
        });
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else {
        println!("Target:         {:.6}, {:.6}", result.target.latitude, result.target.longitude);
        println!("Azimuth from B: {:.2}°", result.azimuth_from_b);
        println!("Range from B:   {:.3} km", distance_from_b_km);
    }

    Ok(ExitCode::SUCCESS)
}
