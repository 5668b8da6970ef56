//! `wwo-climate` - average World Weather Online climate data over a month range.
//!
//! Usage:
//!   wwo-climate 6 8 "Lisbon" "Porto" -o summer.csv
//!   API_KEY=... wwo-climate 11 2 "Cape Town"

use clap::Parser;
use std::io::Write;
use std::process::ExitCode;
use wwo_climate::{ClimateReportError, OutputTarget, WorldWeather, DEFAULT_ENDPOINT};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// First month to average over (1-12)
    #[arg(allow_negative_numbers = true)]
    from_month: i32,

    /// Last month to average over (1-12); wraps past December when smaller than FROM_MONTH
    #[arg(allow_negative_numbers = true)]
    to_month: i32,

    /// Places to query, e.g. "London" or "48.85,2.35"
    #[arg(required = true)]
    places: Vec<String>,

    /// API key for World Weather Online
    #[arg(short = 'k', long, env = "API_KEY", hide_env_values = true)]
    api_key: String,

    /// A CSV file to write, "-" for standard output
    #[arg(short = 'o', long, default_value = "-")]
    output_file: String,

    /// Weather API endpoint
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,
}

fn init_logging() {
    let env = env_logger::Env::default().default_filter_or("info");
    env_logger::Builder::from_env(env)
        .format(|buf, record| writeln!(buf, "{:>8}: {}", record.level(), record.args()))
        .init();
}

fn main() -> anyhow::Result<ExitCode> {
    dotenv::dotenv().ok();
    let args = Args::parse();
    init_logging();

    let client = WorldWeather::builder()
        .api_key(args.api_key)
        .endpoint(args.endpoint)
        .build();

    let result = client
        .report()
        .places(&args.places)
        .from_month(args.from_month)
        .to_month(args.to_month)
        .output(&OutputTarget::parse(&args.output_file))
        .call();

    match result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(ClimateReportError::PlaceErrors(errors)) => {
            errors.log();
            Ok(ExitCode::from(1))
        }
        Err(e) => Err(e.into()),
    }
}
