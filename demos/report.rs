// demos/report.rs
//
// Run with: API_KEY=... cargo run --example report
use wwo_climate::{ClimateReportError, MonthRange, OutputTarget, WorldWeather};

fn main() -> Result<(), ClimateReportError> {
    // Set RUST_LOG=debug to see every request
    env_logger::init();

    let api_key = std::env::var("API_KEY").unwrap_or_default();
    let client = WorldWeather::builder().api_key(api_key).build();
    let places = vec!["Cape Town".to_string(), "Sydney".to_string()];

    // Southern summer, wrapping past December
    let months = MonthRange::new(11, 2);
    println!("{}", months);

    let averages = client.averages().places(&places).months(&months).call()?;
    for row in averages.rows()? {
        println!(
            "{:<30} max {:>5.1} min {:>5.1} rain {:>5.2}",
            row.label, row.max_temp, row.min_temp, row.rainfall
        );
    }

    // The same report as CSV on standard output
    client
        .report()
        .places(&places)
        .from_month(11)
        .to_month(2)
        .output(&OutputTarget::Stdout)
        .call()?;

    Ok(())
}
