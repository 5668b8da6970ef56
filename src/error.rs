use crate::place_errors::PlaceErrors;
use crate::report::ReportError;
use crate::weather_api::error::WeatherApiError;
use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClimateReportError {
    #[error(transparent)]
    WeatherApi(#[from] WeatherApiError),

    #[error(transparent)]
    Report(#[from] ReportError),

    #[error("Failed processing climate data")]
    Aggregation(#[from] PolarsError),

    // Every rejected place, reported together
    #[error("{0}")]
    PlaceErrors(PlaceErrors),
}
