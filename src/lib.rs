mod aggregate;
mod climate_report;
mod error;
mod month_range;
mod place_errors;
mod report;
mod weather_api;

pub use climate_report::*;
pub use error::ClimateReportError;

pub use aggregate::{AggregateRow, AveragesFrame, ClimateFrame, PlaceClimate};
pub use month_range::MonthRange;
pub use place_errors::PlaceErrors;
pub use report::{report_frame, write_csv, write_report, OutputTarget, ReportError, REPORT_HEADER};

pub use weather_api::error::WeatherApiError;
pub use weather_api::fetcher::{ClimateFetcher, PlaceResponse, DEFAULT_ENDPOINT};
pub use weather_api::response::{ApiResult, MonthRecord, RequestInfo};
