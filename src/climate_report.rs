//! This module provides the main entry point of the crate: a client for the
//! World Weather Online climate averages that runs the whole report pipeline,
//! from the per-place requests to the CSV output.

use crate::aggregate::{AveragesFrame, ClimateFrame, PlaceClimate};
use crate::error::ClimateReportError;
use crate::month_range::MonthRange;
use crate::place_errors::PlaceErrors;
use crate::report::{write_report, OutputTarget};
use crate::weather_api::fetcher::{ClimateFetcher, PlaceResponse, DEFAULT_ENDPOINT};
use bon::bon;
use log::info;
use polars::prelude::IntoLazy;

/// The client for building climate average reports.
///
/// Requests are issued one place at a time on the calling thread; nothing is
/// cached between calls.
///
/// # Examples
///
/// ```
/// use wwo_climate::WorldWeather;
///
/// let client = WorldWeather::builder()
///     .api_key("my-api-key")
///     .endpoint("http://localhost:8080/premium/v1/weather.ashx")
///     .build();
/// assert_eq!(client.endpoint(), "http://localhost:8080/premium/v1/weather.ashx");
/// ```
pub struct WorldWeather {
    fetcher: ClimateFetcher,
}

#[bon]
impl WorldWeather {
    /// Creates a client.
    ///
    /// # Arguments
    ///
    /// * `.api_key(String)`: **Required.** The World Weather Online API key, sent as the `key` query parameter.
    /// * `.endpoint(String)`: Optional. Overrides [`DEFAULT_ENDPOINT`].
    #[builder]
    pub fn new(#[builder(into)] api_key: String, #[builder(into)] endpoint: Option<String>) -> Self {
        let endpoint = endpoint.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        Self {
            fetcher: ClimateFetcher::new(&api_key, &endpoint),
        }
    }

    pub fn endpoint(&self) -> &str {
        self.fetcher.endpoint()
    }

    /// Fetches the climate averages of every place, without checking for API errors.
    ///
    /// # Errors
    ///
    /// Returns [`ClimateReportError::WeatherApi`] on the first network, HTTP or parse failure.
    pub fn fetch<S: AsRef<str>>(
        &self,
        places: &[S],
    ) -> Result<Vec<PlaceResponse>, ClimateReportError> {
        Ok(self.fetcher.fetch_all(places)?)
    }

    /// Fetches every place and averages its climate over `months`.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.places(&[String])`: **Required.** The places to query, used verbatim as the API query.
    /// * `.months(&MonthRange)`: **Required.** The months to average over.
    ///
    /// # Returns
    ///
    /// An [`AveragesFrame`] with one row per `(place, label)`, in request order.
    ///
    /// # Errors
    ///
    /// Returns [`ClimateReportError::PlaceErrors`] with every message the API reported when
    /// at least one place was rejected. Returns [`ClimateReportError::WeatherApi`] for
    /// transport or parse failures and [`ClimateReportError::Aggregation`] if Polars fails.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use wwo_climate::{ClimateReportError, MonthRange, WorldWeather};
    /// # fn main() -> Result<(), ClimateReportError> {
    /// let client = WorldWeather::builder().api_key("my-api-key").build();
    /// let places = vec!["Cape Town".to_string(), "Reykjavik".to_string()];
    ///
    /// // Southern summer: December to February
    /// let rows = client
    ///     .averages()
    ///     .places(&places)
    ///     .months(&MonthRange::new(12, 2))
    ///     .call()?
    ///     .rows()?;
    ///
    /// for row in rows {
    ///     println!("{}: {:.1} °C", row.label, row.max_temp);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub fn averages(
        &self,
        places: &[String],
        months: &MonthRange,
    ) -> Result<AveragesFrame, ClimateReportError> {
        let responses = self.fetcher.fetch_all(places)?;

        let errors = PlaceErrors::collect(&responses);
        if !errors.is_empty() {
            return Err(ClimateReportError::PlaceErrors(errors));
        }

        info!("{}", months.describe());

        let climate = PlaceClimate::from_responses(&responses);
        let averaged = ClimateFrame::new(&climate)?
            .for_months(months)
            .averaged()
            .collect()?;
        Ok(AveragesFrame {
            frame: averaged.lazy(),
        })
    }

    /// Runs the full report: fetch, check for API errors, average and write the CSV.
    ///
    /// Nothing is written when any place was rejected by the API.
    ///
    /// # Arguments
    ///
    /// * `.places(&[String])`: **Required.** The places to query.
    /// * `.from_month(i32)`: **Required.** First month of the range (1-12).
    /// * `.to_month(i32)`: **Required.** Last month of the range, wrapping past December when smaller than `from_month`.
    /// * `.output(&OutputTarget)`: **Required.** The destination file or standard output.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use wwo_climate::{ClimateReportError, OutputTarget, WorldWeather};
    /// # fn main() -> Result<(), ClimateReportError> {
    /// let client = WorldWeather::builder().api_key("my-api-key").build();
    /// client
    ///     .report()
    ///     .places(&["Lisbon".to_string()])
    ///     .from_month(6)
    ///     .to_month(8)
    ///     .output(&OutputTarget::parse("summer.csv"))
    ///     .call()?;
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub fn report(
        &self,
        places: &[String],
        from_month: i32,
        to_month: i32,
        output: &OutputTarget,
    ) -> Result<(), ClimateReportError> {
        info!("Using API URL \"{}\"", self.endpoint());
        let months = MonthRange::new(from_month, to_month);

        let averages = self.averages().places(places).months(&months).call()?;

        info!("Writing output...");
        write_report(&averages, output)?;
        info!("Done");
        Ok(())
    }
}
