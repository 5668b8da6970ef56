//! Batches the errors the API reported for individual places, so a single run
//! shows every rejected place instead of stopping at the first one.

use crate::weather_api::fetcher::PlaceResponse;
use crate::weather_api::response::ApiResult;
use log::error;
use std::fmt;

/// Every message the API reported, grouped by the place it was reported for.
///
/// Places keep the order in which they were requested; a place whose response
/// succeeded does not appear.
///
/// # Examples
///
/// ```no_run
/// # use wwo_climate::{ClimateReportError, PlaceErrors, WorldWeather};
/// # fn main() -> Result<(), ClimateReportError> {
/// let client = WorldWeather::builder().api_key("my-api-key").build();
/// let responses = client.fetch(&["Atlantis", "Lisbon"])?;
///
/// let errors = PlaceErrors::collect(&responses);
/// for (place, messages) in errors.iter() {
///     println!("{place}: {}", messages.join("; "));
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceErrors {
    errors: Vec<(String, Vec<String>)>,
}

impl PlaceErrors {
    /// Collects the messages of every failed response, keeping the request order.
    pub fn collect(responses: &[PlaceResponse]) -> Self {
        let errors = responses
            .iter()
            .filter_map(|response| match &response.result {
                ApiResult::Failure { messages } if !messages.is_empty() => {
                    Some((response.place.clone(), messages.clone()))
                }
                _ => None,
            })
            .collect();
        Self { errors }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of places with at least one error.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Iterates over `(place, messages)` pairs in request order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.errors
            .iter()
            .map(|(place, messages)| (place.as_str(), messages.as_slice()))
    }

    /// Logs one error line per message, `Error for "<place>": <message>`.
    pub fn log(&self) {
        for (place, messages) in self.iter() {
            for message in messages {
                error!("Error for \"{}\": {}", place, message);
            }
        }
    }
}

impl fmt::Display for PlaceErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let places: Vec<String> = self
            .iter()
            .map(|(place, _)| format!("\"{}\"", place))
            .collect();
        write!(f, "API reported errors for {}", places.join(", "))
    }
}
