use crate::weather_api::error::WeatherApiError;
use crate::weather_api::response::ApiResult;
use log::{debug, warn};
use reqwest::blocking::{Client, Request};
use std::collections::HashSet;

pub const DEFAULT_ENDPOINT: &str = "https://api.worldweatheronline.com/premium/v1/weather.ashx";

/// The parsed answer for one place, in the order the places were requested.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceResponse {
    pub place: String,
    pub result: ApiResult,
}

/// Issues climate-average requests, one blocking GET per place.
#[derive(Debug, Clone)]
pub struct ClimateFetcher {
    api_key: String,
    endpoint: String,
    client: Client,
}

impl ClimateFetcher {
    pub fn new(api_key: &str, endpoint: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            endpoint: endpoint.to_string(),
            client: Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Builds the request for `place`. Only the month climate averages section is asked for.
    pub fn request(&self, place: &str) -> Result<Request, WeatherApiError> {
        self.client
            .get(&self.endpoint)
            .query(&[
                ("format", "json"),
                ("key", self.api_key.as_str()),
                ("q", place),
                ("mca", "yes"),
                ("fx", "no"),
                ("cc", "no"),
            ])
            .build()
            .map_err(|e| WeatherApiError::NetworkRequest(place.to_string(), e))
    }

    pub fn fetch(&self, place: &str) -> Result<ApiResult, WeatherApiError> {
        debug!("Requesting climate averages for \"{}\"", place);
        let request = self.request(place)?;

        let response = self
            .client
            .execute(request)
            .map_err(|e| WeatherApiError::NetworkRequest(place.to_string(), e))?;
        let status = response.status();
        let body = response
            .bytes()
            .map_err(|e| WeatherApiError::NetworkRequest(place.to_string(), e))?;

        // Error payloads may come with a non-2xx status; only blame the status when the body is unusable
        match ApiResult::from_json(place, &body) {
            Err(WeatherApiError::JsonParse(place, source)) if !status.is_success() => {
                warn!("HTTP error {} for \"{}\"", status, place);
                Err(WeatherApiError::HttpStatus {
                    place,
                    status,
                    source,
                })
            }
            other => other,
        }
    }

    /// Fetches every place sequentially. A place listed more than once is requested once,
    /// at the position of its first occurrence.
    pub fn fetch_all<S: AsRef<str>>(
        &self,
        places: &[S],
    ) -> Result<Vec<PlaceResponse>, WeatherApiError> {
        let mut seen = HashSet::new();
        let mut responses = Vec::with_capacity(places.len());
        for place in places.iter().map(AsRef::as_ref) {
            if !seen.insert(place) {
                debug!("Skipping duplicate place \"{}\"", place);
                continue;
            }
            let result = self.fetch(place)?;
            responses.push(PlaceResponse {
                place: place.to_string(),
                result,
            });
        }
        Ok(responses)
    }
}
