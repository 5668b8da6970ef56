//! Response shapes of the World Weather Online `weather.ashx` endpoint when it is
//! queried for month climate averages only (`mca=yes&fx=no&cc=no`).
//!
//! The endpoint answers with one of two bodies under the `data` key: the requested
//! sections, or an `error` list. [`ApiResult`] resolves that once, right after the
//! request, so nothing downstream has to look at raw JSON.

use crate::weather_api::error::WeatherApiError;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct RawResponse {
    data: RawData,
}

#[derive(Debug, Deserialize)]
struct RawData {
    #[serde(default)]
    error: Option<Vec<RawErrorMessage>>,
    #[serde(default)]
    request: Option<Vec<RequestInfo>>,
    #[serde(rename = "ClimateAverages", default)]
    climate_averages: Option<Vec<RawClimateAverage>>,
}

#[derive(Debug, Deserialize)]
struct RawErrorMessage {
    msg: String,
}

#[derive(Debug, Deserialize)]
struct RawClimateAverage {
    month: Vec<RawMonth>,
}

/// A value the API sends as text, though some deployments emit bare numbers.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NumericText {
    Text(String),
    Number(serde_json::Number),
}

impl NumericText {
    fn as_text(&self) -> String {
        match self {
            NumericText::Text(s) => s.trim().to_string(),
            NumericText::Number(n) => n.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMonth {
    index: NumericText,
    name: String,
    abs_max_temp: NumericText,
    avg_min_temp: NumericText,
    avg_daily_rainfall: NumericText,
}

/// The location the API resolved a query to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RequestInfo {
    /// The canonical query echoed back by the API (e.g. "London, United Kingdom").
    pub query: String,
    /// The kind of location the query resolved to (e.g. "City", "LatLon").
    #[serde(rename = "type")]
    pub location_type: String,
}

impl RequestInfo {
    pub fn new(query: impl Into<String>, location_type: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            location_type: location_type.into(),
        }
    }

    /// The report label for this location, `"<query> (<type>)"`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.query, self.location_type)
    }
}

/// One of the twelve climate-average entries returned for a place.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthRecord {
    /// 1-based calendar month.
    pub index: u32,
    pub name: String,
    /// Absolute maximum temperature in °C.
    pub max_temp: f64,
    /// Average minimum temperature in °C.
    pub min_temp: f64,
    /// Average daily rainfall in mm.
    pub rainfall: f64,
}

/// The outcome of one climate-averages request.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResult {
    Success {
        request: RequestInfo,
        months: Vec<MonthRecord>,
    },
    /// The API rejected the query and explained why.
    Failure { messages: Vec<String> },
}

impl ApiResult {
    /// Parses a response body received for `place`.
    pub fn from_json(place: &str, body: &[u8]) -> Result<Self, WeatherApiError> {
        let raw: RawResponse = serde_json::from_slice(body)
            .map_err(|e| WeatherApiError::JsonParse(place.to_string(), e))?;
        Self::from_raw(place, raw)
    }

    pub(crate) fn from_raw(place: &str, raw: RawResponse) -> Result<Self, WeatherApiError> {
        let data = raw.data;

        if let Some(errors) = data.error.filter(|errors| !errors.is_empty()) {
            return Ok(ApiResult::Failure {
                messages: errors.into_iter().map(|e| e.msg).collect(),
            });
        }

        let request = data
            .request
            .and_then(|requests| requests.into_iter().next())
            .ok_or_else(|| WeatherApiError::MissingField {
                place: place.to_string(),
                field: "request",
            })?;

        let climate = data
            .climate_averages
            .and_then(|averages| averages.into_iter().next())
            .ok_or_else(|| WeatherApiError::MissingField {
                place: place.to_string(),
                field: "ClimateAverages",
            })?;

        let months = climate
            .month
            .into_iter()
            .map(|month| month_record(place, month))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ApiResult::Success { request, months })
    }
}

fn month_record(place: &str, raw: RawMonth) -> Result<MonthRecord, WeatherApiError> {
    let invalid = |field: &'static str, value: String| WeatherApiError::InvalidNumber {
        place: place.to_string(),
        month: raw.name.clone(),
        field,
        value,
    };

    let index_text = raw.index.as_text();
    let index = index_text
        .parse::<u32>()
        .map_err(|_| invalid("index", index_text.clone()))?;

    let number = |field: &'static str, value: &NumericText| {
        let text = value.as_text();
        text.parse::<f64>().map_err(|_| invalid(field, text.clone()))
    };

    Ok(MonthRecord {
        index,
        max_temp: number("absMaxTemp", &raw.abs_max_temp)?,
        min_temp: number("avgMinTemp", &raw.avg_min_temp)?,
        rainfall: number("avgDailyRainfall", &raw.avg_daily_rainfall)?,
        name: raw.name.clone(),
    })
}
