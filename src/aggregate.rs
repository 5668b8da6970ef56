//! Turns the per-place climate averages into one averaged row per place.
//!
//! Month records are loaded into a Polars `LazyFrame`, filtered by the requested
//! [`MonthRange`] and grouped by `(place, label)` with a keyed group-by, so the
//! result does not depend on the order the API lists months or places in.

use crate::month_range::MonthRange;
use crate::weather_api::fetcher::PlaceResponse;
use crate::weather_api::response::{ApiResult, MonthRecord, RequestInfo};
use polars::prelude::*;

pub(crate) const COL_PLACE: &str = "place";
pub(crate) const COL_LABEL: &str = "label";
const COL_MONTH: &str = "month";
const COL_MONTH_NAME: &str = "month_name";
pub(crate) const COL_MAX_TEMP: &str = "max_temp";
pub(crate) const COL_MIN_TEMP: &str = "min_temp";
pub(crate) const COL_RAINFALL: &str = "rainfall";

/// The twelve climate-average records of one place.
#[derive(Debug, Clone, Copy)]
pub struct PlaceClimate<'a> {
    pub place: &'a str,
    pub request: &'a RequestInfo,
    pub months: &'a [MonthRecord],
}

impl<'a> PlaceClimate<'a> {
    /// Borrows the climate data of every successful response.
    pub fn from_responses(responses: &'a [PlaceResponse]) -> Vec<PlaceClimate<'a>> {
        responses
            .iter()
            .filter_map(|response| match &response.result {
                ApiResult::Success { request, months } => Some(PlaceClimate {
                    place: &response.place,
                    request,
                    months,
                }),
                ApiResult::Failure { .. } => None,
            })
            .collect()
    }
}

/// One line of the report: the means of the selected months for a place.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateRow {
    pub place: String,
    pub label: String,
    pub max_temp: f64,
    pub min_temp: f64,
    pub rainfall: f64,
}

/// Every month record of every place, one row each.
#[derive(Clone)]
pub struct ClimateFrame {
    pub frame: LazyFrame,
}

impl ClimateFrame {
    pub fn new(places: &[PlaceClimate<'_>]) -> PolarsResult<Self> {
        let rows: usize = places.iter().map(|p| p.months.len()).sum();
        let mut place_col = Vec::with_capacity(rows);
        let mut label_col = Vec::with_capacity(rows);
        let mut month_col = Vec::with_capacity(rows);
        let mut name_col = Vec::with_capacity(rows);
        let mut max_col = Vec::with_capacity(rows);
        let mut min_col = Vec::with_capacity(rows);
        let mut rain_col = Vec::with_capacity(rows);

        for place in places {
            let label = place.request.label();
            for month in place.months {
                place_col.push(place.place.to_string());
                label_col.push(label.clone());
                month_col.push(i64::from(month.index));
                name_col.push(month.name.clone());
                max_col.push(month.max_temp);
                min_col.push(month.min_temp);
                rain_col.push(month.rainfall);
            }
        }

        let df = df!(
            COL_PLACE => place_col,
            COL_LABEL => label_col,
            COL_MONTH => month_col,
            COL_MONTH_NAME => name_col,
            COL_MAX_TEMP => max_col,
            COL_MIN_TEMP => min_col,
            COL_RAINFALL => rain_col
        )?;
        Ok(Self { frame: df.lazy() })
    }

    /// Keeps the records whose month is a member of `range`.
    ///
    /// Only the calendar months of the range can match a record, so the predicate
    /// never grows past twelve terms.
    pub fn for_months(&self, range: &MonthRange) -> ClimateFrame {
        let predicate = range
            .calendar_months()
            .into_iter()
            .fold(lit(false), |acc, month| {
                acc.or(col(COL_MONTH).eq(lit(i64::from(month))))
            });
        ClimateFrame {
            frame: self.frame.clone().filter(predicate),
        }
    }

    /// Means of the three metrics per `(place, label)`, in first-seen key order.
    pub fn averaged(&self) -> AveragesFrame {
        let frame = self
            .frame
            .clone()
            .group_by_stable([col(COL_PLACE), col(COL_LABEL)])
            .agg([
                col(COL_MAX_TEMP).mean(),
                col(COL_MIN_TEMP).mean(),
                col(COL_RAINFALL).mean(),
            ]);
        AveragesFrame { frame }
    }
}

/// The averaged report rows, still lazy.
#[derive(Clone)]
pub struct AveragesFrame {
    pub frame: LazyFrame,
}

impl AveragesFrame {
    /// Executes the lazy query.
    ///
    /// # Returns
    ///
    /// A `DataFrame` with the columns `place`, `label`, `max_temp`, `min_temp` and
    /// `rainfall`, one row per `(place, label)`.
    ///
    /// # Errors
    ///
    /// Returns the `PolarsError` raised while evaluating the query.
    pub fn collect(&self) -> PolarsResult<DataFrame> {
        self.frame.clone().collect()
    }

    /// Collects the frame into plain rows.
    pub fn rows(&self) -> PolarsResult<Vec<AggregateRow>> {
        let df = self.collect()?;
        let place = df.column(COL_PLACE)?.str()?;
        let label = df.column(COL_LABEL)?.str()?;
        let max_temp = df.column(COL_MAX_TEMP)?.f64()?;
        let min_temp = df.column(COL_MIN_TEMP)?.f64()?;
        let rainfall = df.column(COL_RAINFALL)?.f64()?;

        Ok((0..df.height())
            .map(|i| AggregateRow {
                place: place.get(i).unwrap_or_default().to_string(),
                label: label.get(i).unwrap_or_default().to_string(),
                max_temp: max_temp.get(i).unwrap_or(f64::NAN),
                min_temp: min_temp.get(i).unwrap_or(f64::NAN),
                rainfall: rainfall.get(i).unwrap_or(f64::NAN),
            })
            .collect())
    }
}
