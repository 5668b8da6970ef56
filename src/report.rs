//! CSV output of the averaged rows.

use crate::aggregate::{AveragesFrame, COL_LABEL, COL_MAX_TEMP, COL_MIN_TEMP, COL_PLACE, COL_RAINFALL};
use polars::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use thiserror::Error;

/// Column headers of the report, in order.
pub const REPORT_HEADER: [&str; 5] = [
    "Search Term",
    "Place",
    "Max Temperature",
    "Min Temperature",
    "Average Rainfall",
];

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to build the report frame")]
    Frame(#[source] PolarsError),

    #[error("Failed to create output file '{0}'")]
    Create(PathBuf, #[source] io::Error),

    #[error("Failed to write CSV to {0}")]
    Write(String, #[source] PolarsError),

    #[error("Failed to flush {0}")]
    Flush(String, #[source] io::Error),
}

/// Where the report goes. `-` means standard output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// Interprets a command-line output value.
    ///
    /// # Arguments
    ///
    /// * `value` - `-` for standard output, anything else is a file path.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use wwo_climate::OutputTarget;
    ///
    /// assert_eq!(OutputTarget::parse("-"), OutputTarget::Stdout);
    /// assert_eq!(
    ///     OutputTarget::parse("out.csv"),
    ///     OutputTarget::File(PathBuf::from("out.csv"))
    /// );
    /// ```
    pub fn parse(value: &str) -> Self {
        if value == "-" {
            OutputTarget::Stdout
        } else {
            OutputTarget::File(PathBuf::from(value))
        }
    }
}

impl From<&str> for OutputTarget {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl std::fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputTarget::Stdout => write!(f, "standard output"),
            OutputTarget::File(path) => write!(f, "'{}'", path.display()),
        }
    }
}

/// Renames and orders the aggregate columns as they appear in the report.
pub fn report_frame(averages: &AveragesFrame) -> PolarsResult<DataFrame> {
    averages
        .frame
        .clone()
        .select([
            col(COL_PLACE).alias(REPORT_HEADER[0]),
            col(COL_LABEL).alias(REPORT_HEADER[1]),
            col(COL_MAX_TEMP).alias(REPORT_HEADER[2]),
            col(COL_MIN_TEMP).alias(REPORT_HEADER[3]),
            col(COL_RAINFALL).alias(REPORT_HEADER[4]),
        ])
        .collect()
}

/// Writes `df` as CSV with a header line to any writer.
///
/// Fields containing the separator or quotes are quoted; floats use Polars'
/// default rendering.
///
/// # Errors
///
/// Returns the `PolarsError` of the underlying write.
pub fn write_csv<W: Write>(df: &mut DataFrame, writer: W) -> PolarsResult<()> {
    CsvWriter::new(writer).include_header(true).finish(df)
}

/// Writes the report, replacing `target` if it is an existing file.
///
/// The rows are computed before the destination is opened, so a failing query
/// leaves an existing file untouched.
///
/// # Errors
///
/// * [`ReportError::Frame`] if the averaged rows cannot be computed.
/// * [`ReportError::Create`] if the output file cannot be created.
/// * [`ReportError::Write`] / [`ReportError::Flush`] if writing fails.
pub fn write_report(averages: &AveragesFrame, target: &OutputTarget) -> Result<(), ReportError> {
    let mut df = report_frame(averages).map_err(ReportError::Frame)?;

    match target {
        OutputTarget::Stdout => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            write_csv(&mut df, &mut lock)
                .map_err(|e| ReportError::Write(target.to_string(), e))?;
            lock.flush()
                .map_err(|e| ReportError::Flush(target.to_string(), e))
        }
        OutputTarget::File(path) => {
            let file = File::create(path).map_err(|e| ReportError::Create(path.clone(), e))?;
            let mut writer = BufWriter::new(file);
            write_csv(&mut df, &mut writer)
                .map_err(|e| ReportError::Write(target.to_string(), e))?;
            writer
                .flush()
                .map_err(|e| ReportError::Flush(target.to_string(), e))
        }
    }
}
