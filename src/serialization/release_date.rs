//! Precision-qualified release dates.
//!
//! | precision | wire form    | parsed as          |
//! |-----------|--------------|--------------------|
//! | `year`    | `YYYY`       | January 1 of YYYY  |
//! | `month`   | `YYYY-MM`    | the 1st of YYYY-MM |
//! | `day`     | `YYYY-MM-DD` | that day           |

use chrono::NaiveDate;

use crate::{
    error::{Error, Res},
    model::{ReleaseDate, ReleaseDatePrecision},
};

const YEAR_SHAPE: &str = "dddd";
const MONTH_SHAPE: &str = "dddd-dd";
const DAY_SHAPE: &str = "dddd-dd-dd";

/// Parses `value` using only the digits `precision` implies.
pub fn parse_release_date(value: &str, precision: ReleaseDatePrecision) -> Res<NaiveDate> {
    let (shape, expected) = match precision {
        ReleaseDatePrecision::Year => (YEAR_SHAPE, "YYYY"),
        ReleaseDatePrecision::Month => (MONTH_SHAPE, "YYYY-MM"),
        ReleaseDatePrecision::Day => (DAY_SHAPE, "YYYY-MM-DD"),
    };
    let format_error = || Error::Format {
        value: value.to_string(),
        expected,
    };

    if !has_shape(value, shape) {
        return Err(format_error());
    }

    let date = match precision {
        ReleaseDatePrecision::Year => value
            .parse::<i32>()
            .ok()
            .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1)),
        ReleaseDatePrecision::Month => {
            NaiveDate::parse_from_str(&format!("{value}-01"), "%Y-%m-%d").ok()
        }
        ReleaseDatePrecision::Day => NaiveDate::parse_from_str(value, "%Y-%m-%d").ok(),
    };

    date.ok_or_else(format_error)
}

/// Formats the prefix of `date` that `precision` covers, ignoring the rest.
pub fn format_release_date(date: NaiveDate, precision: ReleaseDatePrecision) -> String {
    let format = match precision {
        ReleaseDatePrecision::Year => "%Y",
        ReleaseDatePrecision::Month => "%Y-%m",
        ReleaseDatePrecision::Day => "%Y-%m-%d",
    };
    date.format(format).to_string()
}

/// Guesses the precision of a release date string from its length.
pub fn infer_precision(value: &str) -> ReleaseDatePrecision {
    match value.len() {
        4 => ReleaseDatePrecision::Year,
        7 => ReleaseDatePrecision::Month,
        _ => ReleaseDatePrecision::Day,
    }
}

// `d` matches an ASCII digit, anything else matches itself.
fn has_shape(value: &str, shape: &str) -> bool {
    value.len() == shape.len()
        && value.bytes().zip(shape.bytes()).all(|(byte, expected)| match expected {
            b'd' => byte.is_ascii_digit(),
            literal => byte == literal,
        })
}

impl ReleaseDate {
    pub fn new(date: NaiveDate, precision: ReleaseDatePrecision) -> Self {
        Self { date, precision }
    }

    pub fn parse(value: &str, precision: ReleaseDatePrecision) -> Res<Self> {
        parse_release_date(value, precision).map(|date| Self { date, precision })
    }

    pub fn to_spotify_string(&self) -> String {
        format_release_date(self.date, self.precision)
    }

    /// Assembles a release date from the `release_date` and
    /// `release_date_precision` keys of an object, which may arrive in either
    /// order or not at all.
    pub(crate) fn from_parts(
        value: Option<&str>,
        precision: Option<ReleaseDatePrecision>,
    ) -> Res<Self> {
        match value {
            Some(value) => {
                let precision = precision.unwrap_or_else(|| infer_precision(value));
                Self::parse(value, precision)
            }
            None => Ok(Self {
                precision: precision.unwrap_or_default(),
                ..Self::default()
            }),
        }
    }
}
