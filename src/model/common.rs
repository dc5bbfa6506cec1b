use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use url::Url;

use super::ReleaseDatePrecision;

/// Known external URLs of an object, keyed by service (`"spotify"`).
pub type ExternalUrls = BTreeMap<String, Url>;

/// Known external identifiers of an object, keyed by scheme (`"isrc"`).
pub type ExternalIds = BTreeMap<String, String>;

/// An ISO 3166-1 alpha-2 country code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountryCode(String);

impl CountryCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A release date together with how much of it is meaningful.
///
/// Only the components covered by `precision` carry information: a
/// year-precision date is always January 1 of its year, a month-precision
/// date the 1st of its month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ReleaseDate {
    pub date: NaiveDate,
    pub precision: ReleaseDatePrecision,
}

/// Cover art or a profile picture. Dimensions are `None` when unknown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Image {
    pub url: Url,
    pub height: Option<u32>,
    pub width: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Followers {
    pub href: Option<String>,
    pub total: u32,
}

/// Where playback of an episode was left off by the current user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ResumePoint {
    pub fully_played: bool,
    pub resume_position_ms: u32,
}
