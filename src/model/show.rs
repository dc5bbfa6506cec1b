use serde::Serialize;
use url::Url;

use super::{CountryCode, ExternalUrls, Image, Paging, ReleaseDate, ResumePoint};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SimplifiedShow {
    pub id: String,
    pub uri: String,
    pub href: String,
    pub name: String,
    pub description: String,
    pub publisher: String,
    pub images: Vec<Image>,
    pub explicit: bool,
    pub is_externally_hosted: bool,
    pub languages: Vec<String>,
    pub media_type: String,
    pub available_markets: Vec<CountryCode>,
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Show {
    #[serde(flatten)]
    pub simplified: SimplifiedShow,
    pub total_episodes: u32,
    pub episodes: Paging<SimplifiedEpisode>,
}

/// An episode as listed inside a show.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SimplifiedEpisode {
    pub id: String,
    pub uri: String,
    pub href: String,
    pub name: String,
    pub description: String,
    pub images: Vec<Image>,
    pub duration_ms: u32,
    pub release_date: ReleaseDate,
    pub explicit: bool,
    pub is_playable: bool,
    pub is_externally_hosted: bool,
    pub languages: Vec<String>,
    pub audio_preview_url: Option<Url>,
    pub external_urls: ExternalUrls,
    pub resume_point: Option<ResumePoint>,
}

/// The full episode object, including the show it belongs to.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Episode {
    pub simplified: SimplifiedEpisode,
    pub show: SimplifiedShow,
}
