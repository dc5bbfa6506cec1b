use url::Url;

use super::{CountryCode, ExternalIds, ExternalUrls, SimplifiedAlbum, SimplifiedArtist};

/// A track as listed inside an album.
///
/// Read-only: writing fails with `Error::NotSupported`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SimplifiedTrack {
    pub id: String,
    pub uri: String,
    pub href: String,
    pub name: String,
    pub artists: Vec<SimplifiedArtist>,
    pub duration_ms: u32,
    pub disc_number: u32,
    pub track_number: u32,
    pub explicit: bool,
    pub is_local: bool,
    pub is_playable: Option<bool>,
    pub available_markets: Vec<CountryCode>,
    pub preview_url: Option<Url>,
    pub external_urls: ExternalUrls,
}

/// The full track object: a [`SimplifiedTrack`] plus the album it belongs to
/// and catalogue metadata.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Track {
    pub simplified: SimplifiedTrack,
    pub album: SimplifiedAlbum,
    pub external_ids: ExternalIds,
    pub popularity: u32,
}
