use serde::Serialize;

use super::{ExternalUrls, Followers, Image};

/// An artist as embedded in albums and tracks.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SimplifiedArtist {
    pub id: String,
    pub uri: String,
    pub href: String,
    pub name: String,
    pub external_urls: ExternalUrls,
}

/// The full artist object returned by `GET /artists/{id}` and the
/// personalization endpoints.
///
/// Written with the simplified fields inlined, the way the API sends them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Artist {
    #[serde(flatten)]
    pub simplified: SimplifiedArtist,
    pub followers: Followers,
    pub genres: Vec<String>,
    pub images: Vec<Image>,
    /// 0 to 100, computed from the popularity of the artist's tracks.
    pub popularity: u32,
}
