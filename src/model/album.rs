use super::{
    AlbumGroups, AlbumType, CountryCode, ExternalIds, ExternalUrls, Image, Paging, ReleaseDate,
    SimplifiedArtist, SimplifiedTrack,
};

/// An album as embedded in tracks, artist discographies and search results.
///
/// Read-only: writing fails with `Error::NotSupported`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SimplifiedAlbum {
    pub id: String,
    pub uri: String,
    pub href: String,
    pub name: String,
    pub album_type: AlbumType,
    /// Only present when the album was reached through an artist.
    pub album_group: Option<AlbumGroups>,
    pub artists: Vec<SimplifiedArtist>,
    pub available_markets: Vec<CountryCode>,
    pub images: Vec<Image>,
    pub release_date: ReleaseDate,
    pub total_tracks: u32,
    pub external_urls: ExternalUrls,
}

/// The full album object.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Album {
    pub simplified: SimplifiedAlbum,
    pub genres: Vec<String>,
    pub label: String,
    pub popularity: u32,
    pub tracks: Paging<SimplifiedTrack>,
    pub external_ids: ExternalIds,
}
