//! Data structures mirroring the resources served by the Spotify Web API.
//!
//! Full objects embed their simplified counterpart instead of repeating its
//! fields: [`Track`] holds a [`SimplifiedTrack`], [`Album`] a
//! [`SimplifiedAlbum`], [`PrivateUser`] a [`PublicUser`].

mod album;
mod artist;
mod common;
mod enums;
mod paging;
mod show;
mod track;
mod user;

use serde::Deserialize;

use crate::serialization::collections::NullableArray;

pub use album::{Album, SimplifiedAlbum};
pub use artist::{Artist, SimplifiedArtist};
pub use common::{CountryCode, ExternalIds, ExternalUrls, Followers, Image, ReleaseDate, ResumePoint};
pub use enums::{
    AlbumGroups, AlbumType, AuthorizationScopes, ObjectType, Product, ReleaseDatePrecision,
    TimeRange,
};
pub use paging::{CursorPaging, Cursors, Paging};
pub use show::{Episode, Show, SimplifiedEpisode, SimplifiedShow};
pub use track::{SimplifiedTrack, Track};
pub use user::{PrivateUser, PublicUser};

/// Response of `GET /albums?ids=..`; unknown IDs come back as `null`.
#[derive(Debug, Clone, Deserialize)]
pub struct SeveralAlbums {
    pub albums: NullableArray<Album>,
}

/// Response of `GET /tracks?ids=..`; unknown IDs come back as `null`.
#[derive(Debug, Clone, Deserialize)]
pub struct SeveralTracks {
    pub tracks: NullableArray<Track>,
}
