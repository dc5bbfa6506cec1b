use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::MapAccess,
};

use super::{ObjectSlots, read_object, skip_value, unsupported};
use crate::{
    error::Res,
    model::{
        Album, AlbumGroups, AlbumType, CountryCode, ExternalIds, ExternalUrls, Image, Paging,
        ReleaseDate, ReleaseDatePrecision, SimplifiedAlbum, SimplifiedArtist, SimplifiedTrack,
    },
};

#[derive(Deserialize)]
#[serde(field_identifier, rename_all = "snake_case")]
enum AlbumField {
    Id,
    Uri,
    Href,
    Name,
    AlbumType,
    AlbumGroup,
    Artists,
    AvailableMarkets,
    Images,
    ReleaseDate,
    ReleaseDatePrecision,
    TotalTracks,
    ExternalUrls,
    // full album only
    Genres,
    Label,
    Popularity,
    Tracks,
    ExternalIds,
    #[serde(other)]
    Unknown,
}

#[derive(Default)]
struct SimplifiedAlbumSlots {
    id: Option<String>,
    uri: Option<String>,
    href: Option<String>,
    name: Option<String>,
    album_type: Option<AlbumType>,
    album_group: Option<String>,
    artists: Option<Vec<SimplifiedArtist>>,
    available_markets: Option<Vec<CountryCode>>,
    images: Option<Vec<Image>>,
    release_date: Option<String>,
    release_date_precision: Option<ReleaseDatePrecision>,
    total_tracks: Option<u32>,
    external_urls: Option<ExternalUrls>,
}

impl ObjectSlots for SimplifiedAlbumSlots {
    type Field = AlbumField;
    type Output = SimplifiedAlbum;

    const EXPECTING: &'static str = "an album object";

    fn accept<'de, A>(&mut self, field: AlbumField, map: &mut A) -> Result<(), A::Error>
    where
        A: MapAccess<'de>,
    {
        match field {
            AlbumField::Id => self.id = map.next_value()?,
            AlbumField::Uri => self.uri = map.next_value()?,
            AlbumField::Href => self.href = map.next_value()?,
            AlbumField::Name => self.name = map.next_value()?,
            AlbumField::AlbumType => self.album_type = map.next_value()?,
            AlbumField::AlbumGroup => self.album_group = map.next_value()?,
            AlbumField::Artists => self.artists = map.next_value()?,
            AlbumField::AvailableMarkets => self.available_markets = map.next_value()?,
            AlbumField::Images => self.images = map.next_value()?,
            AlbumField::ReleaseDate => self.release_date = map.next_value()?,
            AlbumField::ReleaseDatePrecision => self.release_date_precision = map.next_value()?,
            AlbumField::TotalTracks => self.total_tracks = map.next_value()?,
            AlbumField::ExternalUrls => self.external_urls = map.next_value()?,
            AlbumField::Genres
            | AlbumField::Label
            | AlbumField::Popularity
            | AlbumField::Tracks
            | AlbumField::ExternalIds
            | AlbumField::Unknown => skip_value(map)?,
        }
        Ok(())
    }

    fn build(self) -> Res<SimplifiedAlbum> {
        let release_date =
            ReleaseDate::from_parts(self.release_date.as_deref(), self.release_date_precision)?;
        // `album_group` is a single token of the flag set
        let album_group = self
            .album_group
            .as_deref()
            .map(AlbumGroups::from_spotify_str)
            .transpose()?;

        Ok(SimplifiedAlbum {
            id: self.id.unwrap_or_default(),
            uri: self.uri.unwrap_or_default(),
            href: self.href.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            album_type: self.album_type.unwrap_or_default(),
            album_group,
            artists: self.artists.unwrap_or_default(),
            available_markets: self.available_markets.unwrap_or_default(),
            images: self.images.unwrap_or_default(),
            release_date,
            total_tracks: self.total_tracks.unwrap_or_default(),
            external_urls: self.external_urls.unwrap_or_default(),
        })
    }
}

#[derive(Default)]
struct AlbumSlots {
    simplified: SimplifiedAlbumSlots,
    genres: Option<Vec<String>>,
    label: Option<String>,
    popularity: Option<u32>,
    tracks: Option<Paging<SimplifiedTrack>>,
    external_ids: Option<ExternalIds>,
}

impl ObjectSlots for AlbumSlots {
    type Field = AlbumField;
    type Output = Album;

    const EXPECTING: &'static str = "an album object";

    fn accept<'de, A>(&mut self, field: AlbumField, map: &mut A) -> Result<(), A::Error>
    where
        A: MapAccess<'de>,
    {
        match field {
            AlbumField::Genres => self.genres = map.next_value()?,
            AlbumField::Label => self.label = map.next_value()?,
            AlbumField::Popularity => self.popularity = map.next_value()?,
            AlbumField::Tracks => self.tracks = map.next_value()?,
            AlbumField::ExternalIds => self.external_ids = map.next_value()?,
            other => return self.simplified.accept(other, map),
        }
        Ok(())
    }

    fn build(self) -> Res<Album> {
        Ok(Album {
            simplified: self.simplified.build()?,
            genres: self.genres.unwrap_or_default(),
            label: self.label.unwrap_or_default(),
            popularity: self.popularity.unwrap_or_default(),
            tracks: self.tracks.unwrap_or_default(),
            external_ids: self.external_ids.unwrap_or_default(),
        })
    }
}

impl<'de> Deserialize<'de> for SimplifiedAlbum {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        read_object::<D, SimplifiedAlbumSlots>(deserializer)
    }
}

impl<'de> Deserialize<'de> for Album {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        read_object::<D, AlbumSlots>(deserializer)
    }
}

impl Serialize for SimplifiedAlbum {
    fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
        unsupported::<S>("writing a simplified album")
    }
}

impl Serialize for Album {
    fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
        unsupported::<S>("writing an album")
    }
}
