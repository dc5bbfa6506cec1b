use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::MapAccess,
};
use url::Url;

use super::{ObjectSlots, read_object, skip_value, unsupported};
use crate::{
    error::Res,
    model::{
        CountryCode, ExternalIds, ExternalUrls, SimplifiedAlbum, SimplifiedArtist,
        SimplifiedTrack, Track,
    },
};

#[derive(Deserialize)]
#[serde(field_identifier, rename_all = "snake_case")]
enum TrackField {
    Id,
    Uri,
    Href,
    Name,
    Artists,
    #[serde(alias = "duration")]
    DurationMs,
    DiscNumber,
    TrackNumber,
    Explicit,
    IsLocal,
    IsPlayable,
    AvailableMarkets,
    PreviewUrl,
    ExternalUrls,
    // full track only
    Album,
    ExternalIds,
    Popularity,
    #[serde(other)]
    Unknown,
}

#[derive(Default)]
struct SimplifiedTrackSlots {
    id: Option<String>,
    uri: Option<String>,
    href: Option<String>,
    name: Option<String>,
    artists: Option<Vec<SimplifiedArtist>>,
    duration_ms: Option<u32>,
    disc_number: Option<u32>,
    track_number: Option<u32>,
    explicit: Option<bool>,
    is_local: Option<bool>,
    is_playable: Option<bool>,
    available_markets: Option<Vec<CountryCode>>,
    preview_url: Option<Url>,
    external_urls: Option<ExternalUrls>,
}

impl ObjectSlots for SimplifiedTrackSlots {
    type Field = TrackField;
    type Output = SimplifiedTrack;

    const EXPECTING: &'static str = "a track object";

    fn accept<'de, A>(&mut self, field: TrackField, map: &mut A) -> Result<(), A::Error>
    where
        A: MapAccess<'de>,
    {
        match field {
            TrackField::Id => self.id = map.next_value()?,
            TrackField::Uri => self.uri = map.next_value()?,
            TrackField::Href => self.href = map.next_value()?,
            TrackField::Name => self.name = map.next_value()?,
            TrackField::Artists => self.artists = map.next_value()?,
            TrackField::DurationMs => self.duration_ms = map.next_value()?,
            TrackField::DiscNumber => self.disc_number = map.next_value()?,
            TrackField::TrackNumber => self.track_number = map.next_value()?,
            TrackField::Explicit => self.explicit = map.next_value()?,
            TrackField::IsLocal => self.is_local = map.next_value()?,
            TrackField::IsPlayable => self.is_playable = map.next_value()?,
            TrackField::AvailableMarkets => self.available_markets = map.next_value()?,
            TrackField::PreviewUrl => self.preview_url = map.next_value()?,
            TrackField::ExternalUrls => self.external_urls = map.next_value()?,
            TrackField::Album
            | TrackField::ExternalIds
            | TrackField::Popularity
            | TrackField::Unknown => skip_value(map)?,
        }
        Ok(())
    }

    fn build(self) -> Res<SimplifiedTrack> {
        Ok(SimplifiedTrack {
            id: self.id.unwrap_or_default(),
            uri: self.uri.unwrap_or_default(),
            href: self.href.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            artists: self.artists.unwrap_or_default(),
            duration_ms: self.duration_ms.unwrap_or_default(),
            disc_number: self.disc_number.unwrap_or_default(),
            track_number: self.track_number.unwrap_or_default(),
            explicit: self.explicit.unwrap_or_default(),
            is_local: self.is_local.unwrap_or_default(),
            is_playable: self.is_playable,
            available_markets: self.available_markets.unwrap_or_default(),
            preview_url: self.preview_url,
            external_urls: self.external_urls.unwrap_or_default(),
        })
    }
}

#[derive(Default)]
struct TrackSlots {
    simplified: SimplifiedTrackSlots,
    album: Option<SimplifiedAlbum>,
    external_ids: Option<ExternalIds>,
    popularity: Option<u32>,
}

impl ObjectSlots for TrackSlots {
    type Field = TrackField;
    type Output = Track;

    const EXPECTING: &'static str = "a track object";

    fn accept<'de, A>(&mut self, field: TrackField, map: &mut A) -> Result<(), A::Error>
    where
        A: MapAccess<'de>,
    {
        match field {
            TrackField::Album => self.album = map.next_value()?,
            TrackField::ExternalIds => self.external_ids = map.next_value()?,
            TrackField::Popularity => self.popularity = map.next_value()?,
            other => return self.simplified.accept(other, map),
        }
        Ok(())
    }

    fn build(self) -> Res<Track> {
        Ok(Track {
            simplified: self.simplified.build()?,
            album: self.album.unwrap_or_default(),
            external_ids: self.external_ids.unwrap_or_default(),
            popularity: self.popularity.unwrap_or_default(),
        })
    }
}

impl<'de> Deserialize<'de> for SimplifiedTrack {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        read_object::<D, SimplifiedTrackSlots>(deserializer)
    }
}

impl<'de> Deserialize<'de> for Track {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        read_object::<D, TrackSlots>(deserializer)
    }
}

impl Serialize for SimplifiedTrack {
    fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
        unsupported::<S>("writing a simplified track")
    }
}

impl Serialize for Track {
    fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
        unsupported::<S>("writing a track")
    }
}
