use serde::{Deserialize, Deserializer, de::MapAccess};

use super::{ObjectSlots, read_object, skip_value};
use crate::{
    error::Res,
    model::{Artist, ExternalUrls, Followers, Image, SimplifiedArtist},
};

#[derive(Deserialize)]
#[serde(field_identifier, rename_all = "snake_case")]
enum ArtistField {
    Id,
    Uri,
    Href,
    Name,
    ExternalUrls,
    // full artist only
    Followers,
    Genres,
    Images,
    Popularity,
    #[serde(other)]
    Unknown,
}

#[derive(Default)]
struct SimplifiedArtistSlots {
    id: Option<String>,
    uri: Option<String>,
    href: Option<String>,
    name: Option<String>,
    external_urls: Option<ExternalUrls>,
}

impl ObjectSlots for SimplifiedArtistSlots {
    type Field = ArtistField;
    type Output = SimplifiedArtist;

    const EXPECTING: &'static str = "an artist object";

    fn accept<'de, A>(&mut self, field: ArtistField, map: &mut A) -> Result<(), A::Error>
    where
        A: MapAccess<'de>,
    {
        match field {
            ArtistField::Id => self.id = map.next_value()?,
            ArtistField::Uri => self.uri = map.next_value()?,
            ArtistField::Href => self.href = map.next_value()?,
            ArtistField::Name => self.name = map.next_value()?,
            ArtistField::ExternalUrls => self.external_urls = map.next_value()?,
            ArtistField::Followers
            | ArtistField::Genres
            | ArtistField::Images
            | ArtistField::Popularity
            | ArtistField::Unknown => skip_value(map)?,
        }
        Ok(())
    }

    fn build(self) -> Res<SimplifiedArtist> {
        Ok(SimplifiedArtist {
            id: self.id.unwrap_or_default(),
            uri: self.uri.unwrap_or_default(),
            href: self.href.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            external_urls: self.external_urls.unwrap_or_default(),
        })
    }
}

#[derive(Default)]
struct ArtistSlots {
    simplified: SimplifiedArtistSlots,
    followers: Option<Followers>,
    genres: Option<Vec<String>>,
    images: Option<Vec<Image>>,
    popularity: Option<u32>,
}

impl ObjectSlots for ArtistSlots {
    type Field = ArtistField;
    type Output = Artist;

    const EXPECTING: &'static str = "an artist object";

    fn accept<'de, A>(&mut self, field: ArtistField, map: &mut A) -> Result<(), A::Error>
    where
        A: MapAccess<'de>,
    {
        match field {
            ArtistField::Followers => self.followers = map.next_value()?,
            ArtistField::Genres => self.genres = map.next_value()?,
            ArtistField::Images => self.images = map.next_value()?,
            ArtistField::Popularity => self.popularity = map.next_value()?,
            other => return self.simplified.accept(other, map),
        }
        Ok(())
    }

    fn build(self) -> Res<Artist> {
        Ok(Artist {
            simplified: self.simplified.build()?,
            followers: self.followers.unwrap_or_default(),
            genres: self.genres.unwrap_or_default(),
            images: self.images.unwrap_or_default(),
            popularity: self.popularity.unwrap_or_default(),
        })
    }
}

impl<'de> Deserialize<'de> for SimplifiedArtist {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        read_object::<D, SimplifiedArtistSlots>(deserializer)
    }
}

impl<'de> Deserialize<'de> for Artist {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        read_object::<D, ArtistSlots>(deserializer)
    }
}
