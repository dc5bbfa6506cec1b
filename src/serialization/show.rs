use serde::{Deserialize, Deserializer, de::MapAccess};

use super::{ObjectSlots, read_object, skip_value};
use crate::{
    error::Res,
    model::{CountryCode, ExternalUrls, Image, Paging, Show, SimplifiedEpisode, SimplifiedShow},
};

#[derive(Deserialize)]
#[serde(field_identifier, rename_all = "snake_case")]
enum ShowField {
    Id,
    Uri,
    Href,
    Name,
    Description,
    Publisher,
    Images,
    Explicit,
    IsExternallyHosted,
    Languages,
    MediaType,
    AvailableMarkets,
    ExternalUrls,
    // full show only
    TotalEpisodes,
    Episodes,
    #[serde(other)]
    Unknown,
}

#[derive(Default)]
struct SimplifiedShowSlots {
    id: Option<String>,
    uri: Option<String>,
    href: Option<String>,
    name: Option<String>,
    description: Option<String>,
    publisher: Option<String>,
    images: Option<Vec<Image>>,
    explicit: Option<bool>,
    is_externally_hosted: Option<bool>,
    languages: Option<Vec<String>>,
    media_type: Option<String>,
    available_markets: Option<Vec<CountryCode>>,
    external_urls: Option<ExternalUrls>,
}

impl ObjectSlots for SimplifiedShowSlots {
    type Field = ShowField;
    type Output = SimplifiedShow;

    const EXPECTING: &'static str = "a show object";

    fn accept<'de, A>(&mut self, field: ShowField, map: &mut A) -> Result<(), A::Error>
    where
        A: MapAccess<'de>,
    {
        match field {
            ShowField::Id => self.id = map.next_value()?,
            ShowField::Uri => self.uri = map.next_value()?,
            ShowField::Href => self.href = map.next_value()?,
            ShowField::Name => self.name = map.next_value()?,
            ShowField::Description => self.description = map.next_value()?,
            ShowField::Publisher => self.publisher = map.next_value()?,
            ShowField::Images => self.images = map.next_value()?,
            ShowField::Explicit => self.explicit = map.next_value()?,
            ShowField::IsExternallyHosted => self.is_externally_hosted = map.next_value()?,
            ShowField::Languages => self.languages = map.next_value()?,
            ShowField::MediaType => self.media_type = map.next_value()?,
            ShowField::AvailableMarkets => self.available_markets = map.next_value()?,
            ShowField::ExternalUrls => self.external_urls = map.next_value()?,
            ShowField::TotalEpisodes | ShowField::Episodes | ShowField::Unknown => {
                skip_value(map)?
            }
        }
        Ok(())
    }

    fn build(self) -> Res<SimplifiedShow> {
        Ok(SimplifiedShow {
            id: self.id.unwrap_or_default(),
            uri: self.uri.unwrap_or_default(),
            href: self.href.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            publisher: self.publisher.unwrap_or_default(),
            images: self.images.unwrap_or_default(),
            explicit: self.explicit.unwrap_or_default(),
            is_externally_hosted: self.is_externally_hosted.unwrap_or_default(),
            languages: self.languages.unwrap_or_default(),
            media_type: self.media_type.unwrap_or_default(),
            available_markets: self.available_markets.unwrap_or_default(),
            external_urls: self.external_urls.unwrap_or_default(),
        })
    }
}

#[derive(Default)]
struct ShowSlots {
    simplified: SimplifiedShowSlots,
    total_episodes: Option<u32>,
    episodes: Option<Paging<SimplifiedEpisode>>,
}

impl ObjectSlots for ShowSlots {
    type Field = ShowField;
    type Output = Show;

    const EXPECTING: &'static str = "a show object";

    fn accept<'de, A>(&mut self, field: ShowField, map: &mut A) -> Result<(), A::Error>
    where
        A: MapAccess<'de>,
    {
        match field {
            ShowField::TotalEpisodes => self.total_episodes = map.next_value()?,
            ShowField::Episodes => self.episodes = map.next_value()?,
            other => return self.simplified.accept(other, map),
        }
        Ok(())
    }

    fn build(self) -> Res<Show> {
        Ok(Show {
            simplified: self.simplified.build()?,
            total_episodes: self.total_episodes.unwrap_or_default(),
            episodes: self.episodes.unwrap_or_default(),
        })
    }
}

impl<'de> Deserialize<'de> for SimplifiedShow {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        read_object::<D, SimplifiedShowSlots>(deserializer)
    }
}

impl<'de> Deserialize<'de> for Show {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        read_object::<D, ShowSlots>(deserializer)
    }
}
