use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::MapAccess,
    ser::SerializeStruct,
};
use url::Url;

use super::{ObjectSlots, read_object, skip_value};
use crate::{
    error::Res,
    model::{
        Episode, ExternalUrls, Image, ObjectType, ReleaseDate, ReleaseDatePrecision, ResumePoint,
        SimplifiedEpisode, SimplifiedShow,
    },
};

#[derive(Deserialize)]
#[serde(field_identifier, rename_all = "snake_case")]
enum EpisodeField {
    Id,
    Uri,
    Href,
    Name,
    Description,
    Images,
    DurationMs,
    ReleaseDate,
    ReleaseDatePrecision,
    Explicit,
    IsPlayable,
    IsExternallyHosted,
    Languages,
    AudioPreviewUrl,
    ExternalUrls,
    ResumePoint,
    // full episode only
    Show,
    #[serde(other)]
    Unknown,
}

#[derive(Default)]
struct SimplifiedEpisodeSlots {
    id: Option<String>,
    uri: Option<String>,
    href: Option<String>,
    name: Option<String>,
    description: Option<String>,
    images: Option<Vec<Image>>,
    duration_ms: Option<u32>,
    release_date: Option<String>,
    release_date_precision: Option<ReleaseDatePrecision>,
    explicit: Option<bool>,
    is_playable: Option<bool>,
    is_externally_hosted: Option<bool>,
    languages: Option<Vec<String>>,
    audio_preview_url: Option<Url>,
    external_urls: Option<ExternalUrls>,
    resume_point: Option<ResumePoint>,
}

impl ObjectSlots for SimplifiedEpisodeSlots {
    type Field = EpisodeField;
    type Output = SimplifiedEpisode;

    const EXPECTING: &'static str = "an episode object";

    fn accept<'de, A>(&mut self, field: EpisodeField, map: &mut A) -> Result<(), A::Error>
    where
        A: MapAccess<'de>,
    {
        match field {
            EpisodeField::Id => self.id = map.next_value()?,
            EpisodeField::Uri => self.uri = map.next_value()?,
            EpisodeField::Href => self.href = map.next_value()?,
            EpisodeField::Name => self.name = map.next_value()?,
            EpisodeField::Description => self.description = map.next_value()?,
            EpisodeField::Images => self.images = map.next_value()?,
            EpisodeField::DurationMs => self.duration_ms = map.next_value()?,
            EpisodeField::ReleaseDate => self.release_date = map.next_value()?,
            EpisodeField::ReleaseDatePrecision => self.release_date_precision = map.next_value()?,
            EpisodeField::Explicit => self.explicit = map.next_value()?,
            EpisodeField::IsPlayable => self.is_playable = map.next_value()?,
            EpisodeField::IsExternallyHosted => self.is_externally_hosted = map.next_value()?,
            EpisodeField::Languages => self.languages = map.next_value()?,
            EpisodeField::AudioPreviewUrl => self.audio_preview_url = map.next_value()?,
            EpisodeField::ExternalUrls => self.external_urls = map.next_value()?,
            EpisodeField::ResumePoint => self.resume_point = map.next_value()?,
            EpisodeField::Show | EpisodeField::Unknown => skip_value(map)?,
        }
        Ok(())
    }

    fn build(self) -> Res<SimplifiedEpisode> {
        let release_date =
            ReleaseDate::from_parts(self.release_date.as_deref(), self.release_date_precision)?;

        Ok(SimplifiedEpisode {
            id: self.id.unwrap_or_default(),
            uri: self.uri.unwrap_or_default(),
            href: self.href.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            images: self.images.unwrap_or_default(),
            duration_ms: self.duration_ms.unwrap_or_default(),
            release_date,
            explicit: self.explicit.unwrap_or_default(),
            is_playable: self.is_playable.unwrap_or_default(),
            is_externally_hosted: self.is_externally_hosted.unwrap_or_default(),
            languages: self.languages.unwrap_or_default(),
            audio_preview_url: self.audio_preview_url,
            external_urls: self.external_urls.unwrap_or_default(),
            resume_point: self.resume_point,
        })
    }
}

#[derive(Default)]
struct EpisodeSlots {
    simplified: SimplifiedEpisodeSlots,
    show: Option<SimplifiedShow>,
}

impl ObjectSlots for EpisodeSlots {
    type Field = EpisodeField;
    type Output = Episode;

    const EXPECTING: &'static str = "an episode object";

    fn accept<'de, A>(&mut self, field: EpisodeField, map: &mut A) -> Result<(), A::Error>
    where
        A: MapAccess<'de>,
    {
        match field {
            EpisodeField::Show => {
                self.show = map.next_value()?;
                Ok(())
            }
            other => self.simplified.accept(other, map),
        }
    }

    fn build(self) -> Res<Episode> {
        Ok(Episode {
            simplified: self.simplified.build()?,
            show: self.show.unwrap_or_default(),
        })
    }
}

impl<'de> Deserialize<'de> for SimplifiedEpisode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        read_object::<D, SimplifiedEpisodeSlots>(deserializer)
    }
}

impl<'de> Deserialize<'de> for Episode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        read_object::<D, EpisodeSlots>(deserializer)
    }
}

// Every key is always written; absent optional values become `null`.
fn write_episode<S: Serializer>(
    serializer: S,
    episode: &SimplifiedEpisode,
    show: Option<&SimplifiedShow>,
) -> Result<S::Ok, S::Error> {
    let len = if show.is_some() { 18 } else { 17 };
    let mut state = serializer.serialize_struct("Episode", len)?;
    state.serialize_field("type", &ObjectType::Episode)?;
    state.serialize_field("id", &episode.id)?;
    state.serialize_field("uri", &episode.uri)?;
    state.serialize_field("href", &episode.href)?;
    state.serialize_field("name", &episode.name)?;
    state.serialize_field("description", &episode.description)?;
    state.serialize_field("images", &episode.images)?;
    if let Some(show) = show {
        state.serialize_field("show", show)?;
    }
    state.serialize_field("duration_ms", &episode.duration_ms)?;
    state.serialize_field("release_date", &episode.release_date.to_spotify_string())?;
    state.serialize_field("release_date_precision", &episode.release_date.precision)?;
    state.serialize_field("explicit", &episode.explicit)?;
    state.serialize_field("is_playable", &episode.is_playable)?;
    state.serialize_field("is_externally_hosted", &episode.is_externally_hosted)?;
    state.serialize_field("languages", &episode.languages)?;
    state.serialize_field("audio_preview_url", &episode.audio_preview_url)?;
    state.serialize_field("external_urls", &episode.external_urls)?;
    state.serialize_field("resume_point", &episode.resume_point)?;
    state.end()
}

impl Serialize for SimplifiedEpisode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        write_episode(serializer, self, None)
    }
}

impl Serialize for Episode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        write_episode(serializer, &self.simplified, Some(&self.show))
    }
}
