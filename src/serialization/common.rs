use serde::{Deserialize, Deserializer, de::MapAccess};
use url::Url;

use super::{ObjectSlots, missing_field, read_object, skip_value};
use crate::{
    error::Res,
    model::{Followers, Image, ResumePoint},
};

#[derive(Deserialize)]
#[serde(field_identifier, rename_all = "snake_case")]
enum ImageField {
    Url,
    Height,
    Width,
    #[serde(other)]
    Unknown,
}

#[derive(Default)]
struct ImageSlots {
    url: Option<Url>,
    height: Option<u32>,
    width: Option<u32>,
}

impl ObjectSlots for ImageSlots {
    type Field = ImageField;
    type Output = Image;

    const EXPECTING: &'static str = "an image object";

    fn accept<'de, A>(&mut self, field: ImageField, map: &mut A) -> Result<(), A::Error>
    where
        A: MapAccess<'de>,
    {
        match field {
            ImageField::Url => self.url = map.next_value()?,
            ImageField::Height => self.height = map.next_value()?,
            ImageField::Width => self.width = map.next_value()?,
            ImageField::Unknown => skip_value(map)?,
        }
        Ok(())
    }

    // an image without a location carries nothing
    fn build(self) -> Res<Image> {
        Ok(Image {
            url: self.url.ok_or_else(|| missing_field("url"))?,
            height: self.height,
            width: self.width,
        })
    }
}

#[derive(Deserialize)]
#[serde(field_identifier, rename_all = "snake_case")]
enum FollowersField {
    Href,
    Total,
    #[serde(other)]
    Unknown,
}

#[derive(Default)]
struct FollowersSlots {
    href: Option<String>,
    total: Option<u32>,
}

impl ObjectSlots for FollowersSlots {
    type Field = FollowersField;
    type Output = Followers;

    const EXPECTING: &'static str = "a followers object";

    fn accept<'de, A>(&mut self, field: FollowersField, map: &mut A) -> Result<(), A::Error>
    where
        A: MapAccess<'de>,
    {
        match field {
            FollowersField::Href => self.href = map.next_value()?,
            FollowersField::Total => self.total = map.next_value()?,
            FollowersField::Unknown => skip_value(map)?,
        }
        Ok(())
    }

    fn build(self) -> Res<Followers> {
        Ok(Followers {
            href: self.href,
            total: self.total.unwrap_or_default(),
        })
    }
}

#[derive(Deserialize)]
#[serde(field_identifier, rename_all = "snake_case")]
enum ResumePointField {
    FullyPlayed,
    ResumePositionMs,
    #[serde(other)]
    Unknown,
}

#[derive(Default)]
struct ResumePointSlots {
    fully_played: Option<bool>,
    resume_position_ms: Option<u32>,
}

impl ObjectSlots for ResumePointSlots {
    type Field = ResumePointField;
    type Output = ResumePoint;

    const EXPECTING: &'static str = "a resume point object";

    fn accept<'de, A>(&mut self, field: ResumePointField, map: &mut A) -> Result<(), A::Error>
    where
        A: MapAccess<'de>,
    {
        match field {
            ResumePointField::FullyPlayed => self.fully_played = map.next_value()?,
            ResumePointField::ResumePositionMs => self.resume_position_ms = map.next_value()?,
            ResumePointField::Unknown => skip_value(map)?,
        }
        Ok(())
    }

    fn build(self) -> Res<ResumePoint> {
        Ok(ResumePoint {
            fully_played: self.fully_played.unwrap_or_default(),
            resume_position_ms: self.resume_position_ms.unwrap_or_default(),
        })
    }
}

impl<'de> Deserialize<'de> for Image {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        read_object::<D, ImageSlots>(deserializer)
    }
}

impl<'de> Deserialize<'de> for Followers {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        read_object::<D, FollowersSlots>(deserializer)
    }
}

impl<'de> Deserialize<'de> for ResumePoint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        read_object::<D, ResumePointSlots>(deserializer)
    }
}
