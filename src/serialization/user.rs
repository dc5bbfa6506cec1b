use serde::{Deserialize, Deserializer, de::MapAccess};

use super::{ObjectSlots, read_object, skip_value};
use crate::{
    error::Res,
    model::{CountryCode, ExternalUrls, Followers, Image, PrivateUser, Product, PublicUser},
};

#[derive(Deserialize)]
#[serde(field_identifier, rename_all = "snake_case")]
enum UserField {
    Id,
    Uri,
    Href,
    DisplayName,
    Images,
    Followers,
    ExternalUrls,
    // private user only
    Email,
    Country,
    Product,
    #[serde(other)]
    Unknown,
}

#[derive(Default)]
struct PublicUserSlots {
    id: Option<String>,
    uri: Option<String>,
    href: Option<String>,
    display_name: Option<String>,
    images: Option<Vec<Image>>,
    followers: Option<Followers>,
    external_urls: Option<ExternalUrls>,
}

impl ObjectSlots for PublicUserSlots {
    type Field = UserField;
    type Output = PublicUser;

    const EXPECTING: &'static str = "a user object";

    fn accept<'de, A>(&mut self, field: UserField, map: &mut A) -> Result<(), A::Error>
    where
        A: MapAccess<'de>,
    {
        match field {
            UserField::Id => self.id = map.next_value()?,
            UserField::Uri => self.uri = map.next_value()?,
            UserField::Href => self.href = map.next_value()?,
            UserField::DisplayName => self.display_name = map.next_value()?,
            UserField::Images => self.images = map.next_value()?,
            UserField::Followers => self.followers = map.next_value()?,
            UserField::ExternalUrls => self.external_urls = map.next_value()?,
            UserField::Email | UserField::Country | UserField::Product | UserField::Unknown => {
                skip_value(map)?
            }
        }
        Ok(())
    }

    fn build(self) -> Res<PublicUser> {
        Ok(PublicUser {
            id: self.id.unwrap_or_default(),
            uri: self.uri.unwrap_or_default(),
            href: self.href.unwrap_or_default(),
            display_name: self.display_name,
            images: self.images.unwrap_or_default(),
            followers: self.followers.unwrap_or_default(),
            external_urls: self.external_urls.unwrap_or_default(),
        })
    }
}

#[derive(Default)]
struct PrivateUserSlots {
    profile: PublicUserSlots,
    email: Option<String>,
    country: Option<CountryCode>,
    product: Option<Product>,
}

impl ObjectSlots for PrivateUserSlots {
    type Field = UserField;
    type Output = PrivateUser;

    const EXPECTING: &'static str = "a user object";

    fn accept<'de, A>(&mut self, field: UserField, map: &mut A) -> Result<(), A::Error>
    where
        A: MapAccess<'de>,
    {
        match field {
            UserField::Email => self.email = map.next_value()?,
            UserField::Country => self.country = map.next_value()?,
            UserField::Product => self.product = map.next_value()?,
            other => return self.profile.accept(other, map),
        }
        Ok(())
    }

    fn build(self) -> Res<PrivateUser> {
        Ok(PrivateUser {
            profile: self.profile.build()?,
            email: self.email,
            country: self.country,
            product: self.product,
        })
    }
}

impl<'de> Deserialize<'de> for PublicUser {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        read_object::<D, PublicUserSlots>(deserializer)
    }
}

impl<'de> Deserialize<'de> for PrivateUser {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        read_object::<D, PrivateUserSlots>(deserializer)
    }
}
