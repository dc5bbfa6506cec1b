use serde::Serialize;

use super::{CountryCode, ExternalUrls, Followers, Image, Product};

/// Profile information any user can see.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PublicUser {
    pub id: String,
    pub uri: String,
    pub href: String,
    pub display_name: Option<String>,
    pub images: Vec<Image>,
    pub followers: Followers,
    pub external_urls: ExternalUrls,
}

/// The current user's own profile.
///
/// `email`, `country` and `product` are only filled in when the matching
/// scopes (`user-read-email`, `user-read-private`) were granted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PrivateUser {
    #[serde(flatten)]
    pub profile: PublicUser,
    pub email: Option<String>,
    pub country: Option<CountryCode>,
    pub product: Option<Product>,
}
