//! JSON converters for the object model.
//!
//! Leaf converters (enum tokens, release dates, collections) are used by the
//! composite readers for albums, artists, tracks, shows, episodes and users,
//! which assemble a record from the key/value pairs of one JSON object:
//!
//! ```text
//! { "id": .., "name": .., "unknown": {..} }
//!      │         │             │
//!      ▼         ▼             ▼
//!   slots.id  slots.name    skipped
//!      └────┬────┘
//!           ▼
//!     slots.build()  ──►  immutable record
//! ```
//!
//! Every reader requires a JSON object, skips keys it does not know and falls
//! back to a documented default for keys that are absent or `null`. Types
//! whose writer is intentionally missing still implement `Serialize`, but the
//! call fails with [`Error::NotSupported`].

pub mod collections;
pub mod enums;
pub mod paging;
pub mod release_date;

mod album;
mod artist;
mod common;
mod episode;
mod show;
mod track;
mod user;

use std::{fmt, marker::PhantomData};

use serde::{
    Deserializer, Serialize, Serializer,
    de::{self, DeserializeOwned, IgnoredAny, MapAccess, Visitor},
    ser,
};

use crate::error::{Error, Res};

/// Reads a value from JSON text.
pub fn from_str<T: DeserializeOwned>(json: &str) -> Res<T> {
    Ok(serde_json::from_str(json)?)
}

/// Reads a value from JSON bytes.
pub fn from_slice<T: DeserializeOwned>(json: &[u8]) -> Res<T> {
    Ok(serde_json::from_slice(json)?)
}

/// Writes a value as compact JSON text.
pub fn to_string<T: Serialize + ?Sized>(value: &T) -> Res<String> {
    Ok(serde_json::to_string(value)?)
}

/// Local builder for a record read from one JSON object.
///
/// `Field` is a serde field identifier whose `#[serde(other)]` variant marks
/// keys the reader does not know.
pub(crate) trait ObjectSlots: Default {
    type Field: DeserializeOwned;
    type Output;

    const EXPECTING: &'static str;

    fn accept<'de, A>(&mut self, field: Self::Field, map: &mut A) -> Result<(), A::Error>
    where
        A: MapAccess<'de>;

    fn build(self) -> Res<Self::Output>;
}

struct ObjectVisitor<S>(PhantomData<S>);

impl<'de, S: ObjectSlots> Visitor<'de> for ObjectVisitor<S> {
    type Value = S::Output;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(S::EXPECTING)
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut slots = S::default();
        while let Some(field) = map.next_key::<S::Field>()? {
            slots.accept(field, &mut map)?;
        }
        slots.build().map_err(de::Error::custom)
    }
}

pub(crate) fn read_object<'de, D, S>(deserializer: D) -> Result<S::Output, D::Error>
where
    D: Deserializer<'de>,
    S: ObjectSlots,
{
    deserializer.deserialize_map(ObjectVisitor::<S>(PhantomData))
}

/// Consumes the value of an unrecognized key, whole subtree included.
pub(crate) fn skip_value<'de, A>(map: &mut A) -> Result<(), A::Error>
where
    A: MapAccess<'de>,
{
    map.next_value::<IgnoredAny>().map(|_| ())
}

/// A key the record cannot be built without, for fields that have no
/// meaningful default.
pub(crate) fn missing_field(field: &'static str) -> Error {
    Error::Json(<serde_json::Error as de::Error>::missing_field(field))
}

pub(crate) fn unsupported<S: Serializer>(what: &'static str) -> Result<S::Ok, S::Error> {
    Err(ser::Error::custom(Error::NotSupported(what)))
}
