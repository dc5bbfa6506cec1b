//! Collection converters.
//!
//! String-keyed dictionaries ([`ExternalUrls`](crate::model::ExternalUrls),
//! [`ExternalIds`](crate::model::ExternalIds)) are plain `BTreeMap`s whose
//! values go through the element type's own converter; serde already rejects
//! non-object roots for them. Arrays that may hold `null` elements need the
//! read-only [`NullableArray`].

use std::{fmt, marker::PhantomData, ops::Deref};

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{SeqAccess, Visitor},
};

use super::unsupported;

/// An array from an API response whose elements may be `null`.
///
/// Only occurs in responses, so writing one fails with
/// [`Error::NotSupported`](crate::Error::NotSupported).
#[derive(Debug, Clone, PartialEq)]
pub struct NullableArray<T>(Vec<Option<T>>);

impl<T> NullableArray<T> {
    pub fn into_inner(self) -> Vec<Option<T>> {
        self.0
    }

    /// The non-null elements, in order.
    pub fn present(&self) -> impl Iterator<Item = &T> {
        self.0.iter().flatten()
    }
}

impl<T> Default for NullableArray<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> Deref for NullableArray<T> {
    type Target = [Option<T>];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> From<Vec<Option<T>>> for NullableArray<T> {
    fn from(elements: Vec<Option<T>>) -> Self {
        Self(elements)
    }
}

struct NullableArrayVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for NullableArrayVisitor<T> {
    type Value = NullableArray<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an array of values or nulls")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut elements = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        // `None` for a null literal, otherwise the element's own converter
        while let Some(element) = seq.next_element::<Option<T>>()? {
            elements.push(element);
        }
        Ok(NullableArray(elements))
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for NullableArray<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(NullableArrayVisitor(PhantomData))
    }
}

impl<T> Serialize for NullableArray<T> {
    fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
        unsupported::<S>("writing a nullable-element array")
    }
}
