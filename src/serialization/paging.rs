//! Reader and writer for [`Paging<T>`], reader for [`CursorPaging<T>`].
//!
//! The converter is generic over the element type, so every `T` that can be
//! read (or written) on its own can be read (or written) as a page.

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{DeserializeOwned, MapAccess},
    ser::SerializeStruct,
};

use super::{ObjectSlots, read_object, skip_value};
use crate::{
    error::Res,
    model::{CursorPaging, Cursors, Paging},
};

#[derive(Deserialize)]
#[serde(field_identifier, rename_all = "snake_case")]
enum PagingField {
    Href,
    Items,
    Limit,
    Next,
    Offset,
    Previous,
    Total,
    #[serde(other)]
    Unknown,
}

struct PagingSlots<T> {
    href: Option<String>,
    items: Option<Vec<T>>,
    limit: Option<u32>,
    next: Option<String>,
    offset: Option<u32>,
    previous: Option<String>,
    total: Option<u32>,
}

impl<T> Default for PagingSlots<T> {
    fn default() -> Self {
        Self {
            href: None,
            items: None,
            limit: None,
            next: None,
            offset: None,
            previous: None,
            total: None,
        }
    }
}

impl<T: DeserializeOwned> ObjectSlots for PagingSlots<T> {
    type Field = PagingField;
    type Output = Paging<T>;

    const EXPECTING: &'static str = "a paging object";

    fn accept<'de, A>(&mut self, field: PagingField, map: &mut A) -> Result<(), A::Error>
    where
        A: MapAccess<'de>,
    {
        match field {
            PagingField::Href => self.href = map.next_value()?,
            PagingField::Items => self.items = map.next_value()?,
            PagingField::Limit => self.limit = map.next_value()?,
            PagingField::Next => self.next = map.next_value()?,
            PagingField::Offset => self.offset = map.next_value()?,
            PagingField::Previous => self.previous = map.next_value()?,
            PagingField::Total => self.total = map.next_value()?,
            PagingField::Unknown => skip_value(map)?,
        }
        Ok(())
    }

    fn build(self) -> Res<Paging<T>> {
        Ok(Paging {
            href: self.href.unwrap_or_default(),
            items: self.items.unwrap_or_default(),
            limit: self.limit.unwrap_or_default(),
            next: self.next,
            offset: self.offset.unwrap_or_default(),
            previous: self.previous,
            total: self.total.unwrap_or_default(),
        })
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Paging<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        read_object::<D, PagingSlots<T>>(deserializer)
    }
}

impl<T: Serialize> Serialize for Paging<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Paging", 7)?;
        state.serialize_field("href", &self.href)?;
        state.serialize_field("items", &self.items)?;
        state.serialize_field("limit", &self.limit)?;
        state.serialize_field("next", &self.next)?;
        state.serialize_field("offset", &self.offset)?;
        state.serialize_field("previous", &self.previous)?;
        state.serialize_field("total", &self.total)?;
        state.end()
    }
}

#[derive(Deserialize)]
#[serde(field_identifier, rename_all = "snake_case")]
enum CursorPagingField {
    Href,
    Items,
    Limit,
    Next,
    Cursors,
    Total,
    #[serde(other)]
    Unknown,
}

struct CursorPagingSlots<T> {
    href: Option<String>,
    items: Option<Vec<T>>,
    limit: Option<u32>,
    next: Option<String>,
    cursors: Option<Cursors>,
    total: Option<u32>,
}

impl<T> Default for CursorPagingSlots<T> {
    fn default() -> Self {
        Self {
            href: None,
            items: None,
            limit: None,
            next: None,
            cursors: None,
            total: None,
        }
    }
}

impl<T: DeserializeOwned> ObjectSlots for CursorPagingSlots<T> {
    type Field = CursorPagingField;
    type Output = CursorPaging<T>;

    const EXPECTING: &'static str = "a cursor paging object";

    fn accept<'de, A>(&mut self, field: CursorPagingField, map: &mut A) -> Result<(), A::Error>
    where
        A: MapAccess<'de>,
    {
        match field {
            CursorPagingField::Href => self.href = map.next_value()?,
            CursorPagingField::Items => self.items = map.next_value()?,
            CursorPagingField::Limit => self.limit = map.next_value()?,
            CursorPagingField::Next => self.next = map.next_value()?,
            CursorPagingField::Cursors => self.cursors = map.next_value()?,
            CursorPagingField::Total => self.total = map.next_value()?,
            CursorPagingField::Unknown => skip_value(map)?,
        }
        Ok(())
    }

    fn build(self) -> Res<CursorPaging<T>> {
        Ok(CursorPaging {
            href: self.href.unwrap_or_default(),
            items: self.items.unwrap_or_default(),
            limit: self.limit.unwrap_or_default(),
            next: self.next,
            cursors: self.cursors.unwrap_or_default(),
            total: self.total,
        })
    }
}

#[derive(Deserialize)]
#[serde(field_identifier, rename_all = "snake_case")]
enum CursorsField {
    After,
    Before,
    #[serde(other)]
    Unknown,
}

#[derive(Default)]
struct CursorsSlots {
    after: Option<String>,
    before: Option<String>,
}

impl ObjectSlots for CursorsSlots {
    type Field = CursorsField;
    type Output = Cursors;

    const EXPECTING: &'static str = "a cursors object";

    fn accept<'de, A>(&mut self, field: CursorsField, map: &mut A) -> Result<(), A::Error>
    where
        A: MapAccess<'de>,
    {
        match field {
            CursorsField::After => self.after = map.next_value()?,
            CursorsField::Before => self.before = map.next_value()?,
            CursorsField::Unknown => skip_value(map)?,
        }
        Ok(())
    }

    fn build(self) -> Res<Cursors> {
        Ok(Cursors {
            after: self.after,
            before: self.before,
        })
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for CursorPaging<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        read_object::<D, CursorPagingSlots<T>>(deserializer)
    }
}

impl<'de> Deserialize<'de> for Cursors {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        read_object::<D, CursorsSlots>(deserializer)
    }
}
