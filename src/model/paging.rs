use serde::Serialize;

/// A bounded page of a larger result set.
///
/// Reading and writing are implemented in `serialization::paging` for any
/// convertible `T`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paging<T> {
    pub href: String,
    pub items: Vec<T>,
    pub limit: u32,
    pub next: Option<String>,
    pub offset: u32,
    pub previous: Option<String>,
    pub total: u32,
}

impl<T> Default for Paging<T> {
    fn default() -> Self {
        Self {
            href: String::new(),
            items: Vec::new(),
            limit: 0,
            next: None,
            offset: 0,
            previous: None,
            total: 0,
        }
    }
}

impl<T> Paging<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Number of items not yet covered by this or earlier pages.
    pub fn remaining(&self) -> u32 {
        let seen = self.offset.saturating_add(self.items.len() as u32);
        self.total.saturating_sub(seen)
    }
}

/// A page of a cursor-based listing such as followed artists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CursorPaging<T> {
    pub href: String,
    pub items: Vec<T>,
    pub limit: u32,
    pub next: Option<String>,
    pub cursors: Cursors,
    pub total: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Cursors {
    pub after: Option<String>,
    pub before: Option<String>,
}
