use tripboard_boundary::{Bookmark, Coordinate};

pub const NO_BOOKMARKS: &str = "No bookmarks yet";

#[derive(Debug, Clone, PartialEq)]
pub struct BookmarkRow {
    pub id: i64,
    pub name: String,
    /// City or, if unknown, the address.
    pub subtitle: Option<String>,
    pub coordinate: Coordinate,
}

impl From<&Bookmark> for BookmarkRow {
    fn from(b: &Bookmark) -> Self {
        let subtitle = b
            .city
            .as_ref()
            .or(b.address.as_ref())
            .filter(|s| !s.is_empty())
            .cloned();
        Self {
            id: b.id,
            name: b.name.clone(),
            subtitle,
            coordinate: Coordinate::new(b.latitude, b.longitude),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BookmarkList {
    pub rows: Vec<BookmarkRow>,
}

impl BookmarkList {
    #[must_use]
    pub fn new(bookmarks: &[Bookmark]) -> Self {
        Self {
            rows: bookmarks.iter().map(BookmarkRow::from).collect(),
        }
    }

    /// Text shown in place of an empty list.
    #[must_use]
    pub fn placeholder(&self) -> Option<&'static str> {
        self.rows.is_empty().then_some(NO_BOOKMARKS)
    }
}
