mod page;

pub use page::build_cursor_page;

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// An item that can be paged through by a single text key. The key is
/// both the sort key and the cursor handed back to clients, so it is
/// expected to be unique among the candidates of a page.
pub trait Pageable {
    fn unique_ordered_identifier(&self) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Next,
    Prev,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Next => "next",
            Direction::Prev => "prev",
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("invalid direction value: {0}")]
pub struct InvalidDirection(pub String);

impl FromStr for Direction {
    type Err = InvalidDirection;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "next" => Ok(Direction::Next),
            "prev" => Ok(Direction::Prev),
            other => Err(InvalidDirection(other.to_owned())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorPaginationFilters {
    /// Identifier of the boundary item, empty on the first page.
    pub cursor: String,
    pub direction: Direction,
    pub limit: usize,
}

impl CursorPaginationFilters {
    pub fn first_page(limit: usize) -> Self {
        Self {
            cursor: String::new(),
            direction: Direction::Next,
            limit,
        }
    }

    pub fn has_cursor(&self) -> bool {
        !self.cursor.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CursorPage<T> {
    pub data: Vec<T>,
    pub limit: usize,
    pub next_page: Option<String>,
    pub previous_page: Option<String>,
}

impl<T> CursorPage<T> {
    pub fn empty() -> Self {
        Self {
            data: vec![],
            limit: 0,
            next_page: None,
            previous_page: None,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> CursorPage<U> {
        CursorPage {
            data: self.data.into_iter().map(f).collect(),
            limit: self.limit,
            next_page: self.next_page,
            previous_page: self.previous_page,
        }
    }
}
