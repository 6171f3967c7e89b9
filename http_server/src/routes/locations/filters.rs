use entities::locations::LocationsFilters;
use entities::pagination::{CursorPaginationFilters, Direction, InvalidDirection};
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_LIMIT: usize = 10000;

/// Raw query string of the locations listing. Values are kept as text so
/// that malformed ones are reported with the caller's input.
#[derive(Deserialize, Debug, Default)]
pub struct LocationsQuery {
    cursor: Option<String>,
    direction: Option<String>,
    limit: Option<String>,
    name: Option<String>,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FilterError {
    #[error("invalid limit value: {0}")]
    InvalidLimit(String),
    #[error(transparent)]
    InvalidDirection(#[from] InvalidDirection),
    #[error("'direction' query param not provided")]
    MissingDirection,
    #[error("if the cursor is empty, the only allowed direction value is 'next'")]
    PrevWithoutCursor,
}

impl LocationsQuery {
    pub fn into_filters(self) -> Result<LocationsFilters, FilterError> {
        let cursor = self.cursor.unwrap_or_default();
        let limit = match self.limit {
            Some(limit) => limit
                .parse::<usize>()
                .map_err(|_| FilterError::InvalidLimit(limit))?,
            None => DEFAULT_LIMIT,
        };
        let direction = self
            .direction
            .ok_or(FilterError::MissingDirection)?
            .parse::<Direction>()?;

        if cursor.is_empty() && direction != Direction::Next {
            return Err(FilterError::PrevWithoutCursor);
        }

        Ok(LocationsFilters {
            pagination: CursorPaginationFilters {
                cursor,
                direction,
                limit,
            },
            name: self.name,
        })
    }
}
