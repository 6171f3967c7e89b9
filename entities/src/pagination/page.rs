use super::{CursorPage, CursorPaginationFilters, Direction, Pageable};

/// Trims an over-fetched result set into a page and derives its cursors.
///
/// Callers fetch up to `limit + 1` rows so that one extra row tells us
/// whether more data exists past the page boundary. Rows may arrive in
/// any order; the returned page is always sorted ascending by identifier
/// and the caller's slice is left untouched.
///
/// The reported `limit` is the requested one, not the number of items
/// returned. An empty input always yields [`CursorPage::empty`].
///
/// With `limit == 0` nothing is kept, so there is no item to point a
/// cursor at: both `next_page` and `previous_page` are `None` even when
/// rows were fetched. This is the one case where more data exists past
/// the boundary yet no cursor is set.
pub fn build_cursor_page<T>(data: &[T], filters: &CursorPaginationFilters) -> CursorPage<T>
where
    T: Pageable + Clone,
{
    if data.is_empty() {
        return CursorPage::empty();
    }

    let limit = filters.limit;
    let mut items = data.to_vec();
    items.sort_by(|a, b| {
        a.unique_ordered_identifier()
            .cmp(b.unique_ordered_identifier())
    });
    let has_more = items.len() > limit;

    let (next_page, previous_page) = match filters.direction {
        Direction::Next => {
            // the peek rows sit at the end
            items.truncate(limit);
            let next_page = if has_more { last_identifier(&items) } else { None };
            let previous_page = if filters.has_cursor() {
                first_identifier(&items)
            } else {
                None
            };
            (next_page, previous_page)
        }
        Direction::Prev => {
            // backward scans over-fetch towards the start
            if has_more {
                let overflow = items.len() - limit;
                items.drain(..overflow);
            }
            let previous_page = if has_more {
                first_identifier(&items)
            } else {
                None
            };
            (last_identifier(&items), previous_page)
        }
    };

    CursorPage {
        data: items,
        limit,
        next_page,
        previous_page,
    }
}

fn first_identifier<T: Pageable>(items: &[T]) -> Option<String> {
    items
        .first()
        .map(|item| item.unique_ordered_identifier().to_owned())
}

fn last_identifier<T: Pageable>(items: &[T]) -> Option<String> {
    items
        .last()
        .map(|item| item.unique_ordered_identifier().to_owned())
}
