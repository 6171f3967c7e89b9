use super::SELECT_LOCATIONS;
use entities::locations::LocationsFilters;
use entities::pagination::Direction;

/// Keyset query over location names, with its text bind values in
/// placeholder order followed by the row count.
#[derive(Debug)]
pub(crate) struct PaginatedQuery {
    pub sql: String,
    pub text_binds: Vec<String>,
    pub fetch: i64,
}

/// Names are compared with the "C" collation so the database seeks in
/// the same byte order the page builder sorts in. One row past the
/// limit is fetched as a peek row.
pub(crate) fn paginated_query(filters: &LocationsFilters) -> PaginatedQuery {
    let pagination = &filters.pagination;
    let mut sql = format!("{SELECT_LOCATIONS} WHERE TRUE");
    let mut text_binds = vec![];

    if let Some(name) = filters.name.as_deref().filter(|name| !name.is_empty()) {
        text_binds.push(name.to_owned());
        sql.push_str(&format!(" AND l.name ILIKE '%' || ${} || '%'", text_binds.len()));
    }

    let order = match (pagination.has_cursor(), pagination.direction) {
        (false, _) => "ASC",
        (true, direction) => {
            text_binds.push(pagination.cursor.clone());
            let (operator, order) = match direction {
                Direction::Next => (">", "ASC"),
                Direction::Prev => ("<", "DESC"),
            };
            sql.push_str(&format!(
                r#" AND l.name COLLATE "C" {operator} ${}"#,
                text_binds.len()
            ));
            order
        }
    };

    sql.push_str(&format!(
        r#" ORDER BY l.name COLLATE "C" {order} LIMIT ${}"#,
        text_binds.len() + 1
    ));

    PaginatedQuery {
        sql,
        text_binds,
        fetch: i64::try_from(pagination.limit.saturating_add(1)).unwrap_or(i64::MAX),
    }
}
