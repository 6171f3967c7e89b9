mod paginated;
mod transaction;

pub use transaction::PgLocationsTx;

use crate::repository::Repository;
use anyhow::Context;
use async_trait::async_trait;
use entities::locations::{
    ContactInformation, Location, LocationId, LocationInformation, LocationType, LocationsFilters,
    Supplier,
};
use use_cases::locations::{LocationsRepo, LocationsTx};
use uuid::Uuid;

pub(crate) const SELECT_LOCATIONS: &str = "
    SELECT
        l.id,
        l.name,
        l.active,
        s.id AS supplier_id,
        s.name AS supplier_name,
        lt.id AS location_type_id,
        lt.type AS location_type,
        li.id AS information_id,
        li.address,
        li.city,
        li.state,
        li.zipcode,
        li.contact_person,
        li.phone_number,
        li.email,
        li.latitude,
        li.longitude
    FROM location.locations l
    JOIN location.location_information li ON l.id = li.location_id
    JOIN location.location_types lt ON l.location_type_id = lt.id
    JOIN location.suppliers s ON s.id = l.supplier_id
";

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct LocationRow {
    id: Uuid,
    name: String,
    active: bool,
    supplier_id: i32,
    supplier_name: String,
    location_type_id: i32,
    location_type: String,
    information_id: Uuid,
    address: String,
    city: String,
    state: String,
    zipcode: String,
    contact_person: Option<String>,
    phone_number: Option<String>,
    email: Option<String>,
    latitude: f64,
    longitude: f64,
}

impl From<LocationRow> for Location {
    fn from(row: LocationRow) -> Self {
        Location {
            id: row.id.into(),
            name: row.name,
            information: LocationInformation {
                id: row.information_id.into(),
                address: row.address,
                city: row.city,
                state: row.state,
                zipcode: row.zipcode,
                latitude: row.latitude,
                longitude: row.longitude,
                contact_information: ContactInformation {
                    contact_person: row.contact_person,
                    phone_number: row.phone_number,
                    email: row.email,
                },
            },
            location_type: LocationType {
                id: row.location_type_id,
                name: row.location_type,
            },
            supplier: Supplier {
                id: row.supplier_id,
                name: row.supplier_name,
            },
            active: row.active,
        }
    }
}

#[async_trait]
impl LocationsRepo for Repository {
    async fn begin(&self) -> anyhow::Result<Box<dyn LocationsTx>> {
        let tx = self
            .pool()
            .begin()
            .await
            .context("Failed to start transaction")?;
        Ok(Box::new(PgLocationsTx::new(tx)))
    }

    #[tracing::instrument(err, skip(self), level = "info")]
    async fn get_location_by_id(&self, id: LocationId) -> anyhow::Result<Option<Location>> {
        let query = format!("{SELECT_LOCATIONS} WHERE l.id = $1 LIMIT 1");
        let row = sqlx::query_as::<_, LocationRow>(&query)
            .bind(id.inner())
            .fetch_optional(self.pool())
            .await
            .with_context(|| format!("Failed to fetch location {id}"))?;

        Ok(row.map(Location::from))
    }

    #[tracing::instrument(err, skip(self), level = "info")]
    async fn get_paginated_locations(
        &self,
        filters: &LocationsFilters,
    ) -> anyhow::Result<Vec<Location>> {
        let paginated = paginated::paginated_query(filters);
        let mut query = sqlx::query_as::<_, LocationRow>(&paginated.sql);
        for value in paginated.text_binds {
            query = query.bind(value);
        }
        let rows = query
            .bind(paginated.fetch)
            .fetch_all(self.pool())
            .await
            .context("Failed to fetch paginated locations")?;

        Ok(rows.into_iter().map(Location::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::Repository;
    use entities::locations::{
        ContactInformation, Location, LocationId, LocationInformation, LocationInformationId,
        LocationType, LocationsFilters, SubLocation, Supplier,
    };
    use entities::pagination::{build_cursor_page, CursorPaginationFilters, Direction};
    use use_cases::locations::LocationsRepo;

    fn location(name: &str) -> Location {
        Location {
            id: LocationId::new(),
            name: name.to_string(),
            information: LocationInformation {
                id: LocationInformationId::new(),
                address: "1600 Amphitheatre Pkwy".to_string(),
                city: "Mountain View".to_string(),
                state: "CA".to_string(),
                zipcode: "94043".to_string(),
                latitude: 37.42,
                longitude: -122.08,
                contact_information: ContactInformation {
                    email: Some("ops@example.com".to_string()),
                    ..Default::default()
                },
            },
            location_type: LocationType {
                id: 2,
                name: "Wholesale".to_string(),
            },
            supplier: Supplier {
                id: 4,
                name: "Supplier 4".to_string(),
            },
            active: true,
        }
    }

    async fn insert(repo: &Repository, names: &[&str]) -> Vec<Location> {
        let mut tx = repo.begin().await.unwrap();
        let mut inserted = vec![];
        for name in names {
            let location = location(name);
            tx.create_location(&location).await.unwrap();
            tx.create_sub_location(&SubLocation::default_for(&location))
                .await
                .unwrap();
            inserted.push(location);
        }
        tx.commit().await.unwrap();
        inserted
    }

    fn filters(cursor: &str, direction: Direction, limit: usize) -> LocationsFilters {
        LocationsFilters {
            pagination: CursorPaginationFilters {
                cursor: cursor.to_string(),
                direction,
                limit,
            },
            name: None,
        }
    }

    fn names(locations: &[Location]) -> Vec<&str> {
        locations.iter().map(|l| l.name.as_str()).collect()
    }

    #[tokio::test]
    #[ignore = "requires a running Postgres"]
    async fn test_that_a_committed_location_can_be_fetched() {
        let repo = Repository::new_test_repo().await.unwrap();
        let inserted = insert(&repo, &["Depot"]).await;

        let fetched = repo.get_location_by_id(inserted[0].id).await.unwrap();

        assert_eq!(fetched, Some(inserted[0].clone()));
    }

    #[tokio::test]
    #[ignore = "requires a running Postgres"]
    async fn test_that_an_uncommitted_location_is_discarded() {
        let repo = Repository::new_test_repo().await.unwrap();
        let location = location("Depot");
        {
            let mut tx = repo.begin().await.unwrap();
            tx.create_location(&location).await.unwrap();
        }

        let fetched = repo.get_location_by_id(location.id).await.unwrap();

        assert_eq!(fetched, None);
    }

    #[tokio::test]
    #[ignore = "requires a running Postgres"]
    async fn test_that_name_existence_ignores_case() {
        let repo = Repository::new_test_repo().await.unwrap();
        insert(&repo, &["Depot"]).await;

        let mut tx = repo.begin().await.unwrap();
        assert!(tx.check_location_name_existence("dEPOT").await.unwrap());
        assert!(!tx.check_location_name_existence("Hub").await.unwrap());
    }

    #[tokio::test]
    #[ignore = "requires a running Postgres"]
    async fn test_that_updates_are_applied_under_lock() {
        let repo = Repository::new_test_repo().await.unwrap();
        let inserted = insert(&repo, &["Depot"]).await;

        let mut tx = repo.begin().await.unwrap();
        let mut location = tx
            .get_location_by_id_for_update(inserted[0].id)
            .await
            .unwrap()
            .unwrap();
        location.name = "Hub".to_string();
        location.active = false;
        location.information.city = "Reno".to_string();
        location.supplier.id = 7;
        tx.update_location(&location).await.unwrap();
        tx.commit().await.unwrap();

        let fetched = repo.get_location_by_id(location.id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Hub");
        assert!(!fetched.active);
        assert_eq!(fetched.information.city, "Reno");
        assert_eq!(fetched.supplier.name, "Supplier 7");
    }

    #[tokio::test]
    #[ignore = "requires a running Postgres"]
    async fn test_that_pages_can_be_walked_in_both_directions() {
        let repo = Repository::new_test_repo().await.unwrap();
        insert(&repo, &["E", "C", "A", "D", "B"]).await;

        let first_filters = filters("", Direction::Next, 2);
        let rows = repo.get_paginated_locations(&first_filters).await.unwrap();
        assert_eq!(names(&rows), vec!["A", "B", "C"]);
        let first = build_cursor_page(&rows, &first_filters.pagination);
        assert_eq!(first.next_page.as_deref(), Some("B"));

        let second_filters = filters("B", Direction::Next, 2);
        let rows = repo.get_paginated_locations(&second_filters).await.unwrap();
        let second = build_cursor_page(&rows, &second_filters.pagination);
        assert_eq!(names(&second.data), vec!["C", "D"]);
        assert_eq!(second.previous_page.as_deref(), Some("C"));

        let back_filters = filters("C", Direction::Prev, 2);
        let rows = repo.get_paginated_locations(&back_filters).await.unwrap();
        assert_eq!(names(&rows), vec!["B", "A"]);
        let back = build_cursor_page(&rows, &back_filters.pagination);
        assert_eq!(names(&back.data), vec!["A", "B"]);
        assert_eq!(back.previous_page, None);
    }

    #[tokio::test]
    #[ignore = "requires a running Postgres"]
    async fn test_that_the_name_filter_is_a_case_insensitive_substring_match() {
        let repo = Repository::new_test_repo().await.unwrap();
        insert(&repo, &["North Depot", "South depot", "Hub"]).await;

        let mut filters = filters("", Direction::Next, 10);
        filters.name = Some("DEPOT".to_string());
        let rows = repo.get_paginated_locations(&filters).await.unwrap();

        assert_eq!(names(&rows), vec!["North Depot", "South depot"]);
    }
}
