pub mod catalog;
pub mod data;
pub mod errors;

use anyhow::Context;
use async_trait::async_trait;
use entities::locations::events::LocationEvent;
use entities::locations::{Location, LocationId, LocationsFilters, SubLocation};
use entities::pagination::{build_cursor_page, CursorPage};
#[cfg(test)]
use mockall::automock;
use shared_kernel::correlation::CorrelationId;
use std::sync::Arc;

use self::data::{AddressMatch, AddressValidationRequest, CreateLocationRequest, UpdateLocationRequest};
use self::errors::LocationError;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait LocationsRepo: Send + Sync {
    async fn begin(&self) -> anyhow::Result<Box<dyn LocationsTx>>;

    async fn get_location_by_id(&self, id: LocationId) -> anyhow::Result<Option<Location>>;

    /// Returns up to `limit + 1` rows, ascending by name for `next` and
    /// descending for `prev`, seeking past the cursor when one is set.
    async fn get_paginated_locations(
        &self,
        filters: &LocationsFilters,
    ) -> anyhow::Result<Vec<Location>>;
}

/// A unit of work over the locations store. Dropping it without
/// calling `commit` discards every write made through it.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait LocationsTx: Send {
    /// Case-insensitive.
    async fn check_location_name_existence(&mut self, name: &str) -> anyhow::Result<bool>;

    async fn get_location_by_id_for_update(
        &mut self,
        id: LocationId,
    ) -> anyhow::Result<Option<Location>>;

    async fn create_location(&mut self, location: &Location) -> anyhow::Result<()>;

    async fn create_sub_location(&mut self, sub_location: &SubLocation) -> anyhow::Result<()>;

    async fn update_location(&mut self, location: &Location) -> anyhow::Result<()>;

    async fn commit(&mut self) -> anyhow::Result<()>;
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait AddressValidator: Send + Sync {
    /// `None` when the address does not resolve to a premise.
    async fn validate_address(
        &self,
        request: AddressValidationRequest,
    ) -> anyhow::Result<Option<AddressMatch>>;
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait LocationEventPublisher: Send + Sync {
    async fn publish(&self, event: LocationEvent) -> anyhow::Result<()>;
}

#[async_trait]
pub trait LocationService: Send + Sync {
    async fn create_location(
        &self,
        correlation_id: &CorrelationId,
        request: CreateLocationRequest,
    ) -> Result<Location, LocationError>;

    async fn update_location(
        &self,
        correlation_id: &CorrelationId,
        request: UpdateLocationRequest,
    ) -> Result<Location, LocationError>;

    async fn get_location_by_id(
        &self,
        correlation_id: &CorrelationId,
        id: LocationId,
    ) -> Result<Option<Location>, LocationError>;

    async fn get_paginated_locations(
        &self,
        correlation_id: &CorrelationId,
        filters: LocationsFilters,
    ) -> Result<CursorPage<Location>, LocationError>;
}

pub struct LocationServiceImpl {
    repo: Arc<dyn LocationsRepo>,
    address_validator: Arc<dyn AddressValidator>,
    publisher: Arc<dyn LocationEventPublisher>,
}

impl LocationServiceImpl {
    pub fn new(
        repo: Arc<dyn LocationsRepo>,
        address_validator: Arc<dyn AddressValidator>,
        publisher: Arc<dyn LocationEventPublisher>,
    ) -> Self {
        Self {
            repo,
            address_validator,
            publisher,
        }
    }

    async fn validate_address(
        &self,
        request: AddressValidationRequest,
    ) -> Result<AddressMatch, LocationError> {
        let address = self
            .address_validator
            .validate_address(request.clone())
            .await?;
        address.ok_or_else(|| {
            tracing::warn!(address = ?request, "failed to validate address");
            LocationError::AddressNotValid
        })
    }

    async fn ensure_name_is_free(
        tx: &mut dyn LocationsTx,
        name: &str,
    ) -> Result<(), LocationError> {
        if tx
            .check_location_name_existence(name)
            .await
            .context("failed to check location name existence")?
        {
            let err = LocationError::NameAlreadyInUse(name.to_owned());
            tracing::warn!("{err}");
            return Err(err);
        }
        Ok(())
    }

    async fn publish(&self, event: LocationEvent) {
        let topic = event.topic.as_str();
        if let Err(err) = self.publisher.publish(event).await {
            tracing::warn!(topic, "failed to publish location event {err:?}");
        }
    }
}

#[async_trait]
impl LocationService for LocationServiceImpl {
    #[tracing::instrument(err, skip(self, request), fields(correlation_id = %correlation_id), level = "info")]
    async fn create_location(
        &self,
        correlation_id: &CorrelationId,
        request: CreateLocationRequest,
    ) -> Result<Location, LocationError> {
        let address = self
            .validate_address(request.address_validation_request())
            .await?;
        let location = request.into_location(&address);
        let sub_location = SubLocation::default_for(&location);

        let mut tx = self.repo.begin().await?;
        Self::ensure_name_is_free(tx.as_mut(), &location.name).await?;
        tx.create_location(&location)
            .await
            .context("error creating new location")?;
        tx.create_sub_location(&sub_location)
            .await
            .context("error creating new sub location")?;
        tx.commit().await?;

        self.publish(LocationEvent::created(
            location.clone(),
            correlation_id.clone(),
        ))
        .await;

        Ok(location)
    }

    #[tracing::instrument(err, skip(self, request), fields(correlation_id = %correlation_id, id = %request.id), level = "info")]
    async fn update_location(
        &self,
        correlation_id: &CorrelationId,
        request: UpdateLocationRequest,
    ) -> Result<Location, LocationError> {
        let id = request.id;
        let mut tx = self.repo.begin().await?;
        let mut location = tx
            .get_location_by_id_for_update(id)
            .await
            .with_context(|| format!("error finding location with ID {id}"))?
            .ok_or_else(|| LocationError::Business(format!("location with ID {id} does not exist")))?;

        if location.name.to_lowercase() != request.name.to_lowercase() {
            Self::ensure_name_is_free(tx.as_mut(), &request.name).await?;
        }

        let address = self
            .validate_address(request.address_validation_request())
            .await?;
        request.apply_to(&mut location, &address);

        tx.update_location(&location)
            .await
            .context("error updating location")?;
        tx.commit().await?;

        self.publish(LocationEvent::updated(
            location.clone(),
            correlation_id.clone(),
        ))
        .await;

        Ok(location)
    }

    #[tracing::instrument(err, skip(self), level = "info")]
    async fn get_location_by_id(
        &self,
        correlation_id: &CorrelationId,
        id: LocationId,
    ) -> Result<Option<Location>, LocationError> {
        Ok(self.repo.get_location_by_id(id).await?)
    }

    #[tracing::instrument(err, skip(self), level = "info")]
    async fn get_paginated_locations(
        &self,
        correlation_id: &CorrelationId,
        filters: LocationsFilters,
    ) -> Result<CursorPage<Location>, LocationError> {
        let rows = self
            .repo
            .get_paginated_locations(&filters)
            .await
            .context("failed to retrieve paginated locations")?;
        Ok(build_cursor_page(&rows, &filters.pagination))
    }
}
