use super::{LocationRow, SELECT_LOCATIONS};
use anyhow::{anyhow, Context};
use async_trait::async_trait;
use entities::locations::{Location, LocationId, SubLocation};
use sqlx::{Postgres, Transaction};
use use_cases::locations::LocationsTx;

/// Rolled back on drop unless committed.
pub struct PgLocationsTx {
    tx: Option<Transaction<'static, Postgres>>,
}

impl PgLocationsTx {
    pub fn new(tx: Transaction<'static, Postgres>) -> Self {
        Self { tx: Some(tx) }
    }

    fn tx(&mut self) -> anyhow::Result<&mut Transaction<'static, Postgres>> {
        self.tx
            .as_mut()
            .ok_or_else(|| anyhow!("transaction already committed"))
    }
}

#[async_trait]
impl LocationsTx for PgLocationsTx {
    async fn check_location_name_existence(&mut self, name: &str) -> anyhow::Result<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM location.locations WHERE LOWER(name) = LOWER($1))",
        )
        .bind(name)
        .fetch_one(self.tx()?)
        .await
        .context("Failed to check location name existence")
    }

    async fn get_location_by_id_for_update(
        &mut self,
        id: LocationId,
    ) -> anyhow::Result<Option<Location>> {
        let query = format!("{SELECT_LOCATIONS} WHERE l.id = $1 LIMIT 1 FOR UPDATE OF l, li");
        let row = sqlx::query_as::<_, LocationRow>(&query)
            .bind(id.inner())
            .fetch_optional(self.tx()?)
            .await
            .with_context(|| format!("Failed to lock location {id}"))?;

        Ok(row.map(Location::from))
    }

    async fn create_location(&mut self, location: &Location) -> anyhow::Result<()> {
        let tx = self.tx()?;
        sqlx::query(
            "
            INSERT INTO location.locations (id, name, location_type_id, supplier_id, active)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(location.id.inner())
        .bind(&location.name)
        .bind(location.location_type.id)
        .bind(location.supplier.id)
        .bind(location.active)
        .execute(&mut *tx)
        .await
        .context("Failed to insert location")?;

        let information = &location.information;
        let contact = &information.contact_information;
        sqlx::query(
            "
            INSERT INTO location.location_information (
                id, location_id, address, city, state, zipcode,
                contact_person, phone_number, email, latitude, longitude
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ",
        )
        .bind(information.id.inner())
        .bind(location.id.inner())
        .bind(&information.address)
        .bind(&information.city)
        .bind(&information.state)
        .bind(&information.zipcode)
        .bind(&contact.contact_person)
        .bind(&contact.phone_number)
        .bind(&contact.email)
        .bind(information.latitude)
        .bind(information.longitude)
        .execute(&mut *tx)
        .await
        .context("Failed to insert location information")?;

        Ok(())
    }

    async fn create_sub_location(&mut self, sub_location: &SubLocation) -> anyhow::Result<()> {
        sqlx::query(
            "
            INSERT INTO location.sub_locations (id, location_id, sub_location_type_id, name, active)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(sub_location.id.inner())
        .bind(sub_location.location_id.inner())
        .bind(sub_location.sub_location_type.id)
        .bind(&sub_location.name)
        .bind(sub_location.active)
        .execute(self.tx()?)
        .await
        .context("Failed to insert sub location")?;

        Ok(())
    }

    async fn update_location(&mut self, location: &Location) -> anyhow::Result<()> {
        let tx = self.tx()?;
        sqlx::query(
            "
            UPDATE location.locations SET
                name = $1,
                location_type_id = $2,
                supplier_id = $3,
                active = $4,
                updated_at = CURRENT_TIMESTAMP
            WHERE id = $5
            ",
        )
        .bind(&location.name)
        .bind(location.location_type.id)
        .bind(location.supplier.id)
        .bind(location.active)
        .bind(location.id.inner())
        .execute(&mut *tx)
        .await
        .context("Failed to update location")?;

        let information = &location.information;
        let contact = &information.contact_information;
        sqlx::query(
            "
            UPDATE location.location_information SET
                address = $1,
                city = $2,
                state = $3,
                zipcode = $4,
                contact_person = $5,
                phone_number = $6,
                email = $7,
                latitude = $8,
                longitude = $9
            WHERE id = $10
            ",
        )
        .bind(&information.address)
        .bind(&information.city)
        .bind(&information.state)
        .bind(&information.zipcode)
        .bind(&contact.contact_person)
        .bind(&contact.phone_number)
        .bind(&contact.email)
        .bind(information.latitude)
        .bind(information.longitude)
        .bind(information.id.inner())
        .execute(&mut *tx)
        .await
        .context("Failed to update location information")?;

        Ok(())
    }

    async fn commit(&mut self) -> anyhow::Result<()> {
        let tx = self
            .tx
            .take()
            .ok_or_else(|| anyhow!("transaction already committed"))?;
        tx.commit().await.context("Failed to commit transaction")
    }
}
