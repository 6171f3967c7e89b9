pub mod events;

use crate::pagination::{CursorPaginationFilters, Pageable};
use serde::{Deserialize, Serialize};
use shared_kernel::uuid_key;

uuid_key!(LocationId);
uuid_key!(LocationInformationId);
uuid_key!(SubLocationId);

pub const DEFAULT_SUB_LOCATION_NAME: &str = "DEFAULT";
pub const DEFAULT_SUB_LOCATION_TYPE_ID: i32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    pub information: LocationInformation,
    pub location_type: LocationType,
    pub supplier: Supplier,
    pub active: bool,
}

impl Pageable for Location {
    fn unique_ordered_identifier(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationInformation {
    #[serde(skip)]
    pub id: LocationInformationId,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zipcode: String,
    pub latitude: f64,
    pub longitude: f64,
    pub contact_information: ContactInformation,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInformation {
    pub contact_person: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationType {
    pub id: i32,
    #[serde(rename = "type")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubLocation {
    pub id: SubLocationId,
    pub name: String,
    pub sub_location_type: SubLocationType,
    pub active: bool,
    pub location_id: LocationId,
}

impl SubLocation {
    /// Every location is created together with one active sub location of the default type.
    pub fn default_for(location: &Location) -> Self {
        Self {
            id: SubLocationId::new(),
            name: DEFAULT_SUB_LOCATION_NAME.to_owned(),
            sub_location_type: SubLocationType {
                id: DEFAULT_SUB_LOCATION_TYPE_ID,
                name: String::new(),
            },
            active: true,
            location_id: location.id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubLocationType {
    pub id: i32,
    #[serde(rename = "type")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationsFilters {
    pub pagination: CursorPaginationFilters,
    /// Case-insensitive substring match on the location name.
    pub name: Option<String>,
}


#[cfg(test)]
mod tests {
    use super::fixtures::location;
    use super::{SubLocation, DEFAULT_SUB_LOCATION_NAME};
    use crate::pagination::{build_cursor_page, CursorPaginationFilters};

    #[test]
    fn test_location_json_shape() {
        let location = location("Warehouse");
        let json = serde_json::to_value(&location).unwrap();

        assert_eq!(json["name"], "Warehouse");
        assert_eq!(json["location_type"]["type"], "Wholesale");
        assert_eq!(json["supplier"]["name"], "Supplier 1");
        assert_eq!(json["information"]["contact_information"]["email"], serde_json::Value::Null);
        assert!(json["information"].get("id").is_none());
        assert_eq!(json["id"], location.id.to_string());
    }

    #[test]
    fn test_default_sub_location_belongs_to_the_location() {
        let location = location("Warehouse");
        let sub_location = SubLocation::default_for(&location);

        assert_eq!(sub_location.name, DEFAULT_SUB_LOCATION_NAME);
        assert_eq!(sub_location.sub_location_type.id, 1);
        assert_eq!(sub_location.location_id, location.id);
        assert!(sub_location.active);
    }

    #[test]
    fn test_locations_are_paged_by_name() {
        let rows = vec![location("Gamma"), location("Alpha"), location("Beta")];
        let page = build_cursor_page(&rows, &CursorPaginationFilters::first_page(2));

        let names: Vec<_> = page.data.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Beta"]);
        assert_eq!(page.next_page.as_deref(), Some("Beta"));
    }
}
