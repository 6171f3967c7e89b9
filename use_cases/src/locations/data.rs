use entities::locations::{
    ContactInformation, Location, LocationId, LocationInformation, LocationInformationId,
    LocationType, Supplier,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::catalog::{location_type_name, supplier_name};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateLocationRequest {
    #[validate(range(min = 1, message = "supplier_id is required"))]
    pub supplier_id: i32,
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "address is required"))]
    pub address: String,
    #[validate(length(min = 1, message = "city is required"))]
    pub city: String,
    #[validate(length(min = 1, message = "state is required"))]
    pub state: String,
    #[validate(length(min = 1, message = "zipcode is required"))]
    pub zipcode: String,
    #[validate(range(min = 1, message = "location_type_id is required"))]
    pub location_type_id: i32,
    pub contact_person: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateLocationRequest {
    pub id: LocationId,
    #[validate(range(min = 1, message = "supplier_id is required"))]
    pub supplier_id: i32,
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "address is required"))]
    pub address: String,
    #[validate(length(min = 1, message = "city is required"))]
    pub city: String,
    #[validate(length(min = 1, message = "state is required"))]
    pub state: String,
    #[validate(length(min = 1, message = "zipcode is required"))]
    pub zipcode: String,
    #[validate(range(min = 1, message = "location_type_id is required"))]
    pub location_type_id: i32,
    pub contact_person: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub active: bool,
}

/// Body sent to the address validation API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AddressValidationRequest {
    pub city: String,
    pub address_line_1: String,
    pub address_line_2: String,
    pub full_address: String,
    pub state: String,
    pub long_form: bool,
    pub zip_code: String,
}

impl AddressValidationRequest {
    pub fn long_form(address: &str, city: &str, state: &str, zip_code: &str) -> Self {
        Self {
            city: city.to_owned(),
            address_line_1: address.to_owned(),
            state: state.to_owned(),
            long_form: true,
            zip_code: zip_code.to_owned(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AddressMatch {
    pub street_number: String,
    pub route: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub zip_code_suffix: String,
    pub county: String,
    pub country: String,
    pub full_address: String,
    pub neighborhood: String,
    pub latitude: f64,
    pub longitude: f64,
    pub partial_match: bool,
    pub match_type: String,
    pub location_type: String,
    pub postcode_localities: Vec<String>,
}

impl AddressMatch {
    pub fn is_premise(&self) -> bool {
        self.match_type == "premise"
    }
}

impl CreateLocationRequest {
    pub(crate) fn address_validation_request(&self) -> AddressValidationRequest {
        AddressValidationRequest::long_form(&self.address, &self.city, &self.state, &self.zipcode)
    }

    pub(crate) fn into_location(self, address: &AddressMatch) -> Location {
        Location {
            id: LocationId::new(),
            name: self.name,
            information: LocationInformation {
                id: LocationInformationId::new(),
                address: self.address,
                city: self.city,
                state: self.state,
                zipcode: self.zipcode,
                latitude: address.latitude,
                longitude: address.longitude,
                contact_information: ContactInformation {
                    contact_person: self.contact_person,
                    phone_number: self.phone_number,
                    email: self.email,
                },
            },
            location_type: LocationType {
                id: self.location_type_id,
                name: location_type_name(self.location_type_id),
            },
            supplier: Supplier {
                id: self.supplier_id,
                name: supplier_name(self.supplier_id),
            },
            active: true,
        }
    }
}

impl UpdateLocationRequest {
    pub(crate) fn address_validation_request(&self) -> AddressValidationRequest {
        AddressValidationRequest::long_form(&self.address, &self.city, &self.state, &self.zipcode)
    }

    /// Overwrites every editable field; the ids stay as stored.
    pub(crate) fn apply_to(self, location: &mut Location, address: &AddressMatch) {
        location.name = self.name;
        location.supplier = Supplier {
            id: self.supplier_id,
            name: supplier_name(self.supplier_id),
        };
        location.location_type = LocationType {
            id: self.location_type_id,
            name: location_type_name(self.location_type_id),
        };
        location.active = self.active;

        let information = &mut location.information;
        information.address = self.address;
        information.city = self.city;
        information.state = self.state;
        information.zipcode = self.zipcode;
        information.latitude = address.latitude;
        information.longitude = address.longitude;
        information.contact_information = ContactInformation {
            contact_person: self.contact_person,
            phone_number: self.phone_number,
            email: self.email,
        };
    }
}
