use lazy_static::lazy_static;
use std::collections::HashMap;

pub const RECON_LOCATION_TYPE_ID: i32 = 1;
pub const WHOLESALE_LOCATION_TYPE_ID: i32 = 2;
pub const LAST_MILE_LOCATION_TYPE_ID: i32 = 3;
pub const RETAIL_READY_LOCATION_TYPE_ID: i32 = 4;
pub const CROSS_DOCK_LOCATION_TYPE_ID: i32 = 5;
pub const STORAGE_LOCATION_TYPE_ID: i32 = 6;
pub const NOT_ON_SITE_LOCATION_TYPE_ID: i32 = 7;

lazy_static! {
    static ref SUPPLIERS: HashMap<i32, String> =
        (1..=8).map(|id| (id, format!("Supplier {id}"))).collect();
    static ref LOCATION_TYPES: HashMap<i32, &'static str> = HashMap::from([
        (RECON_LOCATION_TYPE_ID, "Recon"),
        (WHOLESALE_LOCATION_TYPE_ID, "Wholesale"),
        (LAST_MILE_LOCATION_TYPE_ID, "Last Mile"),
        (RETAIL_READY_LOCATION_TYPE_ID, "Retail Ready"),
        (CROSS_DOCK_LOCATION_TYPE_ID, "Cross Dock"),
        (STORAGE_LOCATION_TYPE_ID, "Storage"),
        (NOT_ON_SITE_LOCATION_TYPE_ID, "Not on Site"),
    ]);
}

/// Unknown ids resolve to an empty name.
pub fn supplier_name(id: i32) -> String {
    SUPPLIERS.get(&id).cloned().unwrap_or_default()
}

pub fn location_type_name(id: i32) -> String {
    LOCATION_TYPES
        .get(&id)
        .map(|name| name.to_string())
        .unwrap_or_default()
}
