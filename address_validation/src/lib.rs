pub mod config;
mod google_maps;

pub use google_maps::GoogleMapsAddressValidator;
