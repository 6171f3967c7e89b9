pub mod configuration;
pub mod locations;
pub mod migrations;
pub mod repository;
