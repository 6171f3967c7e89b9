pub mod locations;
pub mod pagination;
