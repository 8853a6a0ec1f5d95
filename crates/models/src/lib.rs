//! Domain model of the Wi-Fi directory: areas, Wi-Fi services, the shops
//! offering them and reviews of those shops, as SeaORM entities.
//!
//! Each entity module owns its table shape, relations and the single-row
//! insert used by the service layer. Field rules live in [`validation`].

pub mod errors;
pub mod db;
pub mod validation;
pub mod area;
pub mod wifi_service;
pub mod shop;
pub mod review;

#[cfg(test)]
mod tests;
