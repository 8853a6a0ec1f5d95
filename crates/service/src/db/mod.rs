//! SeaORM-backed store functions, one module per table. Repository
//! implementations delegate here.

pub mod areas;
pub mod wifi_services;
pub mod shops;
pub mod reviews;
