//! Directory application services: validation, bounded store calls and
//! response shaping for areas, Wi-Fi services, shops and reviews.

pub mod repository;
pub mod service;

pub use repository::{AreaRepository, ReviewRepository, SeaOrmRepository, ShopRepository, WifiServiceRepository};
pub use service::{AreaService, Directory, ReviewService, ShopService, WifiService};
