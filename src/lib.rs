pub mod app;
pub mod domain;
pub mod infra;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::accommodation_store::{AccommodationStore, StoreError};
pub use domain::catalog::DestinationCatalog;
pub use domain::model::{Accommodation, AccommodationFields, Destination};
