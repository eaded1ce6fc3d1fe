//! Domain records served by the travel-wish API.

pub mod accommodation;
pub mod destination;

pub use accommodation::{Accommodation, AccommodationFields};
pub use destination::Destination;
