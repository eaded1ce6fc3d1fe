//! Read-only listing of featured destinations.

use crate::domain::model::Destination;

/// Fixed set of destinations, built once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct DestinationCatalog {
    destinations: Vec<Destination>,
}

impl DestinationCatalog {
    /// The destinations featured on the Travel Wish home page.
    pub fn featured() -> Self {
        Self {
            destinations: vec![
                Destination::new(1, "Paris", "The city of lights", "paris.jpg"),
                Destination::new(2, "Tokyo", "A bustling metropolis", "tokyo.jpg"),
                Destination::new(3, "New York", "The city that never sleeps", "newyork.jpg"),
            ],
        }
    }

    pub fn list(&self) -> &[Destination] {
        &self.destinations
    }
}

impl Default for DestinationCatalog {
    fn default() -> Self {
        Self::featured()
    }
}
