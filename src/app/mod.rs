pub mod accommodation_store;
