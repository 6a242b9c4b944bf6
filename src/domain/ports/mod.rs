//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod restaurant_store;

pub use restaurant_store::RestaurantStore;
