//! Domain Layer
//!
//! Pure business types for the restaurant without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Menu items, orders, collection reports
//! - `value_objects/` - Order status and load reports
//! - `ports/` - Interface definitions for infrastructure

pub mod entities;
pub mod ports;
pub mod value_objects;
