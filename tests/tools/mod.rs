//! Tool-level integration tests, one module per entity family.

pub mod categories;
pub mod locations;
pub mod parts;
pub mod properties;
pub mod stock;
