//! Primitive value generators.
//!
//! These are the building blocks the fake-data vocabulary and the entity
//! builders are made of. All of them take the RNG explicitly so they can
//! be driven by a seeded [`crate::GenerationContext`].

pub mod array;
pub mod date;
pub mod numeric;
pub mod pattern;
