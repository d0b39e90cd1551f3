//! Core data structures representing molecular geometries.
//!
//! - [`atom`] – Minimal atom representation with element and Cartesian coordinates.
//! - [`types`] – Periodic table elements with symbols and atomic weights.
//! - [`molecule`] – A named, ordered collection of atoms with derived
//!   properties (molecular mass, center of mass) and bond perception.
//!
//! The model carries geometry only. Connectivity is never stored on the
//! molecule; it is derived on demand by [`crate::bonds`].

pub mod atom;
pub mod molecule;
pub mod types;
