//! A small, pure Rust library for distance-based bond perception in
//! molecular geometries.
//!
//! Given the Cartesian coordinates of a molecule, [`build_bond_list`]
//! classifies every unordered atom pair as bonded or not using a strict
//! open-interval distance test, and returns the qualifying pairs together
//! with their distances. No bond orders, element-specific radii, or
//! periodic boundary conditions are involved — the criterion is purely
//! geometric.
//!
//! # Quick Start
//!
//! ```
//! use molbond::{build_bond_list, BondCriteria};
//!
//! // A water molecule: O at the origin, two H within bonding range.
//! let coordinates = [
//!     [0.0, 0.0, 0.0],
//!     [0.7586, 0.0, 0.5043],
//!     [-0.7586, 0.0, 0.5043],
//! ];
//!
//! let bonds = build_bond_list(&coordinates, &BondCriteria::default())?;
//!
//! assert_eq!(bonds.len(), 2);
//! assert!(bonds.contains(0, 1)); // O-H
//! assert!(bonds.contains(0, 2)); // O-H
//! assert!(!bonds.contains(1, 2)); // H-H is 1.52 Å apart, above the 1.5 Å cutoff
//! # Ok::<(), molbond::BondError>(())
//! ```
//!
//! # Module Organization
//!
//! - [`bonds`] — The bond perception scan and its criteria
//! - [`measure`] — Euclidean distance and angle calculations
//! - [`model`] — [`Molecule`], [`Atom`] and [`Element`] types
//! - [`io`] — XYZ and PDB readers and writers
//!
//! Thresholds default to the original criteria (`max_bond` 1.5 Å,
//! `min_bond` 0) and both comparisons are strict: a pair at exactly either
//! bound is not a bond. A negative `min_bond` is rejected up front with
//! [`BondError::NegativeMinBond`]; `max_bond <= min_bond` is accepted and
//! simply yields an empty list.

pub mod bonds;
pub mod io;
pub mod measure;
pub mod model;

pub use bonds::{BondCriteria, BondEntry, BondList, build_bond_list};
pub use measure::{calculate_angle, calculate_distance};
pub use model::atom::Atom;
pub use model::molecule::Molecule;
pub use model::types::{Element, ParseElementError};

pub use bonds::Error as BondError;
pub use io::error::Error as IoError;
