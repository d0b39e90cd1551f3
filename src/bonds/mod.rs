//! Distance-based bond perception.
//!
//! A pair of atoms is considered bonded when the Euclidean distance
//! between them falls strictly within `(min_bond, max_bond)`. This is a
//! purely geometric criterion: no bond orders, no element-specific radii,
//! no periodic boundary handling.
//!
//! The scan is an exhaustive O(N²) pass over all unordered index pairs,
//! which is adequate for the target problem sizes (hundreds to low
//! thousands of atoms).

mod error;

pub use error::Error;

use serde::Serialize;

use crate::measure::calculate_distance;

/// Distance thresholds for bond perception.
///
/// Both bounds are strict: a pair at exactly `min_bond` or `max_bond` is
/// not a bond. `min_bond` must be non-negative; `max_bond` is not
/// validated against `min_bond`, and `max_bond <= min_bond` simply yields
/// an empty bond list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BondCriteria {
    /// Strict upper distance bound in Ångströms.
    pub max_bond: f64,
    /// Strict lower distance bound in Ångströms. Must be >= 0.
    pub min_bond: f64,
}

impl Default for BondCriteria {
    fn default() -> Self {
        Self {
            max_bond: 1.5,
            min_bond: 0.0,
        }
    }
}

impl BondCriteria {
    pub fn new(max_bond: f64, min_bond: f64) -> Self {
        Self { max_bond, min_bond }
    }

    #[inline]
    fn accepts(&self, distance: f64) -> bool {
        distance > self.min_bond && distance < self.max_bond
    }
}

/// A perceived bond: an index pair with `i <= j` and its distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BondEntry {
    pub i: usize,
    pub j: usize,
    pub distance: f64,
}

/// The set of bonds perceived in one scan.
///
/// Entries are stored in pair-enumeration order (ascending `i`, then
/// ascending `j`), but that order carries no meaning; pairs are unique and
/// lookup is by normalized index pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BondList {
    entries: Vec<BondEntry>,
}

impl BondList {
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BondEntry> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[BondEntry] {
        &self.entries
    }

    /// Distance for the bond between atoms `a` and `b`, in either index
    /// order, or `None` if the pair is not bonded.
    pub fn get(&self, a: usize, b: usize) -> Option<f64> {
        let (i, j) = if a <= b { (a, b) } else { (b, a) };
        self.entries
            .iter()
            .find(|e| e.i == i && e.j == j)
            .map(|e| e.distance)
    }

    pub fn contains(&self, a: usize, b: usize) -> bool {
        self.get(a, b).is_some()
    }
}

impl IntoIterator for BondList {
    type Item = BondEntry;
    type IntoIter = std::vec::IntoIter<BondEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a BondList {
    type Item = &'a BondEntry;
    type IntoIter = std::slice::Iter<'a, BondEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Finds the bonds in a molecule based on distance criteria.
///
/// Every unordered index pair `(i, j)` with `i <= j` is evaluated once,
/// self-pairs included; a self-pair has distance zero and can never pass
/// the strict lower bound once `min_bond` has been validated as
/// non-negative, so no entry `(i, i)` ever appears in the result.
///
/// # Arguments
///
/// * `coordinates` — Atomic positions, indexed by atom index
/// * `criteria` — Distance thresholds; see [`BondCriteria`]
///
/// # Errors
///
/// [`Error::NegativeMinBond`] when `criteria.min_bond < 0`, checked
/// before any distance is computed.
pub fn build_bond_list(
    coordinates: &[[f64; 3]],
    criteria: &BondCriteria,
) -> Result<BondList, Error> {
    if criteria.min_bond < 0.0 {
        return Err(Error::NegativeMinBond(criteria.min_bond));
    }

    let num_atoms = coordinates.len();
    let mut entries = Vec::new();

    for i in 0..num_atoms {
        for j in i..num_atoms {
            let distance = calculate_distance(coordinates[i], coordinates[j]);
            if criteria.accepts(distance) {
                entries.push(BondEntry { i, j, distance });
            }
        }
    }

    Ok(BondList { entries })
}
