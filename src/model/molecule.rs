use super::atom::Atom;
use crate::bonds::{self, BondCriteria, BondList};

/// A molecule: a named, ordered collection of atoms.
///
/// Atom order is significant — bond perception and file writers refer to
/// atoms by their zero-based index in `atoms`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Molecule {
    pub name: String,
    pub atoms: Vec<Atom>,
}

impl Molecule {
    pub fn new(name: impl Into<String>, atoms: Vec<Atom>) -> Self {
        Self {
            name: name.into(),
            atoms,
        }
    }

    #[inline]
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    /// Snapshot of all atomic positions, indexed by atom index.
    pub fn positions(&self) -> Vec<[f64; 3]> {
        self.atoms.iter().map(|a| a.position).collect()
    }

    /// Sum of the standard atomic weights of all atoms (u).
    pub fn molecular_mass(&self) -> f64 {
        self.atoms.iter().map(|a| a.element.atomic_mass()).sum()
    }

    /// Mass-weighted mean position, or `None` for an empty molecule.
    pub fn center_of_mass(&self) -> Option<[f64; 3]> {
        if self.atoms.is_empty() {
            return None;
        }

        let total_mass = self.molecular_mass();
        let mut com = [0.0; 3];
        for atom in &self.atoms {
            let mass = atom.element.atomic_mass();
            for k in 0..3 {
                com[k] += mass * atom.position[k];
            }
        }
        for c in &mut com {
            *c /= total_mass;
        }
        Some(com)
    }

    /// Perceives bonds from the molecular geometry.
    ///
    /// Convenience wrapper around [`bonds::build_bond_list`] over this
    /// molecule's positions.
    pub fn perceive_bonds(&self, criteria: &BondCriteria) -> Result<BondList, bonds::Error> {
        bonds::build_bond_list(&self.positions(), criteria)
    }
}
