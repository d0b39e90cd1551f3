//! Reading and writing molecular geometry files.
//!
//! Two formats are supported: XYZ (count / comment / element-coordinate
//! records) and a minimal subset of PDB (`ATOM`/`HETATM` coordinate
//! records). Readers produce a [`Molecule`]; writers consume one. Bonds
//! are never read from or written to files — connectivity is always
//! derived from geometry by [`crate::bonds`].

pub mod error;

pub mod pdb;
pub mod xyz;

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::model::molecule::Molecule;
use error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Xyz,
    Pdb,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Xyz => write!(f, "XYZ"),
            Format::Pdb => write!(f, "PDB"),
        }
    }
}

impl Format {
    /// Infers the format from a file extension, case-insensitively.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "xyz" => Some(Format::Xyz),
            "pdb" | "ent" => Some(Format::Pdb),
            _ => None,
        }
    }
}

/// Reads a molecule in the given format from any buffered source.
pub fn read<R: BufRead>(reader: R, format: Format) -> Result<Molecule, Error> {
    match format {
        Format::Xyz => xyz::reader::read(reader),
        Format::Pdb => pdb::reader::read(reader),
    }
}

/// Reads a molecule from a file, inferring the format from the extension.
pub fn read_file(path: &Path) -> Result<Molecule, Error> {
    let format = Format::from_path(path).ok_or_else(|| {
        Error::Io {
            source: std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("cannot infer format from path: {}", path.display()),
            ),
        }
    })?;
    let file = File::open(path)?;
    read(BufReader::new(file), format)
}

/// Writes a molecule in the given format to any sink.
pub fn write<W: Write>(writer: W, format: Format, molecule: &Molecule) -> Result<(), Error> {
    match format {
        Format::Xyz => xyz::writer::write(writer, molecule),
        Format::Pdb => pdb::writer::write(writer, molecule),
    }
}

/// Writes a molecule to a file, inferring the format from the extension.
pub fn write_file(path: &Path, molecule: &Molecule) -> Result<(), Error> {
    let format = Format::from_path(path).ok_or_else(|| {
        Error::Io {
            source: std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("cannot infer format from path: {}", path.display()),
            ),
        }
    })?;
    let file = File::create(path)?;
    write(BufWriter::new(file), format, molecule)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_path() {
        assert_eq!(Format::from_path(Path::new("mol.xyz")), Some(Format::Xyz));
        assert_eq!(Format::from_path(Path::new("mol.XYZ")), Some(Format::Xyz));
        assert_eq!(Format::from_path(Path::new("1abc.pdb")), Some(Format::Pdb));
        assert_eq!(Format::from_path(Path::new("1abc.ent")), Some(Format::Pdb));
        assert_eq!(Format::from_path(Path::new("mol.mol2")), None);
        assert_eq!(Format::from_path(Path::new("noext")), None);
    }

    #[test]
    fn format_display() {
        assert_eq!(Format::Xyz.to_string(), "XYZ");
        assert_eq!(Format::Pdb.to_string(), "PDB");
    }
}
