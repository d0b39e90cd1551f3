use crate::io::error::Error;
use crate::model::molecule::Molecule;
use std::io::Write;

/// Writes a molecule as minimal PDB `HETATM` records.
///
/// Every atom is emitted as a single-residue `HETATM` record named after
/// the element; no chain, occupancy or connectivity metadata beyond the
/// fixed-column defaults is produced.
pub fn write<W: Write>(mut writer: W, molecule: &Molecule) -> Result<(), Error> {
    if !molecule.name.is_empty() {
        writeln!(writer, "COMPND    {}", molecule.name)?;
    }

    for (idx, atom) in molecule.atoms.iter().enumerate() {
        writeln!(
            writer,
            "HETATM{:>5} {:<4} LIG A   1    {:>8.3}{:>8.3}{:>8.3}  1.00  0.00          {:>2}",
            idx + 1,
            atom.element.symbol(),
            atom.position[0],
            atom.position[1],
            atom.position[2],
            atom.element.symbol().to_uppercase()
        )?;
    }

    writeln!(writer, "END")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::pdb::reader;
    use crate::model::{atom::Atom, types::Element};
    use std::io::Cursor;

    #[test]
    fn writes_and_reads_roundtrip() {
        let molecule = Molecule::new(
            "hydrogen chloride",
            vec![
                Atom::new(Element::H, [0.0, 0.0, 0.0]),
                Atom::new(Element::Cl, [1.27, 0.0, 0.0]),
            ],
        );

        let mut buf = Vec::new();
        write(&mut buf, &molecule).expect("write pdb");
        let parsed = reader::read(Cursor::new(buf)).expect("read pdb");

        assert_eq!(parsed.atom_count(), 2);
        assert_eq!(parsed.atoms[0].element, Element::H);
        assert_eq!(parsed.atoms[1].element, Element::Cl);
        assert!((parsed.atoms[1].position[0] - 1.27).abs() < 1e-3);
    }

    #[test]
    fn terminates_with_end_record() {
        let mut buf = Vec::new();
        write(&mut buf, &Molecule::default()).expect("write pdb");
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "END\n");
    }
}
