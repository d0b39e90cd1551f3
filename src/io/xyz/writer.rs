use crate::io::error::Error;
use crate::model::molecule::Molecule;
use std::io::Write;

/// Writes a molecule as an XYZ file. The molecule name becomes the
/// comment line.
pub fn write<W: Write>(mut writer: W, molecule: &Molecule) -> Result<(), Error> {
    writeln!(writer, "{}", molecule.atom_count())?;
    writeln!(writer, "{}", molecule.name)?;

    for atom in &molecule.atoms {
        writeln!(
            writer,
            "{:<3} {:>12.6} {:>12.6} {:>12.6}",
            atom.element.symbol(),
            atom.position[0],
            atom.position[1],
            atom.position[2]
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::xyz::reader;
    use crate::model::{atom::Atom, types::Element};
    use std::io::Cursor;

    #[test]
    fn writes_and_reads_roundtrip() {
        let molecule = Molecule::new(
            "methanol fragment",
            vec![
                Atom::new(Element::C, [0.0, 0.0, 0.0]),
                Atom::new(Element::O, [1.43, 0.0, 0.0]),
                Atom::new(Element::H, [-0.36, 1.02, 0.0]),
            ],
        );

        let mut buf = Vec::new();
        write(&mut buf, &molecule).expect("write xyz");
        let parsed = reader::read(Cursor::new(buf)).expect("read xyz");

        assert_eq!(parsed.name, molecule.name);
        assert_eq!(parsed.atom_count(), molecule.atom_count());
        for (a, b) in molecule.atoms.iter().zip(parsed.atoms.iter()) {
            assert_eq!(a.element, b.element);
            for k in 0..3 {
                assert!((a.position[k] - b.position[k]).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn writes_empty_molecule() {
        let mut buf = Vec::new();
        write(&mut buf, &Molecule::default()).expect("write xyz");
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("0\n"));
    }
}
