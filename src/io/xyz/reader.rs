use crate::io::{Format, error::Error};
use crate::model::{atom::Atom, molecule::Molecule, types::Element};
use std::io::BufRead;

/// Reads an XYZ file: atom count, comment line, then one
/// `symbol x y z` record per atom. The comment becomes the molecule name.
pub fn read<R: BufRead>(reader: R) -> Result<Molecule, Error> {
    let mut lines = reader.lines().enumerate();

    let (_, count_line) = next_line(&mut lines)?
        .ok_or_else(|| Error::parse(Format::Xyz, 1, "missing atom count line"))?;
    let atom_count = count_line
        .trim()
        .parse::<usize>()
        .map_err(|_| Error::parse(Format::Xyz, 1, "invalid atom count"))?;

    let (_, comment) =
        next_line(&mut lines)?.ok_or_else(|| Error::parse(Format::Xyz, 2, "missing comment line"))?;
    let name = comment.trim().to_string();

    let mut atoms = Vec::with_capacity(atom_count);
    for _ in 0..atom_count {
        let (line_no, record) = next_line(&mut lines)?.ok_or_else(|| {
            Error::parse(
                Format::Xyz,
                atom_count + 2,
                format!("expected {} atom records, found {}", atom_count, atoms.len()),
            )
        })?;
        atoms.push(parse_record(&record, line_no)?);
    }

    Ok(Molecule::new(name, atoms))
}

fn next_line<I>(lines: &mut I) -> Result<Option<(usize, String)>, Error>
where
    I: Iterator<Item = (usize, std::io::Result<String>)>,
{
    match lines.next() {
        Some((idx, line)) => {
            let line = line.map_err(|e| Error::Io { source: e })?;
            Ok(Some((idx + 1, line)))
        }
        None => Ok(None),
    }
}

fn parse_record(record: &str, line_no: usize) -> Result<Atom, Error> {
    let parts: Vec<_> = record.split_whitespace().collect();
    if parts.len() < 4 {
        return Err(Error::parse(
            Format::Xyz,
            line_no,
            "atom record must have a symbol and three coordinates",
        ));
    }

    let element = parts[0]
        .parse::<Element>()
        .map_err(|e| Error::parse(Format::Xyz, line_no, e.to_string()))?;

    let mut position = [0.0; 3];
    for (k, part) in parts[1..4].iter().enumerate() {
        position[k] = part.parse::<f64>().map_err(|_| {
            Error::parse(
                Format::Xyz,
                line_no,
                format!("invalid coordinate: '{}'", part),
            )
        })?;
    }

    Ok(Atom::new(element, position))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const WATER_XYZ: &str = "\
3
water
O   0.000000   0.000000   0.000000
H   0.758602   0.000000   0.504284
H  -0.758602   0.000000   0.504284
";

    #[test]
    fn reads_water() {
        let mol = read(Cursor::new(WATER_XYZ)).unwrap();
        assert_eq!(mol.name, "water");
        assert_eq!(mol.atom_count(), 3);
        assert_eq!(mol.atoms[0].element, Element::O);
        assert!((mol.atoms[1].position[0] - 0.758602).abs() < 1e-9);
        assert!((mol.atoms[2].position[0] + 0.758602).abs() < 1e-9);
    }

    #[test]
    fn empty_comment_gives_empty_name() {
        let mol = read(Cursor::new("1\n\nC 0 0 0\n")).unwrap();
        assert_eq!(mol.name, "");
        assert_eq!(mol.atom_count(), 1);
    }

    #[test]
    fn rejects_bad_count() {
        let err = read(Cursor::new("three\nmol\n")).unwrap_err();
        assert!(err.to_string().contains("invalid atom count"));
    }

    #[test]
    fn rejects_truncated_file() {
        let err = read(Cursor::new("2\nmol\nC 0 0 0\n")).unwrap_err();
        assert!(err.to_string().contains("expected 2 atom records"));
    }

    #[test]
    fn rejects_unknown_element() {
        let err = read(Cursor::new("1\nmol\nQq 0 0 0\n")).unwrap_err();
        assert!(err.to_string().contains("Qq"));
    }

    #[test]
    fn rejects_malformed_coordinate() {
        let err = read(Cursor::new("1\nmol\nC 0 zero 0\n")).unwrap_err();
        assert!(err.to_string().contains("invalid coordinate"));
    }
}
