use crate::io::{Format, error::Error};
use crate::model::{atom::Atom, molecule::Molecule, types::Element};
use std::io::BufRead;

/// Reads coordinates from PDB `ATOM`/`HETATM` records.
///
/// Only the geometry is consumed: residue and chain annotations are
/// ignored, and `CONECT` records are never used — connectivity is derived
/// from distances downstream. Reading stops at the first `END`/`ENDMDL`,
/// so multi-model files yield the first model.
pub fn read<R: BufRead>(reader: R) -> Result<Molecule, Error> {
    let mut atoms = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| Error::Io { source: e })?;
        let line_no = idx + 1;

        let record = line.get(..6).unwrap_or(&line).trim_end();
        match record {
            "END" | "ENDMDL" => break,
            "ATOM" | "HETATM" => atoms.push(parse_atom_record(&line, line_no)?),
            _ => {}
        }
    }

    Ok(Molecule::new("", atoms))
}

fn parse_atom_record(line: &str, line_no: usize) -> Result<Atom, Error> {
    let mut position = [0.0; 3];
    for (k, range) in [(30, 38), (38, 46), (46, 54)].iter().enumerate() {
        let field = column(line, range.0, range.1).ok_or_else(|| {
            Error::parse(Format::Pdb, line_no, "coordinate record is too short")
        })?;
        position[k] = field.trim().parse::<f64>().map_err(|_| {
            Error::parse(
                Format::Pdb,
                line_no,
                format!("invalid coordinate field: '{}'", field.trim()),
            )
        })?;
    }

    let element = parse_element(line, line_no)?;
    Ok(Atom::new(element, position))
}

/// Element from columns 77–78, falling back to the atom-name field for
/// files that leave the element column blank.
fn parse_element(line: &str, line_no: usize) -> Result<Element, Error> {
    let from_element_column = column(line, 76, 78)
        .map(str::trim)
        .filter(|s| !s.is_empty());

    let raw = match from_element_column {
        Some(s) => s.to_string(),
        None => {
            let name = column(line, 12, 16)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .ok_or_else(|| {
                    Error::parse(Format::Pdb, line_no, "missing element and atom name")
                })?;
            // Atom names like "CA" or "1HB" prefix the element symbol
            // with digits; strip those and keep the leading letters.
            name.chars()
                .skip_while(|c| c.is_ascii_digit())
                .take_while(|c| c.is_ascii_alphabetic())
                .take(2)
                .collect()
        }
    };

    let symbol = normalize_symbol(&raw);
    if let Ok(element) = symbol.parse::<Element>() {
        return Ok(element);
    }
    // A two-letter atom name that is not itself an element ("HB", "OD")
    // usually starts with a one-letter element.
    if from_element_column.is_none() && symbol.len() > 1 {
        if let Ok(element) = symbol[..1].parse::<Element>() {
            return Ok(element);
        }
    }
    Err(Error::parse(
        Format::Pdb,
        line_no,
        format!("invalid or unsupported element symbol: '{}'", raw),
    ))
}

/// PDB element columns are conventionally upper case ("CL"); normalize to
/// the one-upper-rest-lower form the [`Element`] parser expects.
fn normalize_symbol(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::new();
            out.push(first.to_ascii_uppercase());
            out.extend(chars.map(|c| c.to_ascii_lowercase()));
            out
        }
        None => String::new(),
    }
}

fn column(line: &str, start: usize, end: usize) -> Option<&str> {
    if line.len() < end {
        // A partially present trailing field is truncated rather than
        // rejected; a wholly absent field is None.
        if line.len() <= start {
            return None;
        }
        return line.get(start..);
    }
    line.get(start..end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const WATER_PDB: &str = "\
HEADER    SOLVENT
HETATM    1  O   HOH A   1       0.000   0.000   0.000  1.00  0.00           O
HETATM    2  H1  HOH A   1       0.759   0.000   0.504  1.00  0.00           H
HETATM    3  H2  HOH A   1      -0.759   0.000   0.504  1.00  0.00           H
END
";

    #[test]
    fn reads_hetatm_records() {
        let mol = read(Cursor::new(WATER_PDB)).unwrap();
        assert_eq!(mol.atom_count(), 3);
        assert_eq!(mol.atoms[0].element, Element::O);
        assert_eq!(mol.atoms[1].element, Element::H);
        assert!((mol.atoms[1].position[0] - 0.759).abs() < 1e-9);
        assert!((mol.atoms[2].position[2] - 0.504).abs() < 1e-9);
    }

    #[test]
    fn stops_at_end_record() {
        let text = format!("{}HETATM    4  O   HOH A   2       5.000   0.000   0.000  1.00  0.00           O\n", WATER_PDB);
        let mol = read(Cursor::new(text)).unwrap();
        assert_eq!(mol.atom_count(), 3, "records after END are ignored");
    }

    #[test]
    fn uppercase_element_column_normalized() {
        let line = "HETATM    1 CL   LIG A   1       1.000   2.000   3.000  1.00  0.00          CL";
        let mol = read(Cursor::new(line)).unwrap();
        assert_eq!(mol.atoms[0].element, Element::Cl);
    }

    #[test]
    fn falls_back_to_atom_name() {
        // 54-column record with no element field.
        let line = "ATOM      1  CA  ALA A   1      11.104   6.134  -6.504";
        let mol = read(Cursor::new(line)).unwrap();
        // "CA" normalizes to Ca; without the element column the
        // alpha-carbon/calcium ambiguity is unavoidable.
        assert_eq!(mol.atoms[0].element, Element::Ca);
    }

    #[test]
    fn falls_back_to_leading_letter_of_atom_name() {
        let line = "ATOM      1 1HB  ALA A   1      11.104   6.134  -6.504";
        let mol = read(Cursor::new(line)).unwrap();
        assert_eq!(mol.atoms[0].element, Element::H);
    }

    #[test]
    fn skips_non_coordinate_records() {
        let text = "REMARK nothing\nTER\n";
        let mol = read(Cursor::new(text)).unwrap();
        assert_eq!(mol.atom_count(), 0);
    }

    #[test]
    fn rejects_truncated_coordinates() {
        let line = "ATOM      1  CA  ALA A   1      11.104";
        let err = read(Cursor::new(line)).unwrap_err();
        assert!(err.to_string().contains("too short"));
    }

    #[test]
    fn rejects_garbled_coordinates() {
        let line = "ATOM      1  CA  ALA A   1      11.104   x.xxx  -6.504";
        let err = read(Cursor::new(line)).unwrap_err();
        assert!(err.to_string().contains("invalid coordinate field"));
    }
}
