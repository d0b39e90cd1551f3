use std::collections::HashMap;
use std::io::{self, Write};

use molbond::{BondCriteria, BondList, Molecule};

const INDENT: &str = "  ";

/// Prints the structure summary to stderr, as interactive decoration
/// around a command's real output.
pub fn print_structure_info(molecule: &Molecule) {
    let stderr = io::stderr();
    let mut out = stderr.lock();
    write_structure_info(&mut out, molecule);
}

pub fn write_structure_info(out: &mut impl Write, molecule: &Molecule) {
    let mut rows = vec![
        ("Molecule", molecule.name.clone()),
        ("Total Atoms", format!("{}", molecule.atom_count())),
        (
            "Molecular Mass (u)",
            format!("{:.3}", molecule.molecular_mass()),
        ),
    ];

    if let Some(com) = molecule.center_of_mass() {
        rows.push((
            "Center of Mass (Å)",
            format!("{:.3} {:.3} {:.3}", com[0], com[1], com[2]),
        ));
    }

    print_kv_table(out, "Structure Summary", &rows);
    print_element_distribution(out, molecule);
}

fn print_element_distribution(out: &mut impl Write, molecule: &Molecule) {
    if molecule.atoms.is_empty() {
        return;
    }

    let mut counts: HashMap<&'static str, usize> = HashMap::new();
    for atom in &molecule.atoms {
        *counts.entry(atom.element.symbol()).or_insert(0) += 1;
    }

    let mut sorted: Vec<_> = counts.into_iter().collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));

    let _ = writeln!(out, "{}Element Distribution", INDENT);
    for (symbol, count) in sorted {
        let _ = writeln!(out, "{}{}  {:<2} × {}", INDENT, INDENT, symbol, count);
    }
    let _ = writeln!(out);
}

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) {
    let _ = writeln!(out);
    let _ = writeln!(out, "{}{}", INDENT, title);

    let key_width = rows.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
    for (key, value) in rows {
        let _ = writeln!(out, "{}{}{:<key_width$}  {}", INDENT, INDENT, key, value);
    }
    let _ = writeln!(out);
}

/// Writes the perceived bonds as a fixed-width table, one row per pair.
pub fn print_bond_table(
    out: &mut impl Write,
    molecule: &Molecule,
    bonds: &BondList,
    criteria: &BondCriteria,
) -> io::Result<()> {
    writeln!(
        out,
        "# bonds for '{}' with {} < d < {} Å",
        molecule.name, criteria.min_bond, criteria.max_bond
    )?;

    if bonds.is_empty() {
        writeln!(out, "# none")?;
        return Ok(());
    }

    writeln!(out, "{:>6} {:>6}  {:<5}  {:>10}", "i", "j", "pair", "d (Å)")?;
    for entry in bonds {
        let pair = format!(
            "{}-{}",
            molecule.atoms[entry.i].element.symbol(),
            molecule.atoms[entry.j].element.symbol()
        );
        writeln!(
            out,
            "{:>6} {:>6}  {:<5}  {:>10.4}",
            entry.i, entry.j, pair, entry.distance
        )?;
    }

    Ok(())
}
