use std::fs::File;
use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use serde::Serialize;

use molbond::{BondCriteria, BondEntry, BondList, Molecule, build_bond_list};

use crate::cli::BondsArgs;
use crate::display::{Context as DisplayContext, Progress, print_bond_table, print_structure_info};
use crate::io::read_molecule;

const TOTAL_STEPS: u8 = 2;

pub fn run_bonds(args: BondsArgs, ctx: DisplayContext) -> Result<()> {
    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Reading structure");
    let molecule = read_molecule(&args.io)?;
    progress.complete_step("Reading structure");

    if ctx.interactive {
        print_structure_info(&molecule);
    }

    let criteria = BondCriteria::new(args.max_bond, args.min_bond);

    progress.step("Perceiving bonds");
    let bonds = build_bond_list(&molecule.positions(), &criteria)
        .context("Bond perception failed")?;
    progress.complete_step("Perceiving bonds");

    progress.finish();

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(io::stdout().lock()),
    };

    if args.json {
        let report = BondReport::new(&molecule, &bonds, &criteria);
        serde_json::to_writer_pretty(&mut out, &report).context("Failed to serialize report")?;
        writeln!(out)?;
    } else {
        print_bond_table(&mut out, &molecule, &bonds, &criteria)?;
    }
    out.flush()?;

    Ok(())
}

#[derive(Serialize)]
struct BondReport<'a> {
    molecule: &'a str,
    atom_count: usize,
    max_bond: f64,
    min_bond: f64,
    bond_count: usize,
    bonds: Vec<ReportEntry<'a>>,
}

#[derive(Serialize)]
struct ReportEntry<'a> {
    #[serde(flatten)]
    entry: &'a BondEntry,
    elements: [&'static str; 2],
}

impl<'a> BondReport<'a> {
    fn new(molecule: &'a Molecule, bonds: &'a BondList, criteria: &BondCriteria) -> Self {
        let entries = bonds
            .iter()
            .map(|entry| ReportEntry {
                entry,
                elements: [
                    molecule.atoms[entry.i].element.symbol(),
                    molecule.atoms[entry.j].element.symbol(),
                ],
            })
            .collect();

        Self {
            molecule: &molecule.name,
            atom_count: molecule.atom_count(),
            max_bond: criteria.max_bond,
            min_bond: criteria.min_bond,
            bond_count: bonds.len(),
            bonds: entries,
        }
    }
}
