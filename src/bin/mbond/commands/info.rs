use std::io::{self, Write};

use anyhow::Result;

use crate::cli::InfoArgs;
use crate::display::{Context as DisplayContext, write_structure_info};
use crate::io::read_molecule;

pub fn run_info(args: InfoArgs, _ctx: DisplayContext) -> Result<()> {
    let molecule = read_molecule(&args.io)?;

    let mut stdout = io::stdout().lock();
    write_structure_info(&mut stdout, &molecule);
    stdout.flush()?;

    Ok(())
}
