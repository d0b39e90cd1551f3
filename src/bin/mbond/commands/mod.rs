mod bonds;
mod info;

use bonds::run_bonds;
use info::run_info;

use anyhow::Result;

use crate::cli::Command;
use crate::display::Context;

pub fn dispatch(command: Command, ctx: Context) -> Result<()> {
    match command {
        Command::Bonds(args) => run_bonds(args, ctx),
        Command::Info(args) => run_info(args, ctx),
    }
}
