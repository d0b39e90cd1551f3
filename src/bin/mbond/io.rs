use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal, Read, Stdin};
use std::path::Path;

use anyhow::{Context, Result, bail};

use molbond::Molecule;
use molbond::io::Format;

use crate::cli::IoOptions;

/// Returns `true` if stderr is a terminal (interactive).
pub fn stderr_is_tty() -> bool {
    io::stderr().is_terminal()
}

/// Returns `true` if stdin is a terminal (interactive).
pub fn stdin_is_tty() -> bool {
    io::stdin().is_terminal()
}

pub enum InputSource {
    File(BufReader<File>),
    Stdin(BufReader<Stdin>),
}

impl Read for InputSource {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            InputSource::File(r) => r.read(buf),
            InputSource::Stdin(r) => r.read(buf),
        }
    }
}

impl BufRead for InputSource {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        match self {
            InputSource::File(r) => r.fill_buf(),
            InputSource::Stdin(r) => r.fill_buf(),
        }
    }

    fn consume(&mut self, amt: usize) {
        match self {
            InputSource::File(r) => r.consume(amt),
            InputSource::Stdin(r) => r.consume(amt),
        }
    }
}

fn open_input(path: Option<&Path>) -> Result<InputSource> {
    match path {
        Some(p) => {
            let file = File::open(p)
                .with_context(|| format!("Failed to open input file: {}", p.display()))?;
            Ok(InputSource::File(BufReader::new(file)))
        }
        None => Ok(InputSource::Stdin(BufReader::new(io::stdin()))),
    }
}

fn resolve_format(opts: &IoOptions) -> Result<Format> {
    if let Some(fmt) = opts.input_format {
        return Ok(fmt.into());
    }
    match &opts.input {
        Some(path) => Format::from_path(path).with_context(|| {
            format!(
                "Cannot infer input format from '{}'; specify --infmt",
                path.display()
            )
        }),
        None => bail!("Reading from stdin requires --infmt"),
    }
}

/// Reads the molecule named by the shared I/O options, falling back to
/// the file stem when the file itself carries no name.
pub fn read_molecule(opts: &IoOptions) -> Result<Molecule> {
    if opts.input.is_none() && stdin_is_tty() {
        bail!(
            "No input file specified and stdin is a terminal.\n\nUsage: mbond bonds -i <INPUT> or pipe data via stdin."
        );
    }

    let format = resolve_format(opts)?;
    let source = open_input(opts.input.as_deref())?;

    let mut molecule = molbond::io::read(source, format).with_context(|| {
        match &opts.input {
            Some(p) => format!("Failed to read {} data from {}", format, p.display()),
            None => format!("Failed to read {} data from stdin", format),
        }
    })?;

    if molecule.name.is_empty() {
        if let Some(stem) = opts
            .input
            .as_deref()
            .and_then(Path::file_stem)
            .and_then(|s| s.to_str())
        {
            molecule.name = stem.to_string();
        }
    }

    Ok(molecule)
}
