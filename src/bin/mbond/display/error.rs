use std::io::{self, Write};

use anyhow::Error;

pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "  ✗ Error: {}", err);

    for cause in err.chain().skip(1) {
        let _ = writeln!(stderr, "    Caused by: {}", cause);
    }

    let _ = writeln!(stderr);
}
