// Copyright 2017-2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::{
    io::{self, Write},
    path::PathBuf,
    process,
};

use anyhow::Context;
use movediff::{progress::Progress, Database, ShakmatyOracle};
use structopt::StructOpt;
use tracing_subscriber::{filter::LevelFilter, EnvFilter, FmtSubscriber};

/// Checks a move database against a reference move generator and reports every divergence.
#[derive(Debug, StructOpt)]
struct Options {
    /// Move database, as saved by an engine's perft tool.
    #[structopt(short, long, value_name = "FILE")]
    file: Option<PathBuf>,
}

const MISSING_FILE: &str = "error: move database file is required";

/// Returns the database path, or reports on `out` that there isn't one.
fn require_file<W: Write>(file: Option<PathBuf>, out: &mut W) -> io::Result<Option<PathBuf>> {
    if file.is_none() {
        writeln!(out, "{}", MISSING_FILE)?;
        out.flush()?;
    }
    Ok(file)
}

fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(LevelFilter::INFO)
        .with_env_filter(EnvFilter::from_env("MOVEDIFF_LOG"))
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let args = Options::from_args();
    let path = match require_file(args.file, &mut io::stdout())? {
        Some(path) => path,
        None => process::exit(1),
    };

    let db = Database::load(&path)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut progress = Progress::stderr(db.len());
    movediff::run(&db, &ShakmatyOracle, &mut out, &mut progress)
        .with_context(|| format!("failed to check {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use structopt::StructOpt;

    use super::{require_file, Options};

    #[test]
    fn missing_file_is_reported() {
        let args = Options::from_iter_safe(["movediff"]).unwrap();
        let mut out = Vec::new();
        assert_eq!(None, require_file(args.file, &mut out).unwrap());
        assert_eq!(
            "error: move database file is required\n",
            String::from_utf8(out).unwrap()
        );
    }

    #[test]
    fn file_given() {
        for argv in [["movediff", "-f", "moves.json"], ["movediff", "--file", "moves.json"]] {
            let args = Options::from_iter_safe(argv).unwrap();
            let mut out = Vec::new();
            assert_eq!(
                Some(PathBuf::from("moves.json")),
                require_file(args.file, &mut out).unwrap()
            );
            assert!(out.is_empty());
        }
    }

    #[test]
    fn no_other_flags() {
        assert!(Options::from_iter_safe(["movediff", "-f", "moves.json", "--depth", "3"]).is_err());
    }
}
