// Copyright 2017-2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::{path::PathBuf, time::Instant};

use movediff::{perft, ShakmatyOracle};
use structopt::StructOpt;
use tracing::{info, warn};
use tracing_subscriber::{filter::LevelFilter, EnvFilter, FmtSubscriber};

/// Generates a move database from the reference move generator by walking the move tree of a position.
#[derive(Debug, StructOpt)]
struct Options {
    /// FEN representation of the root position.
    #[structopt(name = "FEN")]
    fen: String,

    /// Depth of the move tree to walk.
    #[structopt(short, long, default_value = "3")]
    depth: u32,

    /// File to write the move database to.
    #[structopt(short, long, value_name = "FILE")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(LevelFilter::INFO)
        .with_env_filter(EnvFilter::from_env("MOVEDIFF_LOG"))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let args = Options::from_args();
    let root = ShakmatyOracle::position(&args.fen)?;
    if args.depth > 6 {
        warn!(depth = args.depth, "this is probably going to take a while...");
    }

    let start = Instant::now();
    let (nodes, db) = perft::collect(&root, args.depth);
    info!(
        elapsed_ms = start.elapsed().as_millis() as u64,
        records = db.len(),
        "walked move tree"
    );

    db.save(&args.output)?;
    println!("perft({}) = {}", args.depth, nodes);
    Ok(())
}
