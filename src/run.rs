// Copyright 2017-2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Drives a whole move database through an oracle, reporting every divergence as it's found.

use std::io::{self, Write};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    compare,
    database::Database,
    oracle::{InvalidPositionError, Oracle},
    progress::Progress,
};

/// Printed once every record has been checked.
pub const COMPLETION_MARKER: &str = "done!";

#[derive(Debug, Error)]
pub enum RunError {
    #[error("record {index}: {source}")]
    InvalidPosition {
        index: usize,
        #[source]
        source: InvalidPositionError,
    },
    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub positions: usize,
    pub divergences: usize,
}

/// Checks every record of `db` against `oracle`, in order, writing a report for each divergence to `out`.
///
/// Divergences don't stop the run. A position the oracle rejects does, since the database itself is then suspect.
pub fn run<O, W>(
    db: &Database,
    oracle: &O,
    out: &mut W,
    progress: &mut Progress,
) -> Result<RunSummary, RunError>
where
    O: Oracle + ?Sized,
    W: Write,
{
    let result = check_records(db, oracle, out, progress);
    progress.finish();
    let summary = result?;

    writeln!(out, "{}", COMPLETION_MARKER)?;
    out.flush()?;
    info!(
        positions = summary.positions,
        divergences = summary.divergences,
        "finished checking move database"
    );
    Ok(summary)
}

fn check_records<O, W>(
    db: &Database,
    oracle: &O,
    out: &mut W,
    progress: &mut Progress,
) -> Result<RunSummary, RunError>
where
    O: Oracle + ?Sized,
    W: Write,
{
    let mut summary = RunSummary::default();
    for (index, record) in db.iter().enumerate() {
        let reference = oracle
            .legal_moves(&record.fen)
            .map_err(|source| RunError::InvalidPosition { index, source })?;

        debug!(index, fen = %record.fen, moves = record.moves.len(), "checking position");
        if let Some(divergence) = compare::compare(&record.moves, &reference) {
            warn!(
                index,
                fen = %record.fen,
                missing = ?divergence.missing,
                extra = ?divergence.extra,
                "move generation divergence"
            );
            divergence.report(&record.fen, out)?;
            summary.divergences += 1;
        }

        summary.positions += 1;
        progress.tick();
    }

    Ok(summary)
}
