// Copyright 2017-2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Perft walks that record every interior position along the way, producing a move database.
//!
//! This is the same shape of database an engine's perft tool saves when asked for its intermediate positions, but
//! generated by the oracle, so it is a known-good baseline that an engine's output can be lined up against.

use shakmaty::{fen::Fen, Chess, EnPassantMode, Position};
use tracing::debug;

use crate::{
    database::{Database, PositionRecord},
    oracle,
};

/// Walks the legal move tree of `root` to the given depth. Returns the number of leaf nodes and a database holding
/// one record for every position with moves left to search, in post-order.
pub fn collect(root: &Chess, depth: u32) -> (u64, Database) {
    let mut db = Database::new();
    let nodes = collect_impl(root, depth, &mut db);
    debug!(depth, nodes, records = db.len(), "perft walk complete");
    (nodes, db)
}

fn collect_impl(pos: &Chess, depth: u32, db: &mut Database) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut nodes = 0;
    for mov in pos.legal_moves() {
        let mut child = pos.clone();
        child.play_unchecked(&mov);
        nodes += collect_impl(&child, depth - 1, db);
    }

    let fen = Fen::from_position(pos.clone(), EnPassantMode::Legal);
    db.push(PositionRecord::new(fen.to_string(), oracle::uci_moves(pos)));
    nodes
}

/// Counts leaf nodes without recording anything.
pub fn perft(pos: &Chess, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    pos.legal_moves()
        .iter()
        .map(|mov| {
            let mut child = pos.clone();
            child.play_unchecked(mov);
            perft(&child, depth - 1)
        })
        .sum()
}
