// Copyright 2017-2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Move legality oracles. An oracle is a trusted source of legal moves that candidate move generators are checked
//! against; `movediff` makes no attempt to verify it.

use shakmaty::{fen::Fen, CastlingMode, Chess, Position, PositionError};
use thiserror::Error;

/// The oracle could not make sense of a position string.
#[derive(Clone, PartialEq, Eq, Debug, Error)]
#[error("invalid position \"{fen}\": {reason}")]
pub struct InvalidPositionError {
    pub fen: String,
    pub reason: String,
}

/// A trusted source of legal moves.
pub trait Oracle {
    /// Produces the legal moves of the position described by the given FEN, in UCI notation and sorted
    /// lexicographically.
    fn legal_moves(&self, fen: &str) -> Result<Vec<String>, InvalidPositionError>;
}

/// An oracle backed by the `shakmaty` move generator, using standard (non-960) castling.
#[derive(Copy, Clone, Debug, Default)]
pub struct ShakmatyOracle;

impl ShakmatyOracle {
    /// Parses a FEN into a shakmaty position.
    ///
    /// Candidate engines with bugs write FENs with stale castling rights or en-passant squares, so those are repaired
    /// rather than rejected, along with impossible checks and excess material. Only setups shakmaty cannot play from
    /// at all (missing kings, pawns on the back rank, the side not to move in check) are errors.
    pub fn position(fen: &str) -> Result<Chess, InvalidPositionError> {
        let invalid = |reason: String| InvalidPositionError {
            fen: fen.to_owned(),
            reason,
        };

        let setup: Fen = fen.trim().parse().map_err(|e| invalid(format!("{}", e)))?;
        setup
            .into_position(CastlingMode::Standard)
            .or_else(PositionError::ignore_invalid_castling_rights)
            .or_else(PositionError::ignore_invalid_ep_square)
            .or_else(PositionError::ignore_impossible_check)
            .or_else(PositionError::ignore_too_much_material)
            .map_err(|e| invalid(format!("{}", e)))
    }
}

/// The UCI strings of every legal move in the given position, in generation order.
pub fn uci_moves(pos: &Chess) -> Vec<String> {
    pos.legal_moves()
        .iter()
        .map(|m| m.to_uci(CastlingMode::Standard).to_string())
        .collect()
}

impl Oracle for ShakmatyOracle {
    fn legal_moves(&self, fen: &str) -> Result<Vec<String>, InvalidPositionError> {
        let pos = ShakmatyOracle::position(fen)?;
        let mut moves = uci_moves(&pos);
        moves.sort_unstable();
        Ok(moves)
    }
}
