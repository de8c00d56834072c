// Copyright 2017-2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Differential testing for chess move generators.
//!
//! `movediff` takes a move database, a list of positions along with the legal moves some move generator produced
//! for each of them, and checks every position against a trusted oracle. Any position where the two disagree is
//! reported as a unified diff of the sorted move lists.

pub mod compare;
pub mod database;
pub mod diff;
pub mod oracle;
pub mod perft;
pub mod progress;
pub mod run;

pub use database::{Database, DatabaseError, PositionRecord};
pub use oracle::{InvalidPositionError, Oracle, ShakmatyOracle};
pub use run::{run, RunError, RunSummary};
