// Copyright 2017-2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Comparison of a candidate move list against a reference move list.

use std::{
    collections::BTreeSet,
    io::{self, Write},
};

use crate::diff::{self, DEFAULT_CONTEXT};

pub const REFERENCE_LABEL: &str = "reference";
pub const CANDIDATE_LABEL: &str = "candidate";

/// A disagreement between a candidate move generator and the reference for a single position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Divergence {
    /// Moves the reference considers legal that the candidate did not produce.
    pub missing: Vec<String>,
    /// Moves the candidate produced that the reference does not consider legal.
    pub extra: Vec<String>,
    /// Unified diff transforming the sorted reference list into the sorted candidate list.
    pub diff: Vec<String>,
}

impl Divergence {
    /// Writes a human-readable report of this divergence, naming the position it occurred in.
    pub fn report<W: Write>(&self, fen: &str, out: &mut W) -> io::Result<()> {
        writeln!(out, "Move generation divergence (fen {}):", fen)?;
        for line in &self.diff {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }
}

fn sorted<S: AsRef<str>>(moves: &[S]) -> Vec<&str> {
    let mut moves: Vec<&str> = moves.iter().map(|m| m.as_ref()).collect();
    moves.sort_unstable();
    moves
}

/// Compares two move lists, ignoring order. Returns `None` if the sorted lists are identical.
///
/// Duplicates are significant: a candidate that lists the same move twice diverges from a reference that lists it
/// once.
pub fn compare<C, R>(candidate: &[C], reference: &[R]) -> Option<Divergence>
where
    C: AsRef<str>,
    R: AsRef<str>,
{
    let candidate = sorted(candidate);
    let reference = sorted(reference);
    if candidate == reference {
        return None;
    }

    let candidate_set: BTreeSet<&str> = candidate.iter().copied().collect();
    let reference_set: BTreeSet<&str> = reference.iter().copied().collect();
    let missing = reference_set
        .difference(&candidate_set)
        .map(|&m| m.to_owned())
        .collect();
    let extra = candidate_set
        .difference(&reference_set)
        .map(|&m| m.to_owned())
        .collect();
    let diff = diff::unified_diff(
        &reference,
        &candidate,
        REFERENCE_LABEL,
        CANDIDATE_LABEL,
        DEFAULT_CONTEXT,
    );

    Some(Divergence {
        missing,
        extra,
        diff,
    })
}

#[cfg(test)]
mod tests {
    use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};

    use super::compare;

    const FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    fn report(candidate: &[&str], reference: &[&str]) -> Option<String> {
        compare(candidate, reference).map(|divergence| {
            let mut out = Vec::new();
            divergence.report(FEN, &mut out).unwrap();
            String::from_utf8(out).unwrap()
        })
    }

    #[test]
    fn same_moves_different_order() {
        assert_eq!(None, compare(&["d2d4", "e2e4"], &["e2e4", "d2d4"]));
    }

    #[test]
    fn both_empty() {
        assert_eq!(None, compare::<&str, &str>(&[], &[]));
    }

    #[test]
    fn missing_move() {
        let divergence = compare(&["e2e4"], &["e2e4", "d2d4"]).unwrap();
        assert_eq!(vec!["d2d4"], divergence.missing);
        assert!(divergence.extra.is_empty());
        assert!(divergence.diff.contains(&"-d2d4".to_owned()));
        assert!(divergence.diff.contains(&" e2e4".to_owned()));
    }

    #[test]
    fn extra_move() {
        let divergence = compare(&["e1g1", "e1h1"], &["e1g1"]).unwrap();
        assert!(divergence.missing.is_empty());
        assert_eq!(vec!["e1h1"], divergence.extra);
        assert!(divergence.diff.contains(&"+e1h1".to_owned()));
    }

    #[test]
    fn duplicate_move_diverges() {
        let divergence = compare(&["a2a3", "a2a3"], &["a2a3"]).unwrap();
        assert!(divergence.missing.is_empty());
        assert!(divergence.extra.is_empty());
        assert!(divergence.diff.contains(&"+a2a3".to_owned()));
    }

    #[test]
    fn report_names_position() {
        let text = report(&["e2e4"], &["d2d4", "e2e4"]).unwrap();
        let expected = format!(
            "Move generation divergence (fen {}):\n--- reference\n+++ candidate\n@@ -1,2 +1 @@\n-d2d4\n e2e4\n",
            FEN
        );
        assert_eq!(expected, text);
    }

    #[test]
    fn report_mentions_every_differing_move() {
        let candidate = ["a2a3", "b1c3", "e7e8q", "g1h3"];
        let reference = ["a2a3", "b1a3", "e7e8n", "e7e8q", "g1f3"];
        let text = report(&candidate, &reference).unwrap();
        for mov in ["b1c3", "g1h3", "b1a3", "e7e8n", "g1f3"] {
            assert!(text.contains(mov), "report does not mention {}", mov);
        }
    }

    #[test]
    fn order_never_matters() {
        let mut rng = SmallRng::seed_from_u64(0xa4);
        let reference: Vec<String> = ["a2a3", "a2a4", "b1a3", "b1c3", "e2e4", "g1f3", "g1h3"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let mut differing = reference.clone();
        differing.pop();
        differing.push("g1e2".to_owned());

        for _ in 0..64 {
            let mut candidate = reference.clone();
            candidate.shuffle(&mut rng);
            let mut shuffled_reference = reference.clone();
            shuffled_reference.shuffle(&mut rng);
            assert_eq!(None, compare(&candidate, &shuffled_reference));

            let mut wrong = differing.clone();
            wrong.shuffle(&mut rng);
            let divergence = compare(&wrong, &shuffled_reference).unwrap();
            assert_eq!(vec!["g1h3"], divergence.missing);
            assert_eq!(vec!["g1e2"], divergence.extra);
        }
    }

    #[test]
    fn sorting_is_idempotent() {
        let once = compare(&["c2c3", "a2a3"], &["b2b3", "a2a3"]).unwrap();
        let twice = compare(&["a2a3", "c2c3"], &["a2a3", "b2b3"]).unwrap();
        assert_eq!(once, twice);
    }
}
