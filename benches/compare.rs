// Copyright 2017-2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use movediff::{compare, Oracle, ShakmatyOracle};

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

fn criterion_benchmark(c: &mut Criterion) {
    let reference = ShakmatyOracle.legal_moves(KIWIPETE).unwrap();

    c.bench_function("compare-equal", |b| {
        let mut candidate = reference.clone();
        candidate.reverse();
        b.iter(|| compare::compare(black_box(&candidate), black_box(&reference)));
    });

    c.bench_function("compare-divergent", |b| {
        let mut candidate = reference.clone();
        candidate.retain(|m| !m.starts_with("e1"));
        candidate.push("e1h1".to_owned());
        b.iter(|| compare::compare(black_box(&candidate), black_box(&reference)));
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
