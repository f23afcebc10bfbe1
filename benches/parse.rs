// Copyright 2026 the pathdata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks of the path data pipeline.

#![feature(test)]
extern crate test;
use pathdata::{normalize_arcs, parse, parse_str, to_svg, SubPath};
use test::Bencher;

const DATA: &str = "M0,0 L100,100 l50,25 Q65,75 90,110 T200,300 \
    c1,1 2,2 3,3 s4,4 5,5 h10 v-10 a25 25 0 1 1 50 50 Z \
    m10,10 C10,20 30,40 50,60 S70,80 90,100 A5 5 30 0 0 10 10 z";

fn document() -> String {
    DATA.repeat(100)
}

fn subpaths() -> Vec<SubPath> {
    parse_str(&document()).collect::<Result<_, _>>().unwrap()
}

#[bench]
fn bench_parse_whole(bb: &mut Bencher) {
    let doc = document();
    bb.iter(|| parse_str(test::black_box(&doc)).count());
}

#[bench]
fn bench_parse_chunked(bb: &mut Bencher) {
    let doc = document();
    let chunks: Vec<&str> = doc
        .as_bytes()
        .chunks(17)
        .map(|c| std::str::from_utf8(c).unwrap())
        .collect();
    bb.iter(|| parse(test::black_box(&chunks)).count());
}

#[bench]
fn bench_serialize(bb: &mut Bencher) {
    let paths = subpaths();
    bb.iter(|| to_svg(test::black_box(&paths)));
}

#[bench]
fn bench_normalize_arcs(bb: &mut Bencher) {
    let paths = subpaths();
    bb.iter(|| {
        test::black_box(&paths)
            .iter()
            .map(normalize_arcs)
            .count()
    });
}
