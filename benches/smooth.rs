// Copyright 2026 the Inkspline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks of the smoothing strategies.

#![feature(test)]
extern crate test;
use test::Bencher;

use inkspline::{
    AxisSpline, BezierOptions, InkList, InkSmoother, ParametricSpline, Smoothing, StrokeOptions,
    SubPath,
};

fn wavy(n: usize) -> SubPath {
    (0..n)
        .map(|i| {
            let x = i as f64 * 3.0;
            (x, 20.0 * (x * 0.05).sin())
        })
        .collect()
}

fn ink() -> InkList {
    [wavy(20), wavy(200), wavy(2)].into_iter().collect()
}

#[bench]
fn bench_natural_200(b: &mut Bencher) {
    let values: Vec<f64> = (0..200).map(|i| (i as f64 * 0.1).sin()).collect();
    b.iter(|| AxisSpline::natural(test::black_box(&values)));
}

#[bench]
fn bench_parametric_200(b: &mut Bencher) {
    let sub = wavy(200);
    b.iter(|| ParametricSpline::from_points(test::black_box(sub.points())));
}

#[bench]
fn bench_smooth_spline(b: &mut Bencher) {
    let ink = ink();
    let smoothing = Smoothing::Spline(StrokeOptions::default());
    b.iter(|| smoothing.smooth(test::black_box(&ink)));
}

#[bench]
fn bench_smooth_bezier(b: &mut Bencher) {
    let ink = ink();
    let smoothing = Smoothing::Bezier(BezierOptions::default());
    b.iter(|| smoothing.smooth(test::black_box(&ink)));
}
