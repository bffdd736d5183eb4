// Copyright 2026 the Inkspline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bézier control points estimated from tangent projections.
//!
//! For each interior knot `b`, with neighbors `a` before and `c` after, the
//! chord direction `â = (c − a) / |c − a|` stands in for the tangent at `b`.
//! The two control points for `b` sit on the tangent line through `b`,
//! pulled back toward `a` and forward toward `c` by a fraction of the
//! projected distance to each neighbor:
//!
//! ```text
//! first  = b − k·|(b − a)·â|·â
//! second = b + k·|(b − c)·â|·â
//! ```
//!
//! where `k` is the tightness, [`DEFAULT_TIGHTNESS`] unless configured. No
//! linear system is solved, so the estimate is cheap, local, and only G1 at
//! the knots.

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

use crate::{InkPath, Point, SubPath};

/// The default fraction of the projected neighbor distance used to place
/// control points.
pub const DEFAULT_TIGHTNESS: f64 = 0.5;

/// The two control points estimated for one interior knot.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControlPointPair {
    /// The control point on the incoming side of the knot.
    pub first: Point,
    /// The control point on the outgoing side of the knot.
    pub second: Point,
}

/// Options for the Bézier estimator.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BezierOptions {
    /// Fraction of the projected neighbor distance; larger is rounder.
    pub tightness: f64,
}

impl Default for BezierOptions {
    fn default() -> Self {
        BezierOptions {
            tightness: DEFAULT_TIGHTNESS,
        }
    }
}

impl BezierOptions {
    /// Builder method for setting the tightness.
    #[must_use]
    pub fn with_tightness(mut self, tightness: f64) -> Self {
        self.tightness = tightness;
        self
    }
}

/// Estimate control points for every interior knot, with the default tightness.
///
/// Returns one pair per interior point (`n − 2` pairs for `n` points), or
/// nothing for fewer than three points.
///
/// ```
/// use inkspline::{control_points, Point};
///
/// let pts = [Point::new(0., 0.), Point::new(1., 1.), Point::new(2., 0.)];
/// let pairs = control_points(&pts);
/// assert_eq!(pairs.len(), 1);
/// assert_eq!(pairs[0].first, Point::new(0.5, 1.));
/// assert_eq!(pairs[0].second, Point::new(1.5, 1.));
/// ```
pub fn control_points(points: &[Point]) -> Vec<ControlPointPair> {
    control_points_with(points, DEFAULT_TIGHTNESS)
}

/// Estimate control points for every interior knot.
///
/// When the neighbors of a knot coincide, the chord direction is undefined;
/// both control points then collapse onto the knot itself.
pub fn control_points_with(points: &[Point], tightness: f64) -> Vec<ControlPointPair> {
    points
        .windows(3)
        .map(|w| {
            let (a, b, c) = (w[0], w[1], w[2]);
            let ac = (c - a).normalize_or_zero();
            let proj = (b - a).dot(ac).abs();
            let first = b - tightness * proj * ac;
            let ca = -ac;
            let proj2 = (b - c).dot(ca).abs();
            let second = b - tightness * proj2 * ca;
            ControlPointPair { first, second }
        })
        .collect()
}

/// Flat list of estimated control points, `2·(n − 2)` of them for `n ≥ 3`
/// points: the first and second control point of each interior knot in turn.
pub fn control_point_list(points: &[Point]) -> Vec<Point> {
    control_points(points)
        .into_iter()
        .flat_map(|pair| [pair.first, pair.second])
        .collect()
}

/// Smooths sub-paths into piecewise cubic Béziers through the captured points.
///
/// This is the alternate strategy to [`StrokeAssembler`](crate::StrokeAssembler):
/// it emits `CurveTo` commands rather than a dense polyline.
#[derive(Clone, Copy, Debug, Default)]
pub struct BezierSmoother {
    opts: BezierOptions,
}

impl BezierSmoother {
    /// Create a smoother with the given options.
    pub fn new(opts: BezierOptions) -> Self {
        BezierSmoother { opts }
    }

    /// The options in use.
    pub fn options(&self) -> &BezierOptions {
        &self.opts
    }

    /// Append the smoothed sub-path to `path`.
    ///
    /// One point draws a dot, two points a straight line. For more, the curve
    /// enters the first interior knot along its incoming control point, joins
    /// interior knots with both of their control points, and leaves the last
    /// interior knot along its outgoing one. The two end curves use their
    /// start point as first control point.
    pub(crate) fn build(&self, sub: &SubPath, path: &mut InkPath) {
        let points = sub.points();
        let (first, last) = match points {
            [] => return,
            [p] => (*p, *p),
            [p0, .., pn] => (*p0, *pn),
        };
        path.move_to(first);
        if points.len() < 3 {
            path.line_to(last);
            path.stroke();
            return;
        }
        let pairs = control_points_with(points, self.opts.tightness);
        path.curve_to(first, pairs[0].first, points[1]);
        for (i, knots) in pairs.windows(2).enumerate() {
            path.curve_to(knots[0].second, knots[1].first, points[i + 2]);
        }
        path.curve_to(points[points.len() - 2], pairs[pairs.len() - 1].second, last);
        path.stroke();
    }
}
