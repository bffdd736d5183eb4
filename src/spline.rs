// Copyright 2026 the Inkspline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Natural cubic splines over a single axis.
//!
//! A sequence of knot values `v[0..=m]` is interpolated by `m` cubic
//! polynomials, one per knot interval, each parametrized over `[0, 1]`. The
//! polynomials agree in value and first derivative at interior knots, and
//! the second derivative vanishes at both ends (the *natural* boundary
//! condition).
//!
//! The knot derivatives `D[i]` solve the tridiagonal system
//!
//! ```text
//! [2 1          ] [D0]   [3(v1 - v0)    ]
//! [1 4 1        ] [D1]   [3(v2 - v0)    ]
//! [  1 4 1      ] [. ] = [      .       ]
//! [      ...    ] [. ]   [      .       ]
//! [        1 4 1] [. ]   [3(vm - vm-2)  ]
//! [          1 2] [Dm]   [3(vm - vm-1)  ]
//! ```
//!
//! which is strictly diagonally dominant, so the Thomas algorithm (forward
//! elimination, then back substitution) is stable without pivoting.
//!
//! Intervals have unit parameter length regardless of the distance between
//! their knots.

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// One cubic polynomial `p(u) = ((a·u + b)·u + c)·u + d`, for `u` in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubicSegment {
    /// Cubic coefficient.
    pub a: f64,
    /// Quadratic coefficient.
    pub b: f64,
    /// Linear coefficient; the derivative at `u = 0`.
    pub c: f64,
    /// Constant coefficient; the value at `u = 0`.
    pub d: f64,
}

impl CubicSegment {
    /// Create a segment from its polynomial coefficients.
    #[inline]
    pub const fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        CubicSegment { a, b, c, d }
    }

    /// The segment with values `v0`, `v1` and derivatives `d0`, `d1` at its ends.
    #[inline]
    pub fn from_hermite(v0: f64, v1: f64, d0: f64, d1: f64) -> Self {
        CubicSegment {
            a: 2.0 * (v0 - v1) + d0 + d1,
            b: 3.0 * (v1 - v0) - 2.0 * d0 - d1,
            c: d0,
            d: v0,
        }
    }

    /// Evaluate the polynomial at `u`.
    #[inline]
    pub fn eval(&self, u: f64) -> f64 {
        ((self.a * u + self.b) * u + self.c) * u + self.d
    }

    /// Evaluate the first derivative at `u`.
    #[inline]
    pub fn deriv(&self, u: f64) -> f64 {
        (3.0 * self.a * u + 2.0 * self.b) * u + self.c
    }

    /// Evaluate the second derivative at `u`.
    #[inline]
    pub fn deriv2(&self, u: f64) -> f64 {
        6.0 * self.a * u + 2.0 * self.b
    }

    /// The Bernstein (Bézier) coefficients of this segment.
    ///
    /// These are the values of the four control points along this axis of
    /// the equivalent cubic Bézier.
    #[inline]
    pub fn to_bezier(&self) -> [f64; 4] {
        let end = self.a + self.b + self.c + self.d;
        let end_deriv = 3.0 * self.a + 2.0 * self.b + self.c;
        [
            self.d,
            self.d + self.c * (1.0 / 3.0),
            end - end_deriv * (1.0 / 3.0),
            end,
        ]
    }
}

/// A piecewise cubic over one axis, one [`CubicSegment`] per knot interval.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisSpline(Vec<CubicSegment>);

impl AxisSpline {
    /// Construct an `AxisSpline` from already computed segments.
    #[inline]
    pub fn new(segments: Vec<CubicSegment>) -> Self {
        Self(segments)
    }

    /// Solve the natural cubic spline through `values`.
    ///
    /// Returns `None` when there are fewer than two values (there is no
    /// interval to interpolate) or when any value is not finite.
    ///
    /// ```
    /// use inkspline::AxisSpline;
    ///
    /// let spline = AxisSpline::natural(&[0.0, 5.0]).unwrap();
    /// assert_eq!(spline.len(), 1);
    /// assert_eq!(spline.eval(0.5), 2.5);
    /// ```
    pub fn natural(values: &[f64]) -> Option<Self> {
        let derivs = natural_knot_derivatives(values)?;
        let segments = values
            .windows(2)
            .zip(derivs.windows(2))
            .map(|(v, d)| CubicSegment::from_hermite(v[0], v[1], d[0], d[1]))
            .collect();
        Some(Self(segments))
    }

    /// The segments, in knot order.
    #[inline]
    pub fn segments(&self) -> &[CubicSegment] {
        &self.0
    }

    /// The number of segments (one fewer than the number of knots).
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no segments.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Locate the segment and local parameter for a normalized parameter.
    ///
    /// `u` is clamped to `[0, 1]`, scaled by the segment count, and split into
    /// an index and the remainder. `u = 1` maps to the end of the last segment.
    ///
    /// Returns `None` for an empty spline.
    pub fn locate(&self, u: f64) -> Option<(usize, f64)> {
        locate(self.0.len(), u)
    }

    /// Evaluate the spline at normalized parameter `u` in `[0, 1]`.
    ///
    /// Returns `NaN` for an empty spline.
    pub fn eval(&self, u: f64) -> f64 {
        match self.locate(u) {
            Some((ix, t)) => self.0[ix].eval(t),
            None => f64::NAN,
        }
    }
}

/// Shared parameter mapping for per-axis and parametric splines.
pub(crate) fn locate(count: usize, u: f64) -> Option<(usize, f64)> {
    let last = count.checked_sub(1)?;
    let scaled = u.clamp(0.0, 1.0) * count as f64;
    #[allow(
        clippy::cast_possible_truncation,
        reason = "the value is clamped to [0, last] before the cast"
    )]
    let ix = scaled.min(last as f64).floor() as usize;
    Some((ix, scaled - ix as f64))
}

/// Solve for the first derivatives at each knot of the natural cubic spline
/// through `values`.
///
/// Returns `None` if there are fewer than two values or any value is not
/// finite.
pub fn natural_knot_derivatives(values: &[f64]) -> Option<Vec<f64>> {
    if values.len() < 2 || values.iter().any(|v| !v.is_finite()) {
        return None;
    }
    let m = values.len() - 1;
    let mut gamma = Vec::with_capacity(m + 1);
    let mut delta = Vec::with_capacity(m + 1);

    // Forward elimination.
    gamma.push(0.5);
    delta.push(3.0 * (values[1] - values[0]) * 0.5);
    for i in 1..m {
        let g = 1.0 / (4.0 - gamma[i - 1]);
        gamma.push(g);
        delta.push((3.0 * (values[i + 1] - values[i - 1]) - delta[i - 1]) * g);
    }
    let g = 1.0 / (2.0 - gamma[m - 1]);
    gamma.push(g);
    delta.push((3.0 * (values[m] - values[m - 1]) - delta[m - 1]) * g);

    // Back substitution, in place over delta.
    let mut derivs = delta;
    for i in (0..m).rev() {
        derivs[i] -= gamma[i] * derivs[i + 1];
    }
    Some(derivs)
}
