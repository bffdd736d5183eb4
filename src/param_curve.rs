// Copyright 2026 the Inkspline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A trait for curves parametrized by a scalar.

use crate::Point;

/// A curve parametrized by a scalar.
pub trait ParamCurve {
    /// Evaluate the curve at parameter `t`.
    ///
    /// Generally `t` is in the range [0..1].
    fn eval(&self, t: f64) -> Point;

    /// The start point.
    fn start(&self) -> Point {
        self.eval(0.0)
    }

    /// The end point.
    fn end(&self) -> Point {
        self.eval(1.0)
    }
}

/// The parameters `0, 1/(n-1), ..., 1` of `n` evenly spaced samples.
///
/// Each parameter is computed from its integer index rather than by repeated
/// addition, so the last one is exactly `1.0` and there is no drift. A count
/// below two is treated as two.
///
/// ```
/// use inkspline::sample_params;
/// let ts: Vec<f64> = sample_params(5).collect();
/// assert_eq!(ts, [0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn sample_params(count: usize) -> impl ExactSizeIterator<Item = f64> + Clone {
    let count = count.max(2);
    let last = (count - 1) as f64;
    (0..count).map(move |k| k as f64 / last)
}

#[cfg(test)]
mod tests {
    use super::sample_params;

    #[test]
    fn hundred_and_one_steps() {
        let ts: Vec<f64> = sample_params(101).collect();
        assert_eq!(ts.len(), 101);
        assert_eq!(ts[0], 0.0);
        assert_eq!(ts[1], 0.01);
        assert_eq!(ts[50], 0.5);
        assert_eq!(ts[100], 1.0);
    }

    #[test]
    fn degenerate_counts() {
        assert_eq!(sample_params(0).collect::<Vec<_>>(), [0.0, 1.0]);
        assert_eq!(sample_params(1).len(), 2);
    }
}
