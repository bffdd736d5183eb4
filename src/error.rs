// Copyright 2026 the Inkspline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// An error raised while reading ink input or assembling a stroke.
///
/// Errors are always local to a single sub-path; the smoothers skip the
/// affected stroke and keep going.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InkError {
    /// A flat coordinate array had an unpaired trailing value.
    ///
    /// Holds the length of the array.
    OddCoordinateCount(usize),
    /// A point had a NaN or infinite coordinate.
    NonFinite {
        /// Index of the offending point within its sub-path.
        index: usize,
    },
    /// The x and y splines of a parametric spline had different segment counts.
    AxisMismatch {
        /// Segment count of the x spline.
        x: usize,
        /// Segment count of the y spline.
        y: usize,
    },
    /// A parametric spline was built from splines with no segments.
    EmptySpline,
}

impl fmt::Display for InkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InkError::OddCoordinateCount(len) => {
                write!(f, "coordinate array of length {len} is not made of (x, y) pairs")
            }
            InkError::NonFinite { index } => write!(f, "point {index} is not finite"),
            InkError::AxisMismatch { x, y } => {
                write!(f, "axis splines differ in length: {x} x segments, {y} y segments")
            }
            InkError::EmptySpline => write!(f, "spline has no segments"),
        }
    }
}

impl core::error::Error for InkError {}

#[cfg(test)]
mod tests {
    use super::InkError;

    #[test]
    fn messages() {
        assert_eq!(
            InkError::OddCoordinateCount(5).to_string(),
            "coordinate array of length 5 is not made of (x, y) pairs"
        );
        assert_eq!(
            InkError::NonFinite { index: 2 }.to_string(),
            "point 2 is not finite"
        );
        assert_eq!(
            InkError::AxisMismatch { x: 3, y: 4 }.to_string(),
            "axis splines differ in length: 3 x segments, 4 y segments"
        );
    }
}
