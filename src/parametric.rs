// Copyright 2026 the Inkspline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parametric curves built from a pair of axis splines.

use alloc::vec::Vec;

use crate::spline::locate;
use crate::{Axis, AxisSpline, CubicBez, InkError, InkPath, ParamCurve, Point};

/// A planar curve `u ↦ (X(u), Y(u))` made of two independently solved
/// natural cubic splines.
///
/// The normalized parameter `u` in `[0, 1]` covers all knot intervals, each
/// with an equal share of the parameter range.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParametricSpline {
    x: AxisSpline,
    y: AxisSpline,
}

impl ParametricSpline {
    /// Pair up an x spline and a y spline.
    ///
    /// # Errors
    ///
    /// Returns [`InkError::AxisMismatch`] if the splines have different
    /// segment counts, and [`InkError::EmptySpline`] if they have none.
    pub fn new(x: AxisSpline, y: AxisSpline) -> Result<Self, InkError> {
        if x.len() != y.len() {
            return Err(InkError::AxisMismatch {
                x: x.len(),
                y: y.len(),
            });
        }
        if x.is_empty() {
            return Err(InkError::EmptySpline);
        }
        Ok(ParametricSpline { x, y })
    }

    /// Solve the natural spline through `points`, one axis at a time.
    ///
    /// Returns `None` when there are fewer than two points or a coordinate is
    /// not finite.
    ///
    /// ```
    /// use inkspline::{ParamCurve, ParametricSpline, Point};
    ///
    /// let points = [Point::new(0., 0.), Point::new(5., 0.)];
    /// let spline = ParametricSpline::from_points(&points).unwrap();
    /// assert_eq!(spline.eval(0.5), Point::new(2.5, 0.));
    /// ```
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let [x, y] = Axis::BOTH.map(|axis| {
            let values: Vec<f64> = points.iter().map(|p| p.get_coord(axis)).collect();
            AxisSpline::natural(&values)
        });
        Some(ParametricSpline { x: x?, y: y? })
    }

    /// The spline of the given axis.
    #[inline]
    pub fn axis(&self, axis: Axis) -> &AxisSpline {
        match axis {
            Axis::Horizontal => &self.x,
            Axis::Vertical => &self.y,
        }
    }

    /// The number of knot intervals.
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.x.len()
    }

    /// The exact cubic Bézier form of each knot interval.
    pub fn to_cubic_beziers(&self) -> impl Iterator<Item = CubicBez> + '_ {
        self.x
            .segments()
            .iter()
            .zip(self.y.segments())
            .map(|(sx, sy)| {
                let [x0, x1, x2, x3] = sx.to_bezier();
                let [y0, y1, y2, y3] = sy.to_bezier();
                CubicBez::new((x0, y0), (x1, y1), (x2, y2), (x3, y3))
            })
    }

    /// Append this curve to `path` as one `MoveTo` and a `CurveTo` per
    /// knot interval.
    ///
    /// This draws the same curve as dense sampling, with far fewer commands.
    pub fn append_to(&self, path: &mut InkPath) {
        for (i, c) in self.to_cubic_beziers().enumerate() {
            if i == 0 {
                path.move_to(c.p0);
            }
            path.push(c.to_path_el());
        }
    }
}

impl ParamCurve for ParametricSpline {
    /// Evaluate at normalized parameter `u`, clamped to `[0, 1]`.
    ///
    /// Returns NaN coordinates if the axes are empty or mismatched, which
    /// [`ParametricSpline::new`] rules out but deserialization does not.
    fn eval(&self, u: f64) -> Point {
        let point = locate(self.x.len(), u).and_then(|(ix, t)| {
            let sx = self.x.segments().get(ix)?;
            let sy = self.y.segments().get(ix)?;
            Some(Point::new(sx.eval(t), sy.eval(t)))
        });
        point.unwrap_or(Point::new(f64::NAN, f64::NAN))
    }
}
