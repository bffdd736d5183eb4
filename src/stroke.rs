// Copyright 2026 the Inkspline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Assembly of sampled spline strokes.
//!
//! Each sub-path with two or more points is interpolated by a natural cubic
//! spline (see [`ParametricSpline`]) and sampled at a fixed number of evenly
//! spaced parameters. The samples are joined by straight lines.
//!
//! Because the spline is parametrized by knot index, a sharp turn between
//! widely spaced points can make it swing out past the corner. When a single
//! sampling step moves by more than a threshold on *both* axes, an extra
//! waypoint is inserted partway along that step, bent toward the side the
//! stroke is turning to, which pulls the drawn line back in.

use arrayvec::ArrayVec;

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

use crate::{sample_params, InkError, InkPath, ParamCurve, ParametricSpline, Point, SubPath};

/// The default number of samples per sub-path (`u = 0, 0.01, ..., 1`).
pub const DEFAULT_SAMPLE_COUNT: usize = 101;

/// The default per-axis step size above which a corner waypoint is inserted.
pub const DEFAULT_CORNER_THRESHOLD: f64 = 5.0;

/// The default position of a corner waypoint along its step.
pub const DEFAULT_CORNER_FRACTION: f64 = 0.2;

/// Options for stroke assembly.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StrokeOptions {
    /// Number of evenly spaced samples per sub-path; values below 2 act as 2.
    pub sample_count: usize,
    /// Whether corner waypoints are inserted at all.
    pub suppress_corners: bool,
    /// A step must exceed this on both axes for a waypoint to be inserted.
    pub corner_threshold: f64,
    /// Where along the step the waypoint goes, and how far it bends.
    pub corner_fraction: f64,
}

impl Default for StrokeOptions {
    fn default() -> Self {
        StrokeOptions {
            sample_count: DEFAULT_SAMPLE_COUNT,
            suppress_corners: true,
            corner_threshold: DEFAULT_CORNER_THRESHOLD,
            corner_fraction: DEFAULT_CORNER_FRACTION,
        }
    }
}

impl StrokeOptions {
    /// Builder method for setting the sample count.
    #[must_use]
    pub fn with_sample_count(mut self, sample_count: usize) -> Self {
        self.sample_count = sample_count;
        self
    }

    /// Builder method for enabling or disabling corner suppression.
    #[must_use]
    pub fn with_corner_suppression(mut self, suppress: bool) -> Self {
        self.suppress_corners = suppress;
        self
    }

    /// Builder method for setting the corner threshold.
    #[must_use]
    pub fn with_corner_threshold(mut self, threshold: f64) -> Self {
        self.corner_threshold = threshold;
        self
    }

    /// Builder method for setting the corner fraction.
    #[must_use]
    pub fn with_corner_fraction(mut self, fraction: f64) -> Self {
        self.corner_fraction = fraction;
        self
    }
}

/// Something that happened while assembling a stroke.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TraceEvent {
    /// The curve was sampled.
    Sample {
        /// Index of the sample, from 0.
        index: usize,
        /// The curve parameter.
        u: f64,
        /// The sampled point.
        point: Point,
    },
    /// A corner waypoint was inserted before sample `index`.
    Corner {
        /// Index of the sample the waypoint precedes.
        index: usize,
        /// The waypoint.
        point: Point,
    },
}

/// Observer of stroke assembly, for debugging and visualization.
///
/// Closures taking a [`TraceEvent`] implement this trait.
pub trait StrokeTrace {
    /// Called for each event, in emission order.
    fn event(&mut self, event: TraceEvent);
}

impl<F: FnMut(TraceEvent)> StrokeTrace for F {
    fn event(&mut self, event: TraceEvent) {
        self(event);
    }
}

struct NoTrace;

impl StrokeTrace for NoTrace {
    #[inline]
    fn event(&mut self, _event: TraceEvent) {}
}

/// Turns sub-paths into sampled, corner-corrected polylines.
#[derive(Clone, Copy, Debug, Default)]
pub struct StrokeAssembler {
    opts: StrokeOptions,
}

impl StrokeAssembler {
    /// Create an assembler with the given options.
    pub fn new(opts: StrokeOptions) -> Self {
        StrokeAssembler { opts }
    }

    /// The options in use.
    pub fn options(&self) -> &StrokeOptions {
        &self.opts
    }

    /// Append the smoothed sub-path to `path`.
    ///
    /// A sub-path that cannot be drawn is skipped with a warning and leaves
    /// `path` unchanged.
    pub fn assemble(&self, sub: &SubPath, path: &mut InkPath) {
        if let Err(e) = self.try_assemble(sub, path) {
            log::warn!("skipping ink sub-path: {e}");
        }
    }

    /// Append the smoothed sub-path to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`InkError::NonFinite`] if a point has a NaN or infinite
    /// coordinate. Nothing is appended in that case.
    pub fn try_assemble(&self, sub: &SubPath, path: &mut InkPath) -> Result<(), InkError> {
        self.assemble_traced(sub, path, &mut NoTrace)
    }

    /// Append the smoothed sub-path to `path`, reporting each sample and each
    /// inserted waypoint to `trace`.
    ///
    /// # Errors
    ///
    /// Returns [`InkError::NonFinite`] if a point has a NaN or infinite
    /// coordinate. Nothing is appended in that case.
    pub fn assemble_traced(
        &self,
        sub: &SubPath,
        path: &mut InkPath,
        trace: &mut impl StrokeTrace,
    ) -> Result<(), InkError> {
        sub.check_finite()?;
        let points = sub.points();
        let spline = match points {
            [] => return Ok(()),
            [p] => {
                log::debug!("single-point ink sub-path at {p:?}, drawing a dot");
                path.move_to(*p);
                path.line_to(*p);
                path.stroke();
                return Ok(());
            }
            _ => match ParametricSpline::from_points(points) {
                Some(spline) => spline,
                // Unreachable: finite and at least two points.
                None => return Ok(()),
            },
        };

        let mut prev2: Option<Point> = None;
        let mut prev: Option<Point> = None;
        for (index, u) in sample_params(self.opts.sample_count).enumerate() {
            let point = spline.eval(u);
            trace.event(TraceEvent::Sample { index, u, point });
            let emitted = self.step(prev2, prev, point);
            let has_waypoint = emitted.len() == 2;
            for (j, el_point) in emitted.into_iter().enumerate() {
                if has_waypoint && j == 0 {
                    log::trace!("corner waypoint {el_point:?} before sample {index}");
                    trace.event(TraceEvent::Corner {
                        index,
                        point: el_point,
                    });
                }
                if prev.is_none() {
                    path.move_to(el_point);
                } else {
                    path.line_to(el_point);
                }
            }
            prev2 = prev;
            prev = Some(point);
        }
        path.stroke();
        Ok(())
    }

    /// The points to draw for one sample: an optional corner waypoint, then
    /// the sample itself.
    fn step(
        &self,
        prev2: Option<Point>,
        prev: Option<Point>,
        cur: Point,
    ) -> ArrayVec<Point, 2> {
        let mut out = ArrayVec::new();
        if let (Some(prev2), Some(prev)) = (prev2, prev) {
            if self.opts.suppress_corners {
                if let Some(waypoint) = corner_waypoint(
                    prev2,
                    prev,
                    cur,
                    self.opts.corner_threshold,
                    self.opts.corner_fraction,
                ) {
                    out.push(waypoint);
                }
            }
        }
        out.push(cur);
        out
    }
}

/// Compute the corner waypoint for the step `prev → cur`, given the
/// preceding step `prev2 → prev`.
///
/// Returns `None` unless the step exceeds `threshold` on both axes. The
/// waypoint lies `fraction` of the way along the step, displaced toward the
/// inside of the turn by `fraction·|d1|·sin θ`, where `θ` is the signed turn
/// angle from the preceding step. A straight continuation (or a zero-length
/// preceding step) gets no displacement.
pub fn corner_waypoint(
    prev2: Point,
    prev: Point,
    cur: Point,
    threshold: f64,
    fraction: f64,
) -> Option<Point> {
    let d1 = cur - prev;
    if !(d1.x.abs() > threshold && d1.y.abs() > threshold) {
        return None;
    }
    let d2 = prev - prev2;
    let norms = d1.hypot() * d2.hypot();
    let sin = if norms > 0.0 {
        (d2.cross(d1) / norms).clamp(-1.0, 1.0)
    } else {
        0.0
    };
    Some(prev + fraction * d1 + (fraction * sin) * d1.turn_90())
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;
    use crate::PathEl;

    fn count_line_tos(path: &InkPath) -> usize {
        path.iter()
            .filter(|el| matches!(el, PathEl::LineTo(_)))
            .count()
    }

    #[test]
    fn empty_sub_path_emits_nothing() {
        let mut path = InkPath::new();
        StrokeAssembler::default().assemble(&SubPath::default(), &mut path);
        assert!(path.is_empty());
    }

    #[test]
    fn single_point_is_a_dot() {
        let mut path = InkPath::new();
        let mut samples = 0;
        StrokeAssembler::default()
            .assemble_traced(
                &SubPath::new(vec![Point::new(3., 4.)]),
                &mut path,
                &mut |_ev: TraceEvent| samples += 1,
            )
            .unwrap();
        // No spline was sampled.
        assert_eq!(samples, 0);
        assert_eq!(count_line_tos(&path), 1);
        assert_eq!(
            path.elements()[1..],
            [PathEl::LineTo(Point::new(3., 4.)), PathEl::Stroke]
        );
    }

    #[test]
    fn two_points_sampled() {
        let mut path = InkPath::new();
        let sub = SubPath::new(vec![Point::new(0., 0.), Point::new(5., 0.)]);
        StrokeAssembler::default().assemble(&sub, &mut path);
        let els = path.elements();
        assert_eq!(els.len(), 1 + 100 + 1);
        assert_eq!(els[0], PathEl::MoveTo(Point::new(0., 0.)));
        match els[50] {
            PathEl::LineTo(p) => assert!(p.distance(Point::new(2.5, 0.)) < 1e-9),
            el => panic!("unexpected {el:?}"),
        }
        match els[100] {
            PathEl::LineTo(p) => assert!(p.distance(Point::new(5., 0.)) < 1e-9),
            el => panic!("unexpected {el:?}"),
        }
        assert_eq!(els[101], PathEl::Stroke);
    }

    #[test]
    fn dense_smooth_stroke_gets_no_waypoints() {
        // A half circle of radius 100 through 40 knots: each sampling step
        // moves about pi units, under the threshold.
        let sub: SubPath = (0..40)
            .map(|i| {
                let th = core::f64::consts::PI * i as f64 / 39.;
                (100. * th.cos(), 100. * th.sin())
            })
            .collect();
        let mut corners = 0;
        let mut path = InkPath::new();
        StrokeAssembler::default()
            .assemble_traced(&sub, &mut path, &mut |ev: TraceEvent| {
                if matches!(ev, TraceEvent::Corner { .. }) {
                    corners += 1;
                }
            })
            .unwrap();
        assert_eq!(corners, 0);
        assert_eq!(path.len(), 102);
    }

    #[test]
    fn long_diagonal_steps_get_waypoints() {
        // 100 steps of (10, 10): every step from the third sample on qualifies.
        let sub = SubPath::new(vec![Point::new(0., 0.), Point::new(1000., 1000.)]);
        let mut path = InkPath::new();
        let mut events = Vec::new();
        StrokeAssembler::default()
            .assemble_traced(&sub, &mut path, &mut |ev: TraceEvent| events.push(ev))
            .unwrap();
        let corners = events
            .iter()
            .filter(|ev| matches!(ev, TraceEvent::Corner { .. }))
            .count();
        assert_eq!(corners, 99);
        assert_eq!(path.len(), 1 + 100 + 99 + 1);
        // Straight line: waypoints sit on it, a fifth of the way along.
        if let PathEl::LineTo(p) = path.elements()[2] {
            assert!((p.x - 12.).abs() < 1e-9 && (p.y - 12.).abs() < 1e-9);
        } else {
            panic!("expected a waypoint");
        }
    }

    #[test]
    fn suppression_can_be_disabled() {
        let sub = SubPath::new(vec![Point::new(0., 0.), Point::new(1000., 1000.)]);
        let opts = StrokeOptions::default().with_corner_suppression(false);
        let mut path = InkPath::new();
        StrokeAssembler::new(opts).assemble(&sub, &mut path);
        assert_eq!(path.len(), 102);
    }

    #[test]
    fn waypoint_bends_into_turn() {
        // Heading +x, then turning left (counter-clockwise) toward +y.
        let prev2 = Point::new(-10., 0.);
        let prev = Point::new(0., 0.);
        let cur = Point::new(10., 10.);
        let w = corner_waypoint(prev2, prev, cur, 5., 0.2).unwrap();
        let chord = cur - prev;
        assert!(chord.cross(w - prev) > 0.);

        let cur = Point::new(10., -10.);
        let w = corner_waypoint(prev2, prev, cur, 5., 0.2).unwrap();
        assert!((cur - prev).cross(w - prev) < 0.);
    }

    #[test]
    fn waypoint_needs_both_axes() {
        let p0 = Point::new(0., 0.);
        let p1 = Point::new(1., 1.);
        assert!(corner_waypoint(p0, p1, Point::new(100., 3.), 5., 0.2).is_none());
        assert!(corner_waypoint(p0, p1, Point::new(3., 100.), 5., 0.2).is_none());
        assert!(corner_waypoint(p0, p1, Point::new(7., 7.), 5., 0.2).is_some());
        // Exactly at the threshold does not count.
        assert!(corner_waypoint(p0, p1, Point::new(6., 6.), 5., 0.2).is_none());
    }

    #[test]
    fn non_finite_input_is_skipped() {
        let sub = SubPath::new(vec![Point::new(0., 0.), Point::new(f64::NAN, 1.)]);
        let mut path = InkPath::new();
        let assembler = StrokeAssembler::default();
        assert_eq!(
            assembler.try_assemble(&sub, &mut path),
            Err(InkError::NonFinite { index: 1 })
        );
        assembler.assemble(&sub, &mut path);
        assert!(path.is_empty());
    }

    #[test]
    fn custom_sample_count() {
        let sub = SubPath::new(vec![Point::new(0., 0.), Point::new(1., 2.), Point::new(2., 0.)]);
        let opts = StrokeOptions::default().with_sample_count(11);
        let mut path = InkPath::new();
        StrokeAssembler::new(opts).assemble(&sub, &mut path);
        assert_eq!(path.len(), 12);
        assert_eq!(path.elements()[0], PathEl::MoveTo(Point::new(0., 0.)));
    }
}
