// Copyright 2026 the Inkspline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Smoothing strategies over whole ink lists.

use crate::{
    BezierOptions, BezierSmoother, InkList, InkPath, StrokeAssembler, StrokeOptions, SubPath,
};

/// A way of turning captured sub-paths into drawable path commands.
///
/// Every sub-path is smoothed independently and terminated with its own
/// `Stroke`; a sub-path that cannot be drawn contributes nothing.
pub trait InkSmoother {
    /// Append the smoothed form of one sub-path to `path`.
    fn smooth_into(&self, sub: &SubPath, path: &mut InkPath);

    /// Smooth every sub-path of `ink`, in order.
    fn smooth(&self, ink: &InkList) -> InkPath {
        let mut path = InkPath::new();
        for sub in ink {
            self.smooth_into(sub, &mut path);
        }
        path
    }
}

impl InkSmoother for StrokeAssembler {
    fn smooth_into(&self, sub: &SubPath, path: &mut InkPath) {
        self.assemble(sub, path);
    }
}

impl InkSmoother for BezierSmoother {
    fn smooth_into(&self, sub: &SubPath, path: &mut InkPath) {
        if let Err(e) = sub.check_finite() {
            log::warn!("skipping ink sub-path: {e}");
            return;
        }
        self.build(sub, path);
    }
}

/// Draws the captured points joined by straight lines, without smoothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct PolylineSmoother;

impl InkSmoother for PolylineSmoother {
    fn smooth_into(&self, sub: &SubPath, path: &mut InkPath) {
        if let Err(e) = sub.check_finite() {
            log::warn!("skipping ink sub-path: {e}");
            return;
        }
        let points = sub.points();
        let Some((&first, rest)) = points.split_first() else {
            return;
        };
        path.move_to(first);
        if rest.is_empty() {
            path.line_to(first);
        }
        for &p in rest {
            path.line_to(p);
        }
        path.stroke();
    }
}

/// Choice of smoothing strategy, with its options.
///
/// ```
/// use inkspline::{InkList, InkSmoother, Smoothing, SubPath};
///
/// let ink: InkList = [SubPath::from_iter([(0., 0.), (10., 10.), (20., 0.)])]
///     .into_iter()
///     .collect();
/// let path = Smoothing::default().smooth(&ink);
/// assert_eq!(path.stroke_count(), 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Smoothing {
    /// Natural cubic spline, densely sampled, with corner suppression.
    Spline(StrokeOptions),
    /// Piecewise cubic Béziers from estimated control points.
    Bezier(BezierOptions),
    /// Straight lines between the captured points.
    Polyline,
}

impl Default for Smoothing {
    fn default() -> Self {
        Smoothing::Spline(StrokeOptions::default())
    }
}

impl InkSmoother for Smoothing {
    fn smooth_into(&self, sub: &SubPath, path: &mut InkPath) {
        match *self {
            Smoothing::Spline(opts) => StrokeAssembler::new(opts).smooth_into(sub, path),
            Smoothing::Bezier(opts) => BezierSmoother::new(opts).smooth_into(sub, path),
            Smoothing::Polyline => PolylineSmoother.smooth_into(sub, path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PathEl, Point};

    fn ink() -> InkList {
        InkList::from_flat_lossy(&[
            &[0., 0., 10., 10., 20., 0., 30., 10.][..],
            &[5., 5.][..],
            &[][..],
            &[0., 0., f64::NAN, 1., 2., 2.][..],
            &[1., 1., 2., 3.][..],
        ])
    }

    #[test]
    fn every_strategy_strokes_drawable_sub_paths() {
        let ink = ink();
        for smoothing in [
            Smoothing::default(),
            Smoothing::Bezier(BezierOptions::default()),
            Smoothing::Polyline,
        ] {
            let path = smoothing.smooth(&ink);
            // Empty and non-finite sub-paths are dropped.
            assert_eq!(path.stroke_count(), 3, "{smoothing:?}");
            assert_eq!(path.elements()[0], PathEl::MoveTo(Point::new(0., 0.)));
            assert_eq!(path.elements().last(), Some(&PathEl::Stroke));
        }
    }

    #[test]
    fn sub_paths_are_independent() {
        let ink = ink();
        let whole = Smoothing::default().smooth(&ink);
        let mut pieces = InkPath::new();
        for sub in &ink {
            let single: InkList = [sub.clone()].into_iter().collect();
            pieces.extend(Smoothing::default().smooth(&single));
        }
        assert_eq!(whole, pieces);
    }

    #[test]
    fn polyline() {
        let sub = SubPath::from_iter([(0., 0.), (1., 2.), (3., 1.)]);
        let mut path = InkPath::new();
        PolylineSmoother.smooth_into(&sub, &mut path);
        assert_eq!(
            path.elements(),
            &[
                PathEl::MoveTo(Point::new(0., 0.)),
                PathEl::LineTo(Point::new(1., 2.)),
                PathEl::LineTo(Point::new(3., 1.)),
                PathEl::Stroke,
            ]
        );
    }
}
