// Copyright 2026 the Inkspline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renderer-ready path commands.

use alloc::vec::Vec;

use crate::Point;

/// One path command.
///
/// A well-formed [`InkPath`] starts each sub-path with `MoveTo` and ends it
/// with `Stroke`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathEl {
    /// Start a new sub-path at the point.
    MoveTo(Point),
    /// Draw a straight line to the point.
    LineTo(Point),
    /// Draw a cubic Bézier with two control points, ending at the last point.
    CurveTo(Point, Point, Point),
    /// Stroke the sub-path drawn so far.
    Stroke,
}

impl PathEl {
    /// The point this element ends at, if it moves the current point.
    #[inline]
    pub fn end_point(&self) -> Option<Point> {
        match *self {
            PathEl::MoveTo(p) | PathEl::LineTo(p) | PathEl::CurveTo(_, _, p) => Some(p),
            PathEl::Stroke => None,
        }
    }
}

/// An append-only sequence of path commands.
#[derive(Clone, Default, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InkPath(Vec<PathEl>);

impl InkPath {
    /// Create a new, empty path.
    pub fn new() -> InkPath {
        InkPath::default()
    }

    /// Create a path from a vector of path elements.
    pub fn from_vec(v: Vec<PathEl>) -> InkPath {
        InkPath(v)
    }

    /// Push a generic path element onto the path.
    pub fn push(&mut self, el: PathEl) {
        self.0.push(el);
    }

    /// Push a "move to" element onto the path.
    pub fn move_to<P: Into<Point>>(&mut self, p: P) {
        self.push(PathEl::MoveTo(p.into()));
    }

    /// Push a "line to" element onto the path.
    pub fn line_to<P: Into<Point>>(&mut self, p: P) {
        self.push(PathEl::LineTo(p.into()));
    }

    /// Push a "curve to" element onto the path.
    pub fn curve_to<P: Into<Point>>(&mut self, p1: P, p2: P, p3: P) {
        self.push(PathEl::CurveTo(p1.into(), p2.into(), p3.into()));
    }

    /// Push a "stroke" element onto the path.
    pub fn stroke(&mut self) {
        self.push(PathEl::Stroke);
    }

    /// Get the path elements.
    pub fn elements(&self) -> &[PathEl] {
        &self.0
    }

    /// The number of elements.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the path has no elements.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The number of `Stroke` elements, one per rendered sub-path.
    pub fn stroke_count(&self) -> usize {
        self.0.iter().filter(|el| matches!(el, PathEl::Stroke)).count()
    }

    /// Iterate over the elements.
    pub fn iter(&self) -> impl Iterator<Item = PathEl> + '_ {
        self.0.iter().copied()
    }
}

impl<'a> IntoIterator for &'a InkPath {
    type Item = PathEl;
    type IntoIter = core::iter::Copied<core::slice::Iter<'a, PathEl>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().copied()
    }
}

impl IntoIterator for InkPath {
    type Item = PathEl;
    type IntoIter = alloc::vec::IntoIter<PathEl>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl Extend<PathEl> for InkPath {
    fn extend<I: IntoIterator<Item = PathEl>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl FromIterator<PathEl> for InkPath {
    fn from_iter<T: IntoIterator<Item = PathEl>>(iter: T) -> Self {
        InkPath(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder() {
        let mut path = InkPath::new();
        assert!(path.is_empty());
        path.move_to((1., 2.));
        path.line_to((3., 4.));
        path.curve_to((5., 6.), (7., 8.), (9., 10.));
        path.stroke();
        assert_eq!(path.len(), 4);
        assert_eq!(path.stroke_count(), 1);
        let ends: Vec<Option<Point>> = path.iter().map(|el| el.end_point()).collect();
        assert_eq!(
            ends,
            [
                Some(Point::new(1., 2.)),
                Some(Point::new(3., 4.)),
                Some(Point::new(9., 10.)),
                None
            ]
        );
    }

    #[test]
    fn concatenate_paths() {
        let mut a = InkPath::new();
        a.move_to((0., 0.));
        a.stroke();
        let mut b = InkPath::new();
        b.move_to((1., 1.));
        b.line_to((2., 2.));
        b.stroke();
        let expected: InkPath = a.iter().chain(b.iter()).collect();
        a.extend(b);
        assert_eq!(a, expected);
        assert_eq!(a.stroke_count(), 2);
    }
}
