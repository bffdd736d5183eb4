// Copyright 2026 the Inkspline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Captured ink: sub-paths of raw points, grouped into ink lists.

use alloc::vec::Vec;

use smallvec::SmallVec;

use crate::{Axis, InkError, Point};

/// One contiguous pen trace: an ordered sequence of captured points.
///
/// Order is significant. A sub-path with two or more points is smoothed into
/// a curve, a single point renders as a dot, and an empty one renders nothing.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubPath(Vec<Point>);

impl SubPath {
    /// Create a sub-path from a vector of points.
    #[inline]
    pub fn new(points: Vec<Point>) -> Self {
        Self(points)
    }

    /// Create a sub-path from a flat `[x0, y0, x1, y1, ...]` array.
    ///
    /// This is the layout of one entry of a PDF ink list.
    ///
    /// # Errors
    ///
    /// Returns [`InkError::OddCoordinateCount`] if the array has an unpaired
    /// trailing coordinate.
    pub fn try_from_flat(coords: &[f64]) -> Result<Self, InkError> {
        if coords.len() % 2 != 0 {
            return Err(InkError::OddCoordinateCount(coords.len()));
        }
        Ok(Self::from_flat_lossy(coords))
    }

    /// Create a sub-path from a flat `[x0, y0, x1, y1, ...]` array, dropping
    /// an unpaired trailing coordinate if there is one.
    pub fn from_flat_lossy(coords: &[f64]) -> Self {
        let chunks = coords.chunks_exact(2);
        if !chunks.remainder().is_empty() {
            log::debug!(
                "dropping unpaired trailing coordinate of {}-value ink entry",
                coords.len()
            );
        }
        Self(chunks.map(|xy| Point::new(xy[0], xy[1])).collect())
    }

    /// The points of this sub-path.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.0
    }

    /// The number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the sub-path has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Append a captured point.
    #[inline]
    pub fn push(&mut self, p: impl Into<Point>) {
        self.0.push(p.into());
    }

    /// Project the points onto one axis, in order.
    ///
    /// The result is the sample sequence the per-axis spline solver consumes.
    pub fn axis_values(&self, axis: Axis) -> Vec<f64> {
        self.0.iter().map(|p| p.get_coord(axis)).collect()
    }

    /// Check that every point is finite.
    ///
    /// # Errors
    ///
    /// Returns [`InkError::NonFinite`] with the index of the first point that
    /// has a NaN or infinite coordinate.
    pub fn check_finite(&self) -> Result<(), InkError> {
        match self.0.iter().position(|p| !p.is_finite()) {
            Some(index) => Err(InkError::NonFinite { index }),
            None => Ok(()),
        }
    }
}

impl From<Vec<Point>> for SubPath {
    #[inline]
    fn from(points: Vec<Point>) -> Self {
        Self(points)
    }
}

impl<P: Into<Point>> FromIterator<P> for SubPath {
    fn from_iter<T: IntoIterator<Item = P>>(iter: T) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a SubPath {
    type Item = &'a Point;
    type IntoIter = core::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// All the strokes of one ink annotation.
///
/// Each sub-path is processed independently; nothing carries over from one
/// to the next.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InkList(SmallVec<[SubPath; 4]>);

impl InkList {
    /// Create an empty ink list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an ink list from nested flat coordinate arrays.
    ///
    /// # Errors
    ///
    /// Returns [`InkError::OddCoordinateCount`] if any entry has an unpaired
    /// trailing coordinate.
    pub fn try_from_flat<C: AsRef<[f64]>>(entries: &[C]) -> Result<Self, InkError> {
        entries
            .iter()
            .map(|coords| SubPath::try_from_flat(coords.as_ref()))
            .collect()
    }

    /// Build an ink list from nested flat coordinate arrays, dropping unpaired
    /// trailing coordinates.
    pub fn from_flat_lossy<C: AsRef<[f64]>>(entries: &[C]) -> Self {
        entries
            .iter()
            .map(|coords| SubPath::from_flat_lossy(coords.as_ref()))
            .collect()
    }

    /// Add a sub-path.
    #[inline]
    pub fn push(&mut self, sub: SubPath) {
        self.0.push(sub);
    }

    /// The sub-paths, in capture order.
    #[inline]
    pub fn subpaths(&self) -> &[SubPath] {
        &self.0
    }

    /// The number of sub-paths.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no sub-paths.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the sub-paths.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, SubPath> {
        self.0.iter()
    }
}

impl FromIterator<SubPath> for InkList {
    fn from_iter<T: IntoIterator<Item = SubPath>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a InkList {
    type Item = &'a SubPath;
    type IntoIter = core::slice::Iter<'a, SubPath>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
