// Copyright 2026 the Inkspline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// A coordinate axis of the plane.
///
/// Splines are solved independently per axis; this selects which coordinate
/// of each knot feeds the solver.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// The x axis.
    Horizontal,
    /// The y axis.
    Vertical,
}

impl Axis {
    /// Both axes, x first.
    pub const BOTH: [Axis; 2] = [Axis::Horizontal, Axis::Vertical];
}

#[cfg(test)]
mod tests {
    use super::Axis;
    use crate::Point;

    #[test]
    fn selects_coordinate() {
        let p = Point::new(2., 7.);
        let coords = Axis::BOTH.map(|axis| p.get_coord(axis));
        assert_eq!(coords, [2., 7.]);
    }
}
