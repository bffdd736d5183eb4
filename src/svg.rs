// Copyright 2026 the Inkspline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG path data output.

use alloc::string::String;
use core::fmt::{self, Write};

use crate::{InkPath, PathEl};

impl InkPath {
    /// Write the path as SVG path data.
    ///
    /// `Stroke` has no SVG counterpart; sub-paths are already separated by
    /// their `M` commands, so it is skipped.
    ///
    /// # Errors
    ///
    /// Propagates errors from the writer.
    pub fn write_svg<W: Write>(&self, w: &mut W) -> fmt::Result {
        let mut first = true;
        for el in self.elements() {
            if !first && !matches!(el, PathEl::Stroke) {
                w.write_char(' ')?;
            }
            match *el {
                PathEl::MoveTo(p) => write!(w, "M{},{}", p.x, p.y)?,
                PathEl::LineTo(p) => write!(w, "L{},{}", p.x, p.y)?,
                PathEl::CurveTo(p1, p2, p3) => write!(
                    w,
                    "C{},{} {},{} {},{}",
                    p1.x, p1.y, p2.x, p2.y, p3.x, p3.y
                )?,
                PathEl::Stroke => continue,
            }
            first = false;
        }
        Ok(())
    }

    /// Convert the path to an SVG path string representation.
    ///
    /// The current implementation doesn't take any special care to produce a
    /// short string (reducing precision, using relative movement).
    pub fn to_svg(&self) -> String {
        let mut result = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_svg(&mut result);
        result
    }
}

#[cfg(test)]
mod tests {
    use crate::InkPath;

    #[test]
    fn svg_output() {
        let mut path = InkPath::new();
        path.move_to((0., 0.));
        path.line_to((5., 0.5));
        path.stroke();
        path.move_to((1., 1.));
        path.curve_to((2., 2.), (3., 2.), (4., 1.));
        path.stroke();
        assert_eq!(path.to_svg(), "M0,0 L5,0.5 M1,1 C2,2 3,2 4,1");
    }

    #[test]
    fn empty_path() {
        assert_eq!(InkPath::new().to_svg(), "");
    }
}
