// Copyright 2026 the Inkspline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! PDF content-stream output for ink annotations.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Write};

use smallvec::SmallVec;

use crate::common::round_to_digits;
use crate::{InkList, InkPath, InkSmoother, PathEl, Point, Smoothing};

/// Decimal places kept when writing coordinates and style values.
const PDF_DIGITS: i32 = 4;

struct PdfNum(f64);

impl fmt::Display for PdfNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", round_to_digits(self.0, PDF_DIGITS))
    }
}

fn write_point<W: Write>(w: &mut W, p: Point) -> fmt::Result {
    write!(w, "{} {}", PdfNum(p.x), PdfNum(p.y))
}

impl InkPath {
    /// Write the path as PDF path construction and painting operators, one
    /// per line: `m`, `l`, `c` and `S`.
    ///
    /// Coordinates are rounded to four decimal places.
    ///
    /// # Errors
    ///
    /// Propagates errors from the writer.
    pub fn write_pdf_ops<W: Write>(&self, w: &mut W) -> fmt::Result {
        for el in self {
            match el {
                PathEl::MoveTo(p) => {
                    write_point(w, p)?;
                    w.write_str(" m\n")?;
                }
                PathEl::LineTo(p) => {
                    write_point(w, p)?;
                    w.write_str(" l\n")?;
                }
                PathEl::CurveTo(p1, p2, p3) => {
                    for p in [p1, p2] {
                        write_point(w, p)?;
                        w.write_char(' ')?;
                    }
                    write_point(w, p3)?;
                    w.write_str(" c\n")?;
                }
                PathEl::Stroke => w.write_str("S\n")?,
            }
        }
        Ok(())
    }

    /// The path as PDF operators; see [`write_pdf_ops`](Self::write_pdf_ops).
    pub fn to_pdf_ops(&self) -> String {
        let mut result = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_pdf_ops(&mut result);
        result
    }
}

/// Stroke style of an ink annotation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InkStyle {
    /// Stroking color components: 1 for gray, 3 for RGB, 4 for CMYK.
    pub color: Vec<f64>,
    /// Line width.
    pub width: f64,
    /// Dash lengths, if the line is dashed.
    pub dash: Option<SmallVec<[f64; 4]>>,
}

impl Default for InkStyle {
    fn default() -> Self {
        InkStyle {
            color: alloc::vec![0.0],
            width: 1.0,
            dash: None,
        }
    }
}

impl InkStyle {
    /// Builder method for setting the color components.
    #[must_use]
    pub fn with_color(mut self, color: impl IntoIterator<Item = f64>) -> Self {
        self.color = color.into_iter().collect();
        self
    }

    /// Builder method for setting the line width.
    #[must_use]
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// Builder method for setting the dash pattern.
    #[must_use]
    pub fn with_dash(mut self, dash: impl IntoIterator<Item = f64>) -> Self {
        self.dash = Some(dash.into_iter().collect());
        self
    }

    /// Whether strokes drawn in this style are visible and expressible.
    ///
    /// A drawable style has 1, 3 or 4 color components and a positive width.
    pub fn is_drawable(&self) -> bool {
        self.color_op().is_some() && self.width > 0.0
    }

    /// The color operator for the number of components, if it is one PDF
    /// knows.
    fn color_op(&self) -> Option<&'static str> {
        match self.color.len() {
            1 => Some("G"),
            3 => Some("RG"),
            4 => Some("K"),
            _ => None,
        }
    }

    /// Write the graphics state operators: color, width, then dash.
    fn write_state<W: Write>(&self, w: &mut W, op: &str) -> fmt::Result {
        for c in &self.color {
            write!(w, "{} ", PdfNum(*c))?;
        }
        writeln!(w, "{op}")?;
        writeln!(w, "{} w", PdfNum(self.width))?;
        if let Some(dash) = &self.dash {
            w.write_char('[')?;
            for (i, len) in dash.iter().enumerate() {
                if i > 0 {
                    w.write_char(' ')?;
                }
                write!(w, "{}", PdfNum(*len))?;
            }
            w.write_str("] 0 d\n")?;
        }
        Ok(())
    }
}

/// Builds the appearance content stream of an ink annotation.
///
/// ```
/// use inkspline::{InkAppearance, InkList, InkStyle, Smoothing};
///
/// let ink = InkList::from_flat_lossy(&[[0., 0., 10., 0.]]);
/// let appearance = InkAppearance::new(InkStyle::default().with_width(2.), Smoothing::Polyline);
/// assert_eq!(
///     appearance.content_stream(&ink).unwrap(),
///     "0 G\n2 w\n0 0 m\n10 0 l\nS\n"
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InkAppearance {
    /// How the stroke looks.
    pub style: InkStyle,
    /// How the captured points are smoothed.
    pub smoothing: Smoothing,
}

impl InkAppearance {
    /// Create an appearance builder.
    pub fn new(style: InkStyle, smoothing: Smoothing) -> Self {
        InkAppearance { style, smoothing }
    }

    /// The content stream for `ink`.
    ///
    /// Returns `None` when the annotation would be invisible or cannot be
    /// expressed: no color components, an unsupported number of them, or a
    /// width that is not positive.
    pub fn content_stream(&self, ink: &InkList) -> Option<String> {
        let mut result = String::new();
        // Writing into a String cannot fail.
        match self.write_content_stream(ink, &mut result) {
            Ok(true) => Some(result),
            Ok(false) | Err(_) => None,
        }
    }

    /// Write the content stream for `ink`; see
    /// [`content_stream`](Self::content_stream).
    ///
    /// Returns `Ok(false)`, having written nothing, if the style is not
    /// [drawable](InkStyle::is_drawable).
    ///
    /// # Errors
    ///
    /// Propagates errors from the writer.
    pub fn write_content_stream<W: Write>(
        &self,
        ink: &InkList,
        w: &mut W,
    ) -> Result<bool, fmt::Error> {
        let style = &self.style;
        let Some(op) = style.color_op().filter(|_| style.width > 0.0) else {
            log::debug!(
                "no ink appearance for {}-component color of width {}",
                style.color.len(),
                style.width
            );
            return Ok(false);
        };
        style.write_state(w, op)?;
        self.smoothing.smooth(ink).write_pdf_ops(w)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BezierOptions, StrokeOptions};

    fn two_strokes() -> InkList {
        InkList::from_flat_lossy(&[
            &[0., 0., 5., 0.5][..],
            &[1., 1., 2., 2., 4., 1.][..],
        ])
    }

    #[test]
    fn pdf_ops() {
        let mut path = InkPath::new();
        path.move_to((0., 0.));
        path.line_to((1. / 3., -0.00001));
        path.curve_to((1., 2.), (3., 4.), (5., 6.));
        path.stroke();
        assert_eq!(path.to_pdf_ops(), "0 0 m\n0.3333 0 l\n1 2 3 4 5 6 c\nS\n");
    }

    #[test]
    fn color_operators() {
        let ink = two_strokes();
        for (color, expected) in [
            (&[0.5][..], "0.5 G\n"),
            (&[1., 0., 0.][..], "1 0 0 RG\n"),
            (&[0., 0., 0., 1.][..], "0 0 0 1 K\n"),
        ] {
            let style = InkStyle::default().with_color(color.iter().copied());
            let appearance = InkAppearance::new(style, Smoothing::Polyline);
            let stream = appearance.content_stream(&ink).unwrap();
            assert!(stream.starts_with(expected), "{stream}");
        }
    }

    #[test]
    fn invisible_styles() {
        let ink = two_strokes();
        for style in [
            InkStyle::default().with_color(Vec::new()),
            InkStyle::default().with_color([0., 1.]),
            InkStyle::default().with_width(0.),
            InkStyle::default().with_width(f64::NAN),
        ] {
            assert!(!style.is_drawable());
            let appearance = InkAppearance::new(style, Smoothing::default());
            assert_eq!(appearance.content_stream(&ink), None);

            let mut out = String::new();
            assert_eq!(appearance.write_content_stream(&ink, &mut out), Ok(false));
            assert!(out.is_empty());
        }
        assert!(InkStyle::default().is_drawable());
    }

    /// A writer that rejects everything.
    struct FullWriter;

    impl Write for FullWriter {
        fn write_str(&mut self, _s: &str) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    #[test]
    fn writer_errors_are_not_gating() {
        let appearance = InkAppearance::default();
        assert_eq!(
            appearance.write_content_stream(&two_strokes(), &mut FullWriter),
            Err(fmt::Error)
        );
    }

    #[test]
    fn huge_values_stay_finite() {
        let mut path = InkPath::new();
        path.move_to((1e306, -1e306));
        path.stroke();
        let ops = path.to_pdf_ops();
        assert!(!ops.contains("inf"), "{ops}");
        assert!(ops.starts_with("1000000"), "{ops}");
    }

    #[test]
    fn dash_pattern() {
        let style = InkStyle::default().with_width(1.5).with_dash([3., 1.]);
        let stream = InkAppearance::new(style, Smoothing::Polyline)
            .content_stream(&two_strokes())
            .unwrap();
        assert_eq!(
            stream,
            "0 G\n1.5 w\n[3 1] 0 d\n0 0 m\n5 0.5 l\nS\n1 1 m\n2 2 l\n4 1 l\nS\n"
        );
    }

    #[test]
    fn smoothed_streams() {
        let ink = two_strokes();
        let spline = Smoothing::Spline(StrokeOptions::default());
        let spline = InkAppearance::new(InkStyle::default(), spline)
            .content_stream(&ink)
            .unwrap();
        assert_eq!(spline.matches(" l\n").count(), 200);
        assert_eq!(spline.matches("S\n").count(), 2);

        let bezier = Smoothing::Bezier(BezierOptions::default());
        let bezier = InkAppearance::new(InkStyle::default(), bezier)
            .content_stream(&ink)
            .unwrap();
        assert_eq!(bezier.matches(" c\n").count(), 2);
        assert_eq!(bezier.matches(" l\n").count(), 1);
    }
}
