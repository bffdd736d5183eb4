// Copyright 2026 the Inkspline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Smoothing of freehand ink strokes.
//!
//! The inkspline library turns the raw points captured by a digitizer (one
//! or more disconnected sub-paths, as stored in a PDF ink annotation) into
//! smooth vector paths ready for stroking.
//!
//! The main strategy fits a natural cubic spline through each sub-path, one
//! axis at a time, samples it densely and joins the samples with lines,
//! inserting small waypoints where the spline would overshoot a sharp
//! corner. An alternate strategy estimates Bézier control points directly
//! from neighboring points.
//!
//! # Examples
//!
//! Smoothing an ink list and writing it out:
//! ```
//! use inkspline::{InkList, InkSmoother, PathEl, Smoothing};
//!
//! let ink = InkList::from_flat_lossy(&[
//!     [0.0, 0.0, 10.0, 8.0, 20.0, 0.0],
//!     [30.0, 0.0, 35.0, 2.0, 40.0, 0.0],
//! ]);
//! let path = Smoothing::default().smooth(&ink);
//! assert_eq!(path.stroke_count(), 2);
//! assert_eq!(path.elements()[0], PathEl::MoveTo((0.0, 0.0).into()));
//! assert!(path.to_svg().starts_with("M0,0 L"));
//! ```
//!
//! Sampling the spline yourself:
//! ```
//! use inkspline::{sample_params, ParamCurve, ParametricSpline, Point};
//!
//! let points = [Point::new(0., 0.), Point::new(10., 0.), Point::new(10., 10.)];
//! let spline = ParametricSpline::from_points(&points).unwrap();
//! let samples: Vec<Point> = sample_params(11).map(|u| spline.eval(u)).collect();
//! assert_eq!(samples[0], points[0]);
//! assert!(samples[5].distance(points[1]) < 1e-9);
//! ```
//!
//! # Features
//!
//! This crate either uses the standard library or the [`libm`] crate for
//! math functionality. The `std` feature is enabled by default, but can be
//! disabled, as long as the `libm` feature is enabled. This is useful for
//! `no_std` environments. The `alloc` crate is used regardless.
//!
//! [`libm`]: https://docs.rs/libm

#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::doc_markdown, rustdoc::broken_intra_doc_links)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(unused_qualifications)]
#![allow(
    clippy::many_single_char_names,
    reason = "curve math reads best with the textbook names"
)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("inkspline requires either the `std` or `libm` feature");

extern crate alloc;

mod appearance;
mod axis;
mod bezier;
mod common;
mod cubicbez;
mod error;
mod param_curve;
mod parametric;
mod path;
mod point;
mod smooth;
mod spline;
mod stroke;
mod subpath;
mod svg;
mod vec2;

pub use crate::appearance::*;
pub use crate::axis::*;
pub use crate::bezier::*;
pub use crate::cubicbez::*;
pub use crate::error::*;
pub use crate::param_curve::*;
pub use crate::parametric::*;
pub use crate::path::*;
pub use crate::point::*;
pub use crate::smooth::*;
pub use crate::spline::*;
pub use crate::stroke::*;
pub use crate::subpath::*;
pub use crate::vec2::*;
