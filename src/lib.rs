//! Piecewise-polynomial interpolation over 1D sampled data.
//!
//! A [Spline] holds samples `(x, y)` and fits them with one of several
//! interpolation schemes ([SplineKind]): step and linear interpolants,
//! the classic natural cubic spline, local cubics (Akima, Bessel,
//! shape-preserving PCHIP), a quintic Hermite variant and a cubic Hermite
//! with caller-supplied slopes. The value and the first three derivatives
//! can be evaluated anywhere; a [SplineRegistry] keeps named instances.
//!
//! # Example
//! ```
//! use spline_engine::{Spline, SplineKind};
//! use assert_approx_eq::assert_approx_eq;
//!
//! let mut spline = Spline::new(SplineKind::Pchip);
//! spline.build_from(&[0.0, 1.0, 2.0, 3.0], &[1.0, 3.0, 5.0, 7.0]).unwrap();
//!
//! assert_approx_eq!(4.0, spline.eval(1.5).unwrap(), 1e-12);
//! assert_approx_eq!(2.0, spline.eval_d(1.5).unwrap(), 1e-12);
//! ```

mod basis;
mod error;
mod kind;
mod registry;
mod slopes;
mod spline;

pub use error::SplineError;
pub use kind::SplineKind;
pub use registry::SplineRegistry;
pub use spline::Spline;
