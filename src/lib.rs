//! Piecewise quadratic spline fitting through ordered 2D points.
//! Segments join with continuous value and first derivative, the first
//! segment is forced to a straight line, and the resulting set of linear
//! equations is solved exactly by Gaussian elimination with partial
//! pivoting. Drawing is decoupled behind the [DrawTarget] trait so the
//! fitter can be used outside any graphics context.
//!
//! # Example
//! ```
//! use quadratic_spline::{Point, Spline};
//! use assert_approx_eq::assert_approx_eq;
//!
//! let points = vec![
//!     Point::new(1.0, 5.0),
//!     Point::new(3.0, 3.0),
//!     Point::new(5.0, 9.0)
//! ];
//! let spline = Spline::fit(&points).unwrap();
//!
//! assert_approx_eq!(3.0, spline.evaluate(3.0).unwrap(), 1e-6);
//! ```

mod draw;
mod point;
mod segment;
mod solver;
mod spline;

pub use draw::{draw_markers, draw_polyline, DrawTarget};
pub use point::Point;
pub use segment::Segment;
pub use solver::{gauss_solve, SolveError};
pub use spline::{densify_linear, fit_curve, Spline, SplineError};
