use nalgebra::{DMatrix, DVector};
use thiserror::Error;

use crate::point::Point;
use crate::segment::Segment;
use crate::solver::{self, SolveError};

const COEFFICIENTS_PER_SEGMENT: usize = 3;

pub struct Spline {
    segments: Vec<Segment>,
    min_x: f64,
    max_x: f64,
}

impl Spline {
    /// Fits a piecewise quadratic spline through `points`. Adjacent
    /// segments agree in value and first derivative at shared points and
    /// the first segment is forced to a straight line, which makes the
    /// system square.
    ///
    /// `points` must be strictly increasing in x; the fit does not check
    /// this and a violation yields a degenerate system instead of a
    /// dedicated error.
    pub fn fit(points: &[Point]) -> Result<Self, SplineError> {
        if points.len() < 2 {
            return Err(SplineError::TooFewPoints);
        }

        let number_of_segments = points.len() - 1;
        let size = COEFFICIENTS_PER_SEGMENT * number_of_segments;
        let mut matrix = DMatrix::<f64>::zeros(size, size);
        let mut rhs = DVector::<f64>::zeros(size);
        let mut equation_counter = 0;

        // Each segment reproduces the y value at both of its endpoints.
        for segment in 0..number_of_segments {
            for endpoint in 0..2 {
                value_equation_coefficients(
                    segment,
                    points[segment + endpoint],
                    &mut equation_counter,
                    &mut matrix,
                    &mut rhs,
                );
            }
        }

        // First derivatives of adjacent segments agree at interior points.
        for interior in 1..points.len() - 1 {
            slope_equation_coefficients(
                interior,
                points[interior].x,
                &mut equation_counter,
                &mut matrix,
                &mut rhs,
            );
        }

        // 2*a = 0 for the first segment; closes the last degree of freedom.
        matrix[(equation_counter, 0)] = 2.0;

        let solution = solver::gauss_solve(&matrix, &rhs)?;

        let mut segments = Vec::with_capacity(number_of_segments);
        for i in 0..number_of_segments {
            let start = COEFFICIENTS_PER_SEGMENT * i;
            segments.push(Segment::new(
                points[i].x,
                points[i + 1].x,
                solution[start],
                solution[start + 1],
                solution[start + 2],
            ));
        }

        Ok(Spline {
            segments,
            min_x: points[0].x,
            max_x: points[points.len() - 1].x,
        })
    }

    pub fn evaluate(&self, x: f64) -> Result<f64, SplineError> {
        if self.is_in_range(x) {
            let index = self.find_segment_index(x);
            Ok(self.segments[index].evaluate(x))
        } else {
            return Err(SplineError::OutOfRange(x));
        }
    }

    /// Samples every segment at `x_min + k * step` while the value stays
    /// inside the segment domain. An interior breakpoint is emitted once,
    /// by the segment on its left; the output is strictly increasing in x.
    pub fn sample(&self, step: f64) -> Vec<Point> {
        assert!(step > 0.0, "step must be positive");

        let mut sampled = Vec::new();
        let mut last_x = f64::NEG_INFINITY;

        for segment in &self.segments {
            let mut index = 0;
            let mut x = segment.x_min();

            while x <= segment.x_max() {
                if x > last_x + solver::ZERO_TOLERANCE {
                    sampled.push(Point::new(x, segment.evaluate(x)));
                    last_x = x;
                }
                index += 1;
                x = segment.x_min() + index as f64 * step;
            }
        }
        return sampled;
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn min_x(&self) -> f64 {
        self.min_x
    }

    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    fn is_in_range(&self, x: f64) -> bool {
        self.min_x <= x && x <= self.max_x
    }

    fn find_segment_index(&self, x: f64) -> usize {
        // Breakpoints belong to the segment on their left.
        let index = self
            .segments
            .partition_point(|segment| segment.x_max() < x);
        index.min(self.segments.len() - 1)
    }
}

/// Fits a spline through `points` and returns it sampled at `step`.
pub fn fit_curve(points: &[Point], step: f64) -> Result<Vec<Point>, SplineError> {
    let spline = Spline::fit(points)?;
    Ok(spline.sample(step))
}

/// Inserts straight-line interpolated points between every consecutive
/// pair at a fixed x-step. Endpoints are preserved. This is a plain
/// densifier and shares no state with [Spline].
pub fn densify_linear(points: &[Point], step: f64) -> Vec<Point> {
    assert!(step > 0.0, "step must be positive");

    let mut densified = Vec::new();

    for pair in points.windows(2) {
        let current = pair[0];
        let next = pair[1];

        densified.push(current);

        let slope = (next.y - current.y) / (next.x - current.x);
        let mut index = 1;
        let mut x = current.x + step;

        while x < next.x {
            densified.push(Point::new(x, current.y + slope * (x - current.x)));
            index += 1;
            x = current.x + index as f64 * step;
        }
    }

    if let Some(last) = points.last() {
        densified.push(*last);
    }
    return densified;
}

fn value_equation_coefficients(
    segment: usize,
    point: Point,
    equation_counter: &mut usize,
    matrix: &mut DMatrix<f64>,
    rhs: &mut DVector<f64>,
) {
    let column = COEFFICIENTS_PER_SEGMENT * segment;

    matrix[(*equation_counter, column)] = point.x * point.x;
    matrix[(*equation_counter, column + 1)] = point.x;
    matrix[(*equation_counter, column + 2)] = 1.0;
    rhs[*equation_counter] = point.y;
    *equation_counter += 1;
}

fn slope_equation_coefficients(
    interior: usize,
    x: f64,
    equation_counter: &mut usize,
    matrix: &mut DMatrix<f64>,
    rhs: &mut DVector<f64>,
) {
    let left = COEFFICIENTS_PER_SEGMENT * (interior - 1);
    let right = COEFFICIENTS_PER_SEGMENT * interior;

    matrix[(*equation_counter, left)] = 2.0 * x;
    matrix[(*equation_counter, left + 1)] = 1.0;
    matrix[(*equation_counter, right)] = -2.0 * x;
    matrix[(*equation_counter, right + 1)] = -1.0;
    rhs[*equation_counter] = 0.0;
    *equation_counter += 1;
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SplineError {
    #[error("spline must pass through at least 2 points")]
    TooFewPoints,
    #[error("x = {0} is out of range")]
    OutOfRange(f64),
    #[error(transparent)]
    Solve(#[from] SolveError),
}
