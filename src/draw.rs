use crate::point::Point;

/// Drawing surface that curve output is handed to. Coordinates are y-up;
/// an implementor backed by a y-down raster flips against its own height.
/// The curve fitter never depends on how or whether drawing happens.
pub trait DrawTarget {
    /// Color representation of the backend; never inspected by the core.
    type Color;

    fn draw_point(&mut self, point: Point, radius: f64, color: Self::Color);

    fn draw_line(&mut self, a: Point, b: Point, color: Self::Color);
}

/// Connects consecutive points with line segments.
pub fn draw_polyline<T>(target: &mut T, points: &[Point], color: T::Color)
where
    T: DrawTarget,
    T::Color: Copy,
{
    for pair in points.windows(2) {
        target.draw_line(pair[0], pair[1], color);
    }
}

/// Marks every point with a dot of the given radius.
pub fn draw_markers<T>(target: &mut T, points: &[Point], radius: f64, color: T::Color)
where
    T: DrawTarget,
    T::Color: Copy,
{
    for point in points {
        target.draw_point(*point, radius, color);
    }
}
