extern crate quadratic_spline;

use quadratic_spline::{draw_markers, draw_polyline, fit_curve, DrawTarget, Point};

struct ConsoleTarget;

impl DrawTarget for ConsoleTarget {
    type Color = &'static str;

    fn draw_point(&mut self, point: Point, radius: f64, color: Self::Color) {
        println!("point;{:.2};{:.2};{:.1};{}", point.x, point.y, radius, color);
    }

    fn draw_line(&mut self, a: Point, b: Point, color: Self::Color) {
        println!("line;{:.2};{:.2};{:.2};{:.2};{}", a.x, a.y, b.x, b.y, color);
    }
}

fn main() {
    let mut points = vec![
        Point::new(1.0, 5.0),
        Point::new(3.0, 3.0),
        Point::new(5.0, 9.0),
        Point::new(8.0, 10.0),
    ];

    // Scale up to canvas-like coordinates.
    for point in points.iter_mut() {
        point.x *= 40.0;
        point.y *= 10.0;
    }

    let curve = fit_curve(&points, 1.0).unwrap();

    let mut target = ConsoleTarget;
    draw_markers(&mut target, &points, 4.0, "green");
    draw_polyline(&mut target, &curve, "red");
}
