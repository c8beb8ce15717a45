extern crate quadratic_spline;

use quadratic_spline::{densify_linear, Point};

fn main() {
    let points = vec![
        Point::new(0.0, 1.0),
        Point::new(1.0, -1.0),
        Point::new(2.0, 0.0),
        Point::new(4.0, 3.0),
        Point::new(5.0, 1.0),
        Point::new(6.0, 1.0),
    ];

    let densified = densify_linear(&points, 0.1);

    println!("x;y");
    for point in densified {
        println!("{:.2};{:.2}", point.x, point.y);
    }
}
