extern crate spline_engine;

use spline_engine::{Spline, SplineKind};

fn main() {
    let x = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
    let y = [0.0, 0.5, 0.6, 1.1, 4.0, 6.0, 6.1, 6.2, 9.0, 9.5, 10.0];

    let mut spline = Spline::new(SplineKind::Pchip);
    spline.build_from(&x, &y).unwrap();

    println!("x;y");
    for (x, y) in spline.sample(1000).unwrap() {
        println!("{:.4};{:.4}", x, y);
    }
}
