extern crate spline_engine;

use spline_engine::{Spline, SplineKind};

fn main() {
    let x_min = 0.0;
    let x_max = 6.0;

    let x = [x_min, 1.0, 2.0, 4.0, 5.0, x_max];
    let y = [1.0, -1.0, 0.0, 3.0, 1.0, 1.0];

    let mut spline = Spline::new(SplineKind::Quintic);
    spline.build_from(&x, &y).unwrap();

    let number_of_steps = 60;
    let step = (x_max - x_min) / number_of_steps as f64;

    println!("x;y;dy;ddy;dddy");
    for i in 0..=number_of_steps {
        let x = x_min + step * i as f64;
        println!(
            "{:.2};{:.4};{:.4};{:.4};{:.4}",
            x,
            spline.eval(x).unwrap(),
            spline.eval_d(x).unwrap(),
            spline.eval_dd(x).unwrap(),
            spline.eval_ddd(x).unwrap()
        );
    }
}
