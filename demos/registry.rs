extern crate spline_engine;

use spline_engine::SplineRegistry;

fn main() {
    let x = [0.0, 1.0, 2.0, 3.0, 4.0];
    let y = [0.0, 1.0, 0.0, 2.0, 1.0];

    let mut registry = SplineRegistry::new();
    for kind in ["linear", "cubic", "akima", "pchip"] {
        let spline = registry.create_by_name(kind, kind).unwrap();
        spline.build_from(&x, &y).unwrap();
    }

    let number_of_steps = 40;
    let step = 4.0 / number_of_steps as f64;

    println!("x;linear;cubic;akima;pchip");
    for i in 0..=number_of_steps {
        let x = step * i as f64;
        println!(
            "{:.2};{:.4};{:.4};{:.4};{:.4}",
            x,
            registry.get("linear").unwrap().eval(x).unwrap(),
            registry.get("cubic").unwrap().eval(x).unwrap(),
            registry.get("akima").unwrap().eval(x).unwrap(),
            registry.get("pchip").unwrap().eval(x).unwrap()
        );
    }
}
