//! Hermite bases evaluated on a single segment.
//!
//! `t` is the offset from the left knot and `h` the segment width. The cubic
//! basis weighs `[y0, y1, yp0, yp1]`, the quintic basis additionally weighs
//! the second derivatives `[.., ypp0, ypp1]`.

pub fn hermite3(t: f64, h: f64) -> [f64; 4] {
    let s = t / h;
    let b1 = s * s * (3.0 - 2.0 * s);
    [1.0 - b1, b1, t * (s * (s - 2.0) + 1.0), t * s * (s - 1.0)]
}

pub fn hermite3_d(t: f64, h: f64) -> [f64; 4] {
    let s = t / h;
    let b0 = 6.0 * s * (s - 1.0) / h;
    [b0, -b0, (3.0 * s - 4.0) * s + 1.0, s * (3.0 * s - 2.0)]
}

pub fn hermite3_dd(t: f64, h: f64) -> [f64; 4] {
    let s = t / h;
    let b0 = (12.0 * s - 6.0) / (h * h);
    [b0, -b0, (6.0 * s - 4.0) / h, (6.0 * s - 2.0) / h]
}

pub fn hermite3_ddd(_t: f64, h: f64) -> [f64; 4] {
    let b0 = 12.0 / (h * h * h);
    let b2 = 6.0 / (h * h);
    [b0, -b0, b2, b2]
}

pub fn hermite5(t: f64, h: f64) -> [f64; 6] {
    let u = h - t;
    let h3 = h.powi(3);
    let h4 = h3 * h;
    let h5 = h4 * h;
    [
        (h * h + (3.0 * h + 6.0 * t) * t) * u.powi(3) / h5,
        t.powi(3) * (10.0 * h * h + (6.0 * t - 15.0 * h) * t) / h5,
        t * (h + 3.0 * t) * u.powi(3) / h4,
        -t.powi(3) * (4.0 * h - 3.0 * t) * u / h4,
        0.5 * t * t * u.powi(3) / h3,
        0.5 * t.powi(3) * u * u / h3,
    ]
}

pub fn hermite5_d(t: f64, h: f64) -> [f64; 6] {
    let u = h - t;
    let h3 = h.powi(3);
    let h4 = h3 * h;
    let h5 = h4 * h;
    let b0 = -30.0 * u * u * t * t / h5;
    [
        b0,
        -b0,
        u * u * (h + 5.0 * t) * (h - 3.0 * t) / h4,
        -t * t * (6.0 * h - 5.0 * t) * (2.0 * h - 3.0 * t) / h4,
        0.5 * t * u * u * (2.0 * h - 5.0 * t) / h3,
        0.5 * u * t * t * (3.0 * h - 5.0 * t) / h3,
    ]
}

pub fn hermite5_dd(t: f64, h: f64) -> [f64; 6] {
    let u = h - t;
    let h3 = h.powi(3);
    let h4 = h3 * h;
    let h5 = h4 * h;
    let b0 = -60.0 * t * u * (h - 2.0 * t) / h5;
    let w = -12.0 * t * u;
    [
        b0,
        -b0,
        w * (3.0 * h - 5.0 * t) / h4,
        w * (2.0 * h - 5.0 * t) / h4,
        u * (h * h + (10.0 * t - 8.0 * h) * t) / h3,
        t * (3.0 * h * h + (10.0 * t - 12.0 * h) * t) / h3,
    ]
}

pub fn hermite5_ddd(t: f64, h: f64) -> [f64; 6] {
    let h3 = h.powi(3);
    let h4 = h3 * h;
    let h5 = h4 * h;
    let b0 = -60.0 * (h * h + 6.0 * t * (t - h)) / h5;
    [
        b0,
        -b0,
        -12.0 * (3.0 * h * h + (15.0 * t - 16.0 * h) * t) / h4,
        -12.0 * (2.0 * h * h + (15.0 * t - 14.0 * h) * t) / h4,
        -3.0 * (3.0 * h * h + (10.0 * t - 12.0 * h) * t) / h3,
        3.0 * (h * h + (10.0 * t - 8.0 * h) * t) / h3,
    ]
}

#[inline]
pub fn dot4(base: [f64; 4], data: [f64; 4]) -> f64 {
    base[0] * data[0] + base[1] * data[1] + base[2] * data[2] + base[3] * data[3]
}

#[inline]
pub fn dot6(base: [f64; 6], data: [f64; 6]) -> f64 {
    base[0] * data[0]
        + base[1] * data[1]
        + base[2] * data[2]
        + base[3] * data[3]
        + base[4] * data[4]
        + base[5] * data[5]
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn hermite3_interpolates_end_conditions() {
        let h = 2.5;
        let b = hermite3(0.0, h);
        assert_approx_eq!(b[0], 1.0, EPS);
        assert_approx_eq!(b[1], 0.0, EPS);
        assert_approx_eq!(b[2], 0.0, EPS);
        assert_approx_eq!(b[3], 0.0, EPS);

        let b = hermite3(h, h);
        assert_approx_eq!(b[0], 0.0, EPS);
        assert_approx_eq!(b[1], 1.0, EPS);
        assert_approx_eq!(b[2], 0.0, EPS);
        assert_approx_eq!(b[3], 0.0, EPS);

        let d = hermite3_d(0.0, h);
        assert_approx_eq!(d[0], 0.0, EPS);
        assert_approx_eq!(d[1], 0.0, EPS);
        assert_approx_eq!(d[2], 1.0, EPS);
        assert_approx_eq!(d[3], 0.0, EPS);

        let d = hermite3_d(h, h);
        assert_approx_eq!(d[2], 0.0, EPS);
        assert_approx_eq!(d[3], 1.0, EPS);
    }

    #[test]
    fn hermite3_reproduces_a_cubic() {
        // f(t) = t^3 - 2t^2 + 3t - 1 on [0, h], end values and slopes supplied
        let f = |t: f64| t.powi(3) - 2.0 * t * t + 3.0 * t - 1.0;
        let fd = |t: f64| 3.0 * t * t - 4.0 * t + 3.0;
        let fdd = |t: f64| 6.0 * t - 4.0;

        let h = 1.75;
        let data = [f(0.0), f(h), fd(0.0), fd(h)];

        for i in 0..=10 {
            let t = h * i as f64 / 10.0;
            assert_approx_eq!(dot4(hermite3(t, h), data), f(t), 1e-9);
            assert_approx_eq!(dot4(hermite3_d(t, h), data), fd(t), 1e-9);
            assert_approx_eq!(dot4(hermite3_dd(t, h), data), fdd(t), 1e-9);
            assert_approx_eq!(dot4(hermite3_ddd(t, h), data), 6.0, 1e-9);
        }
    }

    #[test]
    fn hermite5_interpolates_end_conditions() {
        let h = 1.5;
        let b = hermite5(0.0, h);
        assert_approx_eq!(b[0], 1.0, EPS);
        for v in &b[1..] {
            assert_approx_eq!(*v, 0.0, EPS);
        }

        let b = hermite5(h, h);
        assert_approx_eq!(b[1], 1.0, EPS);
        assert_approx_eq!(b[0], 0.0, EPS);
        assert_approx_eq!(b[2], 0.0, EPS);

        let d = hermite5_d(0.0, h);
        assert_approx_eq!(d[2], 1.0, EPS);
        assert_approx_eq!(d[3], 0.0, EPS);

        let dd = hermite5_dd(0.0, h);
        assert_approx_eq!(dd[4], 1.0, EPS);
        assert_approx_eq!(dd[5], 0.0, EPS);
    }

    #[test]
    fn hermite5_reproduces_a_quintic() {
        // f(t) = t^5 - t^3 + 2t on [0, h] with exact end data
        let f = |t: f64| t.powi(5) - t.powi(3) + 2.0 * t;
        let fd = |t: f64| 5.0 * t.powi(4) - 3.0 * t * t + 2.0;
        let fdd = |t: f64| 20.0 * t.powi(3) - 6.0 * t;
        let fddd = |t: f64| 60.0 * t * t - 6.0;

        let h = 1.25;
        let data = [f(0.0), f(h), fd(0.0), fd(h), fdd(0.0), fdd(h)];

        for i in 0..=10 {
            let t = h * i as f64 / 10.0;
            assert_approx_eq!(dot6(hermite5(t, h), data), f(t), 1e-9);
            assert_approx_eq!(dot6(hermite5_d(t, h), data), fd(t), 1e-9);
            assert_approx_eq!(dot6(hermite5_dd(t, h), data), fdd(t), 1e-8);
            assert_approx_eq!(dot6(hermite5_ddd(t, h), data), fddd(t), 1e-8);
        }
    }
}
