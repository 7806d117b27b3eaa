//! First and second derivative estimation at the knots.
//!
//! Each scheme turns sampled `(x, y)` data into the derivative data the
//! Hermite bases need. Slices passed here are strictly increasing in `x`
//! with at least two points.

use nalgebra::{DMatrix, DVector};

use crate::error::SplineError;

fn sign_test(a: f64, b: f64) -> i32 {
    let sa = if a > 0.0 {
        1
    } else if a < 0.0 {
        -1
    } else {
        0
    };
    let sb = if b > 0.0 {
        1
    } else if b < 0.0 {
        -1
    } else {
        0
    };
    sa * sb
}

/// Shape-preserving slopes.
///
/// References:
/// F.N. Fritsch, R.E. Carlson, Monotone Piecewise Cubic Interpolation,
/// SIAM J. Numer. Anal. Vol 17, No. 2, April 1980.
/// F.N. Fritsch, J. Butland, A method for constructing local monotone
/// piecewise cubic interpolants, SIAM J. Sci. Stat. Comput. 5, 2, June 1984.
pub fn pchip(x: &[f64], y: &[f64], yp: &mut [f64]) {
    let n = x.len() - 1; // number of intervals

    let mut h1 = x[1] - x[0];
    let mut del1 = (y[1] - y[0]) / h1;

    if n == 1 {
        yp[0] = del1;
        yp[1] = del1;
        return;
    }

    let mut h2 = x[2] - x[1];
    let mut del2 = (y[2] - y[1]) / h2;
    let mut hsum = h1 + h2;

    // left endpoint: non-centered three-point formula, clipped to keep shape
    let w1 = (h1 + hsum) / hsum;
    let w2 = -h1 / hsum;
    yp[0] = w1 * del1 + w2 * del2;
    if sign_test(yp[0], del1) <= 0 {
        yp[0] = 0.0;
    } else if sign_test(del1, del2) < 0 {
        let dmax = 3.0 * del1;
        if yp[0].abs() > dmax.abs() {
            yp[0] = dmax;
        }
    }

    for i in 1..n {
        if i > 1 {
            h1 = h2;
            h2 = x[i + 1] - x[i];
            hsum = h1 + h2;
            del1 = del2;
            del2 = (y[i + 1] - y[i]) / h2;
        }
        // zero unless the data is strictly monotone across the point
        yp[i] = 0.0;
        if sign_test(del1, del2) > 0 {
            // Brodlie modification of the Butland formula
            let w1 = (1.0 + h1 / hsum) / 3.0;
            let w2 = (1.0 + h2 / hsum) / 3.0;
            let dmax = if del1.abs() > del2.abs() { del1 } else { del2 };
            let dmin = if del1.abs() < del2.abs() { del1 } else { del2 };
            let drat1 = del1 / dmax;
            let drat2 = del2 / dmax;
            yp[i] = dmin / (w1 * drat1 + w2 * drat2);
        }
    }

    // right endpoint, mirrored
    let w1 = -h2 / hsum;
    let w2 = (h2 + hsum) / hsum;
    yp[n] = w1 * del1 + w2 * del2;
    if sign_test(yp[n], del2) <= 0 {
        yp[n] = 0.0;
    } else if sign_test(del1, del2) < 0 {
        let dmax = 3.0 * del2;
        if yp[n].abs() > dmax.abs() {
            yp[n] = dmax;
        }
    }
}

fn akima_one(epsi: f64, di_m2: f64, di_m1: f64, di: f64, di_p1: f64) -> f64 {
    let mut wl = (di_p1 - di).abs();
    let mut wr = (di_m1 - di_m2).abs();
    let mut den = wl + wr;
    if den <= epsi {
        wl = 0.5;
        wr = 0.5;
        den = 1.0;
    }
    (wl * di_m1 + wr * di) / den
}

/// Akima weighted slopes, with two extrapolated phantom slopes on each side.
pub fn akima(x: &[f64], y: &[f64], yp: &mut [f64]) {
    let npts = x.len();

    if npts == 2 {
        let del = (y[1] - y[0]) / (x[1] - x[0]);
        yp[0] = del;
        yp[1] = del;
        return;
    }

    let mut m = vec![0.0; npts + 3];
    for i in 1..npts {
        m[i + 1] = (y[i] - y[i - 1]) / (x[i] - x[i - 1]);
    }
    m[1] = 2.0 * m[2] - m[3];
    m[0] = 2.0 * m[1] - m[2];
    m[npts + 1] = 2.0 * m[npts] - m[npts - 1];
    m[npts + 2] = 2.0 * m[npts + 1] - m[npts];

    // tie-break threshold relative to the largest slope jump
    let mut epsi = 0.0_f64;
    for i in 0..npts + 2 {
        let dm = (m[i + 1] - m[i]).abs();
        if dm > epsi {
            epsi = dm;
        }
    }
    epsi *= 1e-8;

    for i in 0..npts {
        yp[i] = akima_one(epsi, m[i], m[i + 1], m[i + 2], m[i + 3]);
    }
}

/// Parabolic (three-point) slopes.
pub fn bessel(x: &[f64], y: &[f64], yp: &mut [f64]) {
    let npts = x.len();
    let n = npts - 1;

    let mut m = vec![0.0; n];
    for i in 0..n {
        m[i] = (y[i + 1] - y[i]) / (x[i + 1] - x[i]);
    }

    if npts == 2 {
        yp[0] = m[0];
        yp[1] = m[0];
        return;
    }

    for i in 1..n {
        let dl = x[i] - x[i - 1];
        let dr = x[i + 1] - x[i];
        yp[i] = (dr * m[i - 1] + dl * m[i]) / (dl + dr);
    }
    yp[0] = 1.5 * m[0] - 0.5 * m[1];
    yp[n] = 1.5 * m[n - 1] - 0.5 * m[n - 2];
}

/// Natural cubic spline slopes with prescribed end second derivatives.
///
/// Solves the second-derivative tridiagonal system (assembled dense and
/// factored with an LU decomposition) and converts the result to knot
/// slopes for the shared cubic Hermite representation.
pub fn cubic(x: &[f64], y: &[f64], yp: &mut [f64], ddy0: f64, ddyn: f64) -> Result<(), SplineError> {
    let npts = x.len();
    let n = npts - 1;

    let mut matrix = DMatrix::<f64>::zeros(npts, npts);
    let mut rhs = DVector::<f64>::zeros(npts);

    matrix[(0, 0)] = 1.0;
    rhs[0] = ddy0;
    for i in 1..n {
        matrix[(i, i - 1)] = (x[i] - x[i - 1]) / (x[i + 1] - x[i - 1]);
        matrix[(i, i)] = 2.0;
        matrix[(i, i + 1)] = (x[i + 1] - x[i]) / (x[i + 1] - x[i - 1]);
        rhs[i] = 6.0
            * ((y[i + 1] - y[i]) / (x[i + 1] - x[i]) - (y[i] - y[i - 1]) / (x[i] - x[i - 1]))
            / (x[i + 1] - x[i - 1]);
    }
    matrix[(n, n)] = 1.0;
    rhs[n] = ddyn;

    let m = match matrix.lu().solve(&rhs) {
        Some(solution) => solution,
        None => return Err(SplineError::SingularSystem),
    };

    for i in 0..n {
        let dx = x[i + 1] - x[i];
        yp[i] = (y[i + 1] - y[i]) / dx - (m[i] / 3.0 + m[i + 1] / 6.0) * dx;
    }
    yp[n] = yp[n - 1] + (x[n] - x[n - 1]) * 0.5 * (m[n - 1] + m[n]);

    Ok(())
}

fn min_mod(a: f64, b: f64) -> f64 {
    if a * b < 0.0 {
        0.0
    } else if a.abs() < b.abs() {
        a
    } else {
        b
    }
}

/// Limited one-sided second derivatives on top of already computed slopes.
/// Used by the quintic scheme; ends get zero curvature.
pub fn quintic_second_derivatives(x: &[f64], y: &[f64], yp: &[f64], ypp: &mut [f64]) {
    let n = x.len() - 1;

    ypp[0] = 0.0;
    let mut h1 = x[1] - x[0];
    for i in 1..n {
        let h2 = x[i + 1] - x[i];
        let ypp_l = (6.0 * (y[i - 1] - y[i]) / h1 + 4.0 * yp[i] + 2.0 * yp[i - 1]) / h1;
        let ypp_r = (6.0 * (y[i + 1] - y[i]) / h2 - 4.0 * yp[i] - 2.0 * yp[i + 1]) / h2;
        ypp[i] = min_mod(ypp_l, ypp_r);
        h1 = h2;
    }
    ypp[n] = 0.0;
}
