use std::fmt::Display;

use crate::basis;
use crate::error::SplineError;
use crate::kind::SplineKind;
use crate::slopes;

/// A univariate piecewise-polynomial interpolant over samples `(x, y)`.
///
/// Points are inserted with [push](Spline::push) (or in bulk with
/// [build_from](Spline::build_from)), then [build](Spline::build) fits the
/// derivative data the chosen [SplineKind] needs. Evaluation of the value and
/// the first three derivatives is available once the spline is built.
///
/// # Example
/// ```
/// use spline_engine::{Spline, SplineKind};
///
/// let mut spline = Spline::new(SplineKind::Pchip);
/// for (x, y) in [(0.0, 1.0), (1.0, 3.0), (2.0, 5.0)] {
///     spline.push(x, y).unwrap();
/// }
/// spline.build().unwrap();
///
/// assert!((spline.eval(0.5).unwrap() - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug)]
pub struct Spline {
    kind: SplineKind,
    x: Vec<f64>,
    y: Vec<f64>,
    yp: Vec<f64>,
    ypp: Vec<f64>,
    ddy0: f64,
    ddyn: f64,
    built: bool,
}

impl Spline {
    pub fn new(kind: SplineKind) -> Self {
        Spline {
            kind,
            x: Vec::new(),
            y: Vec::new(),
            yp: Vec::new(),
            ypp: Vec::new(),
            ddy0: 0.0,
            ddyn: 0.0,
            built: false,
        }
    }

    /// Create a spline from a kind name such as `"pchip"` or `"akima"`.
    /// Matching is case-insensitive.
    pub fn from_name(name: &str) -> Result<Self, SplineError> {
        Ok(Spline::new(name.parse()?))
    }

    pub fn kind(&self) -> SplineKind {
        self.kind
    }

    pub fn type_name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn order(&self) -> usize {
        self.kind.order()
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn is_built(&self) -> bool {
        self.built
    }

    /// End second derivatives used by the `cubic` kind (both default to 0,
    /// the natural spline). Ignored by every other kind.
    pub fn set_end_curvatures(&mut self, ddy0: f64, ddyn: f64) {
        self.ddy0 = ddy0;
        self.ddyn = ddyn;
        self.built = false;
    }

    /// Append a sample point. `x` must not decrease; repeating the previous
    /// abscissa is allowed and starts a new fitting run at [build](Spline::build).
    pub fn push(&mut self, x: f64, y: f64) -> Result<(), SplineError> {
        if let Some(&prev) = self.x.last() {
            if x < prev {
                return Err(SplineError::NonMonotonicPush {
                    index: self.x.len(),
                    prev,
                    x,
                });
            }
        }
        self.x.push(x);
        self.y.push(y);
        self.built = false;
        Ok(())
    }

    /// Drop all points and fitted data, keeping the kind.
    pub fn clear(&mut self) {
        self.x.clear();
        self.y.clear();
        self.yp.clear();
        self.ypp.clear();
        self.built = false;
    }

    /// Fit the spline to the points inserted so far.
    ///
    /// Data with repeated abscissae is split into maximal strictly increasing
    /// runs and each run is fitted independently.
    pub fn build(&mut self) -> Result<(), SplineError> {
        let npts = self.x.len();
        if npts < 2 {
            return Err(SplineError::NotEnoughPoints {
                kind: self.kind.name(),
                npts,
            });
        }

        match self.kind {
            SplineKind::Constant | SplineKind::Linear => {}
            SplineKind::Hermite => {
                if self.yp.len() != npts {
                    return Err(SplineError::MissingSlopes);
                }
            }
            _ => {
                self.yp = vec![0.0; npts];
                if self.kind == SplineKind::Quintic {
                    self.ypp = vec![0.0; npts];
                }
                let mut begin = 0;
                while begin < npts {
                    let mut end = begin + 1;
                    while end < npts && self.x[end - 1] < self.x[end] {
                        end += 1;
                    }
                    self.fit_run(begin, end)?;
                    begin = end;
                }
            }
        }

        self.built = true;
        Ok(())
    }

    fn fit_run(&mut self, begin: usize, end: usize) -> Result<(), SplineError> {
        if end - begin < 2 {
            // isolated duplicate, nothing to fit
            self.yp[begin] = 0.0;
            return Ok(());
        }
        let npts = self.x.len();
        let x = &self.x[begin..end];
        let y = &self.y[begin..end];
        let yp = &mut self.yp[begin..end];
        match self.kind {
            SplineKind::Pchip => slopes::pchip(x, y, yp),
            SplineKind::Akima => slopes::akima(x, y, yp),
            SplineKind::Bessel => slopes::bessel(x, y, yp),
            SplineKind::Quintic => {
                slopes::pchip(x, y, yp);
                slopes::quintic_second_derivatives(x, y, yp, &mut self.ypp[begin..end]);
            }
            SplineKind::Cubic => {
                let ddy0 = if begin == 0 { self.ddy0 } else { 0.0 };
                let ddyn = if end == npts { self.ddyn } else { 0.0 };
                slopes::cubic(x, y, yp, ddy0, ddyn)?;
            }
            _ => unreachable!("run fitting is only done for slope based kinds"),
        }
        Ok(())
    }

    /// Replace the data with `x`, `y` and fit. `x` must be ascending.
    pub fn build_from(&mut self, x: &[f64], y: &[f64]) -> Result<(), SplineError> {
        self.check_ascending(x, y)?;
        self.clear();
        self.x.extend_from_slice(x);
        self.y.extend_from_slice(y);
        self.build()
    }

    /// Build a `hermite` spline from values and caller-supplied slopes.
    pub fn build_hermite(&mut self, x: &[f64], y: &[f64], yp: &[f64]) -> Result<(), SplineError> {
        self.check_ascending(x, y)?;
        if yp.len() != x.len() {
            return Err(SplineError::LengthMismatch {
                x_len: x.len(),
                y_len: yp.len(),
            });
        }
        self.clear();
        self.kind = SplineKind::Hermite;
        self.x.extend_from_slice(x);
        self.y.extend_from_slice(y);
        self.yp.extend_from_slice(yp);
        self.build()
    }

    fn check_ascending(&self, x: &[f64], y: &[f64]) -> Result<(), SplineError> {
        if x.len() != y.len() {
            return Err(SplineError::LengthMismatch {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        for i in 1..x.len() {
            if x[i] < x[i - 1] {
                return Err(SplineError::NotAscending { index: i });
            }
        }
        Ok(())
    }

    /// Evaluate the spline at `x`.
    ///
    /// Outside the data range the Hermite based kinds extrapolate with the
    /// boundary segment polynomial, `linear` and `constant` clamp to the
    /// boundary value.
    pub fn eval(&self, x: f64) -> Result<f64, SplineError> {
        self.ensure_built()?;
        Ok(self.value_in_segment(self.segment(x), x))
    }

    /// First derivative at `x`.
    pub fn eval_d(&self, x: f64) -> Result<f64, SplineError> {
        self.ensure_built()?;
        let n = self.x.len();
        Ok(match self.kind {
            SplineKind::Constant => 0.0,
            SplineKind::Linear => {
                if x < self.x[0] || x > self.x[n - 1] {
                    0.0
                } else {
                    let i = self.segment(x);
                    (self.y[i + 1] - self.y[i]) / (self.x[i + 1] - self.x[i])
                }
            }
            SplineKind::Quintic => {
                let i = self.segment(x);
                let h = self.x[i + 1] - self.x[i];
                basis::dot6(basis::hermite5_d(x - self.x[i], h), self.hermite5_data(i))
            }
            _ => {
                let i = self.segment(x);
                let h = self.x[i + 1] - self.x[i];
                basis::dot4(basis::hermite3_d(x - self.x[i], h), self.hermite3_data(i))
            }
        })
    }

    /// Second derivative at `x`.
    pub fn eval_dd(&self, x: f64) -> Result<f64, SplineError> {
        self.ensure_built()?;
        Ok(match self.kind {
            SplineKind::Constant | SplineKind::Linear => 0.0,
            SplineKind::Quintic => {
                let i = self.segment(x);
                let h = self.x[i + 1] - self.x[i];
                basis::dot6(basis::hermite5_dd(x - self.x[i], h), self.hermite5_data(i))
            }
            _ => {
                let i = self.segment(x);
                let h = self.x[i + 1] - self.x[i];
                basis::dot4(basis::hermite3_dd(x - self.x[i], h), self.hermite3_data(i))
            }
        })
    }

    /// Third derivative at `x`.
    pub fn eval_ddd(&self, x: f64) -> Result<f64, SplineError> {
        self.ensure_built()?;
        Ok(match self.kind {
            SplineKind::Constant | SplineKind::Linear => 0.0,
            SplineKind::Quintic => {
                let i = self.segment(x);
                let h = self.x[i + 1] - self.x[i];
                basis::dot6(basis::hermite5_ddd(x - self.x[i], h), self.hermite5_data(i))
            }
            _ => {
                let i = self.segment(x);
                let h = self.x[i + 1] - self.x[i];
                basis::dot4(basis::hermite3_ddd(x - self.x[i], h), self.hermite3_data(i))
            }
        })
    }

    /// Evaluate at many points, reusing the previous segment as a search
    /// hint. Fastest when `xs` is sorted.
    pub fn eval_many(&self, xs: &[f64]) -> Result<Vec<f64>, SplineError> {
        self.ensure_built()?;
        let mut results = Vec::with_capacity(xs.len());
        let mut hint = 0;
        for &x in xs {
            hint = self.segment_with_hint(hint, x);
            results.push(self.value_in_segment(hint, x));
        }
        Ok(results)
    }

    /// Sample `n` uniform intervals over the data range, returning the
    /// `n + 1` pairs `(x, eval(x))`. `n` must be at least 1.
    pub fn sample(&self, n: usize) -> Result<Vec<(f64, f64)>, SplineError> {
        self.ensure_built()?;
        if n == 0 {
            return Err(SplineError::ZeroSampleIntervals);
        }
        let x_min = self.x[0];
        let step = (self.x[self.x.len() - 1] - x_min) / n as f64;
        let mut table = Vec::with_capacity(n + 1);
        for i in 0..=n {
            let x = x_min + step * i as f64;
            table.push((x, self.value_in_segment(self.segment(x), x)));
        }
        Ok(table)
    }

    pub fn x_min(&self) -> Option<f64> {
        self.x.first().copied()
    }

    pub fn x_max(&self) -> Option<f64> {
        self.x.last().copied()
    }

    pub fn y_min(&self) -> Option<f64> {
        self.y.iter().copied().reduce(f64::min)
    }

    pub fn y_max(&self) -> Option<f64> {
        self.y.iter().copied().reduce(f64::max)
    }

    fn ensure_built(&self) -> Result<(), SplineError> {
        if self.built {
            Ok(())
        } else {
            Err(SplineError::NotBuilt)
        }
    }

    fn value_in_segment(&self, i: usize, x: f64) -> f64 {
        let n = self.x.len();
        match self.kind {
            SplineKind::Constant => {
                if x < self.x[0] {
                    self.y[0]
                } else if x > self.x[n - 1] {
                    self.y[n - 1]
                } else {
                    self.y[i]
                }
            }
            SplineKind::Linear => {
                if x < self.x[0] {
                    self.y[0]
                } else if x > self.x[n - 1] {
                    self.y[n - 1]
                } else {
                    let s = (x - self.x[i]) / (self.x[i + 1] - self.x[i]);
                    (1.0 - s) * self.y[i] + s * self.y[i + 1]
                }
            }
            SplineKind::Quintic => {
                let h = self.x[i + 1] - self.x[i];
                basis::dot6(basis::hermite5(x - self.x[i], h), self.hermite5_data(i))
            }
            _ => {
                let h = self.x[i + 1] - self.x[i];
                basis::dot4(basis::hermite3(x - self.x[i], h), self.hermite3_data(i))
            }
        }
    }

    fn hermite3_data(&self, i: usize) -> [f64; 4] {
        [self.y[i], self.y[i + 1], self.yp[i], self.yp[i + 1]]
    }

    fn hermite5_data(&self, i: usize) -> [f64; 6] {
        [
            self.y[i],
            self.y[i + 1],
            self.yp[i],
            self.yp[i + 1],
            self.ypp[i],
            self.ypp[i + 1],
        ]
    }

    /// Index of the segment containing `x`, clamped to the boundary
    /// segments outside the data range.
    fn segment(&self, x: f64) -> usize {
        let size = self.x.len();
        let mut min = 0;
        let mut max = size - 1;

        while max - min > 1 {
            let mid = (min + max) / 2;
            if x < self.x[mid] {
                max = mid;
            } else {
                min = mid;
            }
        }
        min
    }

    fn segment_with_hint(&self, hint: usize, x: f64) -> usize {
        if self.in_segment(hint, x) {
            return hint;
        }
        if hint + 2 < self.x.len() && self.in_segment(hint + 1, x) {
            return hint + 1;
        }
        self.segment(x)
    }

    fn in_segment(&self, i: usize, x: f64) -> bool {
        self.x[i] <= x && x <= self.x[i + 1]
    }
}

impl Display for Spline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "spline of type {}, order {}, {} points",
            self.kind,
            self.order(),
            self.x.len()
        )?;
        if self.built {
            for i in 0..self.x.len() - 1 {
                writeln!(
                    f,
                    "segment {:4} X:[{}, {}] Y:[{}, {}] slope: {}",
                    i,
                    self.x[i],
                    self.x[i + 1],
                    self.y[i],
                    self.y[i + 1],
                    (self.y[i + 1] - self.y[i]) / (self.x[i + 1] - self.x[i])
                )?;
            }
        }
        Ok(())
    }
}
