use std::fmt::Display;
use std::str::FromStr;

use crate::error::SplineError;

/// Interpolation scheme of a [Spline](crate::Spline), selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SplineKind {
    /// Piecewise constant, left-continuous steps.
    Constant,
    /// Piecewise linear.
    Linear,
    /// Natural cubic spline (C2), end second derivatives configurable.
    Cubic,
    /// Akima's weighted-slope local cubic.
    Akima,
    /// Cubic with parabolic (Bessel) slopes.
    Bessel,
    /// Shape-preserving monotone cubic (Fritsch-Carlson).
    Pchip,
    /// Quintic Hermite on PCHIP slopes with limited curvature.
    Quintic,
    /// Cubic Hermite with caller-supplied slopes.
    Hermite,
}

impl SplineKind {
    pub const ALL: [SplineKind; 8] = [
        SplineKind::Constant,
        SplineKind::Linear,
        SplineKind::Cubic,
        SplineKind::Akima,
        SplineKind::Bessel,
        SplineKind::Pchip,
        SplineKind::Quintic,
        SplineKind::Hermite,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SplineKind::Constant => "constant",
            SplineKind::Linear => "linear",
            SplineKind::Cubic => "cubic",
            SplineKind::Akima => "akima",
            SplineKind::Bessel => "bessel",
            SplineKind::Pchip => "pchip",
            SplineKind::Quintic => "quintic",
            SplineKind::Hermite => "hermite",
        }
    }

    /// Degree of the segment polynomial plus one.
    pub fn order(self) -> usize {
        match self {
            SplineKind::Constant => 1,
            SplineKind::Linear => 2,
            SplineKind::Quintic => 6,
            _ => 4,
        }
    }
}

impl FromStr for SplineKind {
    type Err = SplineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        SplineKind::ALL
            .into_iter()
            .find(|kind| kind.name() == lower)
            .ok_or_else(|| SplineError::UnknownKind(s.to_string()))
    }
}

impl Display for SplineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
