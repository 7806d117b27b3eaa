use thiserror::Error;

/// Errors reported by spline construction, fitting and evaluation.
#[derive(Debug, Error)]
pub enum SplineError {
    #[error("unknown spline kind `{0}`")]
    UnknownKind(String),

    #[error("{kind} spline needs at least 2 points, got {npts}")]
    NotEnoughPoints { kind: &'static str, npts: usize },

    #[error("non monotone insert at point {index}: x = {x} < previous x = {prev}")]
    NonMonotonicPush { index: usize, prev: f64, x: f64 },

    #[error("x and y slices have different lengths ({x_len} vs {y_len})")]
    LengthMismatch { x_len: usize, y_len: usize },

    #[error("x data is not ascending at index {index}")]
    NotAscending { index: usize },

    #[error("spline has not been built")]
    NotBuilt,

    #[error("sampling needs at least one interval")]
    ZeroSampleIntervals,

    #[error("hermite spline needs caller supplied slopes, use build_hermite")]
    MissingSlopes,

    #[error("error while solving the cubic spline system")]
    SingularSystem,

    #[error("no spline stored under id `{0}`")]
    UnknownId(String),
}
