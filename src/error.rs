use thiserror::Error;

/// Top-level error type for the retraction simulator.
#[derive(Debug, Error)]
pub enum RetractionSimError {
    #[error(transparent)]
    Parameter(#[from] ParameterError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Errors raised when a scalar parameter violates its contract.
#[derive(Debug, Error)]
pub enum ParameterError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    OutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("parameter {parameter} must be finite, got {value}")]
    NonFinite { parameter: &'static str, value: f64 },
}

/// Errors related to curve and structure construction.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("at least {required} points are required, got {actual}")]
    TooFewPoints { required: usize, actual: usize },

    #[error("unexpected topology: {0}")]
    UnexpectedTopology(String),

    #[error("segment index {index} is outside a buffer of {len} points")]
    InvalidIndex { index: usize, len: usize },
}

/// Errors reported by a rendering backend.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("render backend failed: {0}")]
    Backend(String),
}

/// Convenience type alias for results using [`RetractionSimError`].
pub type Result<T> = std::result::Result<T, RetractionSimError>;

/// Rejects non-finite values for the named parameter.
pub(crate) fn ensure_finite(parameter: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ParameterError::NonFinite { parameter, value }.into())
    }
}

/// Rejects values that are not strictly positive (and finite).
pub(crate) fn ensure_positive(parameter: &'static str, value: f64) -> Result<f64> {
    let value = ensure_finite(parameter, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(ParameterError::OutOfRange {
            parameter,
            value,
            min: f64::MIN_POSITIVE,
            max: f64::INFINITY,
        }
        .into())
    }
}

/// Rejects negative (or non-finite) values.
pub(crate) fn ensure_non_negative(parameter: &'static str, value: f64) -> Result<f64> {
    let value = ensure_finite(parameter, value)?;
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(ParameterError::OutOfRange {
            parameter,
            value,
            min: 0.0,
            max: f64::INFINITY,
        }
        .into())
    }
}

/// Rejects curves sampled with fewer than two points.
pub(crate) fn ensure_sample_count(n_points: usize) -> Result<usize> {
    if n_points < 2 {
        return Err(GeometryError::TooFewPoints {
            required: 2,
            actual: n_points,
        }
        .into());
    }
    Ok(n_points)
}
