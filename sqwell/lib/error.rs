//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! [anyhow]: https://crates.io/crates/anyhow

use ndarray as nd;
use thiserror::Error;

/// Returned when an operation requiring equal-length sequences encounters
/// sequences with unequal length.
#[derive(Debug, Error)]
#[error("encountered sequences with incompatible lengths; got {0} and {1}")]
pub struct LengthError(pub usize, pub usize);

impl LengthError {
    pub(crate) fn check<S, A, T, B>(
        a: &nd::ArrayBase<S, nd::Ix1>,
        b: &nd::ArrayBase<T, nd::Ix1>,
    ) -> Result<(), Self>
    where
        S: nd::Data<Elem = A>,
        T: nd::Data<Elem = B>,
    {
        Self::check_len(a.len(), b.len())
    }

    pub(crate) fn check_len(na: usize, nb: usize) -> Result<(), Self> {
        (na == nb).then_some(()).ok_or(Self(na, nb))
    }
}

/// Returned from [`find_zeros`][crate::interp::find_zeros] when data arrays
/// are too short to bracket a zero.
#[derive(Debug, Error)]
#[error("coordinate arrays in interpolation must have at least 2 elements; got {0}")]
pub struct LagrangeError(pub usize);

impl LagrangeError {
    pub(crate) fn check<A>(a: &[A]) -> Result<(), Self> {
        let n = a.len();
        (n > 1).then_some(()).ok_or(Self(n))
    }
}

/// Returned from functions in [`interp`][crate::interp].
#[derive(Debug, Error)]
pub enum InterpError {
    /// [`LengthError`]
    #[error("length error: {0}")]
    Length(#[from] LengthError),

    /// [`LagrangeError`]
    #[error("lagrange error: {0}")]
    Lagrange(#[from] LagrangeError),
}

/// Returned when a wavefunction cannot be normalized because its discrete norm
/// is zero or not finite.
#[derive(Debug, Error)]
#[error("cannot normalize a wavefunction with norm {0}")]
pub struct NormError(pub f64);

impl NormError {
    /// Pass a norm (or norm scale factor) through if it can be divided by.
    pub(crate) fn check(norm: f64) -> Result<f64, Self> {
        (norm > 0.0 && norm.is_finite()).then_some(norm).ok_or(Self(norm))
    }
}

/// Returned from the integration, enumeration, normalization, and presentation
/// stages.
#[derive(Debug, Error)]
pub enum WellError {
    /// Returned when a non-positive or non-finite step size is encountered.
    #[error("step size must be positive and finite; got {0}")]
    BadStep(f64),

    /// Returned when a computation requiring at least one level is given zero.
    #[error("number of levels must be greater than 0; got {0}")]
    BadLevels(usize),

    /// Returned when the physical parameters of a well are unusable.
    #[error(
        "well parameters must be positive and finite; got hbar = {hbar}, \
        mass = {mass}, width = {width}, V = {V}"
    )]
    BadWell { hbar: f64, mass: f64, width: f64, V: f64 },

    /// Returned when a non-finite trial energy is encountered.
    #[error("trial energy must be finite; got {0}")]
    BadEnergy(f64),

    /// Returned when the wavefunction of level `n` (1-based) has zero or
    /// non-finite norm.
    #[error("level n = {n}: {source}")]
    ZeroNorm {
        n: usize,
        #[source]
        source: NormError,
    },

    /// Returned when the number of samples covering the well at a given step
    /// size cannot be represented.
    #[error("too many samples for width {width} at step size {dx}")]
    TooManySamples { width: f64, dx: f64 },

    /// Returned when forward integration overflows before reaching the far
    /// wall.
    #[error("integration diverged at sample {index} for E = {e}")]
    Diverged { e: f64, index: usize },

    /// Returned from batch operations when level `n` (1-based) fails.
    #[error("level n = {n}: {source}")]
    Level {
        n: usize,
        #[source]
        source: Box<WellError>,
    },

    /// [`LengthError`]
    #[error("sequence length error: {0}")]
    Length(#[from] LengthError),

    /// [`InterpError`]
    #[error("interpolation error: {0}")]
    Interp(#[from] InterpError),
}

impl WellError {
    pub(crate) fn check_step(dx: f64) -> Result<(), Self> {
        (dx > 0.0 && dx.is_finite()).then_some(()).ok_or(Self::BadStep(dx))
    }

    pub(crate) fn check_levels(n_max: usize) -> Result<(), Self> {
        (n_max != 0).then_some(()).ok_or(Self::BadLevels(n_max))
    }

    pub(crate) fn check_energy(E: f64) -> Result<(), Self> {
        E.is_finite().then_some(()).ok_or(Self::BadEnergy(E))
    }
}

/// Returned when loading a [`Config`][crate::config::Config].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration could not be parsed.
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The configuration parsed but holds invalid values.
    #[error("invalid config: {0}")]
    Invalid(#[from] WellError),
}

/// Returned from [`Plotter`][crate::plot::Plotter] implementations.
#[derive(Debug, Error)]
pub enum PlotError {
    /// Writing to the underlying sink failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the figure failed.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
