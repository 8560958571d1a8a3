//! Physical configuration of the infinite square well.

use std::f64::consts::PI;
use serde::{ Deserialize, Serialize };
use crate::{ error::WellError, solve::WResult };

// largest number of f64 samples a single allocation can hold
const MAX_SAMPLES: usize = isize::MAX as usize / std::mem::size_of::<f64>();

/// Fixed physical parameters of an infinite square well.
///
/// The interior of the well is the interval `[0, width]`, over which the
/// potential is the constant `V`. The walls are not modeled by a barrier term;
/// integration is simply truncated at `x = width`.
///
/// The [`Default`] well is dimensionless, with `hbar = mass = width = 1` and
/// `V = 0`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Well {
    /// Reduced Planck constant.
    pub hbar: f64,
    /// Particle mass.
    pub mass: f64,
    /// Well width.
    pub width: f64,
    /// Interior potential.
    pub V: f64,
}

impl Default for Well {
    fn default() -> Self {
        Self { hbar: 1.0, mass: 1.0, width: 1.0, V: 0.0 }
    }
}

impl Well {
    /// Create a new `Well`, checking that `hbar`, `mass`, and `width` are
    /// positive and finite and that `V` is finite.
    pub fn new(hbar: f64, mass: f64, width: f64, V: f64) -> WResult<Self> {
        let well = Self { hbar, mass, width, V };
        well.check()?;
        Ok(well)
    }

    /// Check the physical parameters of `self`.
    pub fn check(&self) -> WResult<()> {
        let pos = |p: f64| p > 0.0 && p.is_finite();
        (pos(self.hbar) && pos(self.mass) && pos(self.width) && self.V.is_finite())
            .then_some(())
            .ok_or(WellError::BadWell {
                hbar: self.hbar,
                mass: self.mass,
                width: self.width,
                V: self.V,
            })
    }

    /// Analytic energy of the `n`-th level (`n ≥ 1`),
    /// ```text
    ///       n² π² ħ²
    /// E_n = -------- + V
    ///        2 m a²
    /// ```
    pub fn energy(&self, n: usize) -> f64 {
        let n = n as f64;
        (n * PI * self.hbar / self.width).powi(2) / (2.0 * self.mass) + self.V
    }

    /// Coefficient `(2 m / ħ²) (V - E)` relating `ψ''` to `ψ` at trial energy
    /// `E`.
    pub fn curvature(&self, E: f64) -> f64 {
        2.0 * self.mass / self.hbar.powi(2) * (self.V - E)
    }

    /// Number of samples taken over `[0, width]` (inclusive of both walls) at
    /// step size `dx`, `floor(width / dx) + 1`.
    ///
    /// A tolerance of a few ulps is applied to the quotient so that, e.g., a
    /// width of `0.3` with step `0.1` gives 4 samples. Fails with
    /// [`WellError::BadStep`] for a non-positive or non-finite step and with
    /// [`WellError::TooManySamples`] when the count would not fit in a single
    /// array of `f64`.
    ///
    /// ```
    /// use sqwell::{ error::WellError, well::Well };
    ///
    /// let well = Well::default();
    /// assert_eq!(well.sample_count(0.1).unwrap(), 11);
    /// assert_eq!(well.sample_count(1e-3).unwrap(), 1001);
    /// assert_eq!(well.sample_count(0.3).unwrap(), 4);
    /// assert!(matches!(
    ///     well.sample_count(1e-300),
    ///     Err(WellError::TooManySamples { .. }),
    /// ));
    /// ```
    pub fn sample_count(&self, dx: f64) -> WResult<usize> {
        WellError::check_step(dx)?;
        let q = (self.width / dx * (1.0 + 4.0 * f64::EPSILON)).floor();
        (q.is_finite() && q < MAX_SAMPLES as f64)
            .then(|| q as usize)
            .and_then(|q| q.checked_add(1))
            .ok_or(WellError::TooManySamples { width: self.width, dx })
    }
}
