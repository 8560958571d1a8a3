//! Functions to integrate the one-dimensional, time-independent Schrödinger
//! equation (TISE) across an infinite square well and to enumerate its analytic
//! spectrum.

use std::cmp;
use log::{ debug, warn };
use ndarray as nd;
use serde::{ Deserialize, Serialize };
use crate::{
    error::{ LengthError, WellError },
    interp::{ self, Zero },
    present::{ self, Figure, PlotSeries },
    utils::normalize,
    well::Well,
};

pub type WResult<T> = Result<T, WellError>;

// relative boundary mismatch above which a level is reported as poorly resolved
const MISMATCH_WARN: f64 = 0.1;

/// A single analytic energy level.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnergyLevel {
    /// Level index, starting from 1.
    pub n: usize,
    /// Energy
    pub e: f64,
}

impl EnergyLevel {
    /// Compare two `EnergyLevel`s by their energy.
    pub fn cmp_energy(&self, other: &Self) -> Option<cmp::Ordering> {
        self.e.partial_cmp(&other.e)
    }
}

/// A wavefunction sampled over the well.
///
/// Both arrays always have the same length; sample `i` is the pair
/// `(x[i], psi[i])`.
#[derive(Clone, Debug, PartialEq)]
pub struct Wavefunction {
    /// Coordinate array.
    pub x: nd::Array1<f64>,
    /// Amplitude array.
    pub psi: nd::Array1<f64>,
}

impl Wavefunction {
    /// Create a new `Wavefunction` from bare coordinate and amplitude arrays.
    pub fn new(x: nd::Array1<f64>, psi: nd::Array1<f64>) -> WResult<Self> {
        LengthError::check(&x, &psi)?;
        Ok(Self { x, psi })
    }

    /// Get the number of samples.
    pub fn len(&self) -> usize { self.psi.len() }

    /// Return `true` if there are no samples.
    pub fn is_empty(&self) -> bool { self.psi.is_empty() }

    /// Iterate over `(x, psi)` sample pairs.
    pub fn samples(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.psi.iter().copied())
    }

    // index range of samples that are at least two steps from either wall
    fn interior(&self) -> std::ops::Range<usize> {
        let n = self.len();
        if n < 4 { 0..0 } else { 1..n - 2 }
    }

    /// Return the number of nodes strictly inside the well.
    ///
    /// Sign changes within two samples of either wall are attributed to the
    /// boundary condition and not counted.
    pub fn node_count(&self) -> usize {
        let psi = self.psi.slice(nd::s![self.interior()]);
        psi.iter().zip(psi.iter().skip(1))
            .filter(|(qk, qkp1)| **qk * **qkp1 < 0.0 || **qkp1 == 0.0)
            .count()
    }

    /// Locate the nodes strictly inside the well via local inverse Lagrange
    /// interpolation.
    ///
    /// The same wall margin as in [`Self::node_count`] applies.
    pub fn nodes(&self) -> WResult<Vec<f64>> {
        let range = self.interior();
        if range.len() < 2 { return Ok(Vec::new()); }
        let x = self.x.slice(nd::s![range.clone()]).to_vec();
        let psi = self.psi.slice(nd::s![range]).to_vec();
        Ok(interp::find_zeros(&x, &psi, Zero::All)?)
    }

    /// Return the magnitude of the amplitude at the far wall relative to the
    /// largest amplitude, `|ψ(a)| / max |ψ|`.
    ///
    /// This vanishes when the trial energy satisfies both boundary conditions;
    /// returns `0` for an empty or identically zero wavefunction.
    pub fn boundary_mismatch(&self) -> f64 {
        let max = self.psi.iter().fold(0.0_f64, |acc, qk| acc.max(qk.abs()));
        match self.psi.last() {
            Some(last) if max > 0.0 => last.abs() / max,
            _ => 0.0,
        }
    }
}

// (ψ, ψ') pair advanced by one explicit step at a time
#[derive(Copy, Clone, Debug)]
struct State {
    q: f64,
    dq: f64,
}

impl State {
    fn push(&mut self, k: f64, dx: f64) {
        self.dq += k * self.q * dx;
        self.q += self.dq * dx;
    }
}

/// Integrate forward across the well for fixed trial energy `E` using an
/// explicit first-order scheme.
///
/// Starting from `ψ(0) = 0`, `ψ'(0) = 1`, each step computes `ψ''` from the
/// current `ψ`, then updates `ψ' += ψ'' dx` and `ψ += ψ' dx`, and records the
/// updated `ψ` at the current coordinate before advancing it. The first sample
/// is therefore `(0, dx)`. Coordinates are `i dx` for `i` in
/// `0..well.sample_count(dx)`, so the far wall is included whenever it falls
/// on the grid; a step too small for the count to be represented fails with
/// [`WellError::TooManySamples`].
///
/// No attempt is made to control the truncation error of the scheme, which
/// grows with both `E` and `dx`. If the amplitude overflows,
/// [`WellError::Diverged`] is returned rather than non-finite samples.
///
/// ```
/// use sqwell::{ solve::integrate, well::Well };
///
/// let wf = integrate(&Well::default(), 0.0, 0.1).unwrap();
/// assert_eq!(wf.len(), 11);
/// // zero energy is free motion: ψ grows linearly with slope 1
/// assert!(wf.samples().all(|(x, q)| (q - (x + 0.1)).abs() < 1e-12));
/// ```
pub fn integrate(well: &Well, E: f64, dx: f64) -> WResult<Wavefunction> {
    well.check()?;
    WellError::check_energy(E)?;
    let n = well.sample_count(dx)?;
    let k = well.curvature(E);
    let x: nd::Array1<f64> = (0..n).map(|i| i as f64 * dx).collect();
    let mut state = State { q: 0.0, dq: 1.0 };
    let psi: nd::Array1<f64>
        = (0..n)
        .map(|_| { state.push(k, dx); state.q })
        .collect();
    if let Some(index) = psi.iter().position(|qk| !qk.is_finite()) {
        return Err(WellError::Diverged { e: E, index });
    }
    Ok(Wavefunction { x, psi })
}

/// Compute the first `n_max` analytic energy levels of a well, in order of
/// increasing `n`.
pub fn energy_levels(well: &Well, n_max: usize) -> Vec<EnergyLevel> {
    (1..=n_max)
        .map(|n| EnergyLevel { n, e: well.energy(n) })
        .collect()
}

/// Compute the first `n_max` analytic energy levels and integrate once per
/// level.
///
/// The returned sequences are index-aligned and have length exactly `n_max`;
/// `n_max = 0` gives empty sequences. Wavefunctions are *not* normalized.
///
/// Failure is all-or-nothing: the first level that fails to integrate aborts
/// the whole batch with [`WellError::Level`], naming the level.
pub fn enumerate(well: &Well, n_max: usize, dx: f64)
    -> WResult<(Vec<EnergyLevel>, Vec<Wavefunction>)>
{
    well.check()?;
    well.sample_count(dx)?;
    let levels = energy_levels(well, n_max);
    let wfs: Vec<Wavefunction>
        = levels.iter()
        .map(|level| -> WResult<Wavefunction> {
            let wf = integrate(well, level.e, dx)
                .map_err(|err| WellError::Level { n: level.n, source: Box::new(err) })?;
            let mismatch = wf.boundary_mismatch();
            debug!(
                "level n={} E={:.6} samples={} nodes={} mismatch={:.3e}",
                level.n, level.e, wf.len(), wf.node_count(), mismatch,
            );
            if mismatch > MISMATCH_WARN {
                warn!(
                    "level n={}: far-wall amplitude is {:.1}% of the maximum; \
                    step {} may be too coarse",
                    level.n, 100.0 * mismatch, dx,
                );
            }
            Ok(wf)
        })
        .collect::<WResult<_>>()?;
    Ok((levels, wfs))
}

/// Index-aligned energy levels and normalized wavefunctions for a single run.
#[derive(Clone, Debug)]
pub struct Spectrum {
    levels: Vec<EnergyLevel>,
    wfs: Vec<Wavefunction>,
    dx: f64,
}

impl Spectrum {
    /// Get a reference to the energy levels.
    pub fn levels(&self) -> &[EnergyLevel] { &self.levels }

    /// Get a reference to the normalized wavefunctions.
    pub fn wavefunctions(&self) -> &[Wavefunction] { &self.wfs }

    /// Get the step size shared by all wavefunctions.
    pub fn get_dx(&self) -> f64 { self.dx }

    /// Get the number of levels.
    pub fn len(&self) -> usize { self.levels.len() }

    /// Return `true` if no levels were computed.
    pub fn is_empty(&self) -> bool { self.levels.is_empty() }

    /// Return the energies alone.
    pub fn energies(&self) -> Vec<f64> {
        self.levels.iter().map(|level| level.e).collect()
    }

    /// Iterate over level/wavefunction pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&EnergyLevel, &Wavefunction)> {
        self.levels.iter().zip(&self.wfs)
    }

    /// Consume `self`, returning the level and wavefunction sequences.
    pub fn into_parts(self) -> (Vec<EnergyLevel>, Vec<Wavefunction>) {
        (self.levels, self.wfs)
    }

    fn views(&self) -> (Vec<nd::ArrayView1<'_, f64>>, Vec<nd::ArrayView1<'_, f64>>) {
        self.wfs.iter()
            .map(|wf| (wf.psi.view(), wf.x.view()))
            .unzip()
    }

    /// Build one [`PlotSeries`] per level; see [`present::build_series`].
    pub fn series(&self, shift: bool) -> WResult<Vec<PlotSeries>> {
        let (psi, x) = self.views();
        present::build_series(&self.energies(), &psi, &x, shift)
    }

    /// Build a complete [`Figure`]; see [`present::build_figure`].
    pub fn figure(&self, shift: bool) -> WResult<Figure> {
        let (psi, x) = self.views();
        present::build_figure(&self.energies(), &psi, &x, shift)
    }
}

/// Simple record to keep track of a well and the step size used to sample it.
///
/// Every wavefunction produced through a `System` shares the same step size
/// and sample count.
#[derive(Copy, Clone, Debug)]
pub struct System {
    // physical parameters
    well: Well,
    // integration step size
    dx: f64,
    // samples per wavefunction
    n: usize,
}

impl System {
    /// Create a new `System`, checking both the well and the step size.
    pub fn new(well: Well, dx: f64) -> WResult<Self> {
        well.check()?;
        let n = well.sample_count(dx)?;
        Ok(Self { well, dx, n })
    }

    /// Get a reference to the well.
    pub fn get_well(&self) -> &Well { &self.well }

    /// Get the step size.
    pub fn get_dx(&self) -> f64 { self.dx }

    /// Get the number of samples in every wavefunction.
    pub fn sample_count(&self) -> usize { self.n }

    /// Thin interface to [`integrate`].
    pub fn integrate(&self, E: f64) -> WResult<Wavefunction> {
        integrate(&self.well, E, self.dx)
    }

    /// Thin interface to [`enumerate`].
    pub fn enumerate(&self, n_max: usize)
        -> WResult<(Vec<EnergyLevel>, Vec<Wavefunction>)>
    {
        enumerate(&self.well, n_max, self.dx)
    }

    /// Enumerate and normalize the first `n_max` levels.
    pub fn solve(&self, n_max: usize) -> WResult<Spectrum> {
        let (levels, wfs) = self.enumerate(n_max)?;
        let wfs = normalize(&wfs, self.dx)?;
        Ok(Spectrum { levels, wfs, dx: self.dx })
    }

    /// Run the whole pipeline for the first `n_max` levels, returning a
    /// [`Figure`] ready for a plotting collaborator.
    pub fn figure(&self, n_max: usize, shift: bool) -> WResult<Figure> {
        self.solve(n_max)?.figure(shift)
    }
}
