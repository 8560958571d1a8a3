//! Discrete norms, inner products, and normalization of sampled
//! wavefunctions.
//!
//! All sums here are plain Riemann sums, `Σ f_i dx`, taken over every sample.

use ndarray as nd;
use crate::{
    Arr1,
    error::{ NormError, WellError },
    solve::{ WResult, Wavefunction },
};

/// Calculate the squared norm of a wavefunction, `Σ ψ_i² dx`.
///
/// This overflows to infinity for amplitudes beyond `~1e154` even when every
/// sample is finite; [`wf_normalized`] and [`wf_renormalize`] do not go
/// through it.
pub fn wf_norm<S>(q: &Arr1<S>, dx: f64) -> f64
where S: nd::Data<Elem = f64>
{
    q.iter().map(|qk| qk * qk).sum::<f64>() * dx
}

/// Calculate the inner product of two wavefunctions, `Σ ψ_i φ_i dx`.
///
/// Only the first `min(q.len(), p.len())` samples are used.
pub fn wf_dot<S, T>(q: &Arr1<S>, p: &Arr1<T>, dx: f64) -> f64
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    q.iter().zip(p).map(|(qk, pk)| qk * pk).sum::<f64>() * dx
}

// split the norm as `scale * root` with `scale = max |ψ|`, so that squaring
// never sees anything larger than 1
fn scaled_norm<S>(q: &Arr1<S>, dx: f64) -> Result<(f64, f64), NormError>
where S: nd::Data<Elem = f64>
{
    let scale = q.iter().fold(0.0_f64, |acc, qk| acc.max(qk.abs()));
    let scale = NormError::check(scale)?;
    let root = (q.iter().map(|qk| (qk / scale).powi(2)).sum::<f64>() * dx).sqrt();
    let root = NormError::check(root).map_err(|_| NormError(scale * root))?;
    Ok((scale, root))
}

/// Renormalize a wavefunction in place.
///
/// `q` is left untouched if its norm is zero or not finite.
pub fn wf_renormalize<S>(q: &mut Arr1<S>, dx: f64) -> Result<(), NormError>
where S: nd::DataMut<Elem = f64>
{
    let (scale, root) = scaled_norm(q, dx)?;
    q.map_inplace(|qk| { *qk = *qk / scale / root; });
    Ok(())
}

/// Return a normalized copy of a wavefunction.
///
/// Finite amplitudes of any magnitude can be normalized, including ones whose
/// squares overflow.
pub fn wf_normalized<S>(q: &Arr1<S>, dx: f64)
    -> Result<nd::Array1<f64>, NormError>
where S: nd::Data<Elem = f64>
{
    let (scale, root) = scaled_norm(q, dx)?;
    Ok(q.mapv(|qk| qk / scale / root))
}

/// Return normalized copies of a sequence of wavefunctions sharing the step
/// size `dx`, so that `Σ ψ_i² dx = 1` for each.
///
/// The inputs are not modified. Failure is all-or-nothing: the first
/// wavefunction with zero or non-finite norm aborts the batch with
/// [`WellError::ZeroNorm`], naming its 1-based position.
///
/// ```
/// use ndarray as nd;
/// use sqwell::{ solve::Wavefunction, utils::{ normalize, wf_norm } };
///
/// let x: nd::Array1<f64> = nd::Array1::linspace(0.0, 1.0, 5);
/// let wf = Wavefunction::new(x.clone(), nd::array![0.0, 1.0, 2.0, 1.0, 0.0])
///     .unwrap();
/// let normed = normalize(&[wf], 0.25).unwrap();
/// assert!((wf_norm(&normed[0].psi, 0.25) - 1.0).abs() < 1e-12);
///
/// let zero = Wavefunction::new(x, nd::Array1::zeros(5)).unwrap();
/// assert!(normalize(&[zero], 0.25).is_err());
/// ```
pub fn normalize(wfs: &[Wavefunction], dx: f64) -> WResult<Vec<Wavefunction>> {
    WellError::check_step(dx)?;
    wfs.iter().enumerate()
        .map(|(i, wf)| -> WResult<Wavefunction> {
            let psi = wf_normalized(&wf.psi, dx)
                .map_err(|source| WellError::ZeroNorm { n: i + 1, source })?;
            Ok(Wavefunction { x: wf.x.clone(), psi })
        })
        .collect()
}
