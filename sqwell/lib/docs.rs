//! Theoretical background.
//!
//! # Contents
//! - [Background](#background)
//! - [Forward integration](#forward-integration)
//! - [Normalization](#normalization)
//! - [Known limitations](#known-limitations)
//!
//! # Background
//! Inside an infinite square well of width *a* with constant interior
//! potential *V*, the time-independent Schrödinger equation reduces to
//! ```text
//! ∂²ψ   2 m
//! --- = --- (V - E) ψ(x),    0 ≤ x ≤ a
//! ∂x²    ħ²
//! ```
//! with the walls imposing *ψ*(0) = *ψ*(*a*) = 0. The bound states are
//! sinusoids *ψ*ₙ(*x*) ∝ sin(*n* π *x* / *a*) with energies
//! ```text
//!       n² π² ħ²
//! E_n = -------- + V,    n = 1, 2, ...
//!        2 m a²
//! ```
//! so that, in the dimensionless well used by default (*ħ* = *m* = *a* = 1,
//! *V* = 0), *E*ₙ = *n*² π² / 2. Level *n* has *n* - 1 nodes strictly inside
//! the well, at *x* = *k a* / *n*.
//!
//! This crate does not search for these energies. It takes the closed form as
//! given and integrates forward from the left wall at each *E*ₙ, which makes
//! the accuracy of the integrator visible directly in how well the right-hand
//! boundary condition comes out.
//!
//! # Forward integration
//! Writing *k* = (2 *m* / *ħ*²)(*V* - *E*), the second-order equation becomes
//! the first-order system
//! ```text
//! ψ' = φ
//! φ' = k ψ
//! ```
//! which [`integrate`][crate::solve::integrate] steps with spacing *δx* as
//! ```text
//! φ[i + 1] = φ[i] + k ψ[i] δx
//! ψ[i + 1] = ψ[i] + φ[i + 1] δx
//! ```
//! starting from *ψ*\[0\] = 0, *φ*\[0\] = 1. The starting slope is arbitrary
//! because normalization follows. The amplitude recorded at *x* = *i δx* is
//! *ψ*\[*i* + 1\], i.e. the state after the update made at that coordinate.
//! Sampling runs while *x* ≤ *a*, giving `floor(a / δx) + 1` samples.
//!
//! # Normalization
//! Each sampled wavefunction is scaled so that the Riemann sum
//! ```text
//! Σ ψ[i]² δx = 1
//! ```
//! over all recorded samples. A wavefunction whose sum is zero cannot be
//! normalized and is reported as an error instead of being divided through.
//!
//! # Known limitations
//! The scheme is first order and uses no step-size control. Its phase error
//! grows like (*n* π δx)², and the one-sample offset described above shifts
//! every recorded node left by about *δx*, so the far-wall amplitude
//! (see [`boundary_mismatch`][crate::solve::Wavefunction::boundary_mismatch])
//! is of order *n* π δx rather than zero. For *n* π δx ≥ 2 the iteration is
//! no longer oscillatory and the amplitude grows without bound; if it
//! overflows, integration fails with
//! [`Diverged`][crate::error::WellError::Diverged]. Finite but inaccurate
//! results are returned as-is, and can still be normalized even when their
//! squares overflow.
