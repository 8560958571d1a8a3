#![allow(non_snake_case)]

//! Provides a forward shooting-method demonstration for the one-dimensional,
//! time-independent Schrödinger equation in an infinite square well.
//!
//! The pipeline has four stages, each living in its own module:
//! - Integration: [`solve::integrate`] steps the TISE across the well for a
//!   single trial energy with a first-order explicit scheme.
//! - Enumeration: [`solve::enumerate`] computes the first few analytic
//!   eigenvalues and integrates once per level.
//! - Normalization: [`utils::normalize`] rescales every sampled wavefunction
//!   to unit discrete L2 norm.
//! - Presentation: [`present::build_series`] shapes the results into labeled
//!   `(x, y)` series for a [plotting collaborator][plot::Plotter].
//!
//! [`solve::System`] bundles a [`well::Well`] and a step size behind a single
//! interface to the whole pipeline:
//! ```
//! use sqwell::{ solve::System, well::Well };
//!
//! let sys = System::new(Well::default(), 1e-3).unwrap();
//! let spectrum = sys.solve(3).unwrap();
//! assert_eq!(spectrum.len(), 3);
//! let figure = spectrum.figure(true).unwrap();
//! assert_eq!(figure.series[0].label, "n=1, E=4.93");
//! ```
//!
//! See [`docs`] for theoretical background.

pub mod config;
pub mod error;
pub mod interp;
pub mod plot;
pub mod present;
pub mod solve;
pub mod units;
pub mod utils;
pub mod well;

pub mod docs;

pub(crate) const DEF_LEVELS: usize = 5;
pub(crate) const DEF_STEP: f64 = 1e-3;

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;
