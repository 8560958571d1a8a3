#![allow(non_upper_case_globals)]

//! Conversion between the dimensionless well (`ħ = m = a = 1`) and physical
//! units.
//!
//! Concrete physical constants are taken from NIST.

use std::f64::consts::PI;
use crate::{ solve::WResult, well::Well };

/// Planck constant (kg m^2 s^-1)
pub const h: f64 = 6.62607015e-34;
//             +/- 0 (exact)

/// reduced Planck constant (kg m^2 s^-1)
pub const hbar: f64 = h / 2.0 / PI;
//                +/- 0 (exact)

/// elementary charge (C)
pub const e: f64 = 1.602176634e-19;
//             +/- 0 (exact)

/// electron mass (kg)
pub const me: f64 = 9.1093837015e-31;
//              +/- 0.0000000028e-31

/// proton mass (kg)
pub const mp: f64 = 1.67262192369e-27;
//              +/- 0.00000000051e-27

/// Natural unit scaling factors for a particle of mass `m` in a well of width
/// `a`, relative to meters/kilograms/seconds (MKS).
///
/// With `ħ = m = a = 1`, a dimensionless energy `E` corresponds to the
/// physical energy `E ħ² / (m a²)`:
/// ```
/// use sqwell::{ units::{ Units, me }, well::Well };
///
/// // electron in a 1 nm well
/// let uu = Units::from_mks(me, 1e-9).unwrap();
/// let e1: f64 = uu.from_nat_energy(Well::default().energy(1));
/// assert!((Units::to_ev(e1) - 0.376).abs() < 1e-3);
/// ```
#[derive(Copy, Clone, Debug)]
pub struct Units {
    /// Particle mass.
    pub m: f64,
    /// Well width.
    pub a: f64,
    /// Associated energy scale, `ħ² / (m a²)`.
    pub e: f64,
}

impl Units {
    /// Construct from a mass and well width given in MKS units.
    ///
    /// Both must be positive and finite, as for [`Well::new`].
    pub fn from_mks(mass: f64, a: f64) -> WResult<Self> {
        Well::new(hbar, mass, a, 0.0)?;
        let e_unit = hbar.powi(2) / mass / a.powi(2);
        Ok(Self { m: mass, a, e: e_unit })
    }

    /// Convert joules to electron-volts.
    pub fn to_ev(joules: f64) -> f64 { joules / e }

    /// Convert a quantity with dimensions of length in MKS units to natural
    /// units.
    pub fn to_nat_length<T, U>(&self, x: T) -> U
    where T: std::ops::Mul<f64, Output = U>
    {
        x * self.a.recip()
    }

    /// Convert a dimensionless quantity to one with length units in MKS units.
    pub fn from_nat_length<T, U>(&self, x: T) -> U
    where T: std::ops::Mul<f64, Output = U>
    {
        x * self.a
    }

    /// Convert a quantity with dimensions of energy in MKS units to natural
    /// units.
    pub fn to_nat_energy<T, U>(&self, x: T) -> U
    where T: std::ops::Mul<f64, Output = U>
    {
        x * self.e.recip()
    }

    /// Convert a dimensionless quantity to one with energy units in MKS units.
    pub fn from_nat_energy<T, U>(&self, x: T) -> U
    where T: std::ops::Mul<f64, Output = U>
    {
        x * self.e
    }
}
